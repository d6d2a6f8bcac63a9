/// rounding and tolerance checks for comparing hand-computed values with a trace
pub mod compare;
/// prettytable and JSON rendering of traces
pub mod trace_output;
