/// textbook problems for every family
pub mod demo_problems;
/// solving and printing the demo problems
pub mod numeric_examples;
