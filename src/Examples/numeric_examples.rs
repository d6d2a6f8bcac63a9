use super::demo_problems::{FAMILIES, problems_for};
use crate::problem::{Problem, SolveProblem};
use crate::settings::SolverSettings;
use crate::trace::Trace;
use log::warn;

/// Solves `problem` and prints its trace; errors are printed, not raised.
pub fn run_and_print(problem: &Problem, settings: &SolverSettings) -> Option<Trace> {
    println!("\n=== {} ===", problem.title());
    match problem.solve(settings) {
        Ok(trace) => {
            trace.pretty_print();
            if let Some(last) = trace.last() {
                let result = last
                    .values
                    .iter()
                    .map(|(name, value)| format!("{} = {:.8}", name, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("result: {}", result);
            }
            Some(trace)
        }
        Err(e) => {
            println!("Error: {}", e);
            None
        }
    }
}

/// runs every demo problem of family `task` (0 = linear systems .. 5 = IVP)
pub fn numeric_examples(task: usize, settings: &SolverSettings) {
    match problems_for(task) {
        Ok(problems) => {
            println!("\n##### {} #####", FAMILIES[task]);
            for problem in &problems {
                run_and_print(problem, settings);
            }
        }
        Err(e) => warn!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Examples::demo_problems::problems_for;

    #[test]
    fn test_every_family_runs() {
        let settings = SolverSettings::default();
        for task in 0..FAMILIES.len() {
            numeric_examples(task, &settings);
        }
        // unknown family is only logged
        numeric_examples(FAMILIES.len(), &settings);
    }

    #[test]
    fn test_run_and_print_returns_the_trace() {
        let settings = SolverSettings::default();
        let problems = problems_for(4).unwrap();
        let trace = run_and_print(&problems[0], &settings).unwrap();
        assert_eq!(trace.value("I"), Some(0.65625));
    }
}
