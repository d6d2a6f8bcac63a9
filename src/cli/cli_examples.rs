use super::cli_main::{get_user_input, prompt};
use crate::Examples::demo_problems::{FAMILIES, problems_for};
use crate::Examples::numeric_examples::{numeric_examples, run_and_print};
use crate::Utils::compare::record_matches;
use crate::problem::{ProblemPool, ProblemSource, SolveProblem};
use crate::settings::SolverSettings;
use crate::trace::Trace;

pub fn family_menu(index: usize, settings: &SolverSettings) {
    let problems = match problems_for(index) {
        Ok(problems) => problems,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    loop {
        println!("\n=== {} ===", FAMILIES[index]);
        for (i, problem) in problems.iter().enumerate() {
            println!("{}. {}", i + 1, problem.title());
        }
        println!("a. Run all of them");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");
        let Some(choice) = get_user_input() else {
            break;
        };
        if choice.trim() == "a" {
            numeric_examples(index, settings);
            continue;
        }
        match choice.trim().parse::<usize>() {
            Ok(0) => break,
            Ok(n) if n <= problems.len() => {
                if let Some(trace) = run_and_print(&problems[n - 1], settings) {
                    check_values(&trace, settings);
                }
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

pub fn round_robin(pool: &mut ProblemPool, settings: &SolverSettings) {
    match pool.next_problem() {
        Some(problem) => {
            println!("[{}]", problem.family());
            if let Some(trace) = run_and_print(&problem, settings) {
                check_values(&trace, settings);
            }
        }
        None => println!("The problem pool is empty."),
    }
}

/// Lets the user check hand-computed values: `<step> <name> <value>` per line.
fn check_values(trace: &Trace, settings: &SolverSettings) {
    loop {
        prompt("Check a value as `step name value` (empty line to go back): ");
        let Some(line) = get_user_input() else {
            break;
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            break;
        }
        let parsed = match parts.as_slice() {
            [step, name, value] => step
                .parse::<usize>()
                .ok()
                .zip(value.parse::<f64>().ok())
                .map(|(step, value)| (step, *name, value)),
            _ => None,
        };
        let Some((step, name, value)) = parsed else {
            println!("Expected: <step> <name> <value>");
            continue;
        };
        match record_matches(trace, step, name, value, &settings.comparison) {
            Some(true) => println!("correct"),
            Some(false) => println!("incorrect"),
            None => println!("step {} has no value `{}`", step, name),
        }
    }
}
