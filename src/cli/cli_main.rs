use super::cli_examples::{family_menu, round_robin};
use crate::Examples::demo_problems::{FAMILIES, demo_pool};
use crate::settings::SolverSettings;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    let mut settings = SolverSettings::load();
    let mut pool = match demo_pool() {
        Ok(pool) => pool,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "0" => {
                println!("Goodbye!");
                break;
            }
            "7" => round_robin(&mut pool, &settings),
            "8" => settings_menu(&mut settings),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=FAMILIES.len()).contains(&n) => family_menu(n - 1, &settings),
                _ => println!("Invalid choice. Please try again."),
            },
        }
    }
}
/* colors
Blue (\x1b[34m) - header
Yellow (\x1b[33m) - menu options
Cyan (\x1b[36m) - prompt
Reset (\x1b[0m)
*/
fn show_main_menu() {
    println!("\x1b[34m\n NumeriTrace: numerical methods with step-by-step traces \n\x1b[0m");
    for (i, family) in FAMILIES.iter().enumerate() {
        println!("\x1b[33m{}. {}\x1b[0m", i + 1, family);
    }
    println!("\x1b[33m7. Next problem from the pool\x1b[0m");
    println!("\x1b[33m8. Settings\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

fn settings_menu(settings: &mut SolverSettings) {
    loop {
        println!("\n=== Settings ===");
        match serde_json::to_string_pretty(&*settings) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("Error: {}", e),
        }
        println!("1. Save to {}", SolverSettings::DEFAULT_FILE);
        println!("2. Reload from {}", SolverSettings::DEFAULT_FILE);
        println!("3. Reset to defaults");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");
        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => match settings.save_to(SolverSettings::DEFAULT_FILE) {
                Ok(()) => println!("Saved."),
                Err(e) => println!("Error: {}", e),
            },
            "2" => *settings = SolverSettings::load(),
            "3" => *settings = SolverSettings::default(),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

pub(crate) fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
}

/// next line from stdin, `None` at end of input
pub(crate) fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}
