/// main menu
pub mod cli_main;
/// per-family problem menus and value checking
pub mod cli_examples;
