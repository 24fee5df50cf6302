//! Message formatting shared by all commands.
//!
//! Errors go to stdout with a red `✕ Error:` prefix so that CLI tests can match
//! them alongside regular output; success and info lines are white.

use colored::*;

/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// `✓ <message>` with a green checkmark
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}
