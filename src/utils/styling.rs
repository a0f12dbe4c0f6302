//! Terminal styling utilities for a modern, visually appealing TUI

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static THERMOMETER: Emoji<'_, '_> = Emoji("🌡️  ", "");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static WAVE: Emoji<'_, '_> = Emoji("👋 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}{}",
        THERMOMETER,
        style("Temperature Converter").cyan().bold()
    );
    println!(
        "    {} {}",
        style("φ").magenta().bold(),
        style("Convert between Celsius, Fahrenheit, and Kelvin with precision").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a converted temperature in a highlighted style
pub fn print_result(formatted: &str) {
    println!(
        "    {} {}",
        style("→").cyan().bold(),
        style(formatted).green().bold()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("    {}{}", WARNING, style(message).red().bold());
}

/// Print the farewell message shown when an interactive session ends
pub fn print_goodbye() {
    println!();
    println!("    {}{}", WAVE, style("Goodbye!").cyan().bold());
    println!();
}
