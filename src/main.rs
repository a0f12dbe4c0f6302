//! Thermo-phi: Temperature Converter CLI
//!
//! Converts temperatures between Celsius, Fahrenheit, and Kelvin, either
//! through an interactive form, a prompt session, or a one-shot command.

use anyhow::Result;
use clap::Parser;

use thermophi::cli::{self, run_form, Cli, Commands, FormState, OutputMode};
use thermophi::utils::{print_banner, print_goodbye, print_info, print_result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Convert {
                value,
                from,
                to,
                json,
                plain,
            } => cli::run_convert(value, *from, *to, OutputMode::from_flags(*json, *plain)),
            Commands::Prompt => {
                print_banner(env!("CARGO_PKG_VERSION"));
                cli::run_prompt_session()?;
                print_goodbye();
                Ok(())
            }
        };
    }

    // Default: full-screen form
    let initial = FormState::new(cli.value.clone().unwrap_or_default(), cli.from, cli.to);
    let last = run_form(initial)?;

    match &last.result {
        Some(result) => {
            print_info("Last result:");
            print_result(result);
        }
        None => print_info("No conversion performed."),
    }
    print_goodbye();

    Ok(())
}
