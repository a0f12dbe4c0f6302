//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};

use crate::converter::Scale;

/// Thermo-phi - Convert temperatures between Celsius, Fahrenheit, and Kelvin
#[derive(Parser, Debug)]
#[command(name = "thermophi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Pre-fill the temperature field of the interactive form
    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Initial source scale of the interactive form
    #[arg(long, value_enum, ignore_case = true, default_value = "celsius")]
    pub from: Scale,

    /// Initial target scale of the interactive form
    #[arg(long, value_enum, ignore_case = true, default_value = "fahrenheit")]
    pub to: Scale,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a single temperature and print the result
    #[command(allow_negative_numbers = true)]
    Convert {
        /// Temperature value (integer or decimal, may be negative)
        value: String,

        /// Scale of the input value
        #[arg(short, long, value_enum, ignore_case = true, default_value = "celsius")]
        from: Scale,

        /// Scale to convert to
        #[arg(short, long, value_enum, ignore_case = true, default_value = "fahrenheit")]
        to: Scale,

        /// Print the result as JSON
        #[arg(long, default_value = "false", conflicts_with = "plain")]
        json: bool,

        /// Print only the formatted result line
        #[arg(long, default_value = "false")]
        plain: bool,
    },

    /// Run a line-by-line interactive conversion session
    Prompt,
}

/// How the one-shot `convert` command prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Styled summary table
    Summary,
    /// Formatted result line only
    Plain,
    /// JSON record
    Json,
}

impl OutputMode {
    /// Pick the mode from the `--json` / `--plain` flags; JSON wins if both are set
    pub fn from_flags(json: bool, plain: bool) -> Self {
        if json {
            OutputMode::Json
        } else if plain {
            OutputMode::Plain
        } else {
            OutputMode::Summary
        }
    }
}
