//! CLI module - argument parsing, one-shot conversion, prompts and the interactive form

mod args;
pub mod convert;
pub mod form;
mod prompts;

pub use args::{Cli, Commands, OutputMode};
pub use convert::run_convert;
pub use form::{handle_key, run_form, FormAction, FormField, FormState};
pub use prompts::*;
