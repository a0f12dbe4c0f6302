//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use crate::converter::{convert, Scale};
use crate::utils::{print_error, print_result};

/// Prompt for a raw temperature value (empty input allowed so it can be validated)
pub fn prompt_value() -> Result<String> {
    let value: String = Input::new()
        .with_prompt("Temperature")
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Prompt for a scale, starting on `default`
pub fn prompt_scale(message: &str, default: Scale) -> Result<Scale> {
    let labels: Vec<String> = Scale::ALL.iter().map(|s| s.label()).collect();
    let selected = Select::new()
        .with_prompt(message)
        .items(&labels)
        .default(default.index())
        .interact()?;
    Ok(Scale::ALL[selected])
}

/// Prompt user to confirm running another conversion
pub fn confirm_another() -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt("Convert another temperature?")
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Run the line-oriented conversion session until the user declines to continue
pub fn run_prompt_session() -> Result<()> {
    loop {
        let value = prompt_value()?;
        let from = prompt_scale("From Unit", Scale::Celsius)?;
        let to = prompt_scale("To Unit", Scale::Fahrenheit)?;

        println!();
        match convert(&value, from, to) {
            Ok(conversion) => print_result(&conversion.display()),
            Err(e) => print_error(&e.to_string()),
        }
        println!();

        if !confirm_another()? {
            return Ok(());
        }
    }
}
