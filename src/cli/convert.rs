//! One-shot temperature conversion command

use anyhow::Result;

use super::args::OutputMode;
use crate::converter::{convert, Scale};
use crate::report::{conversion_to_json, ConversionSummary};
use crate::utils::print_result;

/// Run a single conversion and print it in the requested mode
///
/// # Arguments
/// * `value` - Raw temperature text as given on the command line
/// * `from` - Scale of the input value
/// * `to` - Scale to convert to
/// * `mode` - Output style (summary table, plain line, or JSON)
///
/// Invalid input returns an error carrying the validation message, so the
/// process exits non-zero.
pub fn run_convert(value: &str, from: Scale, to: Scale, mode: OutputMode) -> Result<()> {
    let conversion = match convert(value, from, to) {
        Ok(c) => c,
        Err(e) => anyhow::bail!("{} (got '{}')", e, value),
    };

    match mode {
        OutputMode::Json => println!("{}", conversion_to_json(&conversion)?),
        OutputMode::Plain => println!("{}", conversion.display()),
        OutputMode::Summary => {
            ConversionSummary::new(conversion).display();
            println!();
            print_result(&conversion.display());
            println!();
        }
    }

    Ok(())
}
