//! Error types for temperature conversion.

use thiserror::Error;

/// Fixed message shown to the user when the input is not a number.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number";

/// Errors that can occur when converting a raw temperature input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The raw input could not be parsed as a finite number.
    ///
    /// Covers empty input, letters, malformed numbers and non-finite values
    /// such as `inf` or `NaN`.
    #[error("Please enter a valid number")]
    InvalidNumericInput {
        /// The rejected input, as typed
        input: String,
    },
}
