//! Pivot conversion through Celsius
//!
//! Every scale pair is converted in two stages: source scale to Celsius,
//! then Celsius to the target scale. Arithmetic stays in full `f64`
//! precision; rounding only happens when a [`Conversion`] is formatted.

use std::fmt;

use super::error::ConversionError;
use super::scale::Scale;

/// Offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit value of 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// A successful conversion: the numeric result paired with its target scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Parsed input value
    pub input: f64,
    /// Scale of the input value
    pub from: Scale,
    /// Converted value, unrounded
    pub value: f64,
    /// Scale of the converted value
    pub to: Scale,
}

impl Conversion {
    /// Format as `"<value>° <Scale>"` with exactly two decimal places
    pub fn display(&self) -> String {
        format_temperature(self.value, self.to)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Parse a raw text input as a finite temperature value.
///
/// Surrounding whitespace is ignored. Empty, malformed and non-finite inputs
/// are rejected.
pub fn parse_temperature(raw_input: &str) -> Result<f64, ConversionError> {
    let invalid = || ConversionError::InvalidNumericInput {
        input: raw_input.to_string(),
    };

    let trimmed = raw_input.trim();
    // f64::from_str also accepts "inf", "infinity" and "nan"
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return Err(invalid());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

/// Convert a value on the given scale to Celsius
pub fn to_celsius(value: f64, from: Scale) -> f64 {
    match from {
        Scale::Celsius => value,
        Scale::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        Scale::Kelvin => value - KELVIN_OFFSET,
    }
}

/// Convert a Celsius value to the given scale
pub fn from_celsius(celsius: f64, to: Scale) -> f64 {
    match to {
        Scale::Celsius => celsius,
        Scale::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        Scale::Kelvin => celsius + KELVIN_OFFSET,
    }
}

/// Convert an already-parsed value between scales.
///
/// Identical scales return the value untouched.
pub fn convert_value(value: f64, from: Scale, to: Scale) -> f64 {
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}

/// Convert a raw text input from one scale to another.
pub fn convert(raw_input: &str, from: Scale, to: Scale) -> Result<Conversion, ConversionError> {
    let input = parse_temperature(raw_input)?;
    Ok(Conversion {
        input,
        from,
        value: convert_value(input, from, to),
        to,
    })
}

/// Convert and format in one step.
///
/// Returns either the formatted result or the fixed validation message.
pub fn convert_display(raw_input: &str, from: Scale, to: Scale) -> String {
    match convert(raw_input, from, to) {
        Ok(conversion) => conversion.display(),
        Err(e) => e.to_string(),
    }
}

/// Round exact half-way hundredths away from zero.
///
/// `format!("{:.2}")` breaks ties to even; results are shown with ties broken
/// away from zero. Only values whose exact binary value lies on a tie are
/// touched, so `2.675` (stored as 2.67499...) is left alone.
fn round_ties_away(value: f64) -> f64 {
    let scaled = value * 100.0;
    // Residual of the multiplication; zero means `scaled` is exact
    let residual = value.mul_add(100.0, -scaled);
    if residual == 0.0 && scaled.fract().abs() == 0.5 {
        scaled.round() / 100.0
    } else {
        value
    }
}

/// Format a temperature with two decimals and the scale's display name
pub fn format_temperature(value: f64, scale: Scale) -> String {
    let value = round_ties_away(value);
    // -0.0 would otherwise render as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}° {}", value, scale.display_name())
}
