//! Thermo-phi: Temperature Conversion Library
//!
//! Converts temperatures between Celsius, Fahrenheit, and Kelvin by
//! pivoting through Celsius, with the terminal front-ends built on top.

pub mod cli;
pub mod converter;
pub mod report;
pub mod utils;
