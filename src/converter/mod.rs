//! Converter module - temperature parsing, pivot conversion and formatting

pub mod error;
pub mod pivot;
pub mod scale;

pub use error::*;
pub use pivot::*;
pub use scale::*;
