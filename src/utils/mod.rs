//! Utility modules for styling

pub mod styling;

pub use styling::*;
