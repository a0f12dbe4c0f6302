//! Temperature scale definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[value(alias = "c")]
    Celsius,
    #[value(alias = "f")]
    Fahrenheit,
    #[value(alias = "k")]
    Kelvin,
}

impl Scale {
    /// All scales in display order
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    /// Capitalized name used in formatted results (e.g. "Fahrenheit")
    pub fn display_name(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
        }
    }

    /// Unit symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        }
    }

    /// Selector label, e.g. "Celsius (°C)"
    pub fn label(self) -> String {
        format!("{} ({})", self.display_name(), self.symbol())
    }

    /// Position of this scale in [`Scale::ALL`]
    pub fn index(self) -> usize {
        match self {
            Scale::Celsius => 0,
            Scale::Fahrenheit => 1,
            Scale::Kelvin => 2,
        }
    }

    /// Next scale in display order, wrapping around
    pub fn next(self) -> Scale {
        Scale::ALL[(self.index() + 1) % Scale::ALL.len()]
    }

    /// Previous scale in display order, wrapping around
    pub fn prev(self) -> Scale {
        Scale::ALL[(self.index() + Scale::ALL.len() - 1) % Scale::ALL.len()]
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
