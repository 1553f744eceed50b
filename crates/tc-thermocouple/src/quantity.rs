//! The physical quantities a thermocouple model can tabulate.

use std::fmt;

/// One of the two thermoelements of a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Leg {
    Positive,
    Negative,
}

impl Leg {
    pub const ALL: [Leg; 2] = [Leg::Positive, Leg::Negative];

    pub fn label(&self) -> &'static str {
        match self {
            Leg::Positive => "positive",
            Leg::Negative => "negative",
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Leg {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" | "p" | "+" => Ok(Leg::Positive),
            "negative" | "neg" | "n" | "-" => Ok(Leg::Negative),
            _ => Err("unknown leg, expected 'positive' or 'negative'"),
        }
    }
}

/// A tabulated quantity, i.e. the identity of one range table within a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantity {
    /// Thermocouple EMF versus temperature (forward function).
    Emf,
    /// Temperature versus EMF (inverse function).
    InverseEmf,
    /// Seebeck coefficient versus temperature.
    Seebeck,
    /// Temperature derivative of the Seebeck coefficient.
    DSeebeck,
    /// Single thermoelement EMF versus platinum.
    LegEmf(Leg),
    /// Single thermoelement Seebeck coefficient versus platinum.
    LegSeebeck(Leg),
}

impl Quantity {
    pub const ALL: [Quantity; 8] = [
        Quantity::Emf,
        Quantity::InverseEmf,
        Quantity::Seebeck,
        Quantity::DSeebeck,
        Quantity::LegEmf(Leg::Positive),
        Quantity::LegEmf(Leg::Negative),
        Quantity::LegSeebeck(Leg::Positive),
        Quantity::LegSeebeck(Leg::Negative),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Emf => "EMF",
            Quantity::InverseEmf => "inverse EMF",
            Quantity::Seebeck => "Seebeck coefficient",
            Quantity::DSeebeck => "dSeebeck/dT",
            Quantity::LegEmf(Leg::Positive) => "positive-leg EMF",
            Quantity::LegEmf(Leg::Negative) => "negative-leg EMF",
            Quantity::LegSeebeck(Leg::Positive) => "positive-leg Seebeck coefficient",
            Quantity::LegSeebeck(Leg::Negative) => "negative-leg Seebeck coefficient",
        }
    }

    /// Unit of the table's input value.
    pub fn input_unit(&self) -> &'static str {
        match self {
            Quantity::InverseEmf => "µV",
            _ => "°C",
        }
    }

    /// Unit of the raw polynomial output, before any public scaling.
    pub fn output_unit(&self) -> &'static str {
        match self {
            Quantity::Emf | Quantity::LegEmf(_) => "µV",
            Quantity::InverseEmf => "°C",
            Quantity::Seebeck | Quantity::LegSeebeck(_) => "µV/K",
            Quantity::DSeebeck => "µV/K²",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
