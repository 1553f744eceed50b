//! Letter designations of the standard thermocouple types.

use crate::error::ThermocoupleError;
use std::fmt;

/// One of the eight letter-designated thermocouple types of ITS-90.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeCode {
    /// Pt-30%Rh / Pt-6%Rh
    B,
    /// Ni-Cr / Cu-Ni
    E,
    /// Fe / Cu-Ni
    J,
    /// Ni-Cr / Ni-Al
    K,
    /// Ni-Cr-Si / Ni-Si
    N,
    /// Pt-13%Rh / Pt
    R,
    /// Pt-10%Rh / Pt
    S,
    /// Cu / Cu-Ni
    T,
}

impl TypeCode {
    /// Every supported type, sorted by letter.
    pub const ALL: [TypeCode; 8] = [
        TypeCode::B,
        TypeCode::E,
        TypeCode::J,
        TypeCode::K,
        TypeCode::N,
        TypeCode::R,
        TypeCode::S,
        TypeCode::T,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TypeCode::B => "B",
            TypeCode::E => "E",
            TypeCode::J => "J",
            TypeCode::K => "K",
            TypeCode::N => "N",
            TypeCode::R => "R",
            TypeCode::S => "S",
            TypeCode::T => "T",
        }
    }

    /// Comma-separated list of every supported code, for diagnostics.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(TypeCode::key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for TypeCode {
    type Err = ThermocoupleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        match code.as_str() {
            "B" => Ok(TypeCode::B),
            "E" => Ok(TypeCode::E),
            "J" => Ok(TypeCode::J),
            "K" => Ok(TypeCode::K),
            "N" => Ok(TypeCode::N),
            "R" => Ok(TypeCode::R),
            "S" => Ok(TypeCode::S),
            "T" => Ok(TypeCode::T),
            _ => Err(ThermocoupleError::UnknownType {
                code,
                available: Self::available(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("k".parse::<TypeCode>().unwrap(), TypeCode::K);
        assert_eq!(" T ".parse::<TypeCode>().unwrap(), TypeCode::T);
        assert_eq!("B".parse::<TypeCode>().unwrap(), TypeCode::B);
    }

    #[test]
    fn unknown_code_lists_available_types() {
        let err = "X".parse::<TypeCode>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'X'"), "{msg}");
        assert!(msg.contains("B, E, J, K, N, R, S, T"), "{msg}");
    }

    #[test]
    fn multi_letter_input_is_rejected() {
        assert!("KK".parse::<TypeCode>().is_err());
        assert!("".parse::<TypeCode>().is_err());
    }

    #[test]
    fn canonical_key_roundtrip() {
        for code in TypeCode::ALL {
            let parsed = code.key().parse::<TypeCode>().expect("key should parse");
            assert_eq!(parsed, code);
            assert_eq!(code.to_string(), code.key());
        }
    }
}
