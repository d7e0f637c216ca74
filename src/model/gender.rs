// src/model/gender.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SocnetError;

/// Closed set of gender categories a profile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl FromStr for Gender {
    type Err = SocnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "non_binary" | "non-binary" | "nonbinary" => Ok(Gender::NonBinary),
            other => Err(SocnetError::InvalidArgument(format!(
                "unknown gender category: {other}"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non_binary",
        };
        write!(f, "{s}")
    }
}
