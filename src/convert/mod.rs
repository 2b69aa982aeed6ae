pub mod camel;
pub mod dot;
pub mod kebab;
pub(crate) mod tokenizer;

pub use camel::to_camel_case;
pub use dot::to_dot_case;
pub use kebab::to_kebab_case;

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The naming conventions this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Kebab,
    Camel,
    Dot,
}

impl Case {
    /// Every supported convention, in display order.
    pub const ALL: [Case; 3] = [Case::Kebab, Case::Camel, Case::Dot];

    /// Apply this convention to `input`.
    pub fn convert(&self, input: &str) -> String {
        match self {
            Case::Kebab => to_kebab_case(input),
            Case::Camel => to_camel_case(input),
            Case::Dot => to_dot_case(input),
        }
    }

    /// The convention's human-facing name.
    pub fn label(&self) -> &'static str {
        match self {
            Case::Kebab => "kebab-case",
            Case::Camel => "camelCase",
            Case::Dot => "dot.case",
        }
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" => Ok(Case::Kebab),
            "camel" => Ok(Case::Camel),
            "dot" => Ok(Case::Dot),
            _ => Err(format!("Unknown case: {} (expected kebab, camel or dot)", s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Kebab => write!(f, "kebab"),
            Case::Camel => write!(f, "camel"),
            Case::Dot => write!(f, "dot"),
        }
    }
}

/// Returned when a dynamic value is neither a string nor null.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaseError {
    #[error("Expected string, received `{received}`")]
    InvalidType { received: &'static str },
}

/// Convert a dynamic (JSON) value.
///
/// `null` stands in for the absent value and maps to the empty string;
/// anything that is not a string fails fast with no partial output.
pub fn convert_value(value: &Value, case: Case) -> Result<String, CaseError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(case.convert(s)),
        Value::Bool(_) => Err(CaseError::InvalidType { received: "boolean" }),
        Value::Number(_) => Err(CaseError::InvalidType { received: "number" }),
        Value::Array(_) => Err(CaseError::InvalidType { received: "array" }),
        Value::Object(_) => Err(CaseError::InvalidType { received: "object" }),
    }
}
