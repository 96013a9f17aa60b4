//! The primitive cell value and its casting rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};

/// A single typed cell value.
///
/// Absence is modeled as an explicit variant rather than an option so that
/// lookups and formatting stay total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    /// Whole numbers.
    Int(i64),
    /// Floating-point numbers.
    Float(f64),
    /// Boolean values.
    Bool(bool),
    /// Text; the universal fallback for unparseable input.
    Text(String),
    /// A missing value.
    Absent,
}

impl PrimitiveValue {
    /// Normalizes a raw value: text is tried as an integer, then as a
    /// float, and otherwise kept as text. Never fails, and casting an
    /// already cast value is the identity.
    pub fn cast(self) -> Self {
        match self {
            Self::Text(s) => {
                if let Ok(i) = s.parse::<i64>() {
                    Self::Int(i)
                } else if let Ok(f) = s.parse::<f64>() {
                    Self::Float(f)
                } else {
                    Self::Text(s)
                }
            }
            other => other,
        }
    }

    /// Returns true if this value is an integer or a float.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns true if this value is missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The value as a float, or an error when it is not numeric.
    ///
    /// The failure is local to this call; the value itself is unaffected.
    pub fn number(&self) -> Result<f64> {
        match self {
            Self::Int(i) => Ok(*i as f64),
            Self::Float(f) => Ok(*f),
            other => Err(TrellisError::NonNumeric {
                value: other.to_string(),
            }),
        }
    }

    /// The value as a float when it is numeric.
    ///
    /// Text is never coerced here; string-to-number conversion happens
    /// only in [`cast`](Self::cast).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The canonical textual form. Absent values map to the empty string.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::Absent => Ok(()),
        }
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PrimitiveValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for PrimitiveValue {
    /// Wraps and casts: this is the casting hook used when entries are
    /// populated from untyped external sources.
    fn from(value: String) -> Self {
        Self::Text(value).cast()
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string()).cast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_integer() {
        assert_eq!(PrimitiveValue::from("42"), PrimitiveValue::Int(42));
        assert_eq!(PrimitiveValue::from("-7"), PrimitiveValue::Int(-7));
    }

    #[test]
    fn test_cast_float() {
        assert_eq!(PrimitiveValue::from("2.5"), PrimitiveValue::Float(2.5));
        assert_eq!(PrimitiveValue::from("1e3"), PrimitiveValue::Float(1000.0));
    }

    #[test]
    fn test_cast_falls_back_to_text() {
        assert_eq!(
            PrimitiveValue::from("abc"),
            PrimitiveValue::Text("abc".to_string())
        );
        // Booleans are not parsed by the cast; they stay text.
        assert_eq!(
            PrimitiveValue::from("true"),
            PrimitiveValue::Text("true".to_string())
        );
    }

    #[test]
    fn test_cast_is_idempotent() {
        for raw in ["42", "2.5", "abc", "", "1e3", "-0.5"] {
            let once = PrimitiveValue::Text(raw.to_string()).cast();
            assert_eq!(once.clone().cast(), once);
        }
    }

    #[test]
    fn test_number_demands_numeric() {
        assert_eq!(PrimitiveValue::Int(3).number().unwrap(), 3.0);
        assert!(PrimitiveValue::Text("3x".to_string()).number().is_err());
        assert!(PrimitiveValue::Absent.number().is_err());
    }

    #[test]
    fn test_as_f64_does_not_coerce_text() {
        assert_eq!(PrimitiveValue::Float(1.5).as_f64(), Some(1.5));
        // "3" would cast to a number, but reading never coerces.
        assert_eq!(PrimitiveValue::Text("3".to_string()).as_f64(), None);
        assert_eq!(PrimitiveValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PrimitiveValue::Int(5).to_string(), "5");
        assert_eq!(PrimitiveValue::Absent.to_string(), "");
        assert_eq!(PrimitiveValue::Bool(false).to_string(), "false");
    }
}
