//! Receiver settings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the receiver name of generated methods is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiverNameMode {
    /// Lower-cased prefix of the struct name
    #[default]
    Derived,
    /// The configured `fixedReceiverName`
    Fixed,
}

impl ReceiverNameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiverNameMode::Derived => "derived",
            ReceiverNameMode::Fixed => "fixed",
        }
    }
}

impl fmt::Display for ReceiverNameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReceiverNameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "derived" => Ok(ReceiverNameMode::Derived),
            "fixed" => Ok(ReceiverNameMode::Fixed),
            _ => Err(format!(
                "unknown receiver name mode '{}', expected 'derived' or 'fixed'",
                s
            )),
        }
    }
}

/// Whether generated methods take the struct by value or by pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiverType {
    Value,
    #[default]
    Pointer,
}

impl ReceiverType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiverType::Value => "value",
            ReceiverType::Pointer => "pointer",
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, ReceiverType::Pointer)
    }
}

impl fmt::Display for ReceiverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReceiverType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "value" => Ok(ReceiverType::Value),
            "pointer" | "ptr" => Ok(ReceiverType::Pointer),
            _ => Err(format!(
                "unknown receiver type '{}', expected 'value' or 'pointer'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            ReceiverNameMode::from_str("derived").unwrap(),
            ReceiverNameMode::Derived
        );
        assert_eq!(
            ReceiverNameMode::from_str("Fixed").unwrap(),
            ReceiverNameMode::Fixed
        );
        assert!(ReceiverNameMode::from_str("random").is_err());
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!(ReceiverType::from_str("value").unwrap(), ReceiverType::Value);
        assert_eq!(
            ReceiverType::from_str("POINTER").unwrap(),
            ReceiverType::Pointer
        );
        assert_eq!(ReceiverType::from_str("ptr").unwrap(), ReceiverType::Pointer);
        assert!(ReceiverType::from_str("reference").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReceiverNameMode::Fixed.to_string(), "fixed");
        assert_eq!(ReceiverType::Value.to_string(), "value");
    }

    #[test]
    fn test_deserialize() {
        let mode: ReceiverNameMode = serde_json::from_str(r#""fixed""#).unwrap();
        assert_eq!(mode, ReceiverNameMode::Fixed);

        let ty: ReceiverType = serde_json::from_str(r#""value""#).unwrap();
        assert_eq!(ty, ReceiverType::Value);
    }
}
