//! Validation error payloads returned by the submission API.
//!
//! Errors arrive grouped per donor and per upload batch, not deduplicated:
//! the same (kind, message, field) triple may recur across groups and even
//! within one group's error list, and every occurrence counts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DonorId;

/// Kind of validation failure reported by the server.
///
/// The five documented kinds are exhaustively matchable; kinds added
/// server-side deserialize as `Other` and flow through aggregation without
/// any special casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidByScript,
    InvalidEnumValue,
    InvalidByRegex,
    UnrecognizedField,
    MissingRequiredField,
    Other(String),
}

impl ErrorKind {
    /// Parse the SCREAMING_SNAKE_CASE wire form. Never fails; unknown
    /// kinds are preserved verbatim as `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "INVALID_BY_SCRIPT" => ErrorKind::InvalidByScript,
            "INVALID_ENUM_VALUE" => ErrorKind::InvalidEnumValue,
            "INVALID_BY_REGEX" => ErrorKind::InvalidByRegex,
            "UNRECOGNIZED_FIELD" => ErrorKind::UnrecognizedField,
            "MISSING_REQUIRED_FIELD" => ErrorKind::MissingRequiredField,
            other => ErrorKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::InvalidByScript => "INVALID_BY_SCRIPT",
            ErrorKind::InvalidEnumValue => "INVALID_ENUM_VALUE",
            ErrorKind::InvalidByRegex => "INVALID_BY_REGEX",
            ErrorKind::UnrecognizedField => "UNRECOGNIZED_FIELD",
            ErrorKind::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorKind::Other(value) => value,
        }
    }

    /// True for kinds whose `info.value` identifies the offending cell
    /// value (cell annotation compares the displayed value against it).
    pub fn marks_value(&self) -> bool {
        matches!(self, ErrorKind::InvalidByScript | ErrorKind::InvalidEnumValue)
    }

    /// True for kinds that flag the whole field regardless of cell value.
    pub fn marks_field(&self) -> bool {
        matches!(
            self,
            ErrorKind::UnrecognizedField | ErrorKind::MissingRequiredField
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ErrorKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ErrorKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Offending value(s) attached to an error record. Semantics depend on the
/// error kind; scripted checks may report several values at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorValue {
    One(String),
    Many(Vec<String>),
}

impl ErrorValue {
    /// The value cell annotation compares against: the single value, or
    /// the first element of a multi-value report.
    pub fn primary(&self) -> Option<&str> {
        match self {
            ErrorValue::One(value) => Some(value.as_str()),
            ErrorValue::Many(values) => values.first().map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default)]
    pub value: Option<ErrorValue>,
}

/// One validation error occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    /// Which entity table the error belongs to (e.g. "primary_diagnosis").
    pub entity_name: String,
    pub error_type: ErrorKind,
    pub field_name: String,
    /// Human-readable message from the server validator.
    pub message: String,
    /// Row index within the donor's upload batch, not a global row number.
    pub index: u32,
    #[serde(default)]
    pub info: ErrorInfo,
}

/// One donor's errors from one upload batch. Multiple groups may share a
/// donor id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorErrorGroup {
    pub donor_id: DonorId,
    #[serde(default)]
    pub submitter_donor_id: Option<String>,
    pub errors: Vec<ErrorRecord>,
}
