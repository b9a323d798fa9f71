#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Display prefix applied to donor ids in table cells ("DO262500").
pub const DONOR_ID_PREFIX: &str = "DO";

/// Numeric donor identifier as carried by completion stats and error groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DonorId(u64);

impl DonorId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse either the bare numeric form ("262500") or the prefixed
    /// display form ("DO262500").
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix(DONOR_ID_PREFIX).unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ModelError::InvalidDonorId(value.to_string()))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The prefixed form shown in table cells.
    pub fn display_value(&self) -> String {
        format!("{DONOR_ID_PREFIX}{}", self.0)
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for DonorId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for DonorId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <u64 as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self(value))
    }
}

/// Program short name used by query filters (e.g. "PACA-AU").
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ProgramId(String);

impl ProgramId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidProgramId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
