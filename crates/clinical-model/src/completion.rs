//! Per-donor core-completion statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DonorId;

/// Fractions of required core records present, one per clinical area.
/// Values are in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreCompletion {
    pub donor: f64,
    pub primary_diagnosis: f64,
    pub specimens: f64,
    pub follow_ups: f64,
    pub treatments: f64,
}

/// Specimen-level completion detail. The NS/TS table columns are derived
/// from these rather than from `CoreCompletion::specimens`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenCompletion {
    pub core_completion_percentage: f64,
    pub normal_specimens_percentage: f64,
    pub tumour_specimens_percentage: f64,
    pub normal_submissions: f64,
    pub tumour_submissions: f64,
    pub normal_registrations: f64,
    pub tumour_registrations: f64,
}

/// Entity-level completion detail. Absence of the specimen block is a
/// well-defined state callers must handle, not an implicit undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityData {
    #[serde(default)]
    pub specimens: Option<SpecimenCompletion>,
}

/// One donor's completion record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStat {
    pub donor_id: DonorId,
    pub core_completion: CoreCompletion,
    #[serde(default)]
    pub entity_data: Option<EntityData>,
}

impl CompletionStat {
    /// Specimen detail, when the payload carries it.
    pub fn specimens(&self) -> Option<&SpecimenCompletion> {
        self.entity_data.as_ref()?.specimens.as_ref()
    }
}

/// The six fixed completion columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompletionColumn {
    Donor,
    PrimaryDiagnosis,
    NormalSpecimens,
    TumourSpecimens,
    Treatments,
    FollowUps,
}

impl CompletionColumn {
    pub const ALL: [CompletionColumn; 6] = [
        CompletionColumn::Donor,
        CompletionColumn::PrimaryDiagnosis,
        CompletionColumn::NormalSpecimens,
        CompletionColumn::TumourSpecimens,
        CompletionColumn::Treatments,
        CompletionColumn::FollowUps,
    ];

    /// Two-letter header code.
    pub fn code(&self) -> &'static str {
        match self {
            CompletionColumn::Donor => "DO",
            CompletionColumn::PrimaryDiagnosis => "PD",
            CompletionColumn::NormalSpecimens => "NS",
            CompletionColumn::TumourSpecimens => "TS",
            CompletionColumn::Treatments => "TR",
            CompletionColumn::FollowUps => "FO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletionColumn::Donor => "Donor",
            CompletionColumn::PrimaryDiagnosis => "Primary Diagnosis",
            CompletionColumn::NormalSpecimens => "Normal Specimens",
            CompletionColumn::TumourSpecimens => "Tumour Specimens",
            CompletionColumn::Treatments => "Treatments",
            CompletionColumn::FollowUps => "Follow Ups",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().find(|column| column.code() == code).copied()
    }
}

impl fmt::Display for CompletionColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
