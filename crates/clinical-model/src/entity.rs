//! Clinical entity types and the alias table.
//!
//! Each entity type corresponds to one uploadable TSV file. The server uses
//! the snake_case wire name (`entity_name`) inside error records and entity
//! blocks; some payloads use alternate spellings, which the fixed alias
//! table below resolves. Aliases are configuration, never derived.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalEntityType {
    SampleRegistration,
    Donor,
    Specimen,
    PrimaryDiagnosis,
    Treatment,
    Chemotherapy,
    HormoneTherapy,
    Immunotherapy,
    Radiation,
    Surgery,
    FollowUp,
    FamilyHistory,
    Exposure,
    Comorbidity,
    Biomarker,
}

impl ClinicalEntityType {
    /// All entity types in submission display order.
    pub const ALL: [ClinicalEntityType; 15] = [
        ClinicalEntityType::SampleRegistration,
        ClinicalEntityType::Donor,
        ClinicalEntityType::Specimen,
        ClinicalEntityType::PrimaryDiagnosis,
        ClinicalEntityType::Treatment,
        ClinicalEntityType::Chemotherapy,
        ClinicalEntityType::HormoneTherapy,
        ClinicalEntityType::Immunotherapy,
        ClinicalEntityType::Radiation,
        ClinicalEntityType::Surgery,
        ClinicalEntityType::FollowUp,
        ClinicalEntityType::FamilyHistory,
        ClinicalEntityType::Exposure,
        ClinicalEntityType::Comorbidity,
        ClinicalEntityType::Biomarker,
    ];

    /// The canonical snake_case wire name used in API payloads and TSV
    /// file names (`{name}.tsv`).
    pub fn name(&self) -> &'static str {
        match self {
            ClinicalEntityType::SampleRegistration => "sample_registration",
            ClinicalEntityType::Donor => "donor",
            ClinicalEntityType::Specimen => "specimen",
            ClinicalEntityType::PrimaryDiagnosis => "primary_diagnosis",
            ClinicalEntityType::Treatment => "treatment",
            ClinicalEntityType::Chemotherapy => "chemotherapy",
            ClinicalEntityType::HormoneTherapy => "hormone_therapy",
            ClinicalEntityType::Immunotherapy => "immunotherapy",
            ClinicalEntityType::Radiation => "radiation",
            ClinicalEntityType::Surgery => "surgery",
            ClinicalEntityType::FollowUp => "follow_up",
            ClinicalEntityType::FamilyHistory => "family_history",
            ClinicalEntityType::Exposure => "exposure",
            ClinicalEntityType::Comorbidity => "comorbidity",
            ClinicalEntityType::Biomarker => "biomarker",
        }
    }

    /// Human-readable label for table headers and listings.
    pub fn label(&self) -> &'static str {
        match self {
            ClinicalEntityType::SampleRegistration => "Sample Registration",
            ClinicalEntityType::Donor => "Donor",
            ClinicalEntityType::Specimen => "Specimen",
            ClinicalEntityType::PrimaryDiagnosis => "Primary Diagnosis",
            ClinicalEntityType::Treatment => "Treatment",
            ClinicalEntityType::Chemotherapy => "Chemotherapy",
            ClinicalEntityType::HormoneTherapy => "Hormone Therapy",
            ClinicalEntityType::Immunotherapy => "Immunotherapy",
            ClinicalEntityType::Radiation => "Radiation",
            ClinicalEntityType::Surgery => "Surgery",
            ClinicalEntityType::FollowUp => "Follow Up",
            ClinicalEntityType::FamilyHistory => "Family History",
            ClinicalEntityType::Exposure => "Exposure",
            ClinicalEntityType::Comorbidity => "Comorbidity",
            ClinicalEntityType::Biomarker => "Biomarker",
        }
    }

    /// Alternate `entity_name` spellings accepted from payloads.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ClinicalEntityType::SampleRegistration => &["registration"],
            ClinicalEntityType::PrimaryDiagnosis => &["primary_diagnoses"],
            ClinicalEntityType::FollowUp => &["follow_ups"],
            _ => &[],
        }
    }

    /// True when `entity_name` is the canonical name or a known alias.
    pub fn matches(&self, entity_name: &str) -> bool {
        entity_name == self.name() || self.aliases().contains(&entity_name)
    }
}

impl fmt::Display for ClinicalEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClinicalEntityType {
    type Err = ModelError;

    /// Resolve a canonical wire name or alias into an entity type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|entity| entity.matches(trimmed))
            .copied()
            .ok_or_else(|| ModelError::UnknownEntity(s.to_string()))
    }
}
