//! Typed mirrors of the `clinicalData` query result and filter shapes.
//!
//! The filter fields are pass-through: they are sent with the query and
//! echoed back by callers, never interpreted by the reporting core.

use serde::{Deserialize, Serialize};

use crate::{
    ClinicalEntityType, CompletionStat, DonorErrorGroup, DonorId, EntityRecord,
};

/// One entity type's slice of the query result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeBlock {
    pub entity_name: String,
    #[serde(default)]
    pub total_docs: u64,
    /// Column names declared by the server's dictionary for this entity.
    #[serde(default)]
    pub entity_fields: Vec<String>,
    #[serde(default)]
    pub records: Vec<EntityRecord>,
    /// Present only on the donor block.
    #[serde(default)]
    pub completion_stats: Option<Vec<CompletionStat>>,
}

/// The `clinicalData` result for one program/filter combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalData {
    #[serde(default)]
    pub clinical_entities: Vec<EntityTypeBlock>,
    #[serde(default)]
    pub clinical_errors: Vec<DonorErrorGroup>,
}

impl ClinicalData {
    /// The block for one entity type, resolved through the alias table.
    pub fn entity(&self, entity: ClinicalEntityType) -> Option<&EntityTypeBlock> {
        self.clinical_entities
            .iter()
            .find(|block| entity.matches(&block.entity_name))
    }
}

/// Completion filter sent with the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionState {
    #[default]
    All,
    Complete,
    Incomplete,
    Invalid,
}

/// Immutable query configuration threaded between the query layer and the
/// presentation layer; replaces ad hoc per-view paging state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalDataQuery {
    pub page: u32,
    pub page_size: u32,
    /// Server sort expression, passed through verbatim.
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub completion_state: CompletionState,
    #[serde(default)]
    pub donor_ids: Vec<DonorId>,
    #[serde(default)]
    pub submitter_donor_ids: Vec<String>,
    #[serde(default)]
    pub entity_types: Vec<ClinicalEntityType>,
}

impl Default for ClinicalDataQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 20,
            sort: None,
            completion_state: CompletionState::All,
            donor_ids: Vec::new(),
            submitter_donor_ids: Vec::new(),
            entity_types: Vec::new(),
        }
    }
}
