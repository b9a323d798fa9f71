//! Error aggregation: collapse the per-donor error stream into a
//! deduplicated report for one entity table.
//!
//! The input arrives grouped by donor and upload batch, not by field; the
//! same (kind, message, field) triple recurs across groups and within one
//! group's list, and every occurrence counts toward the affected-record
//! total.

use std::collections::HashMap;

use clinical_model::{ClinicalEntityType, DonorErrorGroup, ErrorKind, ErrorRecord};
use serde::Serialize;

/// One deduplicated report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Count of raw error occurrences collapsed into this line.
    pub entries: usize,
    pub field_name: String,
    pub entity_name: String,
    pub error_message: String,
}

/// The error summary for one entity table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub rows: Vec<ReportRow>,
    pub total_entries: usize,
}

impl ErrorReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Collapse all errors belonging to `entity` into report rows.
///
/// Rows group occurrences whose (kind, message, field) are pairwise equal
/// and appear in first-occurrence order over the scan of groups and their
/// error lists. Errors whose `entity_name` resolves to a different entity
/// are excluded.
pub fn aggregate_errors(groups: &[DonorErrorGroup], entity: ClinicalEntityType) -> ErrorReport {
    let mut rows: Vec<ReportRow> = Vec::new();
    let mut index: HashMap<(ErrorKind, String, String), usize> = HashMap::new();

    for group in groups {
        for error in group
            .errors
            .iter()
            .filter(|error| entity.matches(&error.entity_name))
        {
            let key = (
                error.error_type.clone(),
                error.message.clone(),
                error.field_name.clone(),
            );
            match index.get(&key) {
                Some(&position) => rows[position].entries += 1,
                None => {
                    index.insert(key, rows.len());
                    rows.push(ReportRow {
                        entries: 1,
                        field_name: error.field_name.clone(),
                        entity_name: error.entity_name.clone(),
                        error_message: report_message(error),
                    });
                }
            }
        }
    }

    let total_entries = rows.iter().map(|row| row.entries).sum();
    tracing::debug!(
        entity = entity.name(),
        groups = groups.len(),
        rows = rows.len(),
        total_entries,
        "aggregated clinical errors"
    );
    ErrorReport {
        rows,
        total_entries,
    }
}

/// The message shown in the report. Unrecognized-field errors carry a
/// server message that lacks upload context, so the report synthesizes one
/// naming the offending TSV file.
fn report_message(error: &ErrorRecord) -> String {
    match error.error_type {
        ErrorKind::UnrecognizedField => format!(
            "{} is not a field within the latest dictionary. \
             Please remove this from the {}.tsv file before submitting.",
            error.field_name, error.entity_name
        ),
        _ => error.message.clone(),
    }
}
