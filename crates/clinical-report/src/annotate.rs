//! Cell-level annotation: flag table cells as errored or as completion
//! cells for presentation.

use clinical_model::{DonorErrorGroup, DonorId, ErrorRecord};

use crate::merge::{ColumnKey, TableRow};

/// Presentation flags for one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFlags {
    pub is_error: bool,
    pub is_completion: bool,
}

/// Collect one donor's errors across all groups, in input order.
pub fn donor_errors<'a>(groups: &'a [DonorErrorGroup], donor_id: DonorId) -> Vec<&'a ErrorRecord> {
    groups
        .iter()
        .filter(|group| group.donor_id == donor_id)
        .flat_map(|group| group.errors.iter())
        .collect()
}

/// Annotate one cell of a merged row.
///
/// Precedence: completion cells are errored whenever their value is not a
/// completed fraction (a submission count never is, so NS/TS cells holding
/// counts are flagged without consulting the stat again); otherwise errors
/// on the cell's field mark it when the reported offending value matches
/// the displayed value, and unrecognized/missing-field errors mark the
/// field unconditionally.
pub fn annotate_cell(
    row: &TableRow,
    column: &ColumnKey,
    donor_errors: &[&ErrorRecord],
) -> CellFlags {
    match column {
        ColumnKey::Completion(completion) => {
            let complete = row
                .completion(*completion)
                .is_some_and(|value| value.is_complete());
            CellFlags {
                is_error: !complete,
                is_completion: true,
            }
        }
        ColumnKey::Field(name) => {
            let displayed = match row.get(column) {
                Some(cell) => cell.display(),
                None => String::new(),
            };
            let mut matching = donor_errors
                .iter()
                .filter(|error| error.field_name == *name);
            let is_error = matching.clone().any(|error| {
                error.error_type.marks_value() && value_matches(error, &displayed)
            }) || matching.any(|error| error.error_type.marks_field());
            CellFlags {
                is_error,
                is_completion: false,
            }
        }
    }
}

/// True when the error's reported offending value matches the displayed
/// cell: exact equality, first element of a multi-value report, or a null
/// report paired with an empty cell.
fn value_matches(error: &ErrorRecord, displayed: &str) -> bool {
    match &error.info.value {
        Some(value) => value.primary() == Some(displayed),
        None => displayed.is_empty(),
    }
}

/// Convenience wrapper annotating a full row against one column set.
pub fn annotate_row(
    row: &TableRow,
    columns: &[ColumnKey],
    groups: &[DonorErrorGroup],
) -> Vec<CellFlags> {
    let errors = match row.donor_id() {
        Some(donor_id) => donor_errors(groups, donor_id),
        None => Vec::new(),
    };
    columns
        .iter()
        .map(|column| annotate_cell(row, column, &errors))
        .collect()
}
