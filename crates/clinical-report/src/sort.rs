//! Row ordering for the merged data table.

use std::cmp::Ordering;
use std::collections::HashSet;

use clinical_model::{CompletionColumn, DonorErrorGroup, DonorId};
use serde::{Deserialize, Serialize};

use crate::merge::TableRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// The active completion-column sort, threaded in as immutable
/// configuration rather than held as view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub column: CompletionColumn,
    pub direction: SortDirection,
}

impl TableSort {
    /// Parse a sort expression like "DO" or "-TS" (leading dash for
    /// descending).
    pub fn parse(expression: &str) -> Option<Self> {
        let (direction, code) = match expression.strip_prefix('-') {
            Some(rest) => (SortDirection::Descending, rest),
            None => (SortDirection::Ascending, expression),
        };
        CompletionColumn::from_code(code).map(|column| TableSort { column, direction })
    }
}

/// Order rows in place: donors with validation errors first, then by the
/// sort column's numeric value. The sort is stable, so ties keep input
/// order.
pub fn sort_rows(rows: &mut [TableRow], groups: &[DonorErrorGroup], sort: Option<&TableSort>) {
    let errored: HashSet<DonorId> = groups.iter().map(|group| group.donor_id).collect();
    rows.sort_by(|a, b| {
        let a_error = row_has_errors(a, &errored);
        let b_error = row_has_errors(b, &errored);
        // Errored rows first.
        let by_error = b_error.cmp(&a_error);
        if by_error != Ordering::Equal {
            return by_error;
        }
        let Some(sort) = sort else {
            return Ordering::Equal;
        };
        let a_value = sort_value(a, sort.column);
        let b_value = sort_value(b, sort.column);
        let ordering = a_value.partial_cmp(&b_value).unwrap_or(Ordering::Equal);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn row_has_errors(row: &TableRow, errored: &HashSet<DonorId>) -> bool {
    row.donor_id().is_some_and(|donor_id| errored.contains(&donor_id))
}

fn sort_value(row: &TableRow, column: CompletionColumn) -> f64 {
    row.completion(column)
        .map_or(0.0, |value| value.as_number())
}
