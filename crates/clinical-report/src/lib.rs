//! Pure reporting core for clinical submission data.
//!
//! Everything here is a synchronous function of immutable query-result
//! snapshots: error aggregation into a deduplicated report, the
//! record/completion merge into table rows, the error-first row
//! comparator, and per-cell annotation. No I/O, no shared state; callers
//! re-invoke over a fresh snapshot after every refetch.

pub mod aggregate;
pub mod annotate;
pub mod merge;
pub mod sort;

pub use aggregate::{ErrorReport, ReportRow, aggregate_errors};
pub use annotate::{CellFlags, annotate_cell, annotate_row, donor_errors};
pub use merge::{
    CellValue, ColumnKey, CompletionValue, TableRow, merge_records, table_columns,
};
pub use sort::{SortDirection, TableSort, sort_rows};
