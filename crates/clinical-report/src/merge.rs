//! Record/completion merge: join one entity's raw records with per-donor
//! completion stats into table-ready rows.

use std::collections::BTreeMap;

use clinical_model::{
    ClinicalEntityType, CompletionColumn, CompletionStat, DONOR_ID_FIELD, DONOR_ID_PREFIX,
    DonorId, EntityRecord, SpecimenCompletion,
};

/// Value of a merged completion cell.
///
/// NS/TS cells show the absolute submission count instead of a
/// potentially-misleading fraction while a side is incomplete; keeping the
/// two cases as distinct variants lets annotation and sorting tell a
/// count of 1 apart from a completed fraction of 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompletionValue {
    Fraction(f64),
    Submissions(f64),
}

impl CompletionValue {
    /// Complete means a fraction of exactly 1; a submission count never
    /// is, whatever its magnitude.
    pub fn is_complete(&self) -> bool {
        matches!(self, CompletionValue::Fraction(value) if *value == 1.0)
    }

    /// Numeric value used for sorting and display.
    pub fn as_number(&self) -> f64 {
        match self {
            CompletionValue::Fraction(value) | CompletionValue::Submissions(value) => *value,
        }
    }
}

/// One merged table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Missing,
    Completion(CompletionValue),
}

impl CellValue {
    /// The displayed form: text verbatim, missing as empty, completion
    /// values as trimmed numbers (0, 1, 0.5, 2).
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(value) => value.clone(),
            CellValue::Missing => String::new(),
            CellValue::Completion(value) => format_number(value.as_number()),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Column identifier: a raw field name or one of the six completion
/// columns. The two namespaces never collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnKey {
    Completion(CompletionColumn),
    Field(String),
}

impl ColumnKey {
    pub fn field(name: impl Into<String>) -> Self {
        ColumnKey::Field(name.into())
    }

    /// Header text: the field name, or the two-letter completion code.
    pub fn header(&self) -> &str {
        match self {
            ColumnKey::Completion(column) => column.code(),
            ColumnKey::Field(name) => name.as_str(),
        }
    }
}

/// One table-ready row: an explicit mapping from column key to cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    cells: BTreeMap<ColumnKey, CellValue>,
}

impl TableRow {
    pub fn get(&self, column: &ColumnKey) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn field(&self, name: &str) -> Option<&CellValue> {
        self.cells.get(&ColumnKey::field(name))
    }

    pub fn completion(&self, column: CompletionColumn) -> Option<&CompletionValue> {
        match self.cells.get(&ColumnKey::Completion(column)) {
            Some(CellValue::Completion(value)) => Some(value),
            _ => None,
        }
    }

    /// The row's donor id, parsed back out of the prefixed display cell.
    pub fn donor_id(&self) -> Option<DonorId> {
        match self.field(DONOR_ID_FIELD)? {
            CellValue::Text(value) => DonorId::parse(value).ok(),
            _ => None,
        }
    }

    fn insert(&mut self, column: ColumnKey, value: CellValue) {
        self.cells.insert(column, value);
    }
}

/// Merge raw records with completion stats into table rows.
///
/// Every record field is copied into the row; `donor_id` values get the
/// `DO` display prefix. Completion columns are populated only for the
/// donor entity when stats are supplied and the record carries a
/// `donor_id`; a donor with no usable stat gets all six columns zeroed.
pub fn merge_records(
    records: &[EntityRecord],
    stats: Option<&[CompletionStat]>,
    entity: ClinicalEntityType,
) -> Vec<TableRow> {
    let rows: Vec<TableRow> = records
        .iter()
        .map(|record| merge_record(record, stats, entity))
        .collect();
    tracing::debug!(
        entity = entity.name(),
        records = records.len(),
        stats = stats.map_or(0, <[CompletionStat]>::len),
        "merged entity records"
    );
    rows
}

fn merge_record(
    record: &EntityRecord,
    stats: Option<&[CompletionStat]>,
    entity: ClinicalEntityType,
) -> TableRow {
    let mut row = TableRow::default();
    for field in &record.fields {
        let cell = match &field.value {
            // The donor id cell always carries the literal display prefix.
            Some(value) if field.name == DONOR_ID_FIELD => {
                CellValue::Text(format!("{DONOR_ID_PREFIX}{value}"))
            }
            Some(value) => CellValue::Text(value.clone()),
            None => CellValue::Missing,
        };
        row.insert(ColumnKey::field(&field.name), cell);
    }

    if entity != ClinicalEntityType::Donor {
        return row;
    }
    let Some(stats) = stats else {
        return row;
    };
    let Some(donor_id) = record.get(DONOR_ID_FIELD).and_then(|v| DonorId::parse(v).ok()) else {
        return row;
    };

    // A stat without specimen detail cannot populate NS/TS and is treated
    // as no match for the whole donor.
    let matched = stats
        .iter()
        .find(|stat| stat.donor_id == donor_id)
        .and_then(|stat| stat.specimens().map(|specimens| (stat, specimens)));

    match matched {
        None => {
            for column in CompletionColumn::ALL {
                row.insert(
                    ColumnKey::Completion(column),
                    CellValue::Completion(CompletionValue::Fraction(0.0)),
                );
            }
        }
        Some((stat, specimens)) => {
            let core = &stat.core_completion;
            row.insert(
                ColumnKey::Completion(CompletionColumn::Donor),
                CellValue::Completion(CompletionValue::Fraction(finite_or_zero(core.donor))),
            );
            row.insert(
                ColumnKey::Completion(CompletionColumn::PrimaryDiagnosis),
                CellValue::Completion(CompletionValue::Fraction(finite_or_zero(
                    core.primary_diagnosis,
                ))),
            );
            row.insert(
                ColumnKey::Completion(CompletionColumn::Treatments),
                CellValue::Completion(CompletionValue::Fraction(finite_or_zero(core.treatments))),
            );
            row.insert(
                ColumnKey::Completion(CompletionColumn::FollowUps),
                CellValue::Completion(CompletionValue::Fraction(finite_or_zero(core.follow_ups))),
            );
            let (normal, tumour) = specimen_cells(specimens);
            row.insert(
                ColumnKey::Completion(CompletionColumn::NormalSpecimens),
                CellValue::Completion(normal),
            );
            row.insert(
                ColumnKey::Completion(CompletionColumn::TumourSpecimens),
                CellValue::Completion(tumour),
            );
        }
    }
    row
}

/// NS/TS derivation. A core completion percentage of 1 covers both sides;
/// otherwise each side independently shows its submission count until its
/// own percentage reaches 1.
fn specimen_cells(specimens: &SpecimenCompletion) -> (CompletionValue, CompletionValue) {
    if specimens.core_completion_percentage == 1.0 {
        return (
            CompletionValue::Fraction(1.0),
            CompletionValue::Fraction(1.0),
        );
    }
    let side = |percentage: f64, submissions: f64| {
        if percentage == 1.0 {
            CompletionValue::Fraction(1.0)
        } else {
            CompletionValue::Submissions(finite_or_zero(submissions))
        }
    };
    (
        side(
            specimens.normal_specimens_percentage,
            specimens.normal_submissions,
        ),
        side(
            specimens.tumour_specimens_percentage,
            specimens.tumour_submissions,
        ),
    )
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Column set for one entity table: completion columns first (donor
/// entity only), then server-declared fields in dictionary order, then
/// the first-seen union of undeclared record fields.
pub fn table_columns(
    entity_fields: &[String],
    records: &[EntityRecord],
    entity: ClinicalEntityType,
) -> Vec<ColumnKey> {
    let mut columns: Vec<ColumnKey> = Vec::new();
    if entity == ClinicalEntityType::Donor {
        columns.extend(CompletionColumn::ALL.map(ColumnKey::Completion));
    }
    let mut seen: Vec<&str> = Vec::new();
    for name in entity_fields {
        if !seen.contains(&name.as_str()) {
            seen.push(name.as_str());
            columns.push(ColumnKey::field(name.as_str()));
        }
    }
    for record in records {
        for name in record.field_names() {
            if !seen.contains(&name) {
                seen.push(name);
                columns.push(ColumnKey::field(name));
            }
        }
    }
    columns
}
