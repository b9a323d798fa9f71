use serde::{Deserialize, Serialize};

/// Field name carrying the donor identifier in entity records.
pub const DONOR_ID_FIELD: &str = "donor_id";

/// One cell of a raw record row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalRecordField {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// One raw record row (one donor, specimen, treatment, ...).
///
/// Field order is per-row and not guaranteed equal across rows; the column
/// set for a table is the union of field names seen plus the
/// server-declared entity fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord {
    pub fields: Vec<ClinicalRecordField>,
}

impl EntityRecord {
    pub fn new(fields: Vec<ClinicalRecordField>) -> Self {
        Self { fields }
    }

    /// Value of the first field with the given name, if present and set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.value.as_deref())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}
