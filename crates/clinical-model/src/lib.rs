pub mod completion;
pub mod entity;
pub mod error;
pub mod errors;
pub mod ids;
pub mod query;
pub mod record;

pub use completion::{
    CompletionColumn, CompletionStat, CoreCompletion, EntityData, SpecimenCompletion,
};
pub use entity::ClinicalEntityType;
pub use error::{ModelError, Result};
pub use errors::{DonorErrorGroup, ErrorInfo, ErrorKind, ErrorRecord, ErrorValue};
pub use ids::{DONOR_ID_PREFIX, DonorId, ProgramId};
pub use query::{ClinicalData, ClinicalDataQuery, CompletionState, EntityTypeBlock};
pub use record::{ClinicalRecordField, DONOR_ID_FIELD, EntityRecord};
