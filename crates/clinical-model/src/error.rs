use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid donor id: {0}")]
    InvalidDonorId(String),
    #[error("invalid program id: {0}")]
    InvalidProgramId(String),
    #[error("unknown clinical entity: {0}")]
    UnknownEntity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
