use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dimension {dimension} of dataset {dataset} references unknown hierarchy {hierarchy}")]
    UnknownHierarchy {
        dataset: String,
        dimension: String,
        hierarchy: String,
    },
    #[error("dimension {dimension} of dataset {dataset} carries hierarchy entries but declares no hierarchy")]
    MissingHierarchy { dataset: String, dimension: String },
    #[error(
        "dimension {dimension} of dataset {dataset} references entry {entry} missing from hierarchy {hierarchy}"
    )]
    UnknownEntry {
        dataset: String,
        dimension: String,
        hierarchy: String,
        entry: Uuid,
    },
    #[error("entry {entry} of hierarchy {hierarchy} has a parent missing from the hierarchy")]
    DanglingParent { hierarchy: String, entry: Uuid },
}

pub type Result<T> = std::result::Result<T, ModelError>;
