use thiserror::Error;

use crate::urls::MAX_PAGE_SIZE;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no such dataset: {0}")]
    DatasetNotFound(String),
    #[error("no such version: {dataset}/editions/{edition}/versions/{version}")]
    VersionNotFound {
        dataset: String,
        edition: String,
        version: u32,
    },
    #[error("no such dimension: {0}")]
    DimensionNotFound(String),
    #[error("no such hierarchy: {0}")]
    HierarchyNotFound(String),
    #[error("page size must be between 1 and {MAX_PAGE_SIZE}, got {0}")]
    InvalidPageSize(usize),
    #[error("page numbers start at 1, got {0}")]
    InvalidPageNumber(usize),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
