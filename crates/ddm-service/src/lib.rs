pub mod dto;
pub mod error;
pub mod page;
pub mod service;
pub mod urls;

pub use dto::{DatasetRecord, DimensionMetadata, EditionSummary, Latest, VersionRecord};
pub use error::{Result, ServiceError};
pub use page::ResultPage;
pub use service::MetadataService;
pub use urls::{MAX_PAGE_SIZE, PageLink, UrlBuilder};
