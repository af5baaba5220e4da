pub mod catalog;
pub mod dataset;
pub mod error;
pub mod hierarchy;
pub mod value;

pub use catalog::Catalog;
pub use dataset::{Dataset, DatasetVersion, Dimension};
pub use error::{ModelError, Result};
pub use hierarchy::{Hierarchy, HierarchyEntry, LevelType};
pub use value::DimensionValue;
