//! Serializable response records assembled by the service.
//!
//! Field naming follows the published API: camelCase keys, absent optionals
//! omitted, dimension options nested under `options`.

use serde::Serialize;
use uuid::Uuid;

use ddm_view::DimensionOption;

/// A dataset with its edition summaries and latest version.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRecord {
    pub dataset_id: String,
    pub title: String,
    /// Raw JSON metadata document; `{}` when none is attached.
    pub metadata: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<Latest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editions: Option<Vec<EditionSummary>>,
}

/// The newest published version of a dataset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Latest {
    pub edition: String,
    pub version: String,
    pub title: String,
    pub metadata: String,
    pub url: String,
}

/// One edition (major series) of a dataset and its version numbers.
#[derive(Debug, Serialize)]
pub struct EditionSummary {
    pub id: String,
    pub label: String,
    pub versions: Vec<u32>,
}

/// One published version of a dataset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub id: Uuid,
    pub dataset_id: String,
    pub edition: String,
    pub version: String,
    pub title: String,
    #[serde(rename = "s3URL", skip_serializing_if = "Option::is_none")]
    pub s3_url: Option<String>,
    pub metadata: String,
    pub url: String,
    pub dimensions_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<DimensionMetadata>>,
}

/// Metadata about one dimension, optionally with rendered options.
#[derive(Debug, Serialize)]
pub struct DimensionMetadata {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hierarchical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DimensionOption>>,
}
