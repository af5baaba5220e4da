//! Read-only metadata lookups over a catalog.

use tracing::debug;

use ddm_model::{Catalog, Dataset, DatasetVersion, Dimension, DimensionValue};
use ddm_view::DimensionView;

use crate::dto::{DatasetRecord, DimensionMetadata, EditionSummary, Latest, VersionRecord};
use crate::error::{Result, ServiceError};
use crate::page::ResultPage;
use crate::urls::UrlBuilder;

/// The metadata service: stateless per call, borrowing the catalog it
/// queries. All operations are lookups; nothing here mutates.
pub struct MetadataService<'a> {
    catalog: &'a Catalog,
    urls: UrlBuilder,
}

impl<'a> MetadataService<'a> {
    pub fn new(catalog: &'a Catalog, urls: UrlBuilder) -> Self {
        Self { catalog, urls }
    }

    /// One page of the dataset listing, in catalog order.
    pub fn list_datasets(&self, page: usize, size: usize) -> Result<ResultPage<DatasetRecord>> {
        if page < 1 {
            return Err(ServiceError::InvalidPageNumber(page));
        }
        let link = self.urls.datasets_page(size)?;
        let total = self.catalog.dataset_count();
        let items: Vec<DatasetRecord> = self
            .catalog
            .datasets()
            .skip((page - 1) * size)
            .take(size)
            .map(|dataset| self.dataset_record(dataset))
            .collect();
        debug!(page, size, total, count = items.len(), "listed datasets");
        Ok(ResultPage::new(&link, items, total, page, size))
    }

    pub fn find_dataset(&self, id: &str) -> Result<DatasetRecord> {
        let dataset = self.lookup_dataset(id)?;
        Ok(self.dataset_record(dataset))
    }

    /// A specific version of a dataset, including its dimension structure
    /// (without options).
    pub fn find_version(&self, id: &str, edition: &str, version: u32) -> Result<VersionRecord> {
        let (dataset, found) = self.lookup_version(id, edition, version)?;
        Ok(self.version_record(dataset, found))
    }

    /// All dimensions of a dataset version, each with its flat option list.
    pub fn list_dimensions(
        &self,
        id: &str,
        edition: &str,
        version: u32,
    ) -> Result<Vec<DimensionMetadata>> {
        let (dataset, found) = self.lookup_version(id, edition, version)?;
        Ok(found
            .dimensions
            .iter()
            .map(|dimension| {
                self.dimension_metadata(&dataset.id, found, dimension, DimensionView::List)
            })
            .collect())
    }

    /// One dimension of a dataset version, rendered with the requested view.
    pub fn find_dimension(
        &self,
        id: &str,
        edition: &str,
        version: u32,
        name: &str,
        view: DimensionView,
    ) -> Result<DimensionMetadata> {
        let (dataset, found) = self.lookup_version(id, edition, version)?;
        let dimension = found
            .dimension(name)
            .ok_or_else(|| ServiceError::DimensionNotFound(name.to_string()))?;
        Ok(self.dimension_metadata(&dataset.id, found, dimension, view))
    }

    /// Every hierarchy in the catalog as a dimension-shaped descriptor.
    pub fn list_hierarchies(&self) -> Vec<DimensionMetadata> {
        self.catalog
            .hierarchies()
            .map(|hierarchy| DimensionMetadata {
                id: hierarchy.id.clone(),
                name: hierarchy.name.clone(),
                url: self.urls.hierarchy(&hierarchy.id),
                kind: hierarchy.kind.clone(),
                hierarchical: true,
                options: None,
            })
            .collect()
    }

    /// A full hierarchy rendered as a sparse tree. Every entry is wrapped in
    /// a synthetic value, so the whole tree comes out as placeholders.
    pub fn hierarchy(&self, id: &str) -> Result<DimensionMetadata> {
        let hierarchy = self
            .catalog
            .hierarchy(id)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ServiceError::HierarchyNotFound(id.to_string()))?;
        let values: Vec<DimensionValue> = hierarchy
            .entries()
            .map(|entry| DimensionValue::from_entry(entry.id))
            .collect();
        let options = DimensionView::Hierarchy.convert(&values, Some(hierarchy));
        Ok(DimensionMetadata {
            id: hierarchy.id.clone(),
            name: hierarchy.name.clone(),
            url: self.urls.hierarchy(&hierarchy.id),
            kind: hierarchy.kind.clone(),
            hierarchical: true,
            options,
        })
    }

    fn lookup_dataset(&self, id: &str) -> Result<&'a Dataset> {
        self.catalog
            .dataset(id)
            .ok_or_else(|| ServiceError::DatasetNotFound(id.to_string()))
    }

    fn lookup_version(
        &self,
        id: &str,
        edition: &str,
        version: u32,
    ) -> Result<(&'a Dataset, &'a DatasetVersion)> {
        let dataset = self.lookup_dataset(id)?;
        let found = dataset
            .version(edition, version)
            .ok_or_else(|| ServiceError::VersionNotFound {
                dataset: id.to_string(),
                edition: edition.to_string(),
                version,
            })?;
        Ok((dataset, found))
    }

    fn dataset_record(&self, dataset: &Dataset) -> DatasetRecord {
        let latest = dataset.latest().map(|version| Latest {
            edition: version.edition.clone(),
            version: version.minor.to_string(),
            title: version.title.clone(),
            metadata: metadata_or_default(version.metadata.as_deref()),
            url: self
                .urls
                .version(&dataset.id, &version.edition, version.minor),
        });
        let editions = if dataset.versions.is_empty() {
            None
        } else {
            Some(edition_summaries(dataset))
        };
        DatasetRecord {
            dataset_id: dataset.id.clone(),
            title: dataset.title.clone(),
            metadata: metadata_or_default(dataset.metadata.as_deref()),
            latest,
            editions,
        }
    }

    fn version_record(&self, dataset: &Dataset, version: &DatasetVersion) -> VersionRecord {
        let dimensions = Some(
            version
                .dimensions
                .iter()
                .map(|dimension| {
                    self.dimension_metadata(&dataset.id, version, dimension, DimensionView::None)
                })
                .collect(),
        );
        VersionRecord {
            id: version.id,
            dataset_id: dataset.id.clone(),
            edition: version.edition.clone(),
            version: version.minor.to_string(),
            title: version.title.clone(),
            s3_url: version.s3_url.clone(),
            metadata: metadata_or_default(version.metadata.as_deref()),
            url: self
                .urls
                .version(&dataset.id, &version.edition, version.minor),
            dimensions_url: self
                .urls
                .dimensions(&dataset.id, &version.edition, version.minor),
            dimensions,
        }
    }

    fn dimension_metadata(
        &self,
        dataset_id: &str,
        version: &DatasetVersion,
        dimension: &Dimension,
        view: DimensionView,
    ) -> DimensionMetadata {
        let hierarchy = self.catalog.dimension_hierarchy(dimension);
        DimensionMetadata {
            id: dimension.name.clone(),
            name: dimension.name.clone(),
            url: self
                .urls
                .dimension(dataset_id, &version.edition, version.minor, &dimension.name),
            kind: hierarchy
                .map_or_else(|| "standard".to_string(), |h| h.kind.clone()),
            hierarchical: dimension.is_hierarchical(),
            options: view.convert(&dimension.values, hierarchy),
        }
    }
}

/// Groups a dataset's versions into edition summaries, newest edition
/// first, labelled by the newest version in each major series.
fn edition_summaries(dataset: &Dataset) -> Vec<EditionSummary> {
    let mut editions: Vec<EditionSummary> = Vec::new();
    for version in &dataset.versions {
        let id = version.major.to_string();
        match editions.iter_mut().find(|edition| edition.id == id) {
            Some(edition) => edition.versions.push(version.minor),
            None => editions.push(EditionSummary {
                id,
                label: version.edition.clone(),
                versions: vec![version.minor],
            }),
        }
    }
    editions
}

fn metadata_or_default(metadata: Option<&str>) -> String {
    match metadata {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "{}".to_string(),
    }
}
