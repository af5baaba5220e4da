//! Construction of the external links embedded in responses.

use crate::error::{Result, ServiceError};

/// Largest page size a listing link may be built for.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Builds links to datasets, versions, dimensions and hierarchies under a
/// fixed base URL.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
}

impl UrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// A reusable template for links to individual pages of the dataset
    /// listing.
    pub fn datasets_page(&self, page_size: usize) -> Result<PageLink> {
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(ServiceError::InvalidPageSize(page_size));
        }
        Ok(PageLink {
            base: format!("{}/datasets", self.base_url),
            page_size,
        })
    }

    pub fn dataset(&self, id: &str) -> String {
        format!("{}/datasets/{}", self.base_url, encode(id))
    }

    pub fn version(&self, dataset: &str, edition: &str, version: u32) -> String {
        format!(
            "{}/datasets/{}/editions/{}/versions/{version}",
            self.base_url,
            encode(dataset),
            encode(edition)
        )
    }

    pub fn dimensions(&self, dataset: &str, edition: &str, version: u32) -> String {
        format!(
            "{}/datasets/{}/editions/{}/versions/{version}/dimensions",
            self.base_url,
            encode(dataset),
            encode(edition)
        )
    }

    pub fn dimension(&self, dataset: &str, edition: &str, version: u32, name: &str) -> String {
        format!(
            "{}/datasets/{}/editions/{}/versions/{version}/dimensions/{}",
            self.base_url,
            encode(dataset),
            encode(edition),
            encode(name)
        )
    }

    pub fn hierarchy(&self, id: &str) -> String {
        format!("{}/hierarchies/{}", self.base_url, encode(id))
    }
}

/// Link template for pages of a result set.
#[derive(Debug, Clone)]
pub struct PageLink {
    base: String,
    page_size: usize,
}

impl PageLink {
    pub fn build(&self, page: usize) -> String {
        format!("{}?page={page}&size={}", self.base, self.page_size)
    }
}

/// Percent-encodes the characters that would break a path segment. Catalog
/// ids are URL-friendly by convention; this covers the stragglers.
fn encode(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for ch in segment.chars() {
        match ch {
            '%' => encoded.push_str("%25"),
            ' ' => encoded.push_str("%20"),
            '/' => encoded.push_str("%2F"),
            '?' => encoded.push_str("%3F"),
            '#' => encoded.push_str("%23"),
            _ => encoded.push(ch),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_resource_links() {
        let urls = UrlBuilder::new("http://localhost:20099/");
        assert_eq!(
            urls.dataset("pop-estimates"),
            "http://localhost:20099/datasets/pop-estimates"
        );
        assert_eq!(
            urls.dimension("pop-estimates", "2015", 2, "region"),
            "http://localhost:20099/datasets/pop-estimates/editions/2015/versions/2/dimensions/region"
        );
        assert_eq!(
            urls.hierarchy("geography"),
            "http://localhost:20099/hierarchies/geography"
        );
    }

    #[test]
    fn encodes_awkward_segments() {
        let urls = UrlBuilder::new("http://example.test");
        assert_eq!(
            urls.dataset("census 2011/v2"),
            "http://example.test/datasets/census%202011%2Fv2"
        );
    }

    #[test]
    fn page_links_carry_page_and_size() {
        let urls = UrlBuilder::new("http://example.test");
        let link = urls.datasets_page(25).unwrap();
        assert_eq!(link.build(3), "http://example.test/datasets?page=3&size=25");
    }

    #[test]
    fn rejects_out_of_range_page_sizes() {
        let urls = UrlBuilder::new("http://example.test");
        assert!(matches!(
            urls.datasets_page(0),
            Err(ServiceError::InvalidPageSize(0))
        ));
        assert!(matches!(
            urls.datasets_page(MAX_PAGE_SIZE + 1),
            Err(ServiceError::InvalidPageSize(_))
        ));
        assert!(urls.datasets_page(MAX_PAGE_SIZE).is_ok());
    }
}
