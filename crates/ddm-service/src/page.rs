//! Pagination wrapper matching the API field naming.

use serde::Serialize;

use crate::urls::PageLink;

/// One page of a result set with navigation links. Page numbers are
/// 1-based.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<T> {
    pub items: Vec<T>,
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub last: String,
    pub total: usize,
    pub count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub start_index: usize,
}

impl<T> ResultPage<T> {
    pub fn new(link: &PageLink, items: Vec<T>, total: usize, page: usize, size: usize) -> Self {
        // An empty result set still has one (empty) page for first/last to
        // point at.
        let total_pages = total.div_ceil(size).max(1);
        let count = items.len();
        Self {
            items,
            first: link.build(1),
            prev: (page > 1).then(|| link.build(page - 1)),
            next: (page < total_pages).then(|| link.build(page + 1)),
            last: link.build(total_pages),
            total,
            count,
            page,
            total_pages,
            items_per_page: size,
            start_index: page.saturating_sub(1) * size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls::UrlBuilder;

    fn link(size: usize) -> PageLink {
        UrlBuilder::new("http://example.test")
            .datasets_page(size)
            .unwrap()
    }

    #[test]
    fn middle_pages_link_both_ways() {
        let page = ResultPage::new(&link(2), vec!["c", "d"], 5, 2, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.count, 2);
        assert_eq!(page.start_index, 2);
        assert_eq!(
            page.prev.as_deref(),
            Some("http://example.test/datasets?page=1&size=2")
        );
        assert_eq!(
            page.next.as_deref(),
            Some("http://example.test/datasets?page=3&size=2")
        );
        assert_eq!(page.last, "http://example.test/datasets?page=3&size=2");
    }

    #[test]
    fn edge_pages_omit_missing_links() {
        let first = ResultPage::new(&link(2), vec!["a", "b"], 5, 1, 2);
        assert!(first.prev.is_none());
        assert!(first.next.is_some());

        let last = ResultPage::new(&link(2), vec!["e"], 5, 3, 2);
        assert!(last.prev.is_some());
        assert!(last.next.is_none());
    }

    #[test]
    fn empty_results_still_have_one_page() {
        let page = ResultPage::<&str>::new(&link(10), vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 1);
        assert!(page.prev.is_none());
        assert!(page.next.is_none());
        assert_eq!(page.first, page.last);
    }

    #[test]
    fn serializes_with_api_field_names() {
        let page = ResultPage::new(&link(2), vec!["a"], 1, 1, 2);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "items": ["a"],
                "first": "http://example.test/datasets?page=1&size=2",
                "last": "http://example.test/datasets?page=1&size=2",
                "total": 1,
                "count": 1,
                "page": 1,
                "totalPages": 1,
                "itemsPerPage": 2,
                "startIndex": 0
            })
        );
    }
}
