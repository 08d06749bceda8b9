//! Pagination request and response types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Zero-based page request taken from `page`/`size` query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Zero-based page index (default: 0)
    pub page: Option<i64>,
    /// Page size (default: 20, max: 100)
    pub size: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    pub fn size(&self) -> i64 {
        self.size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn limit(&self) -> i64 {
        self.size()
    }

    pub fn offset(&self) -> i64 {
        self.page().saturating_mul(self.size())
    }
}

/// A slice of a larger result set plus position and total-size metadata
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub number_of_elements: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub has_next: bool,
}

impl<T> Paged<T> {
    /// Wrap one page of rows with metadata derived from the request and total count.
    pub fn new(data: Vec<T>, total_elements: i64, page: &PageQuery) -> Self {
        let size = page.size();
        let total_pages = (total_elements + size - 1) / size;
        Self {
            number_of_elements: data.len() as i64,
            total_elements,
            total_pages,
            has_next: page.page() + 1 < total_pages,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: i64, size: i64) -> PageQuery {
        PageQuery {
            page: Some(page),
            size: Some(size),
        }
    }

    #[test]
    fn total_pages_is_ceiling_of_total_over_size() {
        let paged = Paged::new(vec![String::new(); 10], 21, &query(0, 10));
        assert_eq!(paged.total_pages, 3);
        assert_eq!(paged.total_elements, 21);
        assert_eq!(paged.number_of_elements, 10);
    }

    #[test]
    fn has_next_is_true_before_the_last_page() {
        assert!(Paged::new(vec![String::new(); 10], 21, &query(0, 10)).has_next);
        assert!(Paged::new(vec![String::new(); 10], 21, &query(1, 10)).has_next);
        assert!(!Paged::new(vec![String::new(); 1], 21, &query(2, 10)).has_next);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let paged = Paged::<String>::new(vec![], 20, &query(1, 10));
        assert_eq!(paged.total_pages, 2);
        assert!(!paged.has_next);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let paged = Paged::<String>::new(vec![], 0, &query(0, 10));
        assert_eq!(paged.total_pages, 0);
        assert_eq!(paged.number_of_elements, 0);
        assert!(!paged.has_next);
    }

    #[test]
    fn defaults_and_bounds_are_applied() {
        let defaults = PageQuery::default();
        assert_eq!(defaults.page(), 0);
        assert_eq!(defaults.size(), 20);
        assert_eq!(defaults.offset(), 0);

        let oversized = query(-1, 1000);
        assert_eq!(oversized.page(), 0);
        assert_eq!(oversized.size(), 100);

        assert_eq!(query(3, 25).offset(), 75);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let huge = query(i64::MAX, 100);
        assert_eq!(huge.offset(), i64::MAX);

        let negative = query(i64::MIN, 100);
        assert_eq!(negative.offset(), 0);
    }
}
