//! Page requests and paged results shared by every listing endpoint.

use serde::Serialize;
use serde_json::json;

use crate::error::AppError;

pub const DEFAULT_PAGE_NUMBER: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 30;
pub const MAX_PAGE_SIZE: i64 = 30;

/// A validated zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Validates page number and size.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `page` is negative
    /// - `size` is negative, zero, or above [`MAX_PAGE_SIZE`]
    pub fn new(page: i64, size: i64) -> Result<Self, AppError> {
        if page < 0 {
            return Err(AppError::bad_request(
                "Page number cannot be less than zero.",
                json!({ "page": page }),
            ));
        }

        if size < 0 {
            return Err(AppError::bad_request(
                "Size number cannot be less than zero.",
                json!({ "size": size }),
            ));
        }

        if size == 0 {
            return Err(AppError::bad_request(
                "Page size must not be less than one",
                json!({ "size": size }),
            ));
        }

        if size > MAX_PAGE_SIZE {
            return Err(AppError::bad_request(
                format!("Page size must not be greater than {MAX_PAGE_SIZE}"),
                json!({ "size": size, "max": MAX_PAGE_SIZE }),
            ));
        }

        Ok(Self { page, size })
    }

    /// Row offset of the first element. Saturates so that absurdly large page
    /// numbers read past the end instead of overflowing.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        let total_pages = if request.size > 0 {
            (total_elements + request.size - 1) / request.size
        } else {
            0
        };

        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
            last: request.page.saturating_add(1) >= total_pages,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Converts every element while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.offset(), 0);
        assert_eq!(req.limit(), 30);
    }

    #[test]
    fn test_offset() {
        let req = PageRequest::new(2, 10).unwrap();
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_huge_page_number_saturates() {
        let req = PageRequest::new(i64::MAX, 30).unwrap();
        assert_eq!(req.offset(), i64::MAX);

        let page: Page<i32> = Page::new(Vec::new(), req, 12);
        assert_eq!(page.page, i64::MAX);
        assert_eq!(page.total_pages, 1);
        assert!(page.last);
    }

    #[test]
    fn test_negative_page_is_error() {
        let err = PageRequest::new(-1, 10).unwrap_err();
        assert_eq!(err.to_string(), "Page number cannot be less than zero.");
    }

    #[test]
    fn test_negative_size_is_error() {
        let err = PageRequest::new(0, -5).unwrap_err();
        assert_eq!(err.to_string(), "Size number cannot be less than zero.");
    }

    #[test]
    fn test_size_above_maximum_is_error() {
        let err = PageRequest::new(0, 31).unwrap_err();
        assert_eq!(err.to_string(), "Page size must not be greater than 30");
        assert!(PageRequest::new(0, 30).is_ok());
    }

    #[test]
    fn test_page_totals() {
        let req = PageRequest::new(0, 10).unwrap();
        let page = Page::new(vec![1; 10], req, 25);
        assert_eq!(page.total_pages, 3);
        assert!(!page.last);

        let req = PageRequest::new(2, 10).unwrap();
        let page = Page::new(vec![1; 5], req, 25);
        assert!(page.last);
    }

    #[test]
    fn test_empty_page_is_last() {
        let page: Page<i32> = Page::empty(PageRequest::default());
        assert_eq!(page.total_pages, 0);
        assert!(page.last);
    }

    #[test]
    fn test_serializes_camel_case() {
        let page = Page::new(vec!["a"], PageRequest::default(), 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["last"], true);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::default(), 2).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_elements, 2);
    }
}
