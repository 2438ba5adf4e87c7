//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::pagination::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PageRequest};
use crate::error::AppError;

/// `?page=&size=` query parameters accepted by every listing endpoint.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub size: Option<i64>,
}

impl PaginationParams {
    /// Applies defaults (page 0, size 30) and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a negative page or a size outside `1..=30`.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, size: Option<i64>) -> PaginationParams {
        PaginationParams { page, size }
    }

    #[test]
    fn test_defaults() {
        let req = params(None, None).into_page_request().unwrap();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, 30);
    }

    #[test]
    fn test_negative_page_is_error() {
        let err = params(Some(-1), None).into_page_request().unwrap_err();
        assert_eq!(err.to_string(), "Page number cannot be less than zero.");
    }

    #[test]
    fn test_size_above_maximum_is_error() {
        let err = params(None, Some(31)).into_page_request().unwrap_err();
        assert_eq!(err.to_string(), "Page size must not be greater than 30");
    }

    #[test]
    fn test_parses_from_query_string_values() {
        let p: PaginationParams = serde_json::from_str(r#"{"page":"2","size":"10"}"#).unwrap();
        let req = p.into_page_request().unwrap();
        assert_eq!(req.offset(), 20);
    }
}
