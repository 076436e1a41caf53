//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use smthub_core::types::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    25
}

impl PaginationParams {
    /// Converts to a `PageRequest`; bounds are clamped there.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_page_size_is_clamped() {
        let params = PaginationParams {
            page: 2,
            page_size: 5000,
        };
        let req = params.into_page_request();
        assert_eq!(req.page, 2);
        assert_eq!(req.page_size, 100);
    }

    #[test]
    fn zero_values_are_raised_to_minimums() {
        let params = PaginationParams {
            page: 0,
            page_size: 0,
        };
        let req = params.into_page_request();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 1);
    }
}
