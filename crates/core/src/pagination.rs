//! Page/limit resolution for list operations.
//!
//! List queries accept an optional 1-based `page` and an optional `limit`.
//! Missing or non-positive values fall back to the defaults below.

/// Page used when none (or a non-positive one) is supplied.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when none (or a non-positive one) is supplied.
pub const DEFAULT_LIMIT: i64 = 10;

/// A resolved page request. Both fields are always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn resolve(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    /// Rows to skip before the first row of this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
