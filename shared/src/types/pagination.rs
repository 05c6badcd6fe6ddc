//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Raw `?page=&limit=` query parameters
///
/// Kept as strings so that junk input degrades to defaults instead of
/// failing query extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub limit: Option<String>,
}

/// Validated offset pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Coerce raw query strings, falling back to defaults for anything that
    /// is not a positive integer
    pub fn from_query(query: &ListQuery) -> Self {
        let page = parse_positive(query.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(query.limit.as_deref()).unwrap_or(DEFAULT_LIMIT);
        Self::new(page, limit)
    }

    /// Number of records to skip
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// Page of results echoed back to the client
///
/// `total` is the number of items in this page, not the collection size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub page: u32,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            total: data.len(),
            page: pagination.page,
            data,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
}

// Constants
const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 4;
const MIN_LIMIT: u32 = 1;
const MAX_LIMIT: u32 = 100;
