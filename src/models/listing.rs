use serde::Serialize;
use std::collections::HashMap;

use crate::error::ListError;
use crate::storage::KeyBatch;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// The provider never returns more than this many keys per call.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A page of bucket keys, as served by `GET /api/documents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage {
    #[serde(rename = "list_of_names")]
    pub keys: Vec<String>,
    pub has_more: bool,
    pub total_pages: u32,
    pub current_page: u32,
}

impl ListingPage {
    /// Page assembled from the provider call that backs it.
    ///
    /// `total_pages` only reflects the keys of this call, not the bucket size.
    pub fn from_batch(request: PageRequest, batch: KeyBatch) -> Self {
        let returned = u32::try_from(batch.keys.len()).unwrap_or(u32::MAX);
        Self {
            keys: batch.keys,
            has_more: batch.is_truncated,
            total_pages: returned.div_ceil(request.page_size),
            current_page: request.page,
        }
    }

    /// Page requested beyond the last key of the bucket.
    pub fn past_end(request: PageRequest) -> Self {
        Self {
            keys: Vec::new(),
            has_more: false,
            total_pages: 0,
            current_page: request.page,
        }
    }
}

/// Every key in the bucket, as served by `GET /api/documents/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullListing {
    #[serde(rename = "list_of_names")]
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Read `page` and `page_size` from the query string, applying defaults.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ListError> {
        let page = parse_positive(params, "page", DEFAULT_PAGE)?;
        let page_size = parse_positive(params, "page_size", DEFAULT_PAGE_SIZE)?;
        if page_size > MAX_PAGE_SIZE {
            return Err(ListError::InvalidParameter {
                name: "page_size",
                reason: format!("must not exceed {MAX_PAGE_SIZE}"),
            });
        }
        Ok(Self { page, page_size })
    }
}

fn parse_positive(
    params: &HashMap<String, String>,
    name: &'static str,
    default: u32,
) -> Result<u32, ListError> {
    let Some(raw) = params.get(name) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ListError::InvalidParameter {
            name,
            reason: format!("expected an integer, got '{raw}'"),
        })?;
    if value <= 0 {
        return Err(ListError::InvalidParameter {
            name,
            reason: "must be greater than zero".to_string(),
        });
    }
    u32::try_from(value).map_err(|_| ListError::InvalidParameter {
        name,
        reason: "value too large".to_string(),
    })
}
