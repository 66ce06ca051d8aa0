//! Reconciles the provider's continuation-token pagination with the
//! page-number pagination exposed over HTTP.
//!
//! The provider cannot seek to a page by number, so page `P` is reached by
//! walking forward from the first page: a request for page `P` costs `P`
//! sequential provider calls, each limited to `page_size` keys.

use log::{debug, warn};

use crate::models::{ListingPage, PageRequest};
use crate::storage::{BatchRequest, KeyBatch, ObjectLister, StorageError};

/// Fetch one page of keys.
pub async fn fetch_page(
    lister: &dyn ObjectLister,
    request: PageRequest,
) -> Result<ListingPage, StorageError> {
    let mut token = None;
    let mut page = 1;

    loop {
        let batch = lister
            .list_batch(BatchRequest {
                max_keys: Some(request.page_size),
                continuation_token: token.take(),
            })
            .await?;

        if page >= request.page {
            return Ok(ListingPage::from_batch(request, batch));
        }

        match batch.next_continuation_token.filter(|_| batch.is_truncated) {
            Some(next) => token = Some(next),
            None => {
                if batch.is_truncated {
                    warn!("Provider reported more keys on page {page} but no continuation token");
                }
                debug!(
                    "Bucket ends at page {page}, requested page {} is empty",
                    request.page
                );
                return Ok(ListingPage::past_end(request));
            }
        }
        page += 1;
    }
}

/// Enumerate every key in the bucket, following continuation tokens until
/// the provider reports no more results.
pub async fn fetch_all(lister: &dyn ObjectLister) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut token = None;
    let mut calls = 0usize;

    loop {
        let batch = lister
            .list_batch(BatchRequest {
                max_keys: None,
                continuation_token: token.take(),
            })
            .await?;
        calls += 1;

        let KeyBatch {
            keys: batch_keys,
            is_truncated,
            next_continuation_token,
        } = batch;
        keys.extend(batch_keys);
        match next_continuation_token.filter(|_| is_truncated) {
            Some(next) => token = Some(next),
            None => {
                if is_truncated {
                    warn!("Provider reported more keys but no continuation token, stopping");
                }
                break;
            }
        }
    }

    debug!("Enumerated {} keys in {calls} provider calls", keys.len());
    Ok(keys)
}
