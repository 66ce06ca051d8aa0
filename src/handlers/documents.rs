use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info, warn};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ListError;
use crate::models::{AppState, FullListing, PageRequest};
use crate::pagination::{fetch_all, fetch_page};
use crate::storage::StorageError;

/// One page of keys
/// GET /api/documents?page={page}&page_size={page_size}
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request = match PageRequest::from_query(&params) {
        Ok(r) => r,
        Err(e) => {
            warn!("Rejected document listing request: {e}");
            return e.into_response();
        }
    };

    info!(
        "Fetching page {} (page_size={}) of documents",
        request.page, request.page_size
    );
    match bounded(
        state.request_timeout,
        fetch_page(state.lister.as_ref(), request),
    )
    .await
    {
        Ok(page) => {
            info!(
                "Fetched {} documents for page {} (has_more={})",
                page.keys.len(),
                page.current_page,
                page.has_more
            );
            (StatusCode::OK, Json(page)).into_response()
        }
        Err(e) => {
            error!("Error fetching documents: {e:?}");
            e.into_response()
        }
    }
}

/// Every key in the bucket
/// GET /api/documents/all
pub async fn list_all_documents(State(state): State<Arc<AppState>>) -> Response {
    info!("Fetching all documents");
    match bounded(state.request_timeout, fetch_all(state.lister.as_ref())).await {
        Ok(keys) => {
            info!("Successfully fetched {} documents", keys.len());
            (StatusCode::OK, Json(FullListing { keys })).into_response()
        }
        Err(e) => {
            error!("Error fetching documents: {e:?}");
            e.into_response()
        }
    }
}

async fn bounded<T>(
    limit: Duration,
    listing: impl Future<Output = Result<T, StorageError>>,
) -> Result<T, ListError> {
    match tokio::time::timeout(limit, listing).await {
        Ok(result) => result.map_err(ListError::from),
        Err(_) => Err(ListError::Timeout(limit)),
    }
}
