use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use doclister::app::build_router;
use doclister::models::AppState;
use doclister::storage::{BatchRequest, KeyBatch, ObjectLister, StorageError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tower::ServiceExt;

/// Lexicographically ordered in-memory bucket that pages like ListObjectsV2.
pub struct MemoryBucket {
    keys: Vec<String>,
    provider_page: usize,
    calls: AtomicUsize,
}

impl MemoryBucket {
    pub fn new(keys: &[&str]) -> Self {
        let mut keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        keys.sort();
        Self {
            keys,
            provider_page: 1000,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_provider_page(mut self, provider_page: usize) -> Self {
        self.provider_page = provider_page;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectLister for MemoryBucket {
    async fn list_batch(&self, request: BatchRequest) -> Result<KeyBatch, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // continuation token is the last key already returned
        let start = match &request.continuation_token {
            Some(after) => self.keys.partition_point(|k| k <= after),
            None => 0,
        };
        let limit = request
            .max_keys
            .map_or(self.provider_page, |n| n as usize)
            .min(self.provider_page);
        let end = (start + limit).min(self.keys.len());
        let is_truncated = end < self.keys.len();
        Ok(KeyBatch {
            keys: self.keys[start..end].to_vec(),
            is_truncated,
            next_continuation_token: is_truncated.then(|| self.keys[end - 1].clone()),
        })
    }
}

/// Provider that rejects every call the way S3 does for bad credentials.
pub struct DeniedBucket;

#[async_trait]
impl ObjectLister for DeniedBucket {
    async fn list_batch(&self, _request: BatchRequest) -> Result<KeyBatch, StorageError> {
        Err(StorageError::new(
            "AccessDenied: Access Denied (service error)",
        ))
    }
}

/// Provider that never answers.
pub struct StalledBucket;

#[async_trait]
impl ObjectLister for StalledBucket {
    async fn list_batch(&self, _request: BatchRequest) -> Result<KeyBatch, StorageError> {
        std::future::pending().await
    }
}

pub fn router(lister: Arc<dyn ObjectLister>) -> Router {
    build_router(Arc::new(AppState::new(lister, Duration::from_secs(5))))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
