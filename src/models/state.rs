use std::sync::Arc;
use std::time::Duration;

use crate::storage::ObjectLister;

/// Application state shared across all request handlers
pub struct AppState {
    pub lister: Arc<dyn ObjectLister>,
    pub request_timeout: Duration, // Upper bound for one listing request
}

impl AppState {
    pub fn new(lister: Arc<dyn ObjectLister>, request_timeout: Duration) -> Self {
        Self {
            lister,
            request_timeout,
        }
    }
}
