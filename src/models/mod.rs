pub mod config;
pub mod listing;
pub mod state;

// Re-exports for convenience
pub use config::AppConfig;
pub use listing::{FullListing, ListingPage, PageRequest};
pub use state::AppState;
