pub mod documents;

// Re-exports for convenience
pub use documents::{list_all_documents, list_documents};
