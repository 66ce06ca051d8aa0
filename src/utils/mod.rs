pub mod logging;

// Re-exports for convenience
pub use logging::initialize_logger;
