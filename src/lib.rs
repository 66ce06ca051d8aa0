pub mod app;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod storage;
pub mod utils;
