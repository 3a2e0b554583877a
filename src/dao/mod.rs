/// Catalog document sources (embedded, file or remote).
pub mod catalog;
/// Durable key-value storage port and its backends.
pub mod kv_store;
/// Persisted document layouts.
pub mod models;
/// Storage error types.
pub mod storage;
