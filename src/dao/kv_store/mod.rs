mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use crate::dao::storage::StorageResult;

/// Key holding the JSON-encoded list of saved history records.
pub const HISTORY_KEY: &str = "history";
/// Key holding the JSON-encoded list of user-defined game definitions.
pub const CUSTOM_GAMES_KEY: &str = "customGames";

/// Abstraction over the durable key-value store backing history and custom games.
///
/// Values are whole JSON documents: every mutation rewrites the full value
/// stored under a key.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the document stored under `key`, or `None` when nothing was written yet.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Replace the document stored under `key`.
    fn set(&self, key: &str, value: String) -> StorageResult<()>;
    /// Check the backend can still be used.
    fn health_check(&self) -> StorageResult<()>;
}
