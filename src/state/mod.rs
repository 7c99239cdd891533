//! State management module
//!
//! This module handles durable storage of the user's language preference

pub mod storage;

// Re-export commonly used state components
pub use storage::{LanguageStorage, MemoryStorage, FileStorage, RedisStorage, storage_from_config};
