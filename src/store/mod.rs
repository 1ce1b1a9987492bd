//! # Client Storage
//!
//! - [`ClientStore`]: load/save of the whole record collection
//! - [`JsonFileStore`]: one JSON file, replaced atomically on save
//! - [`InMemoryStore`]: no disk I/O
//! - [`find_by_identity`]: first-match identity lookup

mod backend;
mod errors;
mod identity;
mod json_file;
mod memory;

pub use backend::ClientStore;
pub use errors::{StoreError, StoreResult};
pub use identity::find_by_identity;
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
