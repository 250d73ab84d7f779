//! Key-value JSON storage.
//!
//! The core treats persistence as an opaque get/set-by-key blob store. Three
//! collections (exercises, routines, sessions) and one seeding flag live under
//! keys derived from a namespace prefix.

mod json_file;
mod keys;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use keys::{CollectionKeys, DEFAULT_NAMESPACE};
pub use memory::InMemoryStore;
pub use traits::KeyValueStore;
