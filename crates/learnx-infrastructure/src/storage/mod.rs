//! File-backed storage primitives.

pub mod atomic_json;
pub mod key_value;

pub use atomic_json::AtomicJsonFile;
pub use key_value::KeyValueFile;
