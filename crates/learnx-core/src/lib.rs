//! Domain layer of the LearnX admin toolkit.
//!
//! Holds the wire and view models, the shared error type, the pure listing
//! utilities and the traits the outer layers implement. Nothing here performs
//! I/O.

pub mod account;
pub mod auth;
pub mod config;
pub mod date;
pub mod envelope;
pub mod error;
pub mod listing;
pub mod navigation;
pub mod role_request;
pub mod session;
pub mod user;

// Re-export common types
pub use envelope::Envelope;
pub use error::{AdminError, Result};
