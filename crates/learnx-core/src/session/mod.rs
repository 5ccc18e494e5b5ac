//! Session domain module.
//!
//! A session is the token pair returned by a successful sign-in plus the
//! cached profile of the signed-in user. It is owned by a [`SessionStore`]
//! that the HTTP layer reads on every credentialed request.

mod model;
mod store;

pub use model::Session;
pub use store::{MemorySessionStore, SessionStore};

/// Cookie holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Cookie holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Local-storage key holding the serialized profile.
pub const LOGGED_USER_KEY: &str = "logged_user";
