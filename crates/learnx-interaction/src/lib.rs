//! HTTP side of the LearnX admin toolkit.

pub mod accounts_api;
pub mod auth_client;
pub mod http;
pub mod role_requests_api;

pub use accounts_api::AccountsApi;
pub use auth_client::PasswordAuthClient;
pub use http::{HttpClient, PrivateHttpClient};
pub use role_requests_api::RoleRequestsApi;
