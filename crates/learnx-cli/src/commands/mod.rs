pub mod accounts;
pub mod auth;
pub mod config;
pub mod nav;
pub mod profile;
pub mod requests;
