//! Account domain module.
//!
//! # Module Structure
//!
//! - `model`: Wire user record and the account view model projected from it
//! - `source`: Trait for fetching the user directory

mod model;
mod source;

pub use model::{Account, AccountStatus, Authority, RawUser};
pub use source::AccountSource;
