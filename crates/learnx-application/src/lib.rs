//! Page use cases of the LearnX admin dashboard.
//!
//! Each use case owns the state of one screen and talks to the outside world
//! only through the traits defined in `learnx-core`.

pub mod accounts;
pub mod guard;
pub mod permissions;
pub mod profile;

pub use accounts::AccountsUseCase;
pub use guard::SessionGuard;
pub use permissions::PermissionsUseCase;
pub use profile::{ProfileForm, ProfileUseCase};
