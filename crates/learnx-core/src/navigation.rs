//! Static route table and sidebar entries of the dashboard.

use serde::Serialize;

/// Route paths of every dashboard screen.
pub mod paths {
    pub const HOME: &str = "/";

    pub mod auth {
        pub const SIGN_IN: &str = "/auth/sign-in";
        pub const SIGN_UP: &str = "/auth/sign-up";
        pub const RESET_PASSWORD: &str = "/auth/reset-password";
    }

    pub mod dashboard {
        pub const ACCOUNTS: &str = "/dashboard/accounts";
        pub const PERMISSIONS: &str = "/dashboard/permissions";
        pub const PROFILE: &str = "/dashboard/profile";
    }

    pub mod errors {
        pub const NOT_FOUND: &str = "/errors/not-found";
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Sidebar entries in display order.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        key: "accounts",
        title: "Quản lý tài khoản",
        href: paths::dashboard::ACCOUNTS,
        icon: "users",
    },
    NavItem {
        key: "permissions",
        title: "Quản lý cấp quyền",
        href: paths::dashboard::PERMISSIONS,
        icon: "users",
    },
    NavItem {
        key: "profile",
        title: "Hồ sơ",
        href: paths::dashboard::PROFILE,
        icon: "user",
    },
];

/// Finds a sidebar entry by key.
pub fn nav_item(key: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.key == key)
}

/// Finds the sidebar entry whose route is `href` or contains it.
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .find(|item| current_path == item.href || current_path.starts_with(&format!("{}/", item.href)))
}
