//! In-memory filtering and pagination for dashboard tables.
//!
//! Everything here is pure and synchronous: tables are fetched in full and
//! sliced locally.

use crate::account::{Account, AccountStatus};
use crate::error::{AdminError, Result};
use crate::user::Role;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentinel accepted by every selector to mean "no restriction".
pub const ALL: &str = "all";

/// Page-size choices offered by the tables.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Role selector of the accounts filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(role) => account.role == role.label(),
        }
    }
}

impl FromStr for RoleFilter {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(RoleFilter::All)
        } else {
            s.parse::<Role>().map(RoleFilter::Only)
        }
    }
}

/// Status selector of the accounts filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AccountStatus),
}

impl StatusFilter {
    pub fn matches(&self, account: &Account) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => account.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(StatusFilter::All)
        } else {
            s.parse::<AccountStatus>().map(StatusFilter::Only)
        }
    }
}

/// Criteria held by the accounts page. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountFilter {
    pub search_query: String,
    pub role: RoleFilter,
    pub status: StatusFilter,
}

impl AccountFilter {
    pub fn new(search_query: impl Into<String>, role: RoleFilter, status: StatusFilter) -> Self {
        Self {
            search_query: search_query.into(),
            role,
            status,
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..Self::default()
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            role: RoleFilter::Only(role),
            ..Self::default()
        }
    }

    /// True when the filter lets every account through.
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty()
            && self.role == RoleFilter::All
            && self.status == StatusFilter::All
    }

    pub fn matches(&self, account: &Account) -> bool {
        self.matches_search(account) && self.role.matches(account) && self.status.matches(account)
    }

    fn matches_search(&self, account: &Account) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let needle = self.search_query.to_lowercase();
        account.full_name.to_lowercase().contains(&needle)
            || account.email.to_lowercase().contains(&needle)
    }
}

/// Keeps the accounts matching every criterion, in their original order.
pub fn filter_accounts(accounts: &[Account], filter: &AccountFilter) -> Vec<Account> {
    accounts
        .iter()
        .filter(|account| filter.matches(account))
        .cloned()
        .collect()
}

/// Returns rows `[page * size, page * size + size)` clipped to `items`.
///
/// Pages past the end and a zero page size give an empty slice.
pub fn paginate<T>(items: &[T], page: usize, size: usize) -> &[T] {
    let start = page.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` rows `size` at a time.
pub fn page_count(len: usize, size: usize) -> usize {
    if size == 0 { 0 } else { len.div_ceil(size) }
}

/// Page cursor shared by the dashboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Pager {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            page: 0,
            rows_per_page,
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changes the page size and goes back to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, self.rows_per_page)
    }

    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.rows_per_page)
    }
}
