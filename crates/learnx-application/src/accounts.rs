//! Accounts page use case.
//!
//! Holds the full user list fetched from the API, the filtered view of it,
//! and the page cursor over the filtered view.

use learnx_core::account::{Account, AccountSource};
use learnx_core::error::Result;
use learnx_core::listing::{AccountFilter, Pager, ROWS_PER_PAGE_OPTIONS, filter_accounts};
use std::sync::Arc;

/// Rows shown per page until the user picks another size.
pub const DEFAULT_ACCOUNT_ROWS: usize = ROWS_PER_PAGE_OPTIONS[0];

pub struct AccountsUseCase {
    source: Arc<dyn AccountSource>,
    accounts: Vec<Account>,
    filtered: Vec<Account>,
    filter: AccountFilter,
    pager: Pager,
}

impl AccountsUseCase {
    pub fn new(source: Arc<dyn AccountSource>) -> Self {
        Self::with_rows_per_page(source, DEFAULT_ACCOUNT_ROWS)
    }

    pub fn with_rows_per_page(source: Arc<dyn AccountSource>, rows_per_page: usize) -> Self {
        Self {
            source,
            accounts: Vec::new(),
            filtered: Vec::new(),
            filter: AccountFilter::default(),
            pager: Pager::new(rows_per_page),
        }
    }

    /// Fetches the user directory and projects it into table rows.
    ///
    /// The current filter is re-applied to the fresh list. On failure the
    /// previous lists are kept. Returns the number of accounts loaded.
    pub async fn load(&mut self) -> Result<usize> {
        let users = match self.source.list_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to load accounts: {}", e);
                return Err(e);
            }
        };

        self.accounts = users.into_iter().map(Account::from).collect();
        self.filtered = filter_accounts(&self.accounts, &self.filter);
        tracing::debug!(
            "Loaded {} accounts, {} match the current filter",
            self.accounts.len(),
            self.filtered.len()
        );
        Ok(self.accounts.len())
    }

    /// Replaces the filter, recomputes the filtered list from the full list
    /// and returns to the first page.
    pub fn apply_filter(&mut self, filter: AccountFilter) {
        self.filtered = filter_accounts(&self.accounts, &filter);
        self.filter = filter;
        self.pager.reset();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.pager.set_rows_per_page(rows_per_page);
    }

    /// Rows of the current page.
    pub fn visible(&self) -> &[Account] {
        self.pager.slice(&self.filtered)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn filtered(&self) -> &[Account] {
        &self.filtered
    }

    pub fn filter(&self) -> &AccountFilter {
        &self.filter
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.filtered.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use learnx_core::AdminError;
    use learnx_core::account::{AccountStatus, RawUser};
    use learnx_core::date::ApiDateTime;
    use learnx_core::listing::{RoleFilter, StatusFilter};
    use learnx_core::user::Role;
    use std::sync::Mutex;

    /// Serves queued responses, one per call.
    struct QueuedSource {
        responses: Mutex<Vec<Result<Vec<RawUser>>>>,
    }

    impl QueuedSource {
        fn new(mut responses: Vec<Result<Vec<RawUser>>>) -> Arc<Self> {
            responses.reverse();
            Arc::new(Self {
                responses: Mutex::new(responses),
            })
        }
    }

    #[async_trait]
    impl AccountSource for QueuedSource {
        async fn list_users(&self) -> Result<Vec<RawUser>> {
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn raw(id: i64, name: &str, email: &str, role: &str, enabled: bool) -> RawUser {
        RawUser {
            id,
            full_name: name.to_string(),
            email: email.to_string(),
            avatar_url: None,
            role: role.to_string(),
            created_at: ApiDateTime::default(),
            updated_at: None,
            username: Some(email.to_string()),
            enabled,
            authorities: Vec::new(),
            account_non_expired: true,
            account_non_locked: true,
            credentials_non_expired: true,
        }
    }

    fn anna_and_bob() -> Vec<RawUser> {
        vec![
            raw(1, "Anna Lee", "anna@x.com", "STUDENT", true),
            raw(2, "Bob Tran", "bob@x.com", "TEACHER", true),
        ]
    }

    #[tokio::test]
    async fn load_projects_users_into_rows() {
        let mut page = AccountsUseCase::new(QueuedSource::new(vec![Ok(anna_and_bob())]));
        assert_eq!(page.load().await.unwrap(), 2);

        assert_eq!(page.accounts()[0].id, "1");
        assert_eq!(page.accounts()[0].role, "Sinh viên");
        assert_eq!(page.accounts()[1].role, "Giảng viên");
        assert_eq!(page.filtered().len(), 2);
        assert_eq!(page.pager().rows_per_page, 5);
    }

    #[tokio::test]
    async fn search_role_and_paging_scenario() {
        let mut page = AccountsUseCase::new(QueuedSource::new(vec![Ok(anna_and_bob())]));
        page.load().await.unwrap();

        page.apply_filter(AccountFilter::search("anna"));
        let names: Vec<&str> = page.visible().iter().map(|a| a.full_name.as_str()).collect();
        assert_eq!(names, vec!["Anna Lee"]);

        page.apply_filter(AccountFilter::role(Role::Teacher));
        let names: Vec<&str> = page.visible().iter().map(|a| a.full_name.as_str()).collect();
        assert_eq!(names, vec!["Bob Tran"]);

        page.apply_filter(AccountFilter::default());
        page.set_rows_per_page(1);
        assert_eq!(page.visible()[0].full_name, "Anna Lee");
        page.set_page(1);
        assert_eq!(page.visible()[0].full_name, "Bob Tran");
        assert_eq!(page.page_count(), 2);
    }

    #[tokio::test]
    async fn filtering_and_resizing_reset_the_page() {
        let mut page = AccountsUseCase::new(QueuedSource::new(vec![Ok(anna_and_bob())]));
        page.load().await.unwrap();
        page.set_rows_per_page(1);
        page.set_page(1);

        page.apply_filter(AccountFilter::new("", RoleFilter::All, StatusFilter::All));
        assert_eq!(page.pager().page, 0);

        page.set_page(1);
        page.set_rows_per_page(10);
        assert_eq!(page.pager().page, 0);
    }

    #[tokio::test]
    async fn status_filter_uses_derived_status() {
        let users = vec![
            raw(1, "Anna Lee", "anna@x.com", "STUDENT", true),
            raw(2, "Cara Vo", "cara@x.com", "STUDENT", false),
        ];
        let mut page = AccountsUseCase::new(QueuedSource::new(vec![Ok(users)]));
        page.load().await.unwrap();

        page.apply_filter(AccountFilter::new(
            "",
            RoleFilter::All,
            StatusFilter::Only(AccountStatus::Pending),
        ));
        assert_eq!(page.visible().len(), 1);
        assert_eq!(page.visible()[0].full_name, "Cara Vo");
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_rows() {
        let mut page = AccountsUseCase::new(QueuedSource::new(vec![
            Ok(anna_and_bob()),
            Err(AdminError::transport("connection reset")),
        ]));
        page.load().await.unwrap();
        page.apply_filter(AccountFilter::search("bob"));

        let err = page.load().await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(page.accounts().len(), 2);
        assert_eq!(page.filtered().len(), 1);
    }

    #[tokio::test]
    async fn reload_reapplies_the_current_filter() {
        let mut page = AccountsUseCase::new(QueuedSource::new(vec![
            Ok(anna_and_bob()),
            Ok(anna_and_bob()),
        ]));
        page.load().await.unwrap();
        page.apply_filter(AccountFilter::search("BOB"));
        page.load().await.unwrap();
        assert_eq!(page.filtered().len(), 1);
    }
}
