//! Wiring of stores, clients and use cases for one command invocation.

use learnx_application::{AccountsUseCase, PermissionsUseCase, ProfileUseCase, SessionGuard};
use learnx_core::config::AdminConfig;
use learnx_core::error::Result;
use learnx_core::session::SessionStore;
use learnx_infrastructure::{ConfigService, FileSessionStore, LearnxPaths};
use learnx_interaction::{
    AccountsApi, HttpClient, PasswordAuthClient, PrivateHttpClient, RoleRequestsApi,
};
use std::sync::Arc;

pub struct App {
    pub config_service: ConfigService,
    store: Arc<dyn SessionStore>,
}

impl App {
    pub fn new(paths: &LearnxPaths) -> Self {
        Self {
            config_service: ConfigService::new(paths.clone()),
            store: Arc::new(FileSessionStore::new(paths)),
        }
    }

    pub fn config(&self) -> Result<AdminConfig> {
        self.config_service.get_config()
    }

    fn http(&self) -> Result<HttpClient> {
        let http = HttpClient::new(&self.config()?.api)?;
        tracing::debug!("API base URL {}", http.base_url());
        Ok(http)
    }

    fn private_http(&self) -> Result<PrivateHttpClient> {
        Ok(PrivateHttpClient::new(self.http()?, self.store.clone()))
    }

    pub fn auth(&self) -> Result<PasswordAuthClient> {
        Ok(PasswordAuthClient::new(self.http()?, self.store.clone()))
    }

    pub fn guard(&self) -> SessionGuard {
        SessionGuard::new(self.store.clone())
    }

    pub fn accounts(&self) -> Result<AccountsUseCase> {
        let rows = self.config()?.accounts.rows_per_page;
        let api = AccountsApi::new(self.private_http()?);
        Ok(AccountsUseCase::with_rows_per_page(Arc::new(api), rows))
    }

    pub fn permissions(&self) -> Result<PermissionsUseCase> {
        let rows = self.config()?.permissions.rows_per_page;
        let api = RoleRequestsApi::new(self.private_http()?);
        Ok(PermissionsUseCase::with_rows_per_page(Arc::new(api), rows))
    }

    pub fn profile(&self) -> ProfileUseCase {
        ProfileUseCase::new(self.store.clone())
    }
}
