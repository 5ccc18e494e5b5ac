//! File-backed session store.
//!
//! Tokens live in `session/cookies.json`, the profile lives in
//! `session/local_storage.json` under `logged_user` as a JSON string.

use crate::paths::LearnxPaths;
use crate::storage::KeyValueFile;
use async_trait::async_trait;
use learnx_core::error::Result;
use learnx_core::session::{
    ACCESS_TOKEN_KEY, LOGGED_USER_KEY, REFRESH_TOKEN_KEY, Session, SessionStore,
};
use learnx_core::user::UserProfile;

/// [`SessionStore`] persisted under the config directory.
///
/// Reads always hit the disk, so two processes sharing a config directory
/// see each other's sign-in and sign-out.
pub struct FileSessionStore {
    cookies: KeyValueFile,
    local_storage: KeyValueFile,
}

impl FileSessionStore {
    pub fn new(paths: &LearnxPaths) -> Self {
        Self {
            cookies: KeyValueFile::new(paths.cookies_file()),
            local_storage: KeyValueFile::new(paths.local_storage_file()),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn access_token(&self) -> Result<Option<String>> {
        self.cookies.get(ACCESS_TOKEN_KEY)
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        self.cookies.get(REFRESH_TOKEN_KEY)
    }

    async fn current_user(&self) -> Result<Option<UserProfile>> {
        match self.local_storage.get(LOGGED_USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> Result<()> {
        self.cookies.set_many(&[
            (ACCESS_TOKEN_KEY, session.access_token.as_str()),
            (REFRESH_TOKEN_KEY, session.refresh_token.as_str()),
        ])?;
        self.update_user(&session.user).await?;
        tracing::debug!("Session saved for {}", session.user.display_name());
        Ok(())
    }

    async fn update_user(&self, user: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.local_storage.set(LOGGED_USER_KEY, &raw)
    }

    /// Both files are always attempted; the first failure is returned.
    async fn clear(&self) -> Result<()> {
        let tokens = self.cookies.remove(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY]);
        let profile = self.local_storage.remove(&[LOGGED_USER_KEY]);
        tokens.and(profile)?;
        tracing::debug!("Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnx_core::AdminError;
    use tempfile::TempDir;

    fn admin() -> UserProfile {
        UserProfile::new("Ada Admin", "ada@x.com", "https://cdn/a.png", "ADMIN")
    }

    #[tokio::test]
    async fn session_survives_a_new_store_instance() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LearnxPaths::at(temp_dir.path());

        FileSessionStore::new(&paths)
            .save(&Session::new("at-1", "rt-1", admin()))
            .await
            .unwrap();

        let reopened = FileSessionStore::new(&paths);
        let session = reopened.load().await.unwrap().unwrap();
        assert_eq!(session.access_token, "at-1");
        assert_eq!(session.refresh_token, "rt-1");
        assert_eq!(session.user, admin());
    }

    #[tokio::test]
    async fn profile_is_stored_as_a_json_string() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LearnxPaths::at(temp_dir.path());
        FileSessionStore::new(&paths)
            .save(&Session::new("at", "rt", admin()))
            .await
            .unwrap();

        let raw = KeyValueFile::new(paths.local_storage_file())
            .get(LOGGED_USER_KEY)
            .unwrap()
            .unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded["fullName"], "Ada Admin");
        assert_eq!(decoded["role"], "ADMIN");
    }

    #[tokio::test]
    async fn writes_from_another_handle_are_seen_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LearnxPaths::at(temp_dir.path());
        let store = FileSessionStore::new(&paths);
        store.save(&Session::new("old", "rt", admin())).await.unwrap();

        KeyValueFile::new(paths.cookies_file())
            .set(ACCESS_TOKEN_KEY, "new")
            .unwrap();
        assert_eq!(store.access_token().await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn clear_removes_tokens_and_profile() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LearnxPaths::at(temp_dir.path());
        let store = FileSessionStore::new(&paths);
        store.clear().await.unwrap();

        store.save(&Session::new("at", "rt", admin())).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
        assert!(store.current_user().await.unwrap().is_none());
        assert!(!paths.cookies_file().exists());
    }

    #[tokio::test]
    async fn clear_succeeds_over_a_corrupt_cookie_jar() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LearnxPaths::at(temp_dir.path());
        let store = FileSessionStore::new(&paths);
        store.save(&Session::new("at", "rt", admin())).await.unwrap();
        std::fs::write(paths.cookies_file(), "{truncated").unwrap();

        store.clear().await.unwrap();

        assert!(store.current_user().await.unwrap().is_none());
        assert!(store.access_token().await.unwrap().is_none());
        assert!(!paths.cookies_file().exists());
    }

    #[tokio::test]
    async fn update_user_keeps_tokens() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(&LearnxPaths::at(temp_dir.path()));
        store.save(&Session::new("at", "rt", admin())).await.unwrap();

        let mut renamed = admin();
        renamed.full_name = Some("Ada Lovelace".to_string());
        store.update_user(&renamed).await.unwrap();

        let session = store.load().await.unwrap().unwrap();
        assert_eq!(session.access_token, "at");
        assert_eq!(session.user.full_name.as_deref(), Some("Ada Lovelace"));
    }

    #[tokio::test]
    async fn corrupt_profile_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LearnxPaths::at(temp_dir.path());
        KeyValueFile::new(paths.local_storage_file())
            .set(LOGGED_USER_KEY, "not json")
            .unwrap();

        let err = FileSessionStore::new(&paths)
            .current_user()
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Serialization { .. }));
    }
}
