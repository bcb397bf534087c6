//! File-based user state repository
//!
//! This module provides a file-based implementation of the UserStatePort,
//! persisting the user record to a local JSON file in the application data directory.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uf_core::ports::UserStatePort;
use uf_core::user::UserState;

pub const DEFAULT_USER_STATE_FILE: &str = "user_state.json";

pub struct FileUserStateRepository {
    state_file_path: PathBuf,
}

impl FileUserStateRepository {
    /// Create repository with custom file path
    pub fn new(state_file_path: PathBuf) -> Self {
        Self { state_file_path }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            state_file_path: base_dir.join(DEFAULT_USER_STATE_FILE),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.state_file_path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.state_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl UserStatePort for FileUserStateRepository {
    async fn get_state(&self) -> anyhow::Result<UserState> {
        if !fs::try_exists(&self.state_file_path).await? {
            return Ok(UserState::default());
        }

        let content = fs::read_to_string(&self.state_file_path).await?;

        if content.trim().is_empty() {
            return Ok(UserState::default());
        }

        let state: UserState = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse user state: {e}"))?;

        Ok(state)
    }

    async fn set_state(&self, state: &UserState) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(state)
            .map_err(|e| anyhow::anyhow!("Failed to serialize user state: {e}"))?;

        // Write to a sibling file and rename so a crash never leaves half a record.
        let tmp_path = self.state_file_path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create state file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write state file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync state file: {e}"))?;

        fs::rename(&tmp_path, &self.state_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to replace state file: {e}"))?;

        debug!(path = %self.state_file_path.display(), "user state saved");
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        if fs::try_exists(&self.state_file_path).await? {
            fs::remove_file(&self.state_file_path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uf_core::credential::{Credential, CredentialParams};

    fn credential(password: &str) -> Credential {
        Credential::derive(
            password,
            CredentialParams {
                m_cost: 256,
                t_cost: 1,
                p_cost: 1,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_state_returns_default_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileUserStateRepository::new(temp_dir.path().join("nonexistent.json"));

        let state = repo.get_state().await.unwrap();

        assert!(!state.is_registered());
        assert!(!state.is_logged_in());
    }

    #[tokio::test]
    async fn test_set_state_and_get_state() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileUserStateRepository::new(temp_dir.path().join("state.json"));

        let mut original = UserState::default();
        original.register("alice", credential("secret"));

        repo.set_state(&original).await.unwrap();
        let retrieved = repo.get_state().await.unwrap();

        assert_eq!(retrieved, original);
        let params = CredentialParams {
            m_cost: 256,
            t_cost: 1,
            p_cost: 1,
        };
        assert!(retrieved
            .credential()
            .unwrap()
            .verify("secret", params)
            .unwrap());
    }

    #[tokio::test]
    async fn test_stored_file_does_not_contain_password() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let repo = FileUserStateRepository::new(path.clone());

        let mut state = UserState::default();
        state.register("alice", credential("plaintext-password"));
        repo.set_state(&state).await.unwrap();

        let content = fs::read_to_string(&path).await.unwrap();
        assert!(content.contains("alice"));
        assert!(!content.contains("plaintext-password"));
    }

    #[tokio::test]
    async fn test_reset_deletes_state_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileUserStateRepository::new(temp_dir.path().join("state.json"));

        let mut state = UserState::default();
        state.register("alice", credential("secret"));
        repo.set_state(&state).await.unwrap();
        assert!(repo.get_state().await.unwrap().is_registered());

        repo.reset().await.unwrap();

        assert!(!repo.get_state().await.unwrap().is_registered());
        // Resetting twice is fine.
        repo.reset().await.unwrap();
    }

    #[tokio::test]
    async fn test_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileUserStateRepository::with_defaults(temp_dir.path().to_path_buf());

        let expected_path = temp_dir.path().join(DEFAULT_USER_STATE_FILE);
        assert_eq!(repo.path(), &expected_path);
    }

    #[tokio::test]
    async fn test_set_state_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let repo =
            FileUserStateRepository::new(temp_dir.path().join("nested/dir/state.json"));

        repo.set_state(&UserState::default()).await.unwrap();

        assert!(repo.path().exists());
    }

    #[tokio::test]
    async fn test_empty_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let state_file = temp_dir.path().join("empty.json");

        fs::write(&state_file, "").await.unwrap();

        let repo = FileUserStateRepository::new(state_file);
        let state = repo.get_state().await.unwrap();

        assert_eq!(state, UserState::default());
    }

    #[tokio::test]
    async fn test_invalid_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let state_file = temp_dir.path().join("invalid.json");

        fs::write(&state_file, "{invalid json").await.unwrap();

        let repo = FileUserStateRepository::new(state_file);
        let result = repo.get_state().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
