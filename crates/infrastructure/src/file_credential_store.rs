use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use sitecrew_application::{CredentialStore, StoredCredentials};
use sitecrew_core::{AppError, AppResult};
use tracing::debug;

/// Credential storage backed by a JSON file on the local device.
///
/// Holds the access token, an optional refresh token and the serialized
/// user profile. Written at login, cleared at logout.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store over the given file path. The file need not exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> AppResult<Option<StoredCredentials>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(AppError::Internal(format!(
                    "failed to read credentials file '{}': {error}",
                    self.path.display()
                )));
            }
        };

        let credentials = serde_json::from_slice::<StoredCredentials>(&bytes).map_err(|error| {
            AppError::Decode(format!(
                "credentials file '{}' is corrupt: {error}",
                self.path.display()
            ))
        })?;

        Ok(Some(credentials))
    }

    async fn save(&self, credentials: &StoredCredentials) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|error| {
                AppError::Internal(format!(
                    "failed to create credentials directory '{}': {error}",
                    parent.display()
                ))
            })?;
        }

        let bytes = serde_json::to_vec_pretty(credentials)
            .map_err(|error| AppError::Internal(format!("failed to serialize credentials: {error}")))?;

        tokio::fs::write(&self.path, bytes).await.map_err(|error| {
            AppError::Internal(format!(
                "failed to write credentials file '{}': {error}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), "credentials persisted");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(AppError::Internal(format!(
                "failed to delete credentials file '{}': {error}",
                self.path.display()
            ))),
        }
    }
}
