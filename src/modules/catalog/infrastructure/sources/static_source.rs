use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::modules::catalog::application::ports::FeedSource;
use crate::modules::catalog::infrastructure::external::itunes::RawFeedDocument;
use crate::shared::errors::{AppError, AppResult};

enum Origin {
    Inline(String),
    File(PathBuf),
}

/// Feed source backed by a JSON document on disk or in memory
///
/// Offline mode for the CLI and a deterministic source for tests. The
/// document is re-read and re-parsed on every fetch.
pub struct StaticFeedSource {
    origin: Origin,
}

impl StaticFeedSource {
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline(json.into()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
        }
    }

    async fn read(&self) -> AppResult<String> {
        match &self.origin {
            Origin::Inline(json) => Ok(json.clone()),
            Origin::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                AppError::NotFound(format!("Failed to read feed file {}: {}", path.display(), e))
            }),
        }
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn name(&self) -> &'static str {
        match self.origin {
            Origin::Inline(_) => "inline",
            Origin::File(_) => "file",
        }
    }

    async fn fetch(&self) -> AppResult<RawFeedDocument> {
        let text = self.read().await?;
        Ok(RawFeedDocument::from_json(&text)?)
    }
}
