use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use super::ports::FeedSource;
use super::use_cases::browse_catalog::{BrowseCatalogQuery, BrowseCatalogResult};
use crate::modules::catalog::domain::{
    entities::CatalogItem,
    services::{ItemPipeline, SearchFilter},
};
use crate::modules::catalog::infrastructure::external::itunes::normalize;
use crate::shared::{
    config::StorefrontConfig,
    errors::{AppError, AppResult},
    utils::{LogContext, TimedOperation},
};

/// One successfully normalized fetch
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub items: Vec<CatalogItem>,
    pub fetched_at: DateTime<Utc>,
    pub source: &'static str,
}

/// Where the catalog is in its fetch lifecycle
#[derive(Debug, Clone)]
pub enum LoadState {
    Idle,
    Loading,
    Ready(Arc<FeedSnapshot>),
    Failed(String),
}

/// Serializable summary of `LoadState` for a UI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready {
        count: usize,
        fetched_at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

impl From<&LoadState> for LoadStatus {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Idle => LoadStatus::Idle,
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Ready(snapshot) => LoadStatus::Ready {
                count: snapshot.items.len(),
                fetched_at: snapshot.fetched_at,
            },
            LoadState::Failed(message) => LoadStatus::Failed {
                message: message.clone(),
            },
        }
    }
}

/// Owns the fetched catalog and runs the item pipeline over it
///
/// A refresh replaces the snapshot wholesale; a failed refresh leaves no
/// snapshot behind, so the UI shows the error instead of stale data.
pub struct StorefrontService {
    source: Arc<dyn FeedSource>,
    pipeline: ItemPipeline,
    state: RwLock<LoadState>,
}

impl StorefrontService {
    pub fn new(source: Arc<dyn FeedSource>, pipeline: ItemPipeline) -> Self {
        Self {
            source,
            pipeline,
            state: RwLock::new(LoadState::Idle),
        }
    }

    /// Build a service searching the configured fields
    pub fn from_config(source: Arc<dyn FeedSource>, config: &StorefrontConfig) -> AppResult<Self> {
        let filter = SearchFilter::new(&config.search_fields)?;
        Ok(Self::new(source, ItemPipeline::new(filter)))
    }

    /// Fetch and normalize the feed, replacing the current snapshot.
    /// Returns the number of items loaded.
    pub async fn refresh(&self) -> AppResult<usize> {
        self.begin_loading().await;
        let timer = TimedOperation::new("catalog refresh");
        let result = self.load().await;
        self.finish(result, timer).await
    }

    /// Like `refresh`, but gives up when `token` fires. The state from
    /// before the call is restored on cancellation.
    pub async fn refresh_cancellable(&self, token: CancellationToken) -> AppResult<usize> {
        let previous = self.begin_loading().await;
        let timer = TimedOperation::new("catalog refresh");

        tokio::select! {
            result = self.load() => self.finish(result, timer).await,
            _ = token.cancelled() => {
                *self.state.write().await = previous;
                log::info!("Catalog refresh from '{}' cancelled", self.source.name());
                Err(AppError::Cancelled("catalog refresh".to_string()))
            }
        }
    }

    pub async fn state(&self) -> LoadState {
        self.state.read().await.clone()
    }

    pub async fn status(&self) -> LoadStatus {
        LoadStatus::from(&*self.state.read().await)
    }

    /// The current snapshot, if a refresh has succeeded
    pub async fn snapshot(&self) -> Option<Arc<FeedSnapshot>> {
        match &*self.state.read().await {
            LoadState::Ready(snapshot) => Some(Arc::clone(snapshot)),
            _ => None,
        }
    }

    /// Run search + sort over the current snapshot
    pub async fn browse(&self, query: &BrowseCatalogQuery) -> AppResult<BrowseCatalogResult> {
        let snapshot = match &*self.state.read().await {
            LoadState::Ready(snapshot) => Arc::clone(snapshot),
            LoadState::Idle => {
                return Err(AppError::NotReady("catalog has not been loaded".to_string()))
            }
            LoadState::Loading => {
                return Err(AppError::NotReady("catalog is still loading".to_string()))
            }
            LoadState::Failed(message) => {
                return Err(AppError::NotReady(format!("last refresh failed: {}", message)))
            }
        };

        let view = self
            .pipeline
            .run(&snapshot.items, &query.search_term, query.sort);

        Ok(BrowseCatalogResult {
            total_count: view.total_count,
            visible_count: view.visible_count(),
            items: view.into_owned(),
            search_term: query.search_term.clone(),
            sort: query.sort,
            fetched_at: snapshot.fetched_at,
        })
    }

    async fn begin_loading(&self) -> LoadState {
        let mut state = self.state.write().await;
        std::mem::replace(&mut *state, LoadState::Loading)
    }

    async fn load(&self) -> AppResult<FeedSnapshot> {
        let document = self.source.fetch().await?;
        let items = normalize(&document)?;
        Ok(FeedSnapshot {
            items,
            fetched_at: Utc::now(),
            source: self.source.name(),
        })
    }

    async fn finish(&self, result: AppResult<FeedSnapshot>, timer: TimedOperation) -> AppResult<usize> {
        let mut state = self.state.write().await;
        match result {
            Ok(snapshot) => {
                let count = snapshot.items.len();
                timer.finish(&format!("{} items from {}", count, snapshot.source));
                *state = LoadState::Ready(Arc::new(snapshot));
                Ok(count)
            }
            Err(e) => {
                LogContext::refresh_failed(self.source.name(), &e);
                *state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
