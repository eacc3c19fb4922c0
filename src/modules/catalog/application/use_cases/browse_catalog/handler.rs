use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::service::StorefrontService;
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::{query::BrowseCatalogQuery, result::BrowseCatalogResult};

/// Query handler for browsing the catalog
pub struct BrowseCatalogHandler {
    service: Arc<StorefrontService>,
}

impl BrowseCatalogHandler {
    pub fn new(service: Arc<StorefrontService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Query<BrowseCatalogQuery, BrowseCatalogResult> for BrowseCatalogHandler {
    async fn execute(&self, query: BrowseCatalogQuery) -> AppResult<BrowseCatalogResult> {
        self.service.browse(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::{services::ItemPipeline, value_objects::SortScheme};
    use crate::modules::catalog::infrastructure::sources::StaticFeedSource;

    const FEED: &str = r#"{"feed":{"entry":[
        {"im:name":{"label":"SOUR"},"im:artist":{"label":"Olivia Rodrigo"},
         "category":{"attributes":{"label":"Pop"}},
         "im:image":[{"label":"https://example.com/55.png","attributes":{"height":"55"}},
                     {"label":"https://example.com/170.png","attributes":{"height":"170"}}],
         "im:price":{"attributes":{"amount":"10.99000","currency":"USD"}},
         "id":{"attributes":{"im:id":"1560735414"}}}
    ]}}"#;

    #[tokio::test]
    async fn test_execute_delegates_to_service() {
        let service = Arc::new(StorefrontService::new(
            Arc::new(StaticFeedSource::from_json(FEED)),
            ItemPipeline::default(),
        ));
        service.refresh().await.unwrap();

        let handler = BrowseCatalogHandler::new(service);
        let result = handler
            .execute(BrowseCatalogQuery::new("rodrigo", SortScheme::PRICE_DESCENDING))
            .await
            .unwrap();

        assert_eq!(result.visible_count, 1);
        assert_eq!(result.items[0].image_url, "https://example.com/170.png");
        assert_eq!(result.sort, SortScheme::PRICE_DESCENDING);
    }
}
