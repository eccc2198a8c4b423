//! Product list resource.
//!
//! Serves every product in the store as a pretty-printed JSON array.

use async_trait::async_trait;
use rmcp::model::{Resource, ResourceContents};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::CallContext;
use crate::domains::resources::{ResourceDefinition, ResourceError, ResourceHandler};
use crate::store::{Product, ProductStore};

/// Product list resource (dynamic, backed by the product store).
pub struct ProductListResource {
    store: Arc<ProductStore>,
}

impl ResourceDefinition for ProductListResource {
    const URI: &'static str = "products://list";
    const NAME: &'static str = "Product List";
    const DESCRIPTION: &'static str = "Lists all available products";
    const MIME_TYPE: &'static str = "application/json";
}

impl ProductListResource {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self { store }
    }

    /// Render products as a JSON array with two-space indentation.
    pub fn render(products: &[Product]) -> Result<String, ResourceError> {
        Ok(serde_json::to_string_pretty(products)?)
    }
}

#[async_trait]
impl ResourceHandler for ProductListResource {
    fn resource(&self) -> Resource {
        Self::to_resource()
    }

    #[instrument(skip_all, fields(uri = %uri))]
    async fn read(
        &self,
        ctx: &CallContext,
        uri: &str,
    ) -> Result<Vec<ResourceContents>, ResourceError> {
        let store = self.store.clone();
        let ct = ctx.cancellation().clone();
        let products = tokio::task::spawn_blocking(move || store.list_all(&ct))
            .await
            .map_err(|e| ResourceError::internal(format!("Task failed: {}", e)))??;

        info!("Listing {} products", products.len());

        Ok(vec![ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some(Self::MIME_TYPE.to_string()),
            text: Self::render(&products)?,
            meta: None,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tokio_util::sync::CancellationToken;

    fn seeded_store() -> Arc<ProductStore> {
        let store = ProductStore::open_in_memory().unwrap();
        store.seed_if_empty().unwrap();
        Arc::new(store)
    }

    fn text_of(contents: &ResourceContents) -> (&str, Option<&str>, &str) {
        match contents {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                ..
            } => (uri.as_str(), mime_type.as_deref(), text.as_str()),
            _ => panic!("Expected text contents"),
        }
    }

    #[test]
    fn test_product_list_metadata() {
        assert_eq!(ProductListResource::URI, "products://list");
        assert_eq!(ProductListResource::MIME_TYPE, "application/json");
        let resource = ProductListResource::to_resource();
        assert_eq!(resource.raw.name, "Product List");
    }

    #[tokio::test]
    async fn test_read_lists_seeded_products() {
        let resource = ProductListResource::new(seeded_store());
        let contents = resource
            .read(&CallContext::default(), ProductListResource::URI)
            .await
            .unwrap();
        assert_eq!(contents.len(), 1);

        let (uri, mime_type, text) = text_of(&contents[0]);
        assert_eq!(uri, "products://list");
        assert_eq!(mime_type, Some("application/json"));

        let parsed: Value = serde_json::from_str(text).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Code"], "D42");
        assert_eq!(rows[0]["Price"], 100.0);
        assert_eq!(rows[1]["Code"], "P99");
        assert_eq!(rows[1]["Price"], 200.0);

        let mut keys: Vec<_> = rows[0].as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["Code", "CreatedAt", "DeletedAt", "ID", "Price", "UpdatedAt"]
        );
        assert!(rows[0]["DeletedAt"].is_null());
        assert!(rows[0]["ID"].as_i64().unwrap() < rows[1]["ID"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn test_read_uses_two_space_indent() {
        let store = seeded_store();
        let resource = ProductListResource::new(store.clone());
        let contents = resource
            .read(&CallContext::default(), ProductListResource::URI)
            .await
            .unwrap();
        let (_, _, text) = text_of(&contents[0]);

        assert!(text.starts_with("[\n  {\n    \"ID\": "));
        let products = store.list_all(&CancellationToken::new()).unwrap();
        assert_eq!(text, ProductListResource::render(&products).unwrap());
    }

    #[tokio::test]
    async fn test_read_empty_store() {
        let store = Arc::new(ProductStore::open_in_memory().unwrap());
        let resource = ProductListResource::new(store);
        let contents = resource
            .read(&CallContext::default(), ProductListResource::URI)
            .await
            .unwrap();
        let (_, _, text) = text_of(&contents[0]);
        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_read_cancelled_is_retrieval_error() {
        let resource = ProductListResource::new(seeded_store());
        let ct = CancellationToken::new();
        ct.cancel();
        let result = resource
            .read(&CallContext::new(ct), ProductListResource::URI)
            .await;
        assert!(matches!(result, Err(ResourceError::Retrieval(_))));
    }
}
