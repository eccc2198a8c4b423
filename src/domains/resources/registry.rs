//! Resource Registry - central registration and lookup of resources.

use rmcp::model::{ReadResourceResult, Resource};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::definitions::ProductListResource;
use super::error::ResourceError;
use super::handlers::ResourceHandler;
use crate::core::CallContext;
use crate::store::ProductStore;

/// Registry of readable resources, keyed by URI.
///
/// URIs are unique: registering one twice fails instead of replacing the
/// earlier handler.
#[derive(Default)]
pub struct ResourceRegistry {
    resources: BTreeMap<String, Arc<dyn ResourceHandler>>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in resource.
    pub fn with_store(store: Arc<ProductStore>) -> Result<Self, ResourceError> {
        let mut registry = Self::new();
        registry.register(Arc::new(ProductListResource::new(store)))?;
        Ok(registry)
    }

    /// Register a resource under the URI in its metadata.
    pub fn register(&mut self, handler: Arc<dyn ResourceHandler>) -> Result<(), ResourceError> {
        let uri = handler.resource().raw.uri.clone();
        if self.resources.contains_key(&uri) {
            return Err(ResourceError::DuplicateUri(uri));
        }
        info!("Registering resource: {}", uri);
        self.resources.insert(uri, handler);
        Ok(())
    }

    /// Get the list of all resource URIs, sorted.
    pub fn resource_uris(&self) -> Vec<&str> {
        self.resources.keys().map(String::as_str).collect()
    }

    /// List all available resources.
    pub fn resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|handler| handler.resource())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read(
        &self,
        uri: &str,
        ctx: &CallContext,
    ) -> Result<ReadResourceResult, ResourceError> {
        let Some(handler) = self.resources.get(uri) else {
            warn!("Unknown resource requested: {}", uri);
            return Err(ResourceError::not_found(uri));
        };
        let contents = handler.read(ctx, uri).await?;
        Ok(ReadResourceResult { contents })
    }
}
