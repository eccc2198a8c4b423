//! Resource handler abstraction.

use async_trait::async_trait;
use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};

use super::error::ResourceError;
use crate::core::CallContext;

/// Static description of a resource.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Build the rmcp metadata for this resource.
    fn to_resource() -> Resource {
        let mut raw = RawResource::new(Self::URI, Self::NAME);
        raw.description = Some(Self::DESCRIPTION.to_string());
        raw.mime_type = Some(Self::MIME_TYPE.to_string());
        raw.no_annotation()
    }
}

/// A readable resource.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// Metadata of this resource; its URI is the registry key.
    fn resource(&self) -> Resource;

    /// Read the content of the resource.
    async fn read(
        &self,
        ctx: &CallContext,
        uri: &str,
    ) -> Result<Vec<ResourceContents>, ResourceError>;
}
