//! Resource service implementation.
//!
//! The server exposes no static resources, only parameterized templates.
//! Templates are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, render_uri};

/// Service for listing and reading resources.
pub struct ResourceService {
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService with every registered template.
    pub fn new() -> Self {
        info!("Initializing ResourceService");
        let templates = get_all_resource_templates();
        debug!("Registered {} resource templates", templates.len());
        Self { templates }
    }

    /// List all concrete resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        Vec::new()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let rendered = render_uri(uri)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(rendered.mime_type.to_string()),
                text: rendered.text,
                meta: None,
            }],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new();
        assert!(service.list_resources().await.is_empty());
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_greeting() {
        let service = ResourceService::new();
        let result = service.read_resource("greeting://Ada").await.unwrap();

        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                ..
            } => {
                assert_eq!(uri, "greeting://Ada");
                assert_eq!(mime_type.as_deref(), Some("text/plain"));
                assert_eq!(text, "Hello, Ada!");
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new();
        let result = service.read_resource("mcp://server/nonexistent").await;
        assert!(result.is_err());
    }
}
