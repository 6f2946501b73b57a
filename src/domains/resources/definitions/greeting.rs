//! Greeting resource template.

use super::ResourceTemplateDefinition;
use crate::domains::resources::error::ResourceError;

/// Personalised greeting: `greeting://{name}` renders `Hello, {name}!`.
pub struct GreetingResource;

impl ResourceTemplateDefinition for GreetingResource {
    const URI_TEMPLATE: &'static str = "greeting://{name}";
    const URI_PREFIX: &'static str = "greeting://";
    const NAME: &'static str = "greeting";
    const TITLE: &'static str = "Greeting";
    const DESCRIPTION: &'static str = "A personalised greeting for the given name";
    const MIME_TYPE: &'static str = "text/plain";

    fn render(name: &str) -> Result<String, ResourceError> {
        if name.is_empty() || name.contains('/') {
            return Err(ResourceError::invalid_uri(format!("{}{}", Self::URI_PREFIX, name)));
        }
        Ok(format!("Hello, {}!", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_render() {
        assert_eq!(GreetingResource::render("Ada").unwrap(), "Hello, Ada!");
        assert_eq!(GreetingResource::parameter("greeting://Ada"), Some("Ada"));
        assert_eq!(GreetingResource::parameter("toggl://Ada"), None);
    }

    #[test]
    fn test_greeting_rejects_empty_and_nested_names() {
        assert!(matches!(
            GreetingResource::render(""),
            Err(ResourceError::InvalidUri(_))
        ));
        assert!(GreetingResource::render("a/b").is_err());
    }
}
