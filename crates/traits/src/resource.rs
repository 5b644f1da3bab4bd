//! ResourceProvider trait for abstracting documentation lookups.
//!
//! This trait lets the catalog serve the mirrored documentation tree
//! without being tied to where the files actually live.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for resource lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The path resolves to neither a leaf nor a node.
    #[error("Resource '{0}' not found")]
    NotFound(String),

    /// The backing store could not be addressed at all.
    #[error("Resource '{path}' is unavailable: {message}")]
    Backend { path: String, message: String },

    /// The path contains segments the backend refuses to resolve.
    #[error("Invalid resource path: '{0}'")]
    InvalidPath(String),
}

impl ResourceError {
    pub fn not_found(path: impl Into<String>) -> Self {
        ResourceError::NotFound(path.into())
    }

    pub fn backend(path: impl Into<String>, message: impl Into<String>) -> Self {
        ResourceError::Backend {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for lookups that are genuinely absent rather than broken.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ResourceError::NotFound(_) | ResourceError::InvalidPath(_)
        )
    }

    /// Renders the error in the plain-text form returned by
    /// [`ResourceProvider::get_resource_content`].
    pub fn to_content_string(&self) -> String {
        match self {
            ResourceError::NotFound(path) | ResourceError::InvalidPath(path) => {
                format!("Error: Resource '{}' not found", path)
            }
            ResourceError::Backend { path, message } => {
                format!("Error: Resource '{}' not found - {}", path, message)
            }
        }
    }
}

/// The result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A leaf and its text content.
    File(String),
    /// A node and its sorted, deduplicated child names.
    Directory(Vec<String>),
}

impl Resource {
    pub fn is_file(&self) -> bool {
        matches!(self, Resource::File(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Resource::Directory(_))
    }

    /// Renders the resource as text.
    ///
    /// Files render as their content. Directories render as
    /// `"Directory: {path}\nContents: a, b, c"`.
    pub fn into_content(self, path: &str) -> String {
        match self {
            Resource::File(content) => content,
            Resource::Directory(children) => {
                format!("Directory: {}\nContents: {}", path, children.join(", "))
            }
        }
    }
}

/// A trait for looking up resources in a virtual `package/module/file` hierarchy.
///
/// Every operation is total over its input: any string is a valid path, and
/// empty or separator-only paths address the root.
///
/// # Implementations
///
/// - `StoreResourceProvider`: Reads from a packaged, read-only resource store
/// - `InMemoryResourceProvider`: Reads from a fixed path-to-content map
///
/// # Example
///
/// ```ignore
/// let provider: Box<dyn ResourceProvider> = Box::new(InMemoryResourceProvider::new([
///     ("constructs/aws-cdk-lib/aws-s3/README.md", "# AWS S3"),
/// ]));
/// assert_eq!(provider.list_resources("constructs/aws-cdk-lib"), vec!["aws-s3"]);
/// ```
pub trait ResourceProvider: Send + Sync + Debug {
    /// Resolve a path to a file or a directory.
    ///
    /// A path that is both a literal file and the prefix of other entries
    /// resolves to the file.
    fn resolve(&self, path: &str) -> Result<Resource, ResourceError>;

    /// List the immediate children of `path`, sorted.
    ///
    /// Returns an empty vector for missing paths and for leaves; use
    /// [`resource_exists`](Self::resource_exists) to tell those apart.
    fn list_resources(&self, path: &str) -> Vec<String>;

    /// Check whether `path` is a leaf or a node with at least one descendant.
    fn resource_exists(&self, path: &str) -> bool;

    /// Returns the resource rendered as text, or an `"Error: ..."` string.
    fn get_resource_content(&self, path: &str) -> String {
        match self.resolve(path) {
            Ok(resource) => resource.into_content(path),
            Err(err) => err.to_content_string(),
        }
    }

    /// Check whether `path` would resolve to a directory.
    fn is_directory(&self, path: &str) -> bool {
        matches!(self.resolve(path), Ok(Resource::Directory(_)))
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for Box<T> {
    fn resolve(&self, path: &str) -> Result<Resource, ResourceError> {
        (**self).resolve(path)
    }

    fn list_resources(&self, path: &str) -> Vec<String> {
        (**self).list_resources(path)
    }

    fn resource_exists(&self, path: &str) -> bool {
        (**self).resource_exists(path)
    }

    fn get_resource_content(&self, path: &str) -> String {
        (**self).get_resource_content(path)
    }

    fn is_directory(&self, path: &str) -> bool {
        (**self).is_directory(path)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for Arc<T> {
    fn resolve(&self, path: &str) -> Result<Resource, ResourceError> {
        (**self).resolve(path)
    }

    fn list_resources(&self, path: &str) -> Vec<String> {
        (**self).list_resources(path)
    }

    fn resource_exists(&self, path: &str) -> bool {
        (**self).resource_exists(path)
    }

    fn get_resource_content(&self, path: &str) -> String {
        (**self).get_resource_content(path)
    }

    fn is_directory(&self, path: &str) -> bool {
        (**self).is_directory(path)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::NotFound("constructs/x".to_string());
        assert_eq!(err.to_string(), "Resource 'constructs/x' not found");

        let err = ResourceError::backend("constructs", "store root missing");
        assert!(err.to_string().contains("constructs"));
        assert!(err.to_string().contains("store root missing"));

        let err = ResourceError::InvalidPath("../etc".to_string());
        assert!(err.to_string().contains("../etc"));
    }

    #[test]
    fn test_content_string_for_not_found() {
        let err = ResourceError::not_found("constructs/aws-cdk-lib/non-existent/README.md");
        assert_eq!(
            err.to_content_string(),
            "Error: Resource 'constructs/aws-cdk-lib/non-existent/README.md' not found"
        );
        assert!(ResourceError::InvalidPath("a/../b".into())
            .to_content_string()
            .contains("not found"));
    }

    #[test]
    fn test_content_string_for_backend_carries_diagnostic() {
        let err = ResourceError::backend("constructs", "permission denied");
        let text = err.to_content_string();
        assert!(text.starts_with("Error: Resource 'constructs' not found"));
        assert!(text.ends_with("- permission denied"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ResourceError::not_found("a").is_not_found());
        assert!(ResourceError::InvalidPath("..".into()).is_not_found());
        assert!(!ResourceError::backend("a", "io").is_not_found());
    }

    #[test]
    fn test_directory_renders_listing() {
        let dir = Resource::Directory(vec!["README.md".into(), "index.md".into()]);
        assert!(dir.is_directory());
        assert_eq!(
            dir.into_content("constructs/aws-cdk-lib/aws-s3"),
            "Directory: constructs/aws-cdk-lib/aws-s3\nContents: README.md, index.md"
        );
    }

    #[test]
    fn test_file_renders_content() {
        let file = Resource::File("# AWS S3".into());
        assert!(file.is_file());
        assert_eq!(file.into_content("ignored"), "# AWS S3");
    }
}
