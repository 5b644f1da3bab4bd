//! An in-memory resource provider.
//!
//! Resources are a flat map from full logical path to content. Directories
//! are never stored: the children of `P` are derived from the keys that
//! start with `P/`. The map is ordered, so a prefix scan is a range query
//! that stops at the first key outside the prefix.

use crate::path::{LogicalPath, SEPARATOR};
use crate::resource::{Resource, ResourceError, ResourceProvider};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// A resource provider backed by a fixed path-to-content map.
///
/// Keys are normalized the same way lookups are, so
/// `"/constructs/aws-cdk-lib/aws-s3/README.md"` and
/// `"constructs/aws-cdk-lib/aws-s3/README.md"` name the same entry. The map is
/// fixed once the provider is built; the `with_resource` builder consumes
/// `self`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryResourceProvider {
    resources: BTreeMap<String, String>,
}

impl InMemoryResourceProvider {
    /// Builds a provider from `(path, content)` pairs.
    ///
    /// A later pair with the same normalized path replaces an earlier one.
    pub fn new<I, K, V>(resources: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        resources.into_iter().collect()
    }

    /// Adds one resource while building the provider.
    pub fn with_resource(mut self, path: impl AsRef<str>, content: impl Into<String>) -> Self {
        self.insert(path.as_ref(), content.into());
        self
    }

    /// Get the number of leaf resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterates over every leaf path in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    fn insert(&mut self, raw: &str, content: String) {
        let path = LogicalPath::parse(raw);
        if path.is_root() {
            warn!("Ignoring resource with empty path '{}'", raw);
            return;
        }
        if path.has_traversal() {
            warn!("Ignoring resource with traversal segments '{}'", raw);
            return;
        }
        self.resources.insert(path.to_string(), content);
    }

    /// Immediate child names of `path`, deduplicated and sorted.
    fn children(&self, path: &LogicalPath) -> BTreeSet<&str> {
        let prefix = path.as_prefix();
        self.resources
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(&prefix))
            .filter_map(|(key, _)| key[prefix.len()..].split(SEPARATOR).next())
            .filter(|name| !name.is_empty())
            .collect()
    }

    fn has_children(&self, path: &LogicalPath) -> bool {
        let prefix = path.as_prefix();
        self.resources
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(&prefix))
            .any(|(key, _)| key.len() > prefix.len())
    }
}

/// Parses a lookup path. Traversal segments are invalid here as in every
/// other provider.
fn parse(path: &str) -> Result<LogicalPath, ResourceError> {
    let logical = LogicalPath::parse(path);
    if logical.has_traversal() {
        debug!("Rejected path with traversal segments: '{}'", path);
        return Err(ResourceError::InvalidPath(path.to_string()));
    }
    Ok(logical)
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for InMemoryResourceProvider {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut provider = Self::default();
        for (path, content) in iter {
            provider.insert(path.as_ref(), content.into());
        }
        provider
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn resolve(&self, path: &str) -> Result<Resource, ResourceError> {
        let logical = parse(path)?;

        if let Some(content) = self.resources.get(&logical.to_string()) {
            debug!("Resolved '{}' to an in-memory file", path);
            return Ok(Resource::File(content.clone()));
        }

        let children = self.children(&logical);
        if children.is_empty() {
            debug!("No in-memory resource at '{}'", path);
            return Err(ResourceError::not_found(path));
        }

        Ok(Resource::Directory(
            children.into_iter().map(str::to_string).collect(),
        ))
    }

    fn list_resources(&self, path: &str) -> Vec<String> {
        let Ok(logical) = parse(path) else {
            return Vec::new();
        };
        self.children(&logical)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn resource_exists(&self, path: &str) -> bool {
        let Ok(logical) = parse(path) else {
            return false;
        };
        self.resources.contains_key(&logical.to_string()) || self.has_children(&logical)
    }

    fn is_directory(&self, path: &str) -> bool {
        let Ok(logical) = parse(path) else {
            return false;
        };
        !self.resources.contains_key(&logical.to_string()) && self.has_children(&logical)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
