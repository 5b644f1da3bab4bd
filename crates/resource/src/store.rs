//! Dot-addressed hierarchical resource stores.
//!
//! A store groups resources into nested namespaces addressed like
//! `resources.constructs.aws_cdk_lib.aws_s3`. Components are identifiers, so
//! logical path segments are translated with [`to_identifier`] before they
//! become part of an address. A store cannot say up front whether a name is a
//! file or a sub-namespace. Callers ask both questions and treat
//! [`StoreError::NamespaceNotFound`] as a plain miss.

use cdk_docs_traits::to_identifier;
use std::fmt::{self, Debug};
use thiserror::Error;

/// Error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Namespace '{0}' does not exist")]
    NamespaceNotFound(String),

    #[error("Resource '{name}' does not exist in '{address}'")]
    ResourceNotFound { address: String, name: String },

    #[error("Resource store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True when the store answered, and the answer was "no such thing".
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            StoreError::NamespaceNotFound(_) | StoreError::ResourceNotFound { .. }
        )
    }
}

/// The address of a namespace inside a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreAddress {
    namespace: String,
    components: Vec<String>,
}

impl StoreAddress {
    /// The address of a store's root namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            components: Vec::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Components below the root namespace, already in identifier form.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Address of the sub-namespace named by a logical path segment.
    pub fn child(&self, segment: &str) -> Self {
        let mut child = self.clone();
        child.components.push(to_identifier(segment));
        child
    }

    /// Address reached by descending through several logical segments.
    pub fn descend<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut address = self.clone();
        address
            .components
            .extend(segments.into_iter().map(to_identifier));
        address
    }
}

impl fmt::Display for StoreAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.namespace)?;
        for component in &self.components {
            write!(f, ".{}", component)?;
        }
        Ok(())
    }
}

/// A read-only hierarchical resource store.
pub trait ResourceStore: Send + Sync + Debug {
    /// Whether the namespace at `address` holds a literal resource called `name`.
    ///
    /// Returns `Err(StoreError::NamespaceNotFound)` when `address` itself
    /// does not exist.
    fn is_resource(&self, address: &StoreAddress, name: &str) -> Result<bool, StoreError>;

    /// Read the resource `name` in the namespace at `address` as UTF-8 text.
    fn read_text(&self, address: &StoreAddress, name: &str) -> Result<String, StoreError>;

    /// Names of everything directly inside the namespace at `address`.
    fn contents(&self, address: &StoreAddress) -> Result<Vec<String>, StoreError>;

    /// Returns a human-readable name for this store (for logging/debugging).
    fn name(&self) -> &'static str;
}
