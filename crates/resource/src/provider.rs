//! Resource provider over a [`ResourceStore`].
//!
//! Logical paths are translated into store addresses. The parent segments
//! become identifier components under the provider's root namespace, and
//! the terminal segment is looked up twice: first verbatim as a resource
//! name, then (translated) as a sub-namespace. The store cannot tell the two
//! apart ahead of time, so the order of those attempts is what defines file
//! precedence.

use crate::filesystem::DirectoryStore;
use crate::store::{ResourceStore, StoreAddress, StoreError};
use cdk_docs_traits::{LogicalPath, Resource, ResourceError, ResourceProvider};
use itertools::Itertools;
use log::{debug, warn};

/// Root namespace label used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "resources";

/// Where a logical path landed in the store.
enum Located {
    Leaf { address: StoreAddress, name: String },
    Node(Vec<String>),
}

/// A resource provider backed by a read-only [`ResourceStore`].
#[derive(Debug)]
pub struct StoreResourceProvider<S = DirectoryStore> {
    store: S,
    namespace: StoreAddress,
}

impl StoreResourceProvider<DirectoryStore> {
    /// Convenience constructor for a directory-backed mirror.
    pub fn from_directory<P: AsRef<std::path::Path>>(base_path: P) -> Self {
        Self::new(DirectoryStore::new(base_path))
    }
}

impl<S: ResourceStore> StoreResourceProvider<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            namespace: StoreAddress::new(DEFAULT_NAMESPACE),
        }
    }

    /// Sets the label of the root namespace that addresses are built under.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = StoreAddress::new(namespace);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn parse(&self, path: &str) -> Result<LogicalPath, ResourceError> {
        let logical = LogicalPath::parse(path);
        if logical.has_traversal() {
            warn!("Rejected path with traversal segments: '{}'", path);
            return Err(ResourceError::InvalidPath(path.to_string()));
        }
        Ok(logical)
    }

    fn locate(&self, path: &str) -> Result<Located, ResourceError> {
        let logical = self.parse(path)?;
        let Some((terminal, parents)) = logical.split_last() else {
            return self.node(&self.namespace, path);
        };

        let address = self.namespace.descend(parents.iter().map(String::as_str));
        match self.store.is_resource(&address, terminal) {
            Ok(true) => {
                debug!("'{}' is resource '{}' in {}", path, terminal, address);
                return Ok(Located::Leaf {
                    address,
                    name: terminal.to_string(),
                });
            }
            Ok(false) => {}
            Err(err) => return Err(self.translate(path, err)),
        }

        self.node(&address.child(terminal), path)
    }

    fn node(&self, address: &StoreAddress, path: &str) -> Result<Located, ResourceError> {
        match self.store.contents(address) {
            Ok(children) if !children.is_empty() => {
                debug!("'{}' is namespace {}", path, address);
                Ok(Located::Node(children.into_iter().sorted().dedup().collect()))
            }
            Ok(_) => {
                debug!("Namespace {} is empty; treating '{}' as missing", address, path);
                Err(ResourceError::not_found(path))
            }
            Err(err) => Err(self.translate(path, err)),
        }
    }

    /// Maps a store failure onto this provider's error type.
    fn translate(&self, path: &str, err: StoreError) -> ResourceError {
        if err.is_missing() {
            debug!("'{}' not found in {}: {}", path, self.store.name(), err);
            ResourceError::not_found(path)
        } else {
            warn!("{} failed for '{}': {}", self.store.name(), path, err);
            ResourceError::backend(path, err.to_string())
        }
    }
}

impl<S: ResourceStore> ResourceProvider for StoreResourceProvider<S> {
    fn resolve(&self, path: &str) -> Result<Resource, ResourceError> {
        match self.locate(path)? {
            Located::Leaf { address, name } => self
                .store
                .read_text(&address, &name)
                .map(Resource::File)
                .map_err(|err| self.translate(path, err)),
            Located::Node(children) => Ok(Resource::Directory(children)),
        }
    }

    fn list_resources(&self, path: &str) -> Vec<String> {
        let Ok(logical) = self.parse(path) else {
            return Vec::new();
        };
        let address = self
            .namespace
            .descend(logical.segments().iter().map(String::as_str));
        match self.store.contents(&address) {
            Ok(children) => children.into_iter().sorted().dedup().collect(),
            Err(err) if err.is_missing() => {
                debug!("Nothing to list at '{}': {}", path, err);
                Vec::new()
            }
            Err(err) => {
                warn!("{} failed to list '{}': {}", self.store.name(), path, err);
                Vec::new()
            }
        }
    }

    fn resource_exists(&self, path: &str) -> bool {
        self.locate(path).is_ok()
    }

    fn is_directory(&self, path: &str) -> bool {
        matches!(self.locate(path), Ok(Located::Node(_)))
    }

    fn name(&self) -> &'static str {
        "StoreResourceProvider"
    }
}
