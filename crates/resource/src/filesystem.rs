//! Directory-tree resource store for the packaged documentation mirror.
//!
//! The mirror is written to disk with its upstream names
//! (`constructs/@aws-cdk/aws-s3/README.md`), while store addresses carry
//! identifier components (`@aws_cdk`, `aws_s3`). Each address component is
//! therefore matched against the identifier form of the directory entries.
//!
//! # Security
//!
//! Every resolved directory and file is canonicalized and checked against the
//! canonical base path, so symlinks cannot lead outside the store.

use crate::store::{ResourceStore, StoreAddress, StoreError};
use cdk_docs_traits::to_identifier;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A resource store rooted at a directory on the local filesystem.
///
/// The base directory is the store's root namespace. Sub-directories are
/// nested namespaces and regular files are resources.
#[derive(Debug)]
pub struct DirectoryStore {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl DirectoryStore {
    /// Creates a store rooted at `base_path`.
    ///
    /// A missing base directory is not an error here. Every later operation
    /// reports [`StoreError::Unavailable`] instead, so a misconfigured
    /// deployment is distinguishable from a missing document.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok().filter(|p| p.is_dir());
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// Returns the base path for this store.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    fn root(&self) -> Result<&Path, StoreError> {
        self.canonical_base.as_deref().ok_or_else(|| {
            StoreError::Unavailable(format!(
                "'{}' is not a readable directory",
                self.base_path.display()
            ))
        })
    }

    /// Walks `address` down from the base directory.
    fn locate(&self, address: &StoreAddress) -> Result<PathBuf, StoreError> {
        let mut dir = self.root()?.to_path_buf();
        for component in address.components() {
            dir = self
                .child_dir(&dir, component)?
                .ok_or_else(|| StoreError::NamespaceNotFound(address.to_string()))?;
        }
        Ok(dir)
    }

    /// Finds the sub-directory of `dir` whose identifier form is `component`.
    ///
    /// An entry named exactly `component` wins; otherwise the first match in
    /// sorted order.
    fn child_dir(&self, dir: &Path, component: &str) -> Result<Option<PathBuf>, StoreError> {
        if is_plain_name(component) {
            let exact = dir.join(component);
            if exact.is_dir() {
                return Ok(self.contain(&exact));
            }
        }

        let mut matches = Vec::new();
        for name in entry_names(dir)? {
            if to_identifier(&name) == component {
                let candidate = dir.join(&name);
                if candidate.is_dir() {
                    matches.push(candidate);
                }
            }
        }
        matches.sort();
        Ok(matches.first().and_then(|p| self.contain(p)))
    }

    /// Returns the canonical form of `path` if it stays inside the base.
    fn contain(&self, path: &Path) -> Option<PathBuf> {
        let base = self.canonical_base.as_ref()?;
        let canonical = path.canonicalize().ok()?;
        if canonical.starts_with(base) {
            Some(canonical)
        } else {
            warn!(
                "Blocked '{}': resolves outside store base '{}'",
                path.display(),
                base.display()
            );
            None
        }
    }

    fn resource_file(&self, address: &StoreAddress, name: &str) -> Result<Option<PathBuf>, StoreError> {
        let dir = self.locate(address)?;
        if !is_plain_name(name) {
            return Ok(None);
        }
        let candidate = dir.join(name);
        if !candidate.is_file() {
            return Ok(None);
        }
        Ok(self.contain(&candidate))
    }
}

impl ResourceStore for DirectoryStore {
    fn is_resource(&self, address: &StoreAddress, name: &str) -> Result<bool, StoreError> {
        Ok(self.resource_file(address, name)?.is_some())
    }

    fn read_text(&self, address: &StoreAddress, name: &str) -> Result<String, StoreError> {
        let missing = || StoreError::ResourceNotFound {
            address: address.to_string(),
            name: name.to_string(),
        };
        let file = self.resource_file(address, name)?.ok_or_else(missing)?;
        let bytes = fs::read(&file).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                missing()
            } else {
                StoreError::Io(e)
            }
        })?;
        // A leaf that exists always has content; bad bytes become U+FFFD.
        String::from_utf8(bytes).or_else(|err| {
            warn!("'{}' is not valid UTF-8; decoding lossily", file.display());
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        })
    }

    fn contents(&self, address: &StoreAddress) -> Result<Vec<String>, StoreError> {
        let dir = self.locate(address)?;
        let mut names = entry_names(&dir).map_err(|e| match e {
            StoreError::Io(err) if err.kind() == io::ErrorKind::NotFound => {
                StoreError::NamespaceNotFound(address.to_string())
            }
            other => other,
        })?;
        names.sort();
        Ok(names)
    }

    fn name(&self) -> &'static str {
        "DirectoryStore"
    }
}

/// UTF-8 names of the entries in `dir`. Other names are skipped with a warning.
fn entry_names(dir: &Path) -> Result<Vec<String>, StoreError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping non UTF-8 entry {:?} in '{}'", raw, dir.display()),
        }
    }
    Ok(names)
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
