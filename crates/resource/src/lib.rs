//! Store-backed resource providers for the documentation mirror.
//!
//! This crate provides the packaged-data implementation of the
//! `ResourceProvider` trait from cdk-docs-traits.
//!
//! ## Available Types
//!
//! - [`StoreResourceProvider`]: Translates logical paths into store addresses
//! - [`DirectoryStore`]: A store over the mirror's directory tree
//! - [`ResourceStore`]: The seam for other packaged stores
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from cdk-docs-traits:
//! - [`InMemoryResourceProvider`]: Fixed path-to-content map

mod filesystem;
mod provider;
mod store;

pub use filesystem::DirectoryStore;
pub use provider::{DEFAULT_NAMESPACE, StoreResourceProvider};
pub use store::{ResourceStore, StoreAddress, StoreError};

// Re-export the in-memory provider from cdk-docs-traits for convenience
pub use cdk_docs_traits::InMemoryResourceProvider;
