//! Resource lookup over a mirror of AWS CDK documentation.
//!
//! The mirror holds construct READMEs and integration-test sources laid out as
//! `constructs/{package}/{module}/{file}`. Lookups go through the
//! [`ResourceProvider`] trait, which has two backends:
//!
//! - [`StoreResourceProvider`]: the packaged mirror on disk
//! - [`InMemoryResourceProvider`]: a fixed map, for fixtures and tests
//!
//! [`ResourceCatalog`] puts a URI scheme and JSON envelopes on top of either
//! backend.
//!
//! ## Example
//!
//! ```ignore
//! use cdk_docs::{ResourceCatalog, StoreResourceProvider};
//!
//! let catalog = ResourceCatalog::new(StoreResourceProvider::from_directory("resources"));
//! let json = catalog.read_json("cdk-api-docs://constructs/aws-cdk-lib/aws-s3/")?;
//! ```

pub mod catalog;
pub mod error;
pub mod mirror;

pub use catalog::{
    CatalogConfig, CatalogResponse, Category, CategoryList, FileItem, FileList, ResourceCatalog,
    TextResource,
};
pub use error::CatalogError;
pub use mirror::normalize_output_path;

pub use cdk_docs_resource::{
    DirectoryStore, ResourceStore, StoreAddress, StoreError, StoreResourceProvider,
};
pub use cdk_docs_traits::{
    InMemoryResourceProvider, LogicalPath, Resource, ResourceError, ResourceProvider,
};
