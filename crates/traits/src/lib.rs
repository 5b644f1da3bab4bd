//! Core abstractions for serving the mirrored CDK documentation tree.
//!
//! - [`ResourceProvider`]: the lookup capability every backend implements
//! - [`Resource`] / [`ResourceError`]: the tagged lookup result
//! - [`LogicalPath`]: path normalization shared by all backends
//! - [`InMemoryResourceProvider`]: a map-backed provider, used for fixtures

pub mod memory;
pub mod path;
pub mod resource;

pub use memory::InMemoryResourceProvider;
pub use path::{LogicalPath, SEPARATOR, to_identifier};
pub use resource::{Resource, ResourceError, ResourceProvider};
