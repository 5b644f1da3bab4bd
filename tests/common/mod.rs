pub mod fixtures;

use cdk_docs::{InMemoryResourceProvider, StoreResourceProvider};
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Installs the test logger once per binary; `RUST_LOG=debug` shows lookups.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The fixture mirror loaded into the in-memory backend.
pub fn memory_provider() -> InMemoryResourceProvider {
    InMemoryResourceProvider::new(fixtures::mirror_entries())
}

/// The fixture mirror written to a temporary directory and served from disk.
///
/// The `TempDir` must outlive the provider.
pub fn store_provider() -> std::io::Result<(TempDir, StoreResourceProvider)> {
    let dir = tempfile::tempdir()?;
    fixtures::write_mirror(dir.path(), &fixtures::mirror_entries())?;
    let provider = StoreResourceProvider::from_directory(dir.path());
    Ok((dir, provider))
}
