/// URI scheme served when none is configured.
pub const DEFAULT_SCHEME: &str = "cdk-api-docs";

/// Top-level namespace that holds the mirrored constructs.
pub const DEFAULT_NAMESPACE: &str = "constructs";

/// Settings for a [`ResourceCatalog`](super::ResourceCatalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    scheme: String,
    namespace: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self { Default::default() }

    /// Sets the URI scheme, without the `://` suffix.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self { self.scheme = scheme.into(); self }

    /// Sets the provider path that package listings start from.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into().trim_matches('/').to_string();
        self
    }

    pub fn scheme(&self) -> &str { &self.scheme }

    pub fn namespace(&self) -> &str { &self.namespace }

    /// `"{scheme}://"`
    pub fn root_uri(&self) -> String {
        format!("{}://", self.scheme)
    }
}
