//! URI-addressed view over a [`ResourceProvider`].
//!
//! The catalog maps request URIs of the shape
//! `cdk-api-docs://constructs/{package}/{module}/{file}` onto provider paths
//! and wraps the results in the JSON envelopes in [`envelope`]. The transport
//! that carries those envelopes is not part of this crate.

pub mod config;
pub mod envelope;

pub use config::{CatalogConfig, DEFAULT_NAMESPACE, DEFAULT_SCHEME};
pub use envelope::{
    CatalogResponse, Category, CategoryList, FileItem, FileList, TextResource,
};

use crate::error::CatalogError;
use cdk_docs_traits::{LogicalPath, Resource, ResourceError, ResourceProvider};
use log::debug;

/// A parsed request URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    Categories,
    Packages,
    Modules {
        package: &'a str,
    },
    ModuleFiles {
        package: &'a str,
        module: &'a str,
    },
    File {
        package: &'a str,
        module: &'a str,
        file: &'a str,
    },
}

/// Serves the mirrored documentation tree through resource URIs.
///
/// The provider is injected at construction, so the same catalog serves the
/// packaged mirror in production and an in-memory fixture in tests.
#[derive(Debug)]
pub struct ResourceCatalog<P = Box<dyn ResourceProvider>> {
    provider: P,
    config: CatalogConfig,
}

impl<P: ResourceProvider> ResourceCatalog<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: CatalogConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self { self.config = config; self }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Reads the resource behind `uri`.
    pub fn read(&self, uri: &str) -> Result<CatalogResponse, CatalogError> {
        let route = self.route(uri)?;
        debug!("Routing '{}' as {:?}", uri, route);
        match route {
            Route::Categories => self.list_root_categories().map(Into::into),
            Route::Packages => self.list_packages().map(Into::into),
            Route::Modules { package } => self.list_package_modules(package).map(Into::into),
            Route::ModuleFiles { package, module } => {
                self.list_module_files(package, module).map(Into::into)
            }
            Route::File {
                package,
                module,
                file,
            } => self.get_construct_file(package, module, file).map(Into::into),
        }
    }

    /// Reads the resource behind `uri` and serializes it to JSON.
    pub fn read_json(&self, uri: &str) -> Result<String, CatalogError> {
        Ok(self.read(uri)?.to_json()?)
    }

    /// The categories available at the catalog root.
    ///
    /// Only the constructs namespace is served. The mirror layout has no
    /// other top-level tree, so there is no `root` docs category. A namespace
    /// missing from the mirror yields an empty list carrying `error`; a
    /// failing backend is an error.
    pub fn list_root_categories(&self) -> Result<CategoryList, CatalogError> {
        let namespace = self.namespace();
        match self.provider.resolve(&namespace.to_string()) {
            Ok(Resource::Directory(_)) => Ok(CategoryList::new(vec![Category {
                name: namespace.to_string(),
                uri: self.uri_for(&namespace, true),
                description: "AWS CDK constructs documentation".to_string(),
                is_directory: true,
            }])),
            Ok(Resource::File(_)) => Ok(CategoryList::missing(self.missing_namespace())),
            Err(err) if err.is_not_found() => Ok(CategoryList::missing(self.missing_namespace())),
            Err(err) => Err(CatalogError::Backend(err)),
        }
    }

    /// Packages under the constructs namespace.
    pub fn list_packages(&self) -> Result<FileList, CatalogError> {
        match self.listing(&self.namespace(), true) {
            Err(CatalogError::UnknownResource(_)) => Ok(FileList::missing(self.missing_namespace())),
            other => other,
        }
    }

    /// Modules inside `package`.
    pub fn list_package_modules(&self, package: &str) -> Result<FileList, CatalogError> {
        self.listing(&self.namespace().join(package), true)
    }

    /// Every file and sub-directory inside `package/module`.
    pub fn list_module_files(&self, package: &str, module: &str) -> Result<FileList, CatalogError> {
        self.listing(&self.namespace().join(package).join(module), false)
    }

    /// The content of `package/module/file`.
    pub fn get_construct_file(
        &self,
        package: &str,
        module: &str,
        file: &str,
    ) -> Result<TextResource, CatalogError> {
        let path = self.namespace().join(package).join(module).join(file);
        let uri = self.uri_for(&path, false);
        match self.provider.resolve(&path.to_string()) {
            Ok(Resource::File(text)) => Ok(TextResource {
                uri,
                name: file.to_string(),
                text,
                description: format!("Construct file: {}/{}/{}", package, module, file),
                mime_type: TextResource::mime_type_for(file).to_string(),
            }),
            Ok(Resource::Directory(_)) => Err(CatalogError::UnknownResource(uri)),
            Err(err) => Err(lookup_error(uri, err)),
        }
    }

    fn namespace(&self) -> LogicalPath {
        LogicalPath::parse(self.config.namespace())
    }

    fn missing_namespace(&self) -> String {
        format!("Namespace '{}' not found", self.namespace())
    }

    fn uri_for(&self, path: &LogicalPath, is_directory: bool) -> String {
        let suffix = if is_directory && !path.is_root() { "/" } else { "" };
        format!("{}{}{}", self.config.root_uri(), path, suffix)
    }

    fn listing(&self, path: &LogicalPath, directories_only: bool) -> Result<FileList, CatalogError> {
        let uri = self.uri_for(path, true);
        let children = match self.provider.resolve(&path.to_string()) {
            Ok(Resource::Directory(children)) => children,
            Ok(Resource::File(_)) => return Err(CatalogError::UnknownResource(uri)),
            Err(err) => return Err(lookup_error(uri, err)),
        };

        let files = children
            .into_iter()
            .filter_map(|name| {
                let child = path.join(&name);
                let is_directory = self.provider.is_directory(&child.to_string());
                if directories_only && !is_directory {
                    return None;
                }
                Some(FileItem {
                    uri: self.uri_for(&child, is_directory),
                    name,
                    is_directory,
                })
            })
            .collect();
        Ok(FileList::new(files))
    }

    fn route<'a>(&self, uri: &'a str) -> Result<Route<'a>, CatalogError> {
        let root = self.config.root_uri();
        let rest = uri.strip_prefix(root.as_str()).ok_or_else(|| {
            CatalogError::invalid_uri(uri, format!("expected a '{}' URI", root))
        })?;

        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Ok(Route::Categories);
        }

        let namespace = self.namespace();
        let depth = namespace.segments().len();
        let in_namespace = segments.len() >= depth
            && segments.iter().zip(namespace.segments()).all(|(a, b)| *a == b.as_str());
        if !in_namespace {
            return Err(CatalogError::UnknownResource(uri.to_string()));
        }

        match segments[depth..] {
            [] => Ok(Route::Packages),
            [package] => Ok(Route::Modules { package }),
            [package, module] => Ok(Route::ModuleFiles { package, module }),
            [package, module, file] if !rest.ends_with('/') => Ok(Route::File {
                package,
                module,
                file,
            }),
            _ => Err(CatalogError::invalid_uri(
                uri,
                format!("expected {}/{{package}}/{{module}}/{{file}}", namespace),
            )),
        }
    }
}

/// Not-found lookups become an unknown-resource fault; backend failures stay distinct.
fn lookup_error(uri: String, err: ResourceError) -> CatalogError {
    if err.is_not_found() {
        CatalogError::UnknownResource(uri)
    } else {
        CatalogError::Backend(err)
    }
}
