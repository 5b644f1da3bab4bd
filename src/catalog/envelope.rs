//! JSON response envelopes returned by the catalog.

use serde::Serialize;

/// A top-level category of the documentation mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub uri: String,
    pub description: String,
    pub is_directory: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    /// Set when the catalog namespace is absent from the mirror.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CategoryList {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            error: None,
        }
    }

    pub fn missing(error: impl Into<String>) -> Self {
        Self {
            categories: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// One entry in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileItem {
    pub name: String,
    pub uri: String,
    pub is_directory: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileList {
    pub files: Vec<FileItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileList {
    pub fn new(files: Vec<FileItem>) -> Self {
        Self { files, error: None }
    }

    pub fn missing(error: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }
}

/// The content of a single mirrored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextResource {
    pub uri: String,
    pub name: String,
    pub text: String,
    pub description: String,
    pub mime_type: String,
}

impl TextResource {
    /// Markdown for `.md` files, plain text for everything else.
    pub fn mime_type_for(file_name: &str) -> &'static str {
        if file_name.ends_with(".md") {
            "text/markdown"
        } else {
            "text/plain"
        }
    }
}

/// Any response the catalog can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Categories(CategoryList),
    Files(FileList),
    Text(TextResource),
}

impl CatalogResponse {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn as_files(&self) -> Option<&FileList> {
        match self {
            CatalogResponse::Files(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextResource> {
        match self {
            CatalogResponse::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_categories(&self) -> Option<&CategoryList> {
        match self {
            CatalogResponse::Categories(list) => Some(list),
            _ => None,
        }
    }
}

impl From<CategoryList> for CatalogResponse {
    fn from(list: CategoryList) -> Self {
        CatalogResponse::Categories(list)
    }
}

impl From<FileList> for CatalogResponse {
    fn from(list: FileList) -> Self {
        CatalogResponse::Files(list)
    }
}

impl From<TextResource> for CatalogResponse {
    fn from(text: TextResource) -> Self {
        CatalogResponse::Text(text)
    }
}
