//! Logical path handling shared by every provider.
//!
//! Callers address resources with slash-delimited paths such as
//! `constructs/aws-cdk-lib/aws-s3/README.md`. Providers never see the raw
//! string directly: it is first normalized into a [`LogicalPath`], which
//! strips leading and trailing separators and drops empty segments. An empty
//! result is the root of the namespace, so no input is ever rejected at this
//! stage.

use std::fmt;

/// Separator between logical path segments.
pub const SEPARATOR: char = '/';

/// A normalized, slash-delimited resource path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LogicalPath {
    segments: Vec<String>,
}

impl LogicalPath {
    /// Parses a raw caller-supplied path.
    ///
    /// `"/constructs//aws-cdk-lib/"` and `"constructs/aws-cdk-lib"` parse to
    /// the same path. `""` and `"/"` parse to the root.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// The root of the namespace.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Splits off the terminal segment, returning it together with its parents.
    ///
    /// Returns `None` for the root.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.segments
            .split_last()
            .map(|(last, parents)| (last.as_str(), parents))
    }

    /// Returns a new path with `child` appended.
    pub fn join(&self, child: &str) -> Self {
        let mut joined = self.clone();
        joined
            .segments
            .extend(child.split(SEPARATOR).filter(|s| !s.is_empty()).map(str::to_string));
        joined
    }

    /// The prefix every descendant key starts with: `"a/b/"`, or `""` at the root.
    pub fn as_prefix(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            format!("{}{}", self, SEPARATOR)
        }
    }

    /// True when any segment could walk out of a directory-backed store.
    pub fn has_traversal(&self) -> bool {
        self.segments.iter().any(|s| is_traversal_segment(s))
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for LogicalPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Translates a path segment into the identifier form used for store addresses.
///
/// Hyphens are not valid in namespace identifiers, so `aws-cdk-lib` becomes
/// `aws_cdk_lib`. Other characters (including `@`) pass through.
pub fn to_identifier(segment: &str) -> String {
    segment.replace('-', "_")
}

fn is_traversal_segment(segment: &str) -> bool {
    segment == "." || segment == ".." || segment.contains('\\')
}
