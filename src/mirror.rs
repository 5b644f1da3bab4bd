//! Naming rules for files copied into the documentation mirror.
//!
//! Upstream files land in the mirror at `constructs/{package}/{module}/{file}`.
//! These rules define the namespace every provider is addressed with, so they
//! live next to the catalog rather than in the sync tooling. Package and
//! marker matching is on plain substrings of the upstream path.

/// Marker that precedes the module directory in integration-test paths.
pub const INTEG_TEST_MARKER: &str = "framework-integ/test/";

/// Package that integration tests are filed under.
pub const INTEG_TEST_PACKAGE: &str = "aws-cdk-lib";

/// Package and module used when a path matches no rule.
pub const UNKNOWN: &str = "unknown";

/// Upstream packages whose modules are mirrored, in match order.
pub const MIRRORED_PACKAGES: [&str; 2] = ["@aws-cdk", "aws-cdk-lib"];

/// Maps an upstream repository path onto its logical mirror path.
///
/// - `...packages/@aws-cdk/{module}...` → `constructs/@aws-cdk/{module}/{file}`
/// - `...packages/aws-cdk-lib/{module}...` → `constructs/aws-cdk-lib/{module}/{file}`
/// - `...framework-integ/test/...` → `constructs/aws-cdk-lib/{module}/{file}`
/// - anything else → `constructs/unknown/unknown/{file}`
///
/// `{module}` is whatever follows the package directory up to the next `/`.
/// For a file directly inside the package that is the file name itself, so
/// `packages/aws-cdk-lib/README.md` becomes
/// `constructs/aws-cdk-lib/README.md/README.md`.
pub fn normalize_output_path(path: &str) -> String {
    let (package, module) = classify(path);
    format!("constructs/{}/{}/{}", package, module, basename(path))
}

/// Module directory of an integration-test path.
///
/// The module is the first segment after the last `/framework-integ/test/`.
/// Without that marker the first segment of the whole path is returned.
pub fn integ_test_module(path: &str) -> &str {
    let rest = path
        .rfind(&format!("/{}", INTEG_TEST_MARKER))
        .map_or(path, |index| &path[index + 1 + INTEG_TEST_MARKER.len()..]);
    first_segment(rest)
}

/// Name of an integration test: its file name without `integ.` and extension.
///
/// `integ.bucket-policy.ts` → `bucket-policy`.
pub fn integ_test_name(path: &str) -> String {
    let file = basename(path).replace("integ.", "");
    strip_extension(&file).to_string()
}

fn classify(path: &str) -> (&str, &str) {
    for package in MIRRORED_PACKAGES {
        let prefix = format!("packages/{}/", package);
        if let Some((_, rest)) = path.split_once(&prefix) {
            return (package, first_segment(rest));
        }
    }
    if path.contains(INTEG_TEST_MARKER) {
        return (INTEG_TEST_PACKAGE, integ_test_module(path));
    }
    (UNKNOWN, UNKNOWN)
}

fn first_segment(path: &str) -> &str {
    path.split('/').next().unwrap_or(path)
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Drops the last `.ext`. Leading dots belong to the name, so `.hidden` is
/// kept whole.
fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(dot) if file[..dot].chars().any(|c| c != '.') => &file[..dot],
        _ => file,
    }
}
