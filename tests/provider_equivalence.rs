//! The two backends must be indistinguishable from the caller's side.

mod common;

use cdk_docs::{Resource, ResourceError, ResourceProvider};
use common::fixtures::{S3_README, sample_paths};
use common::{TestResult, init_logging, memory_provider, store_provider};
use std::sync::Arc;

#[test]
fn test_backends_agree_on_every_sample_path() -> TestResult {
    init_logging();
    let memory = memory_provider();
    let (_dir, store) = store_provider()?;

    for path in sample_paths() {
        assert_eq!(memory.resolve(path), store.resolve(path), "resolve('{}')", path);
        assert_eq!(
            memory.list_resources(path),
            store.list_resources(path),
            "list_resources('{}')",
            path
        );
        assert_eq!(
            memory.resource_exists(path),
            store.resource_exists(path),
            "resource_exists('{}')",
            path
        );
        assert_eq!(
            memory.is_directory(path),
            store.is_directory(path),
            "is_directory('{}')",
            path
        );
        assert_eq!(
            memory.get_resource_content(path),
            store.get_resource_content(path),
            "get_resource_content('{}')",
            path
        );
    }
    Ok(())
}

#[test]
fn test_existence_is_consistent_with_listing_and_content() -> TestResult {
    let memory = memory_provider();
    let (dir, store) = store_provider()?;

    // A mirrored file that is not valid UTF-8 is still a readable leaf.
    let blob = "constructs/aws-cdk-lib/aws-s3/blob.md";
    std::fs::write(dir.path().join(blob), [0xff, 0xfe, 0x00])?;

    let providers: [&dyn ResourceProvider; 2] = [&memory, &store];
    for provider in providers {
        for path in sample_paths().into_iter().chain([blob]) {
            let is_file = matches!(provider.resolve(path), Ok(Resource::File(_)));
            assert_eq!(
                provider.resource_exists(path),
                !provider.list_resources(path).is_empty() || is_file,
                "{} disagrees with itself on '{}'",
                provider.name(),
                path
            );
        }
    }

    assert!(store.resource_exists(blob));
    assert!(!store.get_resource_content(blob).starts_with("Error"));
    Ok(())
}

#[test]
fn test_repeated_lookups_are_identical() -> TestResult {
    let (_dir, store) = store_provider()?;
    let first: Vec<_> = sample_paths().into_iter().map(|p| store.get_resource_content(p)).collect();
    for _ in 0..3 {
        let again: Vec<_> = sample_paths().into_iter().map(|p| store.get_resource_content(p)).collect();
        assert_eq!(first, again);
    }
    Ok(())
}

#[test]
fn test_not_found_wording() -> TestResult {
    let memory = memory_provider();
    let (_dir, store) = store_provider()?;
    let providers: [&dyn ResourceProvider; 2] = [&memory, &store];

    for provider in providers {
        let text = provider.get_resource_content("constructs/aws-cdk-lib/non-existent/README.md");
        assert!(text.contains("Error"), "{}: {}", provider.name(), text);
        assert!(text.contains("not found"), "{}: {}", provider.name(), text);
        assert_eq!(
            provider.resolve("constructs/aws-cdk-lib/non-existent/README.md"),
            Err(ResourceError::NotFound(
                "constructs/aws-cdk-lib/non-existent/README.md".to_string()
            ))
        );
    }
    Ok(())
}

#[test]
fn test_traversal_is_rejected_by_both_backends() -> TestResult {
    let memory = memory_provider();
    let (_dir, store) = store_provider()?;
    for path in ["constructs/../x", "constructs/./aws-cdk-lib", ".."] {
        let expected = Err(ResourceError::InvalidPath(path.to_string()));
        assert_eq!(memory.resolve(path), expected, "{}", path);
        assert_eq!(store.resolve(path), expected, "{}", path);
        assert!(!memory.resource_exists(path) && !store.resource_exists(path));
    }
    Ok(())
}

#[test]
fn test_listing_levels() -> TestResult {
    let (_dir, store) = store_provider()?;
    assert_eq!(store.list_resources(""), vec!["constructs"]);
    assert_eq!(
        store.list_resources("constructs"),
        vec!["@aws-cdk", "aws-cdk-lib", "unknown"]
    );
    assert_eq!(
        store.list_resources("constructs/@aws-cdk"),
        vec!["aws-amplify-alpha", "aws-apigateway"]
    );
    assert_eq!(
        store.list_resources("constructs/aws-cdk-lib/aws-s3"),
        vec!["README.md", "integ.bucket-policy.ts", "integ.bucket.ts"]
    );
    Ok(())
}

#[test]
fn test_store_tolerates_identifier_spelling() -> TestResult {
    // Store addresses are identifier-based, so the underscore spelling of a
    // directory reaches the same namespace. The in-memory map is literal.
    let memory = memory_provider();
    let (_dir, store) = store_provider()?;
    assert!(store.resource_exists("constructs/aws_cdk_lib/aws_s3/README.md"));
    assert!(!memory.resource_exists("constructs/aws_cdk_lib/aws_s3/README.md"));
    Ok(())
}

#[test]
fn test_shared_provider_across_threads() -> TestResult {
    let (_dir, store) = store_provider()?;
    let memory: Arc<dyn ResourceProvider> = Arc::new(memory_provider());
    let store: Arc<dyn ResourceProvider> = Arc::new(store);
    let providers = [memory, store];

    for provider in providers {
        let expected = provider.get_resource_content(S3_README);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let provider = Arc::clone(&provider);
                let expected = expected.clone();
                scope.spawn(move || {
                    for _ in 0..25 {
                        assert_eq!(provider.get_resource_content(S3_README), expected);
                        assert!(provider.is_directory("constructs/aws-cdk-lib"));
                    }
                });
            }
        });
    }
    Ok(())
}
