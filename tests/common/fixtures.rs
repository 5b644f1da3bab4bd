use std::fs;
use std::io;
use std::path::Path;

pub const S3_README: &str = "constructs/aws-cdk-lib/aws-s3/README.md";

/// A small mirror covering both packages, nested example dirs and test sources.
pub fn mirror_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        (S3_README, "# Amazon S3 Construct Library\n\nDefine buckets."),
        ("constructs/aws-cdk-lib/aws-s3/integ.bucket.ts", "new s3.Bucket(stack, 'Bucket');"),
        ("constructs/aws-cdk-lib/aws-s3/integ.bucket-policy.ts", "bucket.addToResourcePolicy();"),
        ("constructs/aws-cdk-lib/aws-lambda/README.md", "# AWS Lambda Construct Library"),
        ("constructs/aws-cdk-lib/aws-lambda/examples/handler.ts", "export const handler = 1;"),
        ("constructs/@aws-cdk/aws-apigateway/README.md", "# API Gateway"),
        ("constructs/@aws-cdk/aws-amplify-alpha/README.md", "# Amplify alpha"),
        ("constructs/unknown/unknown/file.md", "stray"),
    ]
}

/// Paths that exercise every level of the hierarchy plus misses.
pub fn sample_paths() -> Vec<&'static str> {
    vec![
        "",
        "/",
        "constructs",
        "constructs/",
        "/constructs/aws-cdk-lib/",
        "constructs/aws-cdk-lib",
        "constructs/@aws-cdk",
        "constructs/@aws-cdk/aws-amplify-alpha",
        "constructs/aws-cdk-lib/aws-s3",
        S3_README,
        "constructs/aws-cdk-lib/aws-s3/integ.bucket-policy.ts",
        "constructs/aws-cdk-lib/aws-lambda/examples",
        "constructs/aws-cdk-lib/aws-lambda/examples/handler.ts",
        "constructs/aws-cdk-lib/non-existent/README.md",
        "constructs/aws-cdk-lib/aws-other",
        "constructs/aws-cdk-lib/aws-s3/missing.md",
        "elsewhere",
        "constructs/../x",
        "constructs/./aws-cdk-lib/aws-s3",
    ]
}

/// Writes `entries` under `base` the way the mirror sync lays them out.
pub fn write_mirror(base: &Path, entries: &[(&str, &str)]) -> io::Result<()> {
    for (relative, content) in entries {
        let path = base.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    Ok(())
}
