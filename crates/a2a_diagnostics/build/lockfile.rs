//! Version lookup in `Cargo.lock`, shared by the build script and its tests.

/// Resolved version of `package`. When the lock file holds several versions
/// of the same package, the highest one is returned.
pub fn locked_version(lock: &str, package: &str) -> Option<String> {
    let name_line = format!("name = \"{package}\"");
    let mut versions = Vec::new();
    let mut lines = lock.lines().map(str::trim);
    while let Some(line) = lines.next() {
        if line != name_line {
            continue;
        }
        if let Some(version) = lines
            .next()
            .and_then(|line| line.strip_prefix("version = \""))
            .and_then(|rest| rest.strip_suffix('"'))
        {
            versions.push(version);
        }
    }
    versions
        .into_iter()
        .max_by_key(|version| release_parts(version))
        .map(str::to_string)
}

// Numeric `major.minor.patch` parts; pre-release and build suffixes are ignored.
fn release_parts(version: &str) -> Vec<u64> {
    let release = version.split(['-', '+']).next().unwrap_or(version);
    release
        .split('.')
        .map(|part| part.parse().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LOCK: &str = r#"
[[package]]
name = "tokio"
version = "0.2.25"
source = "registry+https://github.com/rust-lang/crates.io-index"

[[package]]
name = "tokio"
version = "1.43.0"
source = "registry+https://github.com/rust-lang/crates.io-index"

[[package]]
name = "tokio-util"
version = "9.0.0"

[[package]]
name = "clap"
version = "4.5.9"
"#;

    #[test]
    fn test_locked_version_picks_highest() {
        assert_eq!(locked_version(LOCK, "tokio").as_deref(), Some("1.43.0"));
        assert_eq!(locked_version(LOCK, "clap").as_deref(), Some("4.5.9"));
    }

    #[test]
    fn test_locked_version_missing_package() {
        assert_eq!(locked_version(LOCK, "reedline"), None);
        assert_eq!(locked_version("", "tokio"), None);
    }

    #[test]
    fn test_release_parts_compare_numerically() {
        assert!(release_parts("0.10.0") > release_parts("0.9.3"));
        assert_eq!(release_parts("1.2.3-beta.1"), vec![1, 2, 3]);
    }
}
