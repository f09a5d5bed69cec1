//! Version information with embedded git metadata.

use serde::Serialize;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git branch at build time, or "unknown" if unavailable.
pub const GIT_BRANCH: &str = match option_env!("VERGEN_GIT_BRANCH") {
    Some(branch) => branch,
    None => "unknown",
};

/// Git commit SHA at build time, or "unknown" if unavailable.
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// Whether the working tree was dirty at build time.
pub fn git_dirty() -> bool {
    option_env!("VERGEN_GIT_DIRTY") == Some("true")
}

/// Short form of [`GIT_SHA`] (first 7 characters).
pub fn short_sha() -> &'static str {
    GIT_SHA.get(..7).unwrap_or(GIT_SHA)
}

/// Full version string: `{version}+{branch}.{sha}` or `{version}+{branch}.{sha}.dirty`.
///
/// Examples:
/// - `0.1.0+main.abc1234`
/// - `0.1.0+feature/cache-ttl.abc1234.dirty`
pub fn version_string() -> String {
    let dirty_suffix = if git_dirty() { ".dirty" } else { "" };
    format!("{PKG_VERSION}+{GIT_BRANCH}.{}{dirty_suffix}", short_sha())
}

/// Build metadata as reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub branch: &'static str,
    pub sha: &'static str,
    pub dirty: bool,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: PKG_VERSION,
            branch: GIT_BRANCH,
            sha: short_sha(),
            dirty: git_dirty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_pkg_version() {
        let version = version_string();
        let (pkg, build) = version
            .split_once('+')
            .expect("version should carry build metadata");
        assert_eq!(pkg, PKG_VERSION);
        assert!(build.starts_with(GIT_BRANCH));
    }

    #[test]
    fn short_sha_is_bounded() {
        assert!(short_sha().len() <= 7);
        assert!(GIT_SHA.starts_with(short_sha()));
    }

    #[test]
    fn build_info_matches_constants() {
        let info = BuildInfo::current();
        assert_eq!(info.version, PKG_VERSION);
        assert_eq!(info.dirty, git_dirty());
    }
}
