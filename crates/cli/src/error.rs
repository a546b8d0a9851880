//! Exit codes for `iconseed`.
//!
//! Clap exits with 2 on bad arguments before any of this runs. After that,
//! failures are sorted by who has to act on them:
//! - 10: the catalog or profile was read but is unusable
//! - 11: a catalog or profile file could not be read
//! - 12: a `--seed` value did not parse
//! - 13: a result could not be rendered as JSON

use iconseed_core::IconError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// Rejected by the core: catalog size or profile layout.
    Core(IconError),
    /// Unreadable catalog or profile file, with its path.
    Io(String),
    /// Malformed seed text.
    Input(String),
    /// JSON output failed.
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// Short machine-readable category, reported alongside `--json` errors.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Core(IconError::CatalogTooSmall { .. })
            | CliError::Core(IconError::CatalogTooLarge { .. }) => "catalog",
            CliError::Core(IconError::InvalidProfile(_)) => "profile",
            CliError::Core(_) => "core",
            CliError::Io(_) => "io",
            CliError::Input(_) => "seed",
            CliError::Serialization(_) => "json",
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Core(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

/// File errors and seed errors leave the core as `IconError` too; they are
/// routed to their own exit codes here.
impl From<IconError> for CliError {
    fn from(e: IconError) -> Self {
        match e {
            IconError::Io(msg) => CliError::Io(msg),
            IconError::InvalidSeed(msg) => CliError::Input(format!("invalid seed: {msg}")),
            other => CliError::Core(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undersized_catalog_exits_10() {
        let err = CliError::from(IconError::CatalogTooSmall { len: 1 });
        assert_eq!(err.exit_code(), 10);
        assert_eq!(err.kind(), "catalog");
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn bad_profile_exits_10() {
        let err = CliError::from(IconError::InvalidProfile("hue_bits must be in 1..=16".into()));
        assert_eq!(err.exit_code(), 10);
        assert_eq!(err.kind(), "profile");
        assert!(err.to_string().contains("hue_bits"));
    }

    #[test]
    fn unreadable_file_exits_11_with_path() {
        let err = CliError::from(IconError::Io("catalog.txt: not found".into()));
        assert_eq!(err.exit_code(), 11);
        assert_eq!(err.kind(), "io");
        assert_eq!(err.to_string(), "catalog.txt: not found");
    }

    #[test]
    fn malformed_seed_exits_12() {
        let err = CliError::from(IconError::InvalidSeed("\"0xZZ\"".into()));
        assert_eq!(err.exit_code(), 12);
        assert_eq!(err.kind(), "seed");
        assert!(err.to_string().starts_with("invalid seed"));
        assert!(err.to_string().contains("0xZZ"));
    }

    #[test]
    fn json_failure_exits_13() {
        let bad = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err = CliError::from(bad);
        assert_eq!(err.exit_code(), 13);
        assert_eq!(err.kind(), "json");
    }

    #[test]
    fn unparsable_color_stays_a_core_error() {
        let err = CliError::from(IconError::InvalidColor("#12".into()));
        assert_eq!(err.exit_code(), 10);
        assert_eq!(err.kind(), "core");
    }
}
