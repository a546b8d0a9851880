//! Catalog and profile loading for the CLI.

use crate::error::CliError;
use iconseed_core::{IconError, Profile};
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a catalog file: one entry per non-blank line, surrounding
/// whitespace trimmed.
pub fn load_catalog(path: &Path) -> Result<Vec<String>, CliError> {
    let text = read(path)?;
    let catalog: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// The synthetic catalog `"0"`, `"1"`, ... `"n-1"`.
pub fn synthetic_catalog(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

/// Reads a JSON profile. Omitted fields take their canonical values.
pub fn load_profile(path: &Path) -> Result<Profile, CliError> {
    let text = read(path)?;
    let profile = Profile::from_json(&text)?;
    info!(path = %path.display(), "loaded profile");
    Ok(profile)
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path)
        .map_err(|e| CliError::from(IconError::Io(format!("{}: {e}", path.display()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn catalog_skips_blank_lines_and_trims() {
        let f = file_with("cat\n\n  dog  \r\n\t\nbird\n");
        let catalog = load_catalog(f.path()).unwrap();
        assert_eq!(catalog, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn empty_catalog_file_loads_as_empty() {
        let f = file_with("");
        assert!(load_catalog(f.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_catalog_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn synthetic_catalog_counts_from_zero() {
        assert_eq!(synthetic_catalog(3), vec!["0", "1", "2"]);
        assert!(synthetic_catalog(0).is_empty());
    }

    #[test]
    fn partial_profile_keeps_canonical_layout() {
        let f = file_with(r#"{ "remap_primaries": true }"#);
        let profile = load_profile(f.path()).unwrap();
        assert!(profile.remap_primaries);
        assert_eq!(profile.background, Profile::default().background);
        assert_eq!(profile.hue_bits, 6);
    }

    #[test]
    fn malformed_profile_is_core_error() {
        let f = file_with("{ not json");
        let err = load_profile(f.path()).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn invalid_profile_is_rejected() {
        let f = file_with(r#"{ "hue_bits": 0 }"#);
        let err = load_profile(f.path()).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn missing_profile_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(&dir.path().join("profile.json")).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }
}
