//! Error types for iconseed.
//!
//! The scrambling, confinement and color functions are total and never
//! produce these. Only parsing, configuration and catalog injection can fail.

use thiserror::Error;

/// Errors produced while building seeds, profiles, colors or generators.
#[derive(Debug, Error)]
pub enum IconError {
    /// A seed string was neither decimal nor `0x`-prefixed hex.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A generation profile had an unusable bit-field layout.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// The catalog cannot be split into two non-empty halves.
    #[error("catalog too small: need at least 2 entries, got {len}")]
    CatalogTooSmall { len: usize },

    /// The catalog is too long for both halves to be indexed with an `i32`.
    #[error("catalog too large: {len} entries, at most {} supported", crate::generator::MAX_CATALOG_LEN)]
    CatalogTooLarge { len: usize },

    /// Reading a catalog or profile from disk failed.
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_seed_includes_input() {
        let err = IconError::InvalidSeed("0xZZ".into());
        let msg = format!("{err}");
        assert!(msg.contains("0xZZ"), "missing input in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = IconError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_profile_includes_message() {
        let err = IconError::InvalidProfile("hue_bits must be in 1..=16".into());
        let msg = format!("{err}");
        assert!(msg.contains("hue_bits"), "missing message in: {msg}");
    }

    #[test]
    fn catalog_too_small_includes_length() {
        let err = IconError::CatalogTooSmall { len: 1 };
        let msg = format!("{err}");
        assert!(msg.contains("got 1"), "missing length in: {msg}");
    }

    #[test]
    fn catalog_too_large_includes_length() {
        let err = IconError::CatalogTooLarge { len: 9_000_000_000 };
        let msg = format!("{err}");
        assert!(msg.contains("9000000000"), "missing length in: {msg}");
        assert!(msg.contains("2147483647"), "missing limit in: {msg}");
    }

    #[test]
    fn icon_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IconError>();
    }

    #[test]
    fn icon_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<IconError>();
    }
}
