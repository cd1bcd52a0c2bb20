//! `[series]` configuration read from the host site's TOML.
//!
//! The host generator owns the site config file; this module only reads the
//! `[series]` section and leaves every other section alone. All options are
//! optional and fall back to documented defaults, so a site with no
//! `[series]` section at all behaves correctly.
//!
//! | Option                    | Default | Purpose                                   |
//! |---------------------------|---------|-------------------------------------------|
//! | `is_date_sort`            | `false` | Sort unnumbered articles by publish date  |
//! | `is_series_index_enabled` | `true`  | Honor explicit `series_index` hints       |
//! | `ignore_series_titles`    | `[]`    | Series names treated as "no series"       |
//!
//! # Example
//!
//! ```toml
//! [series]
//! is_date_sort = false
//! is_series_index_enabled = true
//! ignore_series_titles = ["Drafts", "Scratch"]
//! ```

pub mod defaults;
mod error;

pub use error::ConfigError;

use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fs, path::Path};

/// View of the host's site TOML; everything but `[series]` is ignored.
#[derive(Debug, Default, Deserialize)]
struct HostConfig {
    #[serde(default)]
    series: SeriesConfig,
}

/// `[series]` section - series grouping configuration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// Sort unnumbered articles by publish date only.
    /// When false, the last-modified date is preferred if present.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub is_date_sort: bool,

    /// Honor explicit `series_index` ordering hints.
    /// When false, every article sorts by its derived date key.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub is_series_index_enabled: bool,

    /// Series titles treated as "no series": articles carrying one of these
    /// labels are excluded from grouping entirely.
    #[serde(default = "defaults::series::ignore_series_titles")]
    #[educe(Default = defaults::series::ignore_series_titles())]
    pub ignore_series_titles: BTreeSet<String>,
}

impl SeriesConfig {
    /// Parse the `[series]` section out of a full site TOML document.
    pub fn from_str(content: &str) -> Result<Self> {
        let host: HostConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(host.series)
    }

    /// Load configuration from a site TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Whether a series title is in the ignore set.
    pub fn ignored(&self, name: &str) -> bool {
        self.ignore_series_titles.contains(name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_with_nothing_set() {
        let config = SeriesConfig::from_str("").unwrap();
        assert!(!config.is_date_sort);
        assert!(config.is_series_index_enabled);
        assert!(config.ignore_series_titles.is_empty());
    }

    #[test]
    fn test_defaults_match_default_impl() {
        let parsed = SeriesConfig::from_str("").unwrap();
        let built = SeriesConfig::default();
        assert_eq!(parsed.is_date_sort, built.is_date_sort);
        assert_eq!(parsed.is_series_index_enabled, built.is_series_index_enabled);
        assert_eq!(parsed.ignore_series_titles, built.ignore_series_titles);
    }

    #[test]
    fn test_full_section() {
        let config = SeriesConfig::from_str(
            r#"
            [series]
            is_date_sort = true
            is_series_index_enabled = false
            ignore_series_titles = ["Drafts", "Scratch"]
        "#,
        )
        .unwrap();

        assert!(config.is_date_sort);
        assert!(!config.is_series_index_enabled);
        assert!(config.ignored("Drafts"));
        assert!(config.ignored("Scratch"));
        assert!(!config.ignored("Rust"));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = SeriesConfig::from_str(
            r#"
            [series]
            is_date_sort = true
        "#,
        )
        .unwrap();

        assert!(config.is_date_sort);
        assert!(config.is_series_index_enabled);
        assert!(config.ignore_series_titles.is_empty());
    }

    #[test]
    fn test_host_sections_tolerated() {
        // The host's own sections must not be rejected.
        let config = SeriesConfig::from_str(
            r#"
            [base]
            title = "My Blog"

            [build]
            output = "public"

            [series]
            ignore_series_titles = ["Misc"]
        "#,
        )
        .unwrap();

        assert!(config.ignored("Misc"));
    }

    #[test]
    fn test_unknown_series_key_rejection() {
        let result = SeriesConfig::from_str(
            r#"
            [series]
            is_date_sorted = true
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = SeriesConfig::from_str(
            r#"
            [series
            is_date_sort = true
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[series]\nis_date_sort = true").unwrap();

        let config = SeriesConfig::from_path(file.path()).unwrap();
        assert!(config.is_date_sort);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SeriesConfig::from_path(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
