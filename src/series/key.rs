//! Sort keys for series ordering.
//!
//! Two key types, one per bucket:
//!
//! - [`IndexKey`] orders the numbered bucket. Frontmatter stores
//!   `series_index` as an integer, float, or string; all forms collapse into
//!   a single total order so a mixed series can never fail to sort.
//! - [`SortKey`] orders the unnumbered bucket: a derived date, with `None`
//!   as the minimal sentinel for missing or malformed dates.

use crate::{article::ArticleMeta, utils::date::DateTimeUtc};
use serde::Deserialize;
use std::cmp::Ordering;

// ============================================================================
// IndexKey
// ============================================================================

/// Typed `series_index` ordering hint.
///
/// Total order: the numeric tier sorts before the text tier; numbers compare
/// numerically, text compares lexically. Strings that parse as integers
/// ("2", " 10 ") land in the numeric tier, so `series_index = 2` and
/// `series_index = "2"` order identically. Floats and everything else keep
/// their literal text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexKey {
    Num(i64),
    Text(String),
}

impl IndexKey {
    /// Classify a raw text value: integer parse with string fallback.
    pub fn from_text(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => Self::Num(n),
            Err(_) => Self::Text(raw.to_owned()),
        }
    }

    /// An empty or whitespace-only hint counts as "no hint" during
    /// classification.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Num(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl Ord for IndexKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Num(a), Self::Num(b)) => a.cmp(b),
            (Self::Num(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Num(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for IndexKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'de> Deserialize<'de> for IndexKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self::Num(n),
            // Non-integral hints keep their literal form in the text tier.
            Raw::Float(f) => Self::from_text(&f.to_string()),
            Raw::Text(s) => Self::from_text(&s),
        })
    }
}

// ============================================================================
// SortKey
// ============================================================================

/// Derived date key for unnumbered articles.
///
/// `None` (missing or unparseable date) orders before every real date via
/// `Option`'s derived `Ord`, keeping the sort total without a panic path.
pub type SortKey = Option<DateTimeUtc>;

/// Compute the date sort key for an unnumbered article.
///
/// With `is_date_sort` the publish date is used as-is; otherwise the
/// last-modified date is preferred when present and non-empty.
pub fn sort_key(meta: &ArticleMeta, is_date_sort: bool) -> SortKey {
    let raw = if is_date_sort {
        meta.date.as_deref()
    } else {
        meta.update
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(meta.date.as_deref())
    };

    raw.and_then(DateTimeUtc::parse)
}

// ============================================================================
// Tests
// ============================================================================
