//! Article records as supplied by the host generator.
//!
//! The host content system owns the articles; this crate reads their
//! metadata and writes exactly one field, the [`series`](Article::series)
//! annotation slot. The annotation is valid for one generation pass and is
//! overwritten (or cleared) on every run.

use crate::series::{IndexKey, SeriesContext};
use serde::Deserialize;

/// Metadata for a single article, deserialized from whatever frontmatter
/// format the host uses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArticleMeta {
    /// Article URL path; the stable identity within a generation pass.
    pub url: String,

    pub title: Option<String>,

    /// Publication date string ("YYYY-MM-DD" or RFC3339).
    pub date: Option<String>,

    /// Last update date string, same formats as `date`.
    pub update: Option<String>,

    /// Series label; absent or empty means the article belongs to no series.
    #[serde(default)]
    pub series: Option<String>,

    /// Explicit ordering hint within the series. Accepts an integer, float,
    /// or string value.
    #[serde(default)]
    pub series_index: Option<IndexKey>,
}

/// A content article flowing through the generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub meta: ArticleMeta,

    /// Series annotation, attached by [`series::apply`](crate::series::apply).
    /// `None` until a pass runs, and for articles outside any series.
    pub series: Option<SeriesContext>,
}

impl Article {
    pub fn new(meta: ArticleMeta) -> Self {
        Self { meta, series: None }
    }

    /// Display title, falling back to the URL when none is set.
    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(&self.meta.url)
    }
}
