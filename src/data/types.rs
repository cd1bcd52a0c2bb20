//! Serializable series data exposed to templates.

use crate::{article::Article, series::{SeriesContext, SeriesMember}};
use serde::Serialize;

/// An article reference within a series listing.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesArticleData {
    /// Article URL path
    pub url: String,

    /// Article title
    pub title: String,

    /// Publication date string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl From<&SeriesMember> for SeriesArticleData {
    fn from(member: &SeriesMember) -> Self {
        Self {
            url: member.url.clone(),
            title: member.title.clone(),
            date: member.date.clone(),
        }
    }
}

/// Per-article series context under the `series.*` template lookups.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    /// Series name
    pub name: String,

    /// 1-based position within the series
    pub index: usize,

    /// Full ordered sequence of the series' articles
    pub all: Vec<SeriesArticleData>,

    /// Members before this article
    pub all_previous: Vec<SeriesArticleData>,

    /// Members after this article
    pub all_next: Vec<SeriesArticleData>,

    /// Immediate predecessor (absent for the first article)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<SeriesArticleData>,

    /// Immediate successor (absent for the last article)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<SeriesArticleData>,
}

impl SeriesData {
    /// Build the template view for an annotated article.
    ///
    /// Returns `None` for articles outside any series.
    pub fn for_article(article: &Article) -> Option<Self> {
        article.series.as_ref().map(Self::from_context)
    }

    fn from_context(ctx: &SeriesContext) -> Self {
        Self {
            name: ctx.name.clone(),
            index: ctx.index,
            all: ctx.all().iter().map(Into::into).collect(),
            all_previous: ctx.all_previous().iter().map(Into::into).collect(),
            all_next: ctx.all_next().iter().map(Into::into).collect(),
            previous: ctx.previous().map(Into::into),
            next: ctx.next().map(Into::into),
        }
    }
}
