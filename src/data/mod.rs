//! Template data publication.
//!
//! Converts the series map and per-article annotations into the serializable
//! values the rendering layer consults by name.
//!
//! # Template Variables
//!
//! | Name | Shape | Description |
//! |------|-------|-------------|
//! | `all_series` | `{name: [article, ...]}` | Every series with its ordered articles |
//! | `series.name` | string | Series name of the current article |
//! | `series.index` | number | 1-based position within the series |
//! | `series.all` | `[article, ...]` | Full ordered sequence |
//! | `series.all_previous` | `[article, ...]` | Members before the current article |
//! | `series.all_next` | `[article, ...]` | Members after the current article |
//! | `series.previous` | article or absent | Immediate predecessor |
//! | `series.next` | article or absent | Immediate successor |
//!
//! The `series.*` lookups come from [`SeriesData`], built per article from
//! its attached context; `all_series` is inserted into the
//! [`TemplateContext`] by [`publish_series`].

mod context;
mod types;

pub use context::{ALL_SERIES_KEY, TemplateContext, publish_series};
pub use types::{SeriesArticleData, SeriesData};
