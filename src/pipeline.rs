//! Generation-pass integration.
//!
//! The host generator calls [`organize`] once per pass, after every article
//! for the pass is loaded and before rendering starts. Articles and
//! configuration arrive as plain arguments; there is no registration step
//! and no global state, so repeated builds (watch mode) just call again.

use crate::{
    article::Article,
    config::SeriesConfig,
    data::{TemplateContext, publish_series},
    log,
    series::{self, SeriesMap},
};
use anyhow::Result;

/// Run the series grouping stage of a generation pass.
///
/// Annotates every qualifying article, publishes `all_series` into the
/// template context, and returns the series map.
pub fn organize(
    articles: &mut [Article],
    config: &SeriesConfig,
    ctx: &mut TemplateContext,
) -> Result<SeriesMap> {
    let map = series::apply(articles, config);
    publish_series(&map, ctx)?;

    let grouped = articles.iter().filter(|a| a.series.is_some()).count();
    log!("series"; "grouped {} articles into {} series", grouped, map.len());

    Ok(map)
}
