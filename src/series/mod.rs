//! Series grouping: the core transformation of a generation pass.
//!
//! Articles carrying a shared `series` label are grouped into ordered
//! sequences; each member is annotated with its position and neighbors, and
//! the aggregate map is returned for template publication.
//!
//! # Pass structure
//!
//! ```text
//! apply(articles, config)
//!     │
//!     ├── reset: clear prior annotations
//!     │
//!     ├── classify: route each labeled article into a per-series bucket
//!     │       numbered    (has series_index, hints enabled)
//!     │       unnumbered  (everything else; derived date key)
//!     │
//!     ├── order: sort each bucket, numbered bucket first
//!     │
//!     └── annotate: attach SeriesContext, collect SeriesMap
//! ```
//!
//! # Ordering rules
//!
//! | Bucket     | Key                                   | Order              |
//! |------------|---------------------------------------|--------------------|
//! | numbered   | `series_index` ([`IndexKey`])         | ascending, stable  |
//! | unnumbered | derived date ([`SortKey`])            | ascending, stable  |
//!
//! The two tiers are deliberate: a numbered article always precedes every
//! unnumbered one, regardless of how their key values compare. Articles with
//! no label, an empty label, or an ignored label are skipped entirely and
//! receive no annotation.

mod context;
mod key;

pub use context::{SeriesContext, SeriesMap, SeriesMember};
pub use key::{IndexKey, SortKey, sort_key};

use crate::{article::Article, config::SeriesConfig};
use std::{collections::BTreeMap, sync::Arc};

/// Per-series working buckets, keyed for sorting.
#[derive(Default)]
struct Buckets {
    numbered: Vec<(IndexKey, usize)>,
    unnumbered: Vec<(SortKey, usize)>,
}

/// Group articles into series and annotate every member.
///
/// Runs once per generation pass. Each run fully recomputes: prior
/// annotations are cleared first, so repeated runs over an unchanged list
/// are idempotent. The caller's slice order is never changed; the only
/// mutation is each qualifying article's annotation slot.
pub fn apply(articles: &mut [Article], config: &SeriesConfig) -> SeriesMap {
    for article in articles.iter_mut() {
        article.series = None;
    }

    // Classification
    let mut buckets: BTreeMap<String, Buckets> = BTreeMap::new();
    for (id, article) in articles.iter().enumerate() {
        let Some(name) = article.meta.series.as_deref() else {
            continue;
        };
        if name.is_empty() || config.ignored(name) {
            continue;
        }

        let slot = buckets.entry(name.to_owned()).or_default();
        match article.meta.series_index.as_ref() {
            Some(hint) if config.is_series_index_enabled && !hint.is_empty() => {
                slot.numbered.push((hint.clone(), id));
            }
            _ => {
                slot.unnumbered
                    .push((sort_key(&article.meta, config.is_date_sort), id));
            }
        }
    }

    // Ordering and annotation
    let mut map = SeriesMap::new();
    for (name, mut bucket) in buckets {
        bucket.numbered.sort_by(|a, b| a.0.cmp(&b.0));
        bucket.unnumbered.sort_by(|a, b| a.0.cmp(&b.0));

        let ordered: Vec<usize> = bucket
            .numbered
            .into_iter()
            .map(|(_, id)| id)
            .chain(bucket.unnumbered.into_iter().map(|(_, id)| id))
            .collect();

        // One shared allocation per series; every member's context and the
        // map entry reference the same sequence.
        let order: Arc<[SeriesMember]> = ordered
            .iter()
            .map(|&id| SeriesMember {
                id,
                url: articles[id].meta.url.clone(),
                title: articles[id].title().to_owned(),
                date: articles[id].meta.date.clone(),
            })
            .collect();

        for (num, &id) in ordered.iter().enumerate() {
            articles[id].series = Some(SeriesContext {
                name: name.clone(),
                index: num + 1,
                order: Arc::clone(&order),
            });
        }

        map.insert(name, order);
    }

    map
}

// ============================================================================
// Tests
// ============================================================================
