//! The named-value context consulted by the rendering layer.

use crate::series::SeriesMap;
use anyhow::Result;
use serde_json::Value;
use std::collections::BTreeMap;

use super::types::SeriesArticleData;

/// Template variable name for the aggregate series index.
pub const ALL_SERIES_KEY: &str = "all_series";

/// String-keyed values the rendering layer looks up by name.
///
/// Owned by the host generator; this crate only inserts into it.
#[derive(Debug, Default)]
pub struct TemplateContext {
    values: BTreeMap<String, Value>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a named value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Look up a value by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Publish the series map into the context under [`ALL_SERIES_KEY`].
///
/// Replaces any value from a previous pass.
pub fn publish_series(map: &SeriesMap, ctx: &mut TemplateContext) -> Result<()> {
    let index: BTreeMap<&str, Vec<SeriesArticleData>> = map
        .iter()
        .map(|(name, order)| (name.as_str(), order.iter().map(Into::into).collect()))
        .collect();

    ctx.insert(ALL_SERIES_KEY, serde_json::to_value(index)?);
    Ok(())
}
