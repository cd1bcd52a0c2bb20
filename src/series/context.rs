//! Per-article series context and the aggregate series map.

use std::{collections::BTreeMap, sync::Arc};

/// Map from series name to its fully ordered member sequence.
///
/// Rebuilt fresh each generation pass. The stored `Arc` is the same
/// allocation referenced by every member's [`SeriesContext`], not a copy.
pub type SeriesMap = BTreeMap<String, Arc<[SeriesMember]>>;

/// A lightweight article reference within an ordered series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesMember {
    /// Position of the article in the caller's slice.
    pub id: usize,

    /// Article URL path.
    pub url: String,

    /// Article display title.
    pub title: String,

    /// Publication date string, if any.
    pub date: Option<String>,
}

/// Annotation describing an article's position and neighbors within its
/// series.
///
/// `order` is shared by every member of the series, so the neighbor views
/// are slices around `index` rather than copies; `all_previous`, the article
/// itself, and `all_next` always reconstruct `all` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesContext {
    /// Series name.
    pub name: String,

    /// 1-based position within `order`.
    pub index: usize,

    /// The full ordered sequence of the series' articles.
    pub order: Arc<[SeriesMember]>,
}

impl SeriesContext {
    /// The full ordered sequence.
    pub fn all(&self) -> &[SeriesMember] {
        &self.order
    }

    /// Members before this article, in order.
    pub fn all_previous(&self) -> &[SeriesMember] {
        &self.order[..self.index - 1]
    }

    /// Members after this article, in order.
    pub fn all_next(&self) -> &[SeriesMember] {
        &self.order[self.index..]
    }

    /// The immediately preceding member, absent for the first article.
    pub fn previous(&self) -> Option<&SeriesMember> {
        self.all_previous().last()
    }

    /// The immediately following member, absent for the last article.
    pub fn next(&self) -> Option<&SeriesMember> {
        self.all_next().first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: usize, url: &str) -> SeriesMember {
        SeriesMember {
            id,
            url: url.to_owned(),
            title: url.to_owned(),
            date: None,
        }
    }

    fn context_at(index: usize) -> SeriesContext {
        let order: Arc<[SeriesMember]> = [
            member(0, "/a/"),
            member(1, "/b/"),
            member(2, "/c/"),
        ]
        .into();

        SeriesContext {
            name: "Test".into(),
            index,
            order,
        }
    }

    #[test]
    fn test_first_member_boundaries() {
        let ctx = context_at(1);
        assert!(ctx.previous().is_none());
        assert_eq!(ctx.next().map(|m| m.url.as_str()), Some("/b/"));
        assert!(ctx.all_previous().is_empty());
        assert_eq!(ctx.all_next().len(), 2);
    }

    #[test]
    fn test_middle_member_neighbors() {
        let ctx = context_at(2);
        assert_eq!(ctx.previous().map(|m| m.url.as_str()), Some("/a/"));
        assert_eq!(ctx.next().map(|m| m.url.as_str()), Some("/c/"));
        assert_eq!(ctx.all_previous().len(), 1);
        assert_eq!(ctx.all_next().len(), 1);
    }

    #[test]
    fn test_last_member_boundaries() {
        let ctx = context_at(3);
        assert_eq!(ctx.previous().map(|m| m.url.as_str()), Some("/b/"));
        assert!(ctx.next().is_none());
        assert_eq!(ctx.all_previous().len(), 2);
        assert!(ctx.all_next().is_empty());
    }

    #[test]
    fn test_views_reconstruct_all() {
        for index in 1..=3 {
            let ctx = context_at(index);
            let mut rebuilt: Vec<SeriesMember> = ctx.all_previous().to_vec();
            rebuilt.push(ctx.all()[ctx.index - 1].clone());
            rebuilt.extend_from_slice(ctx.all_next());
            assert_eq!(rebuilt.as_slice(), ctx.all());
        }
    }

    #[test]
    fn test_single_member_series() {
        let order: Arc<[SeriesMember]> = [member(0, "/only/")].into();
        let ctx = SeriesContext {
            name: "Solo".into(),
            index: 1,
            order,
        };

        assert!(ctx.previous().is_none());
        assert!(ctx.next().is_none());
        assert!(ctx.all_previous().is_empty());
        assert!(ctx.all_next().is_empty());
        assert_eq!(ctx.all().len(), 1);
    }
}
