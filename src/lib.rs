//! Strand - article series grouping for static-site pipelines.
//!
//! Groups articles carrying a shared `series` label into ordered sequences,
//! annotates each member with its position and neighbors, and publishes the
//! aggregate `all_series` collection for the rendering layer.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`series`] | The grouping pass: classification, ordering, annotation |
//! | [`article`] | Article records and their metadata view |
//! | [`config`] | `[series]` options from the host site's TOML |
//! | [`data`] | Serializable template views and the `all_series` variable |
//! | [`pipeline`] | The generation-pass entry point, [`pipeline::organize`] |
//! | [`utils`] | Date parsing/ordering and logging |
//!
//! # Usage
//!
//! ```
//! use strand::{Article, ArticleMeta, SeriesConfig, TemplateContext, pipeline};
//!
//! let mut articles = vec![
//!     Article::new(ArticleMeta {
//!         url: "/posts/intro/".into(),
//!         title: Some("Intro".into()),
//!         series: Some("Rust".into()),
//!         ..ArticleMeta::default()
//!     }),
//! ];
//!
//! let config = SeriesConfig::default();
//! let mut ctx = TemplateContext::new();
//! let map = pipeline::organize(&mut articles, &config, &mut ctx).unwrap();
//!
//! assert_eq!(map["Rust"].len(), 1);
//! assert_eq!(articles[0].series.as_ref().unwrap().index, 1);
//! ```

pub mod article;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod series;
pub mod utils;

pub use article::{Article, ArticleMeta};
pub use config::SeriesConfig;
pub use data::{SeriesData, TemplateContext};
pub use series::{SeriesContext, SeriesMap, SeriesMember};
