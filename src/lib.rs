//! Deterministic top-N ranking of scored items, rendered as Markdown.
//!
//! `top-ranking` selects the highest-scoring items from an unordered
//! collection and renders them as a Markdown bulleted list. Selection is a
//! stable sort followed by a truncation, so identical inputs always produce
//! identical outputs, byte-for-byte.

pub mod config;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod selection;
pub mod types;

pub use config::RankingConfig;
pub use output::{write_ranking, OutputError};
pub use pipeline::run;
pub use render::render;
pub use selection::{select, Ranker, DEFAULT_LIMIT};
pub use types::Item;
