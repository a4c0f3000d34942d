use serde::{Deserialize, Serialize};

use crate::types::identifiers::RenderDigest;
use crate::types::item::Item;

/// Metadata describing the outcome of a ranking pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingMetadata {
    pub limit: usize,

    pub items_considered: usize,
    pub items_selected: usize,
    pub items_excluded_by_limit: usize,
}

/// The final result of a ranking pass: the kept items, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub items: Vec<Item>,
    pub selection: RankingMetadata,
}

/// Rendered Markdown together with its content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRanking {
    pub markdown: String,
    pub digest: RenderDigest,
}

impl RenderedRanking {
    pub fn new(markdown: String) -> Self {
        let digest = RenderDigest::from_text(&markdown);
        Self { markdown, digest }
    }
}
