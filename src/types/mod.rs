pub mod identifiers;
pub mod item;
pub mod ranking_result;

pub use identifiers::{Limit, RenderDigest};
pub use item::Item;
pub use ranking_result::{RankingMetadata, RankingResult, RenderedRanking};
