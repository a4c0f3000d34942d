pub mod markdown;

use crate::types::{Item, RenderedRanking};
pub use markdown::{MarkdownRenderer, Renderer, HEADER};

/// Render items, in the order given, as a Markdown ranking.
pub fn render(items: &[Item]) -> String {
    MarkdownRenderer.render(items)
}

pub fn render_with_digest(items: &[Item]) -> RenderedRanking {
    RenderedRanking::new(render(items))
}
