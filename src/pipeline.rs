use tracing::info;

use crate::config::RankingConfig;
use crate::output::{write_ranking, OutputError};
use crate::render::render_with_digest;
use crate::selection::Ranker;
use crate::types::{Item, RenderedRanking};

/// Rank, render and write `items` according to `config`.
///
/// Printing is left to the caller.
pub fn run(items: &[Item], config: &RankingConfig) -> Result<RenderedRanking, OutputError> {
    let ranking = Ranker::new(config.limit).rank(items);
    let rendered = render_with_digest(&ranking.items);

    write_ranking(&config.output_path, &rendered.markdown)?;

    info!(
        path = %config.output_path.display(),
        items_selected = ranking.selection.items_selected,
        digest = %rendered.digest,
        "ranking written"
    );

    Ok(rendered)
}
