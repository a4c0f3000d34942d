//! Demo entry point: ranks a fixed dataset and writes `ranking.md`.

use anyhow::{Context, Result};

use top_ranking::{logging, run, Item, RankingConfig};

fn demo_items() -> Vec<Item> {
    vec![
        Item::new("alpha", 9.2),
        Item::new("beta", 7.8),
        Item::new("gamma", 8.6),
        Item::new("delta", 9.5),
    ]
}

fn main() -> Result<()> {
    if let Err(e) = logging::init_tracing() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let config = RankingConfig::v0();
    let rendered = run(&demo_items(), &config)
        .with_context(|| format!("ranking run failed (limit {})", config.limit))?;

    println!("{}", rendered.markdown);
    Ok(())
}
