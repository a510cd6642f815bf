// csv2consensus entry point.
//
// Converts a FantasyPros PPR cheatsheet CSV into the consensus.json document
// the war-room app loads at startup. One optional positional argument: the
// input CSV path. Output always goes to consensus.json in the working
// directory.

use consensus_converter::consensus::{self, ConsensusDoc};
use consensus_converter::rankings;

use anyhow::Context;
use chrono::Utc;
use std::path::Path;
use tracing::info;

const DEFAULT_INPUT: &str = "FantasyPros_2025_Draft_ALL_Rankings.csv";
const OUTPUT_PATH: &str = "consensus.json";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    info!("converting {} -> {}", input, OUTPUT_PATH);

    let players = rankings::load_rankings(Path::new(&input))
        .with_context(|| format!("failed to load rankings from {input}"))?;
    info!("normalized {} players", players.len());

    let doc = ConsensusDoc::new(players, Utc::now());
    consensus::write_consensus(&doc, Path::new(OUTPUT_PATH))
        .context("failed to write consensus.json")?;

    println!("Wrote {OUTPUT_PATH}");
    Ok(())
}

/// Initialize tracing to stderr so warnings about skipped rows are visible
/// without polluting the confirmation message on stdout.
fn init_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
