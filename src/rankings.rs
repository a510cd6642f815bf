// Rankings CSV loading and normalization.
//
// Reads the FantasyPros PPR cheatsheet export: one row per player with rank,
// name, team, position, bye and tier columns plus three ECR-vs-ADP note
// columns. Two of the note headers carry a trailing space in the export; the
// serde renames below match them byte for byte.

use crate::coerce::{to_float, to_int};
use crate::consensus::{Notes, Player};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::warn;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RankingsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private) — FantasyPros cheatsheet format
// ---------------------------------------------------------------------------

/// Raw cheatsheet row. Every column is optional so a missing column or a
/// short row degrades to per-field defaults instead of failing the file.
/// Extra columns are ignored by the csv reader.
#[derive(Debug, Deserialize)]
struct RawRankingRow {
    #[serde(rename = "RK", default)]
    rk: Option<String>,
    #[serde(rename = "PLAYER NAME", default)]
    player_name: Option<String>,
    #[serde(rename = "TEAM", default)]
    team: Option<String>,
    #[serde(rename = "POS", default)]
    pos: Option<String>,
    #[serde(rename = "BYE WEEK", default)]
    bye_week: Option<String>,
    #[serde(rename = "TIERS", default)]
    tiers: Option<String>,
    #[serde(rename = "ECR VS. ADP", default)]
    ecr_vs_adp: Option<String>,
    // FantasyPros ships these two headers with a trailing space.
    #[serde(rename = "AVG. DIFF ", default)]
    avg_diff: Option<String>,
    #[serde(rename = "% OVER ", default)]
    pct_over: Option<String>,
}

// ---------------------------------------------------------------------------
// Row transform
// ---------------------------------------------------------------------------

/// Normalize one raw row into a `Player`, or `None` when the row has no
/// player name and is dropped.
///
/// `accepted_so_far` is the count of rows already accepted; it backs the id
/// fallback. A parsed rank of exactly 0 also triggers the fallback (the
/// upstream converter treated rank as truthy), while `ecr` keeps the parsed
/// value faithfully in that case.
fn player_from_row(raw: &RawRankingRow, accepted_so_far: usize) -> Option<Player> {
    let name = raw.player_name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        return None;
    }

    let rank = to_int(raw.rk.as_deref());
    let id = match rank {
        Some(r) if r != 0 => r,
        _ => (accepted_so_far + 1) as i64,
    };

    Some(Player {
        id,
        player: name.to_string(),
        pos: raw.pos.as_deref().unwrap_or("").trim().to_uppercase(),
        team: raw.team.as_deref().unwrap_or("").trim().to_string(),
        bye: to_int(raw.bye_week.as_deref()).unwrap_or(0),
        ecr: rank,
        adp: None,
        proj_ppr: 0.0,
        receptions: 0.0,
        risk: 0.0,
        tier: to_int(raw.tiers.as_deref()).unwrap_or(0),
        notes: Notes {
            // Raw passthrough, untrimmed; empty string means absent.
            ecr_vs_adp: raw.ecr_vs_adp.clone().filter(|s| !s.is_empty()),
            avg_diff: to_float(raw.avg_diff.as_deref()),
            pct_over: to_float(raw.pct_over.as_deref()),
        },
    })
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_rankings_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

    // An unreadable header row means the table as a whole is unusable, which
    // is fatal, unlike individual malformed rows below.
    reader.headers()?;

    let mut players = Vec::new();
    for result in reader.deserialize::<RawRankingRow>() {
        match result {
            Ok(raw) => match player_from_row(&raw, players.len()) {
                Some(player) => players.push(player),
                None => warn!("skipping row with empty player name"),
            },
            Err(e) => {
                warn!("skipping malformed ranking row: {}", e);
            }
        }
    }
    Ok(players)
}

// ---------------------------------------------------------------------------
// Public path-based loader
// ---------------------------------------------------------------------------

/// Load and normalize player rankings from a cheatsheet CSV file.
pub fn load_rankings(path: &Path) -> Result<Vec<Player>, RankingsError> {
    let file = std::fs::File::open(path).map_err(|e| RankingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_rankings_from_reader(file).map_err(|e| RankingsError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
