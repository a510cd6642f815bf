// Output document model and writer.
//
// The war-room app loads consensus.json at startup. Field order and the
// always-present placeholder fields (adp, proj_ppr, receptions, risk) are
// part of its contract, so the serde structs spell out every field even
// though this converter never populates some of them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::Path;

/// Tag identifying where the player data came from.
pub const SOURCE_TAG: &str = "FantasyPros CSV (PPR Cheatsheet download)";

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

/// Free-form annotations carried alongside each player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notes {
    /// Raw ECR-vs-ADP cell, passed through untouched; null when the source
    /// cell is absent or empty.
    pub ecr_vs_adp: Option<String>,
    pub avg_diff: Option<f64>,
    pub pct_over: Option<f64>,
}

/// One normalized player entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    /// Never null: the parsed rank, or the 1-based position among accepted
    /// rows when the rank is missing or zero.
    pub id: i64,
    pub player: String,
    pub pos: String,
    pub team: String,
    pub bye: i64,
    /// The parsed rank as-is; stays null when the cell was unparseable,
    /// unlike `id` which falls back to a sequence number.
    pub ecr: Option<i64>,
    /// Reserved for ADP data from a different source; always null here.
    pub adp: Option<f64>,
    pub proj_ppr: f64,
    pub receptions: f64,
    pub risk: f64,
    pub tier: i64,
    pub notes: Notes,
}

/// The full consensus.json document.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusDoc {
    pub source: String,
    pub updated_at: String,
    pub players: Vec<Player>,
}

impl ConsensusDoc {
    /// Assemble the document. The timestamp is a parameter rather than a
    /// wall-clock read so tests can supply a fixed instant.
    pub fn new(players: Vec<Player>, generated_at: DateTime<Utc>) -> Self {
        Self {
            source: SOURCE_TAG.to_string(),
            updated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            players,
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to serialize consensus document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Serialize the document as indented JSON and overwrite `path`.
///
/// The document is rendered to a string first and written with a single
/// filesystem call; a serialization failure leaves no output file behind.
pub fn write_consensus(doc: &ConsensusDoc, path: &Path) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json).map_err(|e| WriteError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
