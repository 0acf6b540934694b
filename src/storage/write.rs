use crate::analyzers::RankedToken;

use anyhow::{Context, Result};
use std::fs::File;

#[derive(serde::Serialize, Debug)]
struct RankingRow {
    id: u64,
    rank: usize,
    nri: f64,
}

/// Writes the flat NRI array, positionally aligned with the engine input.
pub fn write_nri(path: &str, ranked: &[RankedToken]) -> Result<()> {
    let nri: Vec<f64> = ranked.iter().map(|t| t.nri).collect();
    let file = File::create(path).with_context(|| format!("cannot create {}", path))?;
    serde_json::to_writer(file, &nri).map_err(|e| e.into())
}

/// Writes the full per-token ranking, one row per token in input order.
pub fn write_ranking(path: &str, ranked: &[RankedToken]) -> Result<()> {
    let rows: Vec<RankingRow> = ranked
        .iter()
        .map(|t| RankingRow {
            id: t.id,
            rank: t.rank,
            nri: t.nri,
        })
        .collect();

    let file = File::create(path).with_context(|| format!("cannot create {}", path))?;
    serde_json::to_writer_pretty(file, &rows).map_err(|e| e.into())
}
