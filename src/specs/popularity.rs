// src/specs/popularity.rs
//! Spec for the yearly baby-name popularity report.
//!
//! The page looks like:
//! ```text
//! <h3 align="center">Popularity in 1990</h3>
//! <tr align="right"><td>1</td><td>Michael</td><td>Jessica</td>
//! <tr align="right"><td>2</td><td>Christopher</td><td>Ashley</td>
//! ```
//! Output is `[year, "name rank", ...]` with names sorted ascending.
//! Rows whose name cells hold anything besides letters, numbers or `_` are skipped.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::consts::YEAR_PREFIX;
use crate::data::{NameRankMap, RankEntry, ResultSequence};
use crate::error::Result;
use crate::file;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&join!(&regex::escape(YEAR_PREFIX), r"(\d+)")).expect("year pattern")
});

/// Name cells are letters, numbers and `_` only. Marks and other connector
/// punctuation end the cell, so the row does not match.
const NAME: &str = r"([\p{L}\p{N}_]+)";

static ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&join!(r"<td>(\d+)</td><td>", NAME, "</td><td>", NAME, "</td>")).expect("row pattern")
});

/// Every `Popularity in N` digit group, joined with no separator.
/// Usually one marker, so usually just the year. No marker gives `""`.
pub fn year_marker(doc: &str) -> String {
    YEAR_RE
        .captures_iter(doc)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// All `<td>rank</td><td>name</td><td>name</td>` rows, in document order.
pub fn rank_rows(doc: &str) -> Vec<RankEntry> {
    ROW_RE
        .captures_iter(doc)
        .map(|c| RankEntry::new(&c[1], &c[2], &c[3]))
        .collect()
}

pub fn extract(doc: &str) -> ResultSequence {
    let year = year_marker(doc);
    let rows = rank_rows(doc);
    let names = NameRankMap::from_rows(&rows);
    debug!(year = %year, rows = rows.len(), names = names.len(), "extracted report");
    ResultSequence::new(year, &names)
}

/// Read `path` and extract it. Only I/O can fail.
pub fn extract_file(path: &Path) -> Result<ResultSequence> {
    let doc = file::read_report(path)?;
    Ok(extract(&doc))
}
