// src/file.rs

use std::{
    ffi::OsString,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::consts::SUMMARY_SUFFIX;
use crate::data::ResultSequence;
use crate::error::{ExtractionError, Result};

/// Whole report as text.
pub fn read_report(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ExtractionError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// `<path>.summary`, suffix appended to the full name (`baby1990.html.summary`).
pub fn summary_path(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(SUMMARY_SUFFIX);
    PathBuf::from(s)
}

/// Create/truncate the summary file for `input` and write the newline-joined
/// sequence (no trailing newline). Returns the path written to.
pub fn write_summary(input: &Path, seq: &ResultSequence) -> Result<PathBuf> {
    let path = summary_path(input);
    fs::write(&path, seq.to_text()).map_err(|source| ExtractionError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), lines = seq.lines().len(), "wrote summary");
    Ok(path)
}

/// Direct-mode block: the newline-joined sequence plus one closing newline.
pub fn write_block<W: Write>(out: &mut W, seq: &ResultSequence) -> Result<()> {
    writeln!(out, "{seq}").map_err(ExtractionError::Stdout)
}
