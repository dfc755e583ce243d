// src/progress.rs
use std::path::Path;

use crate::error::ExtractionError;

/// Lightweight progress reporting for a batch run.
/// Front ends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of input files.
    fn begin(&mut self, _total: usize) {}

    /// One file extracted. `dest` is the summary file, `None` for stdout.
    fn file_done(&mut self, _input: &Path, _dest: Option<&Path>) {}

    /// One file skipped because of an I/O error (keep-going runs only).
    fn file_failed(&mut self, _input: &Path, _err: &ExtractionError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
