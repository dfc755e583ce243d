// src/runner.rs
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    config::options::{ErrorPolicy, OutputMode, RunOptions},
    error::{ExtractionError, Result},
    file,
    progress::Progress,
    specs::popularity,
};

/// Summary of what a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files extracted successfully.
    pub processed: usize,
    pub summaries_written: Vec<PathBuf>,
    /// Files skipped under `ErrorPolicy::SkipAndContinue`, with the error text.
    pub failed: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn all_ok(&self) -> bool { self.failed.is_empty() }
}

/// Run the batch with stdout as the direct-mode sink.
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(opts, &mut out, progress)
}

/// Process `opts.files` in order. Direct-mode blocks go to `out`; summary
/// mode writes `<file>.summary` and leaves `out` untouched.
pub fn run_with<W: Write>(
    opts: &RunOptions,
    out: &mut W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.files.len());
    }

    let result = run_files(opts, out, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_files<W: Write>(
    opts: &RunOptions,
    out: &mut W,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for input in &opts.files {
        match process_one(input, opts.output, out) {
            Ok(dest) => {
                summary.processed += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.file_done(input, dest.as_deref());
                }
                summary.summaries_written.extend(dest);
            }
            // A broken stdout is not this file's fault; stop regardless of policy.
            Err(e @ ExtractionError::Stdout(_)) => return Err(e),
            Err(e) => match opts.on_error {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::SkipAndContinue => {
                    warn!(file = %input.display(), error = %e, cause = %e.io_error(), "skipping file");
                    if let Some(p) = progress.as_deref_mut() {
                        p.file_failed(input, &e);
                    }
                    summary.failed.push((input.clone(), format!("{e}: {}", e.io_error())));
                }
            },
        }
    }

    Ok(summary)
}

fn process_one<W: Write>(input: &Path, mode: OutputMode, out: &mut W) -> Result<Option<PathBuf>> {
    debug!(file = %input.display(), "extracting");
    let seq = popularity::extract_file(input)?;
    match mode {
        OutputMode::Stdout => {
            file::write_block(out, &seq)?;
            Ok(None)
        }
        OutputMode::SummaryFile => file::write_summary(input, &seq).map(Some),
    }
}
