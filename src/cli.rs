// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::WrapErr;
use tracing::info;

use crate::config::options::RunOptions;
use crate::progress::Progress;

/// Extracts and alphabetizes baby names from popularity report HTML.
#[derive(Parser, Debug)]
#[command(name = "babynames", version, arg_required_else_help = true)]
pub struct Args {
    /// Write `<file>.summary` next to each input instead of printing
    #[arg(long = "summaryfile", visible_alias = "summary-file")]
    pub summary_file: bool,

    /// Skip unreadable files instead of stopping at the first one
    #[arg(long)]
    pub keep_going: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Report file(s) to parse
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Args {
    pub fn into_options(self) -> RunOptions {
        RunOptions::new(self.files)
            .summary_file(self.summary_file)
            .keep_going(self.keep_going)
    }
}

/// Progress sink that turns runner callbacks into log lines.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        info!(total, "processing reports");
    }
    fn file_done(&mut self, input: &Path, dest: Option<&Path>) {
        match dest {
            Some(d) => info!(file = %input.display(), summary = %d.display(), "done"),
            None => info!(file = %input.display(), "done"),
        }
    }
}

/// Parse process args and run. `Ok(false)` means some files were skipped
/// (each one already logged at warn level).
pub fn run() -> color_eyre::Result<bool> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    run_args(args)
}

pub fn run_args(args: Args) -> color_eyre::Result<bool> {
    let opts = args.into_options();
    let summary = crate::runner::run(&opts, Some(&mut LogProgress))
        .wrap_err("extraction run aborted")?;
    Ok(summary.all_ok())
}
