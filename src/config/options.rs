// src/config/options.rs
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub output: OutputMode,
    pub files: Vec<PathBuf>,
    pub on_error: ErrorPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output: OutputMode::Stdout,
            files: Vec::new(),
            on_error: ErrorPolicy::Abort,
        }
    }
}

impl RunOptions {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn summary_file(mut self, on: bool) -> Self {
        self.output = if on { OutputMode::SummaryFile } else { OutputMode::Stdout };
        self
    }

    pub fn keep_going(mut self, on: bool) -> Self {
        self.on_error = if on { ErrorPolicy::SkipAndContinue } else { ErrorPolicy::Abort };
        self
    }
}

/// Where each file's result goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// One newline-joined block per file on stdout.
    Stdout,
    /// `<input>.summary` next to each input, overwritten if present.
    SummaryFile,
}

/// What a read/write failure on one file does to the rest of the batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    Abort,
    SkipAndContinue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdout_and_abort() {
        let o = RunOptions::new(["a.html", "b.html"]);
        assert_eq!(o.output, OutputMode::Stdout);
        assert_eq!(o.on_error, ErrorPolicy::Abort);
        assert_eq!(o.files, vec![PathBuf::from("a.html"), PathBuf::from("b.html")]);
    }

    #[test]
    fn builder_flags_flip_modes() {
        let o = RunOptions::new(["x"]).summary_file(true).keep_going(true);
        assert_eq!(o.output, OutputMode::SummaryFile);
        assert_eq!(o.on_error, ErrorPolicy::SkipAndContinue);
    }
}
