// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod file;
#[cfg(feature = "cli")]
pub mod log;
pub mod progress;
pub mod runner;
pub mod specs;

pub use data::{NameRankMap, RankEntry, ResultSequence};
pub use error::ExtractionError;
pub use specs::popularity::{extract, extract_file};
