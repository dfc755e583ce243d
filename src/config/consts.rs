// src/config/consts.rs

// Report layout
pub const YEAR_PREFIX: &str = "Popularity in ";

// Export
pub const SUMMARY_SUFFIX: &str = ".summary";

// Logging
pub const LOG_ENV: &str = "BABYNAMES_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
