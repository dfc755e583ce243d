// src/specs/mod.rs
//! # Report "specs" module
//!
//! Each spec encodes *where the data lives* in one kind of report page and
//! *how to pull it out*. Specs are pure: text in, shaped data out.
//!
//! ## What lives here
//! - **Pattern matching** over the raw report text (`regex`, compiled once).
//! - **Light shaping** into `data` types (`NameRankMap`, `ResultSequence`).
//!
//! ## What does **not** live here
//! - **Choosing outputs** (stdout vs `.summary` files), that is `runner`/`file`.
//! - **Argument parsing or logging setup**, that is `cli`/`log`.
//!
//! ## Conventions & invariants
//! - Matching is textual, not a DOM walk. A row that does not match the
//!   pattern exactly is skipped, never reported.
//! - No structural errors. Text with nothing recognisable extracts to `[""]`.
//! - Same input, same output: ordering comes from the map, not from hashing.
//!
//! ## Testing notes
//! - Specs are tested offline against inline HTML snippets.
pub mod popularity;
