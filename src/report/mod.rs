//! Report renderers for a conversion run.
//!
//! - [`terminal`] — generated file list and load order; respects `--verbose` / `--quiet`.
//!
//! JSON output is the serialized [`Manifest`](crate::models::Manifest).

pub mod terminal;
