//! SQL text generation.
//!
//! - [`escape`] — the single place where values become SQL literals.
//! - [`render`] — assembles one batch file: transaction, inserts, verification queries.

pub mod escape;
pub mod render;
