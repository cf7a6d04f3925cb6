// src/specs/mod.rs
//! # Page “specs”
//!
//! Each spec knows **where the ground truth lives in one page's HTML** and
//! pulls it out as plain text cells. Nothing here decodes rows, parses
//! numbers or runs analysis; that starts in `schema`/`decode`.
//!
//! ## What lives here
//! - Selector choice for a page (which class/alignment marks a name cell vs
//!   a stat cell, where the position label sits).
//! - Tolerant extraction using `core::html` (case-insensitive tags and
//!   attributes, entity and whitespace normalization).
//!
//! ## What does **not** live here
//! - Fetching. Pages are read from disk or stdin by the caller.
//! - Row reconstruction. The spec hands back the flat stream exactly as the
//!   page renders it; `decode` owns the stride arithmetic.
//!
//! ## Typical call chain
//! ```text
//! runner → specs::playerstats::extract(html) → PageCells
//!        → schema::PositionSchema::resolve → decode → records → analysis
//! ```
//!
//! ## Testing notes
//! - Specs are tested offline against small inline fixtures.
pub mod playerstats;
