//! Symbol domain model shared by every catalog.
//!
//! # Responsibility
//! - Define the catalog-agnostic `Symbol` projection handed to picker UIs.
//! - Define emoji catalog rows and their skin-tone resolution.
//!
//! # Invariants
//! - Projections are derived from catalog rows and never mutated afterwards.
//! - Skin-tone resolution is a pure function of (row, tone).

pub mod emoji;
pub mod symbol;
