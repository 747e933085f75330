// Copyright 2025 Cowboy AI, LLC.

//! Unit-level allocation inside multi-unit buildings
//!
//! Floor positions come first, then corner/interior exposure per floor, and
//! finally the envelope shares that follow from both.

pub mod apartment;
pub mod apportionment;
pub mod position;

pub use apartment::{classify_apartments, corner_count};
pub use apportionment::apportion_surfaces;
pub use position::{infer_positions, UnitPosition};
