// Copyright 2025 Cowboy AI, LLC.

//! From input rows to labelled units
//!
//! [`estimate_building`] handles one building; [`EstimationRunner`] spreads
//! many buildings over threads and collects a [`RunReport`].

pub mod estimate;
pub mod records;
pub mod rng;
pub mod runner;

pub use estimate::estimate_building;
pub use records::{group_rows, round_form_factor, InputRow, UnitEstimate};
pub use rng::building_rng;
pub use runner::{DroppedBuilding, EstimationRunner, RunReport};
