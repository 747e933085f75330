// Copyright 2025 Cowboy AI, LLC.

//! Reference label distributions and sampling from them

pub mod distribution;
pub mod sampler;

pub use distribution::{DistributionKey, DistributionRecord, LabelBin, LabelDistributionTable};
pub use sampler::{lookup, sample, LookupMiss};
