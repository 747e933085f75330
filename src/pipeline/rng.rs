// Copyright 2025 Cowboy AI, LLC.

//! Per-building random number generators
//!
//! Every building draws from its own stream, derived from the run seed and
//! the building id. A building's draws therefore do not depend on which
//! thread runs it or on which other buildings are in the run.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::identifiers::BuildingId;

/// Generator for `building_id` within a run seeded with `seed`
pub fn building_rng(seed: u64, building_id: &BuildingId) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(xxh3_64_with_seed(building_id.as_str().as_bytes(), seed))
}
