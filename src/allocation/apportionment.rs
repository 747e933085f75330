// Copyright 2025 Cowboy AI, LLC.

//! Division of a building's envelope over its units
//!
//! ```mermaid
//! graph LR
//!     R[roof total] -->|equal shares| RU[units with a roof]
//!     G[ground total] -->|equal shares| GU[units with a ground floor]
//!     W[wall total] -->|dwelling fraction| P[wall pool]
//!     P -->|corner weight / interior weight| WU[every known unit]
//! ```
//!
//! Units of unknown type get nothing and do not count in any divisor.

use tracing::warn;

use crate::config::EstimationConfig;
use crate::domain::{ApportionedSurfaces, DwellingType, EnvelopeSurfaces, Exposure};

/// Envelope share of every unit, in the order of `dwelling_types`
///
/// A building with a single unit passes its totals through unchanged,
/// whatever the unit's type.
pub fn apportion_surfaces(
    envelope: &EnvelopeSurfaces,
    dwelling_types: &[Option<DwellingType>],
    config: &EstimationConfig,
) -> Vec<ApportionedSurfaces> {
    match dwelling_types.len() {
        0 => Vec::new(),
        1 => vec![envelope.as_apportioned()],
        _ => apportion_multi_unit(envelope, dwelling_types, config),
    }
}

fn wall_weight(dwelling: DwellingType, config: &EstimationConfig) -> f64 {
    match dwelling.exposure() {
        Exposure::Corner => config.corner_wall_weight,
        Exposure::Interior => 1.0,
    }
}

fn apportion_multi_unit(
    envelope: &EnvelopeSurfaces,
    dwelling_types: &[Option<DwellingType>],
    config: &EstimationConfig,
) -> Vec<ApportionedSurfaces> {
    let known = || dwelling_types.iter().flatten().copied();

    let roof_units = known().filter(|t| t.floor_position().has_roof()).count();
    let ground_units = known().filter(|t| t.floor_position().has_ground()).count();
    let total_weight: f64 = known().map(|t| wall_weight(t, config)).sum();

    let roof_share = share(envelope.roof(), roof_units);
    let ground_share = share(envelope.ground_floor, ground_units);
    let wall_pool = envelope.exterior_wall * config.dwelling_wall_fraction;

    let shares: Vec<ApportionedSurfaces> = dwelling_types
        .iter()
        .map(|dwelling| match dwelling {
            None => ApportionedSurfaces::ZERO,
            Some(dwelling) => {
                let position = dwelling.floor_position();
                ApportionedSurfaces {
                    wall: if total_weight > 0.0 {
                        wall_pool * wall_weight(*dwelling, config) / total_weight
                    } else {
                        0.0
                    },
                    roof: if position.has_roof() { roof_share } else { 0.0 },
                    ground: if position.has_ground() { ground_share } else { 0.0 },
                }
            }
        })
        .collect();

    let wall_sum: f64 = shares.iter().map(|s| s.wall).sum();
    if (wall_sum - wall_pool).abs() > config.wall_sum_tolerance * wall_pool.abs().max(1.0) {
        warn!(wall_sum, wall_pool, "apportioned wall area does not add up to the dwelling wall");
    }
    if roof_units == 0 && envelope.roof() > 0.0 {
        warn!(roof = envelope.roof(), "no unit carries the roof, roof area left unallocated");
    }
    if ground_units == 0 && envelope.ground_floor > 0.0 {
        warn!(
            ground = envelope.ground_floor,
            "no unit carries the ground floor, ground area left unallocated"
        );
    }

    shares
}

fn share(total: f64, units: usize) -> f64 {
    if units == 0 {
        0.0
    } else {
        total / units as f64
    }
}
