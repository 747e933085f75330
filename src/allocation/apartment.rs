// Copyright 2025 Cowboy AI, LLC.

//! Corner and interior units per floor
//!
//! A multi-unit building only carries the coarse register type of the
//! building as a whole. That type says how exposed the ends of each floor
//! are, which sets how many units on a floor count as corner units. Which
//! units those are is unknown, so they are drawn at random.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::allocation::position::UnitPosition;
use crate::domain::{ApartmentType, DwellingType, Exposure};

/// Number of corner units on a floor of `units` units
///
/// An apartment-level hint on the building applies its own exposure to every
/// unit.
pub fn corner_count(building_type: DwellingType, units: usize, short_row_max_units: usize) -> usize {
    match building_type {
        DwellingType::Detached => units,
        DwellingType::SemiDetached | DwellingType::EndOfRow => {
            if units <= short_row_max_units {
                units
            } else {
                units / 2
            }
        }
        DwellingType::MidRow => 0,
        DwellingType::Apartment(apartment) => match apartment.exposure {
            Exposure::Corner => units,
            Exposure::Interior => 0,
        },
    }
}

/// Refine every unit of a multi-unit building into an apartment type
///
/// The result has one entry per position, in the same order. Without a
/// building-level type every unit stays unknown. Floors are visited from the
/// ground up so the draws taken from `rng` do not depend on input order
/// within a floor.
pub fn classify_apartments<R: Rng + ?Sized>(
    positions: &[UnitPosition],
    building_type: Option<DwellingType>,
    short_row_max_units: usize,
    rng: &mut R,
) -> Vec<Option<DwellingType>> {
    let Some(building_type) = building_type else {
        return vec![None; positions.len()];
    };

    let mut floors: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (i, position) in positions.iter().enumerate() {
        floors.entry(position.floor).or_default().push(i);
    }

    let mut exposures = vec![Exposure::Interior; positions.len()];
    for members in floors.values_mut() {
        let corners = corner_count(building_type, members.len(), short_row_max_units);
        members.shuffle(rng);
        for &i in members.iter().take(corners) {
            exposures[i] = Exposure::Corner;
        }
    }

    positions
        .iter()
        .zip(exposures)
        .map(|(position, exposure)| {
            Some(DwellingType::Apartment(ApartmentType::new(
                exposure,
                position.position,
            )))
        })
        .collect()
}
