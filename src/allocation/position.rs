// Copyright 2025 Cowboy AI, LLC.

//! Floor distribution of the units in a building
//!
//! The register does not say on which floor a unit is. Units are spread
//! evenly over the floors in input order: the first batch on the ground
//! floor, the second batch under the roof, and the rest over the floors in
//! between.

use serde::{Deserialize, Serialize};

use crate::domain::FloorPosition;

/// Inferred floor and position of one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPosition {
    /// Floor index, 0 is the ground floor
    pub floor: u32,
    /// Position tag
    pub position: FloorPosition,
}

impl UnitPosition {
    fn new(floor: u32, position: FloorPosition) -> Self {
        Self { floor, position }
    }
}

/// Assign a floor and position to each of `units` units, in input order
///
/// Returns `None` when there is nothing to distribute or the building lacks a
/// floor or unit count.
///
/// ```rust
/// use wijklabels::allocation::infer_positions;
/// use wijklabels::FloorPosition;
///
/// let positions = infer_positions(6, Some(3), Some(6)).unwrap();
/// assert_eq!(positions[0].position, FloorPosition::Ground);
/// assert_eq!(positions[2].floor, 2);
/// assert_eq!(positions[5].position, FloorPosition::Middle);
/// ```
pub fn infer_positions(
    units: usize,
    floor_count: Option<u32>,
    unit_count: Option<u32>,
) -> Option<Vec<UnitPosition>> {
    let floors = floor_count.filter(|f| *f > 0)?;
    unit_count.filter(|c| *c > 0)?;
    if units == 0 {
        return None;
    }

    let per_floor = ((units as f64 / floors as f64).round_ties_even() as usize).max(1);
    if per_floor >= units {
        return Some(vec![
            UnitPosition::new(0, FloorPosition::RoofAndGround);
            units
        ]);
    }

    let top = floors - 1;
    let mut positions = Vec::with_capacity(units);
    place(&mut positions, units, per_floor, UnitPosition::new(0, FloorPosition::Ground));
    place(&mut positions, units, per_floor, UnitPosition::new(top, FloorPosition::Roof));

    if floors >= 3 {
        for floor in 1..top {
            if positions.len() == units {
                break;
            }
            place(&mut positions, units, per_floor, UnitPosition::new(floor, FloorPosition::Middle));
        }
        // remainder joins the highest intermediate floor
        place(&mut positions, units, units, UnitPosition::new(top - 1, FloorPosition::Middle));
    } else {
        place(&mut positions, units, units, UnitPosition::new(top, FloorPosition::Roof));
    }

    debug_assert_eq!(positions.len(), units);
    Some(positions)
}

/// Append up to `count` copies of `position` without exceeding `units` in total
fn place(positions: &mut Vec<UnitPosition>, units: usize, count: usize, position: UnitPosition) {
    let take = count.min(units - positions.len());
    positions.extend(std::iter::repeat(position).take(take));
}
