// Copyright 2025 Cowboy AI, LLC.

//! Buildings and the residential units they contain

use serde::{Deserialize, Serialize};

use crate::domain::dwelling_type::DwellingType;
use crate::domain::value_objects::EnvelopeSurfaces;
use crate::identifiers::{BuildingId, UnitId};

/// One physical structure ("pand")
///
/// Building attributes are read-only inputs to the per-unit computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Register identifier
    pub id: BuildingId,
    /// Number of residential units according to the register
    pub unit_count: Option<u32>,
    /// Number of floors according to the 3D model
    pub floor_count: Option<u32>,
    /// Envelope totals shared by all units, absent when any total is missing
    pub envelope: Option<EnvelopeSurfaces>,
    /// Building-level coarse dwelling type
    pub dwelling_type: Option<DwellingType>,
}

/// One residential unit ("verblijfsobject")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Register identifier
    pub id: UnitId,
    /// Building the unit belongs to
    pub building_id: BuildingId,
    /// Usable floor area in m²
    pub usable_area: Option<f64>,
    /// Original construction year
    pub construction_year: Option<i32>,
    /// Dwelling type hint, initially the building-level type
    pub dwelling_type: Option<DwellingType>,
}

/// A building with all of its units, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingGroup {
    /// The building
    pub building: Building,
    /// Its units
    pub units: Vec<Unit>,
}

impl BuildingGroup {
    /// Create a group
    pub fn new(building: Building, units: Vec<Unit>) -> Self {
        Self { building, units }
    }

    /// Unit count from the register, or the number of units present
    pub fn effective_unit_count(&self) -> usize {
        self.building
            .unit_count
            .map(|count| count as usize)
            .unwrap_or(self.units.len())
    }

    /// True when more than one unit shares the envelope
    ///
    /// Decided by the register unit count; the rows present count only when
    /// the register has no count.
    pub fn is_multi_unit(&self) -> bool {
        match self.building.unit_count {
            Some(count) => count > 1,
            None => self.units.len() > 1,
        }
    }
}
