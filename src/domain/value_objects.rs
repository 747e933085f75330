// Copyright 2025 Cowboy AI, LLC.

//! Envelope surface value objects
//!
//! Value Objects are immutable, compared by value, and updated by replacement.
//! - EnvelopeSurfaces: the building-wide totals from the 3D building model
//! - ApportionedSurfaces: the part of those totals attributed to one unit

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Exterior envelope areas of a whole building, in m²
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct EnvelopeSurfaces {
    /// Exterior wall area
    pub exterior_wall: f64,
    /// Flat roof area
    pub flat_roof: f64,
    /// Sloped roof area
    pub sloped_roof: f64,
    /// Ground-floor contact area
    pub ground_floor: f64,
}

impl EnvelopeSurfaces {
    /// Construct envelope totals
    pub fn new(exterior_wall: f64, flat_roof: f64, sloped_roof: f64, ground_floor: f64) -> Self {
        Self {
            exterior_wall,
            flat_roof,
            sloped_roof,
            ground_floor,
        }
    }

    /// Flat plus sloped roof
    pub fn roof(&self) -> f64 {
        self.flat_roof + self.sloped_roof
    }

    /// Every surface through which heat is lost
    pub fn loss_surface(&self) -> f64 {
        self.exterior_wall + self.roof() + self.ground_floor
    }

    /// Whole building as one unit's share
    pub fn as_apportioned(&self) -> ApportionedSurfaces {
        ApportionedSurfaces {
            wall: self.exterior_wall,
            roof: self.roof(),
            ground: self.ground_floor,
        }
    }
}

/// Envelope areas attributed to one unit, in m²
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ApportionedSurfaces {
    /// Exterior wall share
    pub wall: f64,
    /// Roof share (flat and sloped)
    pub roof: f64,
    /// Ground-floor share
    pub ground: f64,
}

impl ApportionedSurfaces {
    /// Nothing attributed
    pub const ZERO: Self = Self {
        wall: 0.0,
        roof: 0.0,
        ground: 0.0,
    };

    /// Loss surface of the unit
    pub fn loss_surface(&self) -> f64 {
        self.wall + self.roof + self.ground
    }
}
