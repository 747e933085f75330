// Copyright 2025 Cowboy AI, LLC.

//! Domain model: buildings, units and the categories the estimate is keyed on

pub mod building;
pub mod construction_period;
pub mod dwelling_type;
pub mod energy_label;
pub mod form_factor;
pub mod value_objects;

pub use building::{Building, BuildingGroup, Unit};
pub use construction_period::ConstructionPeriod;
pub use dwelling_type::{ApartmentType, DwellingType, DwellingTypeBucket, Exposure, FloorPosition};
pub use energy_label::EnergyLabel;
pub use form_factor::{classify_form_factor, form_factor, FormFactorBucket};
pub use value_objects::{ApportionedSurfaces, EnvelopeSurfaces};
