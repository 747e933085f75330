//! # Wijklabels
//!
//! Estimation of energy-efficiency labels for residential units from coarse
//! register attributes and a reference label distribution.
//!
//! For every unit the crate:
//! - **Positions**: infers the floor and position of each unit in a
//!   multi-unit building
//! - **Apartment types**: splits each floor into corner and interior units
//! - **Apportionment**: divides the building's wall, roof and ground area
//!   over its units
//! - **Form factor**: relates the unit's loss surface to its usable area
//! - **Sampling**: draws a label from the reference distribution of the
//!   unit's dwelling type, construction period and form factor
//!
//! ## Design Principles
//!
//! 1. **Absent is not wrong**: missing attributes travel as `None` and only
//!    leave the estimates that depend on them empty
//! 2. **Reproducible**: every building draws from its own generator, derived
//!    from the run seed and the building id
//! 3. **Isolated**: a building that fails is reported and skipped, the run
//!    carries on
//!
//! ```rust
//! use wijklabels::labels::{DistributionKey, LabelDistributionTable};
//! use wijklabels::pipeline::{EstimationRunner, InputRow};
//! use wijklabels::{
//!     ConstructionPeriod, DwellingTypeBucket, EnergyLabel, EstimationConfig, FormFactorBucket,
//! };
//!
//! let mut table = LabelDistributionTable::new();
//! table
//!     .insert_shares(
//!         DistributionKey::new(
//!             DwellingTypeBucket::Detached,
//!             ConstructionPeriod::From1965To1974,
//!             FormFactorBucket::From150To200,
//!         ),
//!         &[(EnergyLabel::C, 1.0)],
//!     )
//!     .unwrap();
//!
//! let row = InputRow {
//!     building_id: "pand-1".into(),
//!     unit_id: "vbo-1".into(),
//!     floor_count: Some(2),
//!     unit_count: Some(1),
//!     exterior_wall_area: Some(40.0),
//!     flat_roof_area: Some(60.0),
//!     sloped_roof_area: Some(0.0),
//!     ground_floor_area: Some(50.0),
//!     usable_area: Some(90.0),
//!     construction_year: Some(1970),
//!     dwelling_type: Some("vrijstaand".into()),
//! };
//!
//! let runner = EstimationRunner::new(table, EstimationConfig::default()).unwrap();
//! let report = runner.run_rows(vec![row]);
//! assert_eq!(report.estimates[0].form_factor, Some(1.67));
//! assert_eq!(report.estimates[0].energy_label, Some(EnergyLabel::C));
//! ```

#![warn(missing_docs)]

mod category;
mod config;
mod errors;
mod identifiers;
pub mod allocation;
pub mod domain;
pub mod labels;
pub mod pipeline;
pub mod validation;

// Re-export core types
pub use category::OrderedCategory;
pub use config::EstimationConfig;
pub use errors::{EstimationError, EstimationResult};
pub use identifiers::{BuildingId, UnitId};
pub use domain::{
    ApartmentType, ApportionedSurfaces, Building, BuildingGroup, ConstructionPeriod,
    DwellingType, DwellingTypeBucket, EnergyLabel, EnvelopeSurfaces, Exposure, FloorPosition,
    FormFactorBucket, Unit,
};
pub use labels::{DistributionKey, LabelDistributionTable, LookupMiss};
pub use pipeline::{EstimationRunner, RunReport, UnitEstimate};
