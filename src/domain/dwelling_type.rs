// Copyright 2025 Cowboy AI, LLC.

//! Dwelling types
//!
//! The register classifies a building as one of four coarse types. For a
//! building with several units each unit is refined into an apartment type,
//! which is a combination of its exposure (corner or interior) and its
//! position in the building (ground floor, middle, roof, or both roof and
//! ground). The reference table does not know these refined types; it uses
//! the older [`DwellingTypeBucket`] classification, so every dwelling type
//! maps to exactly one bucket.

use std::fmt;
use std::str::FromStr;

use crate::category::{impl_text_serde, OrderedCategory};
use crate::errors::EstimationError;

/// How many sides of a unit face outside
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Exposure {
    /// At the end of a row or floor: more exterior wall
    Corner,
    /// Between two neighbours
    Interior,
}

impl Exposure {
    fn as_str(self) -> &'static str {
        match self {
            Exposure::Corner => "hoek",
            Exposure::Interior => "tussen",
        }
    }
}

/// Structural position of a unit within its building
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FloorPosition {
    /// On the ground floor, below other units
    Ground,
    /// Neither touching the ground nor the roof
    Middle,
    /// Directly below the roof
    Roof,
    /// Spanning the building from ground to roof
    RoofAndGround,
}

impl FloorPosition {
    /// The unit carries a share of the roof
    pub fn has_roof(self) -> bool {
        matches!(self, FloorPosition::Roof | FloorPosition::RoofAndGround)
    }

    /// The unit carries a share of the ground floor
    pub fn has_ground(self) -> bool {
        matches!(self, FloorPosition::Ground | FloorPosition::RoofAndGround)
    }

    fn suffix(self) -> &'static str {
        match self {
            FloorPosition::Ground => "vloer",
            FloorPosition::Middle => "midden",
            FloorPosition::Roof => "dak",
            FloorPosition::RoofAndGround => "dakvloer",
        }
    }

    /// Name used in output rows
    pub fn as_str(self) -> &'static str {
        match self {
            FloorPosition::Ground => "ground",
            FloorPosition::Middle => "middle",
            FloorPosition::Roof => "roof",
            FloorPosition::RoofAndGround => "roof+ground",
        }
    }
}

impl fmt::Display for FloorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloorPosition {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ground" => Ok(FloorPosition::Ground),
            "middle" => Ok(FloorPosition::Middle),
            "roof" => Ok(FloorPosition::Roof),
            "roof+ground" => Ok(FloorPosition::RoofAndGround),
            other => Err(EstimationError::out_of_domain("FloorPosition", other)),
        }
    }
}

impl_text_serde!(FloorPosition);

/// Apartment type: exposure and floor position of one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApartmentType {
    /// Corner or interior
    pub exposure: Exposure,
    /// Position within the building
    pub position: FloorPosition,
}

impl ApartmentType {
    /// Create an apartment type
    pub fn new(exposure: Exposure, position: FloorPosition) -> Self {
        Self { exposure, position }
    }
}

/// Dwelling type of a unit, coarse (register) or refined (apartment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DwellingType {
    /// Free-standing house
    Detached,
    /// One half of a pair under one roof
    SemiDetached,
    /// Last house of a row
    EndOfRow,
    /// House between two others in a row
    MidRow,
    /// Unit in a multi-unit building
    Apartment(ApartmentType),
}

impl DwellingType {
    /// Exposure used for wall apportionment
    ///
    /// Coarse types in a multi-unit building count as corner units, except
    /// mid-row houses.
    pub fn exposure(self) -> Exposure {
        match self {
            DwellingType::Detached | DwellingType::SemiDetached | DwellingType::EndOfRow => {
                Exposure::Corner
            }
            DwellingType::MidRow => Exposure::Interior,
            DwellingType::Apartment(apartment) => apartment.exposure,
        }
    }

    /// Floor position used for roof and ground apportionment
    pub fn floor_position(self) -> FloorPosition {
        match self {
            DwellingType::Apartment(apartment) => apartment.position,
            _ => FloorPosition::RoofAndGround,
        }
    }

    /// True for apartment types
    pub fn is_apartment(self) -> bool {
        matches!(self, DwellingType::Apartment(_))
    }

    /// Reference-table bucket of this dwelling type
    pub fn bucket(self) -> DwellingTypeBucket {
        match self {
            DwellingType::Detached => DwellingTypeBucket::Detached,
            DwellingType::SemiDetached => DwellingTypeBucket::SemiDetached,
            DwellingType::EndOfRow => DwellingTypeBucket::EndOfRow,
            DwellingType::MidRow => DwellingTypeBucket::MidRow,
            DwellingType::Apartment(ApartmentType {
                position: FloorPosition::RoofAndGround,
                ..
            }) => DwellingTypeBucket::Maisonette,
            DwellingType::Apartment(ApartmentType {
                exposure: Exposure::Corner,
                ..
            }) => DwellingTypeBucket::GalleryAccess,
            DwellingType::Apartment(ApartmentType {
                exposure: Exposure::Interior,
                ..
            }) => DwellingTypeBucket::StairwellAccess,
        }
    }
}

impl fmt::Display for DwellingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DwellingType::Detached => f.write_str("vrijstaand"),
            DwellingType::SemiDetached => f.write_str("2 onder 1 kap"),
            DwellingType::EndOfRow => f.write_str("rijwoning hoek"),
            DwellingType::MidRow => f.write_str("rijwoning tussen"),
            DwellingType::Apartment(apartment) => write!(
                f,
                "appartement - {}{}",
                apartment.exposure.as_str(),
                apartment.position.suffix()
            ),
        }
    }
}

impl FromStr for DwellingType {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        match text.as_str() {
            "vrijstaand" => return Ok(DwellingType::Detached),
            "2 onder 1 kap" => return Ok(DwellingType::SemiDetached),
            "rijwoning hoek" => return Ok(DwellingType::EndOfRow),
            "rijwoning tussen" => return Ok(DwellingType::MidRow),
            _ => {}
        }

        let refined = text
            .strip_prefix("appartement")
            .map(|rest| rest.trim_start_matches([' ', '-']))
            .and_then(|rest| {
                let (exposure, position) = if let Some(p) = rest.strip_prefix("hoek") {
                    (Exposure::Corner, p)
                } else {
                    (Exposure::Interior, rest.strip_prefix("tussen")?)
                };
                let position = match position {
                    "vloer" => FloorPosition::Ground,
                    "midden" => FloorPosition::Middle,
                    "dak" => FloorPosition::Roof,
                    "dakvloer" => FloorPosition::RoofAndGround,
                    _ => return None,
                };
                Some(DwellingType::Apartment(ApartmentType::new(exposure, position)))
            });

        refined.ok_or_else(|| EstimationError::out_of_domain("DwellingType", s))
    }
}

impl_text_serde!(DwellingType);

/// Dwelling-type classification used by the reference distribution table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DwellingTypeBucket {
    /// vrijstaand
    Detached = 0,
    /// 2 onder 1 kap
    SemiDetached,
    /// rijwoning hoek
    EndOfRow,
    /// rijwoning tussen
    MidRow,
    /// maisonnette
    Maisonette,
    /// galerij
    GalleryAccess,
    /// portiek
    StairwellAccess,
    /// overig
    Other,
}

impl DwellingTypeBucket {
    /// Name as used in the reference study
    pub fn as_str(self) -> &'static str {
        match self {
            DwellingTypeBucket::Detached => "vrijstaand",
            DwellingTypeBucket::SemiDetached => "2 onder 1 kap",
            DwellingTypeBucket::EndOfRow => "rijwoning hoek",
            DwellingTypeBucket::MidRow => "rijwoning tussen",
            DwellingTypeBucket::Maisonette => "maisonnette",
            DwellingTypeBucket::GalleryAccess => "galerij",
            DwellingTypeBucket::StairwellAccess => "portiek",
            DwellingTypeBucket::Other => "overig",
        }
    }

    /// Single-family houses, as opposed to units in a multi-family building
    pub fn is_single_family(self) -> bool {
        matches!(
            self,
            DwellingTypeBucket::Detached
                | DwellingTypeBucket::SemiDetached
                | DwellingTypeBucket::EndOfRow
                | DwellingTypeBucket::MidRow
        )
    }
}

impl OrderedCategory for DwellingTypeBucket {
    const MEMBERS: &'static [Self] = &[
        DwellingTypeBucket::Detached,
        DwellingTypeBucket::SemiDetached,
        DwellingTypeBucket::EndOfRow,
        DwellingTypeBucket::MidRow,
        DwellingTypeBucket::Maisonette,
        DwellingTypeBucket::GalleryAccess,
        DwellingTypeBucket::StairwellAccess,
        DwellingTypeBucket::Other,
    ];
    const NAME: &'static str = "DwellingTypeBucket";

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DwellingTypeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DwellingTypeBucket {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::MEMBERS
            .iter()
            .copied()
            .find(|bucket| bucket.as_str() == wanted)
            .ok_or_else(|| EstimationError::out_of_domain(Self::NAME, s))
    }
}

impl_text_serde!(DwellingTypeBucket);
