// Copyright 2025 Cowboy AI, LLC.

//! Flat input and output rows
//!
//! Loaders deliver one [`InputRow`] per unit with the attributes of its
//! building repeated on every row. [`group_rows`] turns those into
//! [`BuildingGroup`]s; the estimator produces one [`UnitEstimate`] per unit.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{
    Building, BuildingGroup, ConstructionPeriod, DwellingType, DwellingTypeBucket, EnergyLabel,
    EnvelopeSurfaces, FloorPosition, FormFactorBucket, Unit,
};
use crate::errors::EstimationResult;
use crate::identifiers::{BuildingId, UnitId};

/// One unit with the attributes of its building
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct InputRow {
    /// Building identifier
    pub building_id: String,
    /// Unit identifier
    pub unit_id: String,
    /// Floors in the building
    pub floor_count: Option<u32>,
    /// Units in the building
    pub unit_count: Option<u32>,
    /// Building exterior wall area, m²
    pub exterior_wall_area: Option<f64>,
    /// Building flat roof area, m²
    pub flat_roof_area: Option<f64>,
    /// Building sloped roof area, m²
    pub sloped_roof_area: Option<f64>,
    /// Building ground floor area, m²
    pub ground_floor_area: Option<f64>,
    /// Usable area of the unit, m²
    pub usable_area: Option<f64>,
    /// Construction year
    pub construction_year: Option<i32>,
    /// Building-level dwelling type as text
    pub dwelling_type: Option<String>,
}

impl InputRow {
    /// Parse a JSON array of rows
    pub fn parse_json_array(json: &str) -> EstimationResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    fn envelope(&self) -> Option<EnvelopeSurfaces> {
        Some(EnvelopeSurfaces::new(
            self.exterior_wall_area?,
            self.flat_roof_area?,
            self.sloped_roof_area?,
            self.ground_floor_area?,
        ))
    }

    fn parsed_dwelling_type(&self) -> Option<DwellingType> {
        let text = self.dwelling_type.as_deref()?;
        match text.parse() {
            Ok(dwelling) => Some(dwelling),
            Err(err) => {
                warn!(unit_id = %self.unit_id, %err, "unreadable dwelling type, treated as missing");
                None
            }
        }
    }
}

/// Group rows by building, keeping the order in which buildings first appear
///
/// Building attributes come from the first row of each building.
pub fn group_rows(rows: impl IntoIterator<Item = InputRow>) -> Vec<BuildingGroup> {
    let mut groups: IndexMap<String, BuildingGroup> = IndexMap::new();
    for row in rows {
        let dwelling_type = row.parsed_dwelling_type();
        let group = groups.entry(row.building_id.clone()).or_insert_with(|| {
            BuildingGroup::new(
                Building {
                    id: BuildingId::new(row.building_id.as_str()),
                    unit_count: row.unit_count,
                    floor_count: row.floor_count,
                    envelope: row.envelope(),
                    dwelling_type,
                },
                Vec::new(),
            )
        });
        group.units.push(Unit {
            id: UnitId::new(row.unit_id),
            building_id: group.building.id.clone(),
            usable_area: row.usable_area,
            construction_year: row.construction_year,
            dwelling_type,
        });
    }
    groups.into_values().collect()
}

/// Estimate for one unit
///
/// Every derived attribute is `None` when the step producing it lacked input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UnitEstimate {
    /// Building identifier
    pub building_id: BuildingId,
    /// Unit identifier
    pub unit_id: UnitId,
    /// Inferred floor, 0 is the ground floor
    pub floor: Option<u32>,
    /// Inferred floor position
    pub floor_position: Option<FloorPosition>,
    /// Refined dwelling type
    pub dwelling_type: Option<DwellingType>,
    /// Bucket of the refined dwelling type
    pub dwelling_type_bucket: Option<DwellingTypeBucket>,
    /// Construction year
    pub construction_year: Option<i32>,
    /// Construction period for the bucket
    pub construction_period: Option<ConstructionPeriod>,
    /// Usable area, m²
    pub usable_area: Option<f64>,
    /// Apportioned exterior wall, m²
    pub wall_area: Option<f64>,
    /// Apportioned roof, m²
    pub roof_area: Option<f64>,
    /// Apportioned ground floor, m²
    pub ground_area: Option<f64>,
    /// Form factor, rounded to two decimals
    pub form_factor: Option<f64>,
    /// Form-factor bucket of the unrounded form factor
    pub form_factor_bucket: Option<FormFactorBucket>,
    /// Sampled energy label
    pub energy_label: Option<EnergyLabel>,
}

/// Round a form factor for output
pub fn round_form_factor(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(building: &str, unit: &str, dwelling_type: Option<&str>) -> InputRow {
        InputRow {
            building_id: building.to_owned(),
            unit_id: unit.to_owned(),
            floor_count: Some(2),
            unit_count: Some(2),
            exterior_wall_area: Some(100.0),
            flat_roof_area: Some(30.0),
            sloped_roof_area: Some(0.0),
            ground_floor_area: Some(30.0),
            usable_area: Some(60.0),
            construction_year: Some(1980),
            dwelling_type: dwelling_type.map(str::to_owned),
        }
    }

    #[test]
    fn test_group_rows_keeps_first_seen_order() {
        let groups = group_rows(vec![
            row("b", "b-1", Some("rijwoning tussen")),
            row("a", "a-1", Some("vrijstaand")),
            row("b", "b-2", Some("rijwoning tussen")),
        ]);
        let ids: Vec<&str> = groups.iter().map(|g| g.building.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(groups[0].units.len(), 2);
        assert_eq!(groups[0].units[1].id.as_str(), "b-2");
        assert_eq!(groups[0].building.dwelling_type, Some(DwellingType::MidRow));
        assert_eq!(
            groups[0].building.envelope,
            Some(EnvelopeSurfaces::new(100.0, 30.0, 0.0, 30.0))
        );
    }

    #[test]
    fn test_unreadable_or_missing_values_become_none() {
        let mut incomplete = row("a", "a-1", Some("kasteel"));
        incomplete.sloped_roof_area = None;
        let groups = group_rows(vec![incomplete]);
        assert_eq!(groups[0].building.dwelling_type, None);
        assert_eq!(groups[0].units[0].dwelling_type, None);
        assert_eq!(groups[0].building.envelope, None);
    }

    #[test]
    fn test_rows_from_json_with_nulls() {
        let json = r#"[
            {"building_id": "p1", "unit_id": "v1", "floor_count": null,
             "construction_year": 1970, "dwelling_type": "vrijstaand"}
        ]"#;
        let rows = InputRow::parse_json_array(json).unwrap();
        assert_eq!(rows[0].floor_count, None);
        assert_eq!(rows[0].usable_area, None);
        assert_eq!(rows[0].construction_year, Some(1970));
    }

    #[test]
    fn test_round_form_factor() {
        assert_eq!(round_form_factor(150.0 / 90.0), 1.67);
        assert_eq!(round_form_factor(0.004), 0.0);
    }
}
