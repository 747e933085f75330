// Copyright 2025 Cowboy AI, LLC.

//! Estimation of all units of one building
//!
//! ```mermaid
//! graph TD
//!     G[BuildingGroup] --> P[floor positions]
//!     P --> T[apartment types]
//!     T --> C[construction period]
//!     T --> S[envelope shares]
//!     S --> F[form factor]
//!     C --> K[distribution key]
//!     F --> K
//!     K --> L[sampled label]
//! ```

use rand::Rng;
use tracing::{debug, instrument};

use crate::allocation::{apportion_surfaces, classify_apartments, infer_positions, UnitPosition};
use crate::config::EstimationConfig;
use crate::domain::{
    classify_form_factor, ApportionedSurfaces, BuildingGroup, ConstructionPeriod, DwellingType,
};
use crate::errors::{EstimationError, EstimationResult};
use crate::labels::{sample, DistributionKey, LabelDistributionTable};
use crate::pipeline::records::{round_form_factor, UnitEstimate};
use crate::pipeline::rng::building_rng;

/// Estimate a label for every unit of `group`, in unit order
///
/// Missing inputs leave the affected outputs empty. An error means the
/// group itself is inconsistent or a value could not be classified.
///
/// A multi-unit building is divided over all of its registered units, even
/// when fewer rows arrive. A single-unit building gives every row its totals.
#[instrument(skip_all, fields(building_id = %group.building.id, units = group.units.len()))]
pub fn estimate_building(
    group: &BuildingGroup,
    table: &LabelDistributionTable,
    config: &EstimationConfig,
) -> EstimationResult<Vec<UnitEstimate>> {
    let building = &group.building;
    if let Some(stray) = group.units.iter().find(|u| u.building_id != building.id) {
        return Err(EstimationError::InvariantViolation(format!(
            "unit {} belongs to building {}, not {}",
            stray.id, stray.building_id, building.id
        )));
    }

    let n = group.units.len();
    let multi_unit = group.is_multi_unit();
    let mut rng = building_rng(config.seed, &building.id);

    // every registered unit takes a slot, rows fill the first ones
    let slots = if multi_unit {
        group.effective_unit_count().max(n)
    } else {
        1
    };
    let slot_positions = infer_positions(slots, building.floor_count, building.unit_count);
    let positions: Vec<Option<UnitPosition>> = match &slot_positions {
        Some(slot_positions) if multi_unit => {
            slot_positions.iter().take(n).copied().map(Some).collect()
        }
        Some(slot_positions) => vec![slot_positions.first().copied(); n],
        None => vec![None; n],
    };

    // single-unit buildings have one type per row instead of one per slot
    let slot_types: Vec<Option<DwellingType>> = match &slot_positions {
        Some(slot_positions) if multi_unit => classify_apartments(
            slot_positions,
            building.dwelling_type,
            config.short_row_max_units,
            &mut rng,
        ),
        None if multi_unit => {
            debug!("no floor or unit count, unit types unknown");
            vec![None; slots]
        }
        _ => group
            .units
            .iter()
            .map(|u| u.dwelling_type.or(building.dwelling_type))
            .collect(),
    };
    let dwelling_types = &slot_types[..n];

    let shares: Vec<Option<ApportionedSurfaces>> = match &building.envelope {
        Some(envelope) if multi_unit => apportion_surfaces(envelope, &slot_types, config)
            .into_iter()
            .zip(&slot_types)
            .take(n)
            .map(|(share, dwelling)| dwelling.is_some().then_some(share))
            .collect(),
        Some(envelope) => vec![Some(envelope.as_apportioned()); n],
        None => vec![None; n],
    };

    // one draw per unit, whether or not it is used
    let draws: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();

    let mut estimates = Vec::with_capacity(n);
    for (i, unit) in group.units.iter().enumerate() {
        let dwelling_type = dwelling_types[i];
        let bucket = dwelling_type.map(DwellingType::bucket);
        let period = unit
            .construction_year
            .zip(bucket)
            .map(|(year, bucket)| ConstructionPeriod::classify(year, bucket));
        let share = shares[i];
        let form_factor =
            classify_form_factor(share.map(|s| s.loss_surface()), unit.usable_area)?;

        let key = match (bucket, period, form_factor) {
            (Some(bucket), Some(period), Some((_, ff_bucket))) => {
                Some(DistributionKey::new(bucket, period, ff_bucket))
            }
            _ => None,
        };
        let energy_label = key.and_then(|key| sample(table, &key, draws[i]));

        estimates.push(UnitEstimate {
            building_id: building.id.clone(),
            unit_id: unit.id.clone(),
            floor: positions[i].map(|p| p.floor),
            floor_position: positions[i].map(|p| p.position),
            dwelling_type,
            dwelling_type_bucket: bucket,
            construction_year: unit.construction_year,
            construction_period: period,
            usable_area: unit.usable_area,
            wall_area: share.map(|s| s.wall),
            roof_area: share.map(|s| s.roof),
            ground_area: share.map(|s| s.ground),
            form_factor: form_factor.map(|(ratio, _)| round_form_factor(ratio)),
            form_factor_bucket: form_factor.map(|(_, bucket)| bucket),
            energy_label,
        });
    }

    debug!(
        labelled = estimates.iter().filter(|e| e.energy_label.is_some()).count(),
        "building estimated"
    );
    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Building, EnergyLabel, EnvelopeSurfaces, FloorPosition, FormFactorBucket, Unit};
    use crate::identifiers::{BuildingId, UnitId};
    use crate::labels::LabelBin;
    use crate::OrderedCategory;

    fn unit(building: &str, id: &str, year: Option<i32>, area: Option<f64>) -> Unit {
        Unit {
            id: UnitId::new(id),
            building_id: BuildingId::new(building),
            usable_area: area,
            construction_year: year,
            dwelling_type: None,
        }
    }

    fn detached_house() -> BuildingGroup {
        let mut house = unit("pand-1", "vbo-1", Some(1970), Some(90.0));
        house.dwelling_type = Some(DwellingType::Detached);
        BuildingGroup::new(
            Building {
                id: BuildingId::new("pand-1"),
                unit_count: Some(1),
                floor_count: Some(2),
                envelope: Some(EnvelopeSurfaces::new(40.0, 60.0, 0.0, 50.0)),
                dwelling_type: Some(DwellingType::Detached),
            },
            vec![house],
        )
    }

    fn certain_table(key: DistributionKey, label: EnergyLabel) -> LabelDistributionTable {
        let mut table = LabelDistributionTable::new();
        table
            .insert_bins(
                key,
                vec![LabelBin {
                    label,
                    probability: 1.0,
                    low: 0.0,
                    high: 1.0,
                }],
            )
            .unwrap();
        table
    }

    #[test]
    fn test_detached_house() {
        let key = DistributionKey::new(
            DwellingType::Detached.bucket(),
            ConstructionPeriod::From1965To1974,
            FormFactorBucket::From150To200,
        );
        let table = certain_table(key, EnergyLabel::C);
        let estimates =
            estimate_building(&detached_house(), &table, &EstimationConfig::default()).unwrap();

        let estimate = &estimates[0];
        assert_eq!(estimate.form_factor, Some(1.67));
        assert_eq!(estimate.form_factor_bucket, Some(FormFactorBucket::From150To200));
        assert_eq!(estimate.construction_period, Some(ConstructionPeriod::From1965To1974));
        assert_eq!(estimate.wall_area, Some(40.0));
        assert_eq!(estimate.roof_area, Some(60.0));
        assert_eq!(estimate.floor_position, Some(FloorPosition::RoofAndGround));
        assert_eq!(estimate.energy_label, Some(EnergyLabel::C));
    }

    #[test]
    fn test_missing_inputs_leave_gaps() {
        let mut group = detached_house();
        group.units[0].usable_area = None;
        let table = LabelDistributionTable::new();
        let estimates = estimate_building(&group, &table, &EstimationConfig::default()).unwrap();
        assert_eq!(estimates[0].form_factor, None);
        assert_eq!(estimates[0].energy_label, None);
        assert_eq!(estimates[0].construction_period, Some(ConstructionPeriod::From1965To1974));

        let mut group = detached_house();
        group.building.envelope = None;
        let estimates = estimate_building(&group, &table, &EstimationConfig::default()).unwrap();
        assert_eq!(estimates[0].wall_area, None);
    }

    #[test]
    fn test_apartment_building() {
        let units = (0..6)
            .map(|i| unit("pand-2", &format!("vbo-{i}"), Some(1980), Some(70.0)))
            .collect();
        let group = BuildingGroup::new(
            Building {
                id: BuildingId::new("pand-2"),
                unit_count: Some(6),
                floor_count: Some(3),
                envelope: Some(EnvelopeSurfaces::new(300.0, 120.0, 0.0, 120.0)),
                dwelling_type: Some(DwellingType::MidRow),
            },
            units,
        );
        let mut table = LabelDistributionTable::new();
        for bucket in [
            crate::domain::DwellingTypeBucket::StairwellAccess,
            crate::domain::DwellingTypeBucket::GalleryAccess,
        ] {
            for ff in FormFactorBucket::MEMBERS {
                table
                    .insert_shares(
                        DistributionKey::new(bucket, ConstructionPeriod::From1975To1991, *ff),
                        &[(EnergyLabel::D, 1.0)],
                    )
                    .unwrap();
            }
        }

        let estimates = estimate_building(&group, &table, &EstimationConfig::default()).unwrap();
        assert_eq!(estimates.len(), 6);
        for estimate in &estimates {
            let dwelling = estimate.dwelling_type.unwrap();
            assert!(dwelling.is_apartment());
            assert_eq!(
                estimate.dwelling_type_bucket,
                Some(crate::domain::DwellingTypeBucket::StairwellAccess)
            );
            assert_eq!(estimate.energy_label, Some(EnergyLabel::D));
        }
        // ground units: 95% of 300 over 6 interior units, 60 of ground each
        assert_eq!(estimates[0].ground_area, Some(60.0));
        assert!((estimates[0].wall_area.unwrap() - 47.5).abs() < 1e-9);
        assert_eq!(estimates[4].roof_area, Some(0.0));
    }

    #[test]
    fn test_multi_unit_without_counts_has_no_types() {
        let group = BuildingGroup::new(
            Building {
                id: BuildingId::new("pand-3"),
                unit_count: None,
                floor_count: Some(2),
                envelope: Some(EnvelopeSurfaces::new(100.0, 50.0, 0.0, 50.0)),
                dwelling_type: Some(DwellingType::Detached),
            },
            vec![
                unit("pand-3", "a", Some(1990), Some(50.0)),
                unit("pand-3", "b", Some(1990), Some(50.0)),
            ],
        );
        let estimates =
            estimate_building(&group, &LabelDistributionTable::new(), &EstimationConfig::default())
                .unwrap();
        assert!(estimates.iter().all(|e| e.dwelling_type.is_none() && e.wall_area.is_none()));
    }

    #[test]
    fn test_single_row_of_registered_apartments() {
        let mut flat = unit("pand-4", "vbo-1", Some(1980), Some(80.0));
        flat.dwelling_type = Some(DwellingType::MidRow);
        let group = BuildingGroup::new(
            Building {
                id: BuildingId::new("pand-4"),
                unit_count: Some(4),
                floor_count: Some(3),
                envelope: Some(EnvelopeSurfaces::new(400.0, 100.0, 0.0, 100.0)),
                dwelling_type: Some(DwellingType::MidRow),
            },
            vec![flat],
        );
        let estimates =
            estimate_building(&group, &LabelDistributionTable::new(), &EstimationConfig::default())
                .unwrap();

        let estimate = &estimates[0];
        assert_eq!(estimates.len(), 1);
        assert!(estimate.dwelling_type.unwrap().is_apartment());
        assert_eq!(estimate.floor, Some(0));
        assert_eq!(estimate.floor_position, Some(FloorPosition::Ground));
        // 95% of the wall over four interior units, the roof belongs to another unit
        assert!((estimate.wall_area.unwrap() - 95.0).abs() < 1e-9);
        assert_eq!(estimate.roof_area, Some(0.0));
        assert_eq!(estimate.ground_area, Some(100.0));
        assert_eq!(estimate.form_factor, Some(2.44));
    }

    #[test]
    fn test_single_registered_unit_keeps_totals_per_row() {
        let group = BuildingGroup::new(
            Building {
                id: BuildingId::new("pand-5"),
                unit_count: Some(1),
                floor_count: Some(2),
                envelope: Some(EnvelopeSurfaces::new(40.0, 60.0, 0.0, 50.0)),
                dwelling_type: Some(DwellingType::Detached),
            },
            vec![
                unit("pand-5", "a", Some(1970), Some(90.0)),
                unit("pand-5", "b", Some(1970), Some(90.0)),
            ],
        );
        let estimates =
            estimate_building(&group, &LabelDistributionTable::new(), &EstimationConfig::default())
                .unwrap();

        assert_eq!(estimates.len(), 2);
        for estimate in &estimates {
            assert_eq!(estimate.dwelling_type, Some(DwellingType::Detached));
            assert_eq!(estimate.floor_position, Some(FloorPosition::RoofAndGround));
            assert_eq!(estimate.wall_area, Some(40.0));
            assert_eq!(estimate.roof_area, Some(60.0));
            assert_eq!(estimate.ground_area, Some(50.0));
            assert_eq!(estimate.form_factor, Some(1.67));
        }
    }

    #[test]
    fn test_stray_unit_is_rejected() {
        let mut group = detached_house();
        group.units.push(unit("pand-9", "vbo-9", None, None));
        let err = estimate_building(&group, &LabelDistributionTable::new(), &EstimationConfig::default())
            .unwrap_err();
        assert!(matches!(err, EstimationError::InvariantViolation(_)));
    }
}
