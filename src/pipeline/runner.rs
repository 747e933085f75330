// Copyright 2025 Cowboy AI, LLC.

//! Estimation over many buildings
//!
//! Buildings are independent, so the runner estimates them in parallel. A
//! building that fails, by error or by panic, is dropped from the output and
//! listed in the report; the rest of the run carries on.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::EstimationConfig;
use crate::domain::BuildingGroup;
use crate::errors::{EstimationError, EstimationResult};
use crate::identifiers::BuildingId;
use crate::labels::LabelDistributionTable;
use crate::pipeline::estimate::estimate_building;
use crate::pipeline::records::{group_rows, InputRow, UnitEstimate};

/// A building left out of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DroppedBuilding {
    /// The building
    pub building_id: BuildingId,
    /// What went wrong
    pub reason: String,
}

/// Outcome of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunReport {
    /// Unique id of the run
    #[schemars(with = "String")]
    pub run_id: Uuid,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run finished
    pub finished_at: DateTime<Utc>,
    /// Run seed
    pub seed: u64,
    /// Estimates of all buildings that were not dropped, in input order
    pub estimates: Vec<UnitEstimate>,
    /// Buildings that were dropped, in input order
    pub dropped: Vec<DroppedBuilding>,
    /// Buildings estimated successfully
    pub buildings_processed: usize,
    /// Buildings dropped
    pub buildings_dropped: usize,
    /// Units in the estimates
    pub units: usize,
    /// Units that received a label
    pub units_labelled: usize,
}

impl RunReport {
    /// Share of units that received a label, 0 for an empty run
    pub fn label_coverage(&self) -> f64 {
        if self.units == 0 {
            0.0
        } else {
            self.units_labelled as f64 / self.units as f64
        }
    }
}

/// Parallel, fault-isolating driver of [`estimate_building`]
#[derive(Debug, Clone)]
pub struct EstimationRunner {
    table: LabelDistributionTable,
    config: EstimationConfig,
}

impl EstimationRunner {
    /// Create a runner; the configuration is validated first
    pub fn new(table: LabelDistributionTable, config: EstimationConfig) -> EstimationResult<Self> {
        config.validate()?;
        Ok(Self { table, config })
    }

    /// The configuration in use
    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    /// The reference table in use
    pub fn table(&self) -> &LabelDistributionTable {
        &self.table
    }

    /// Estimate every building of `groups`
    pub fn run(&self, groups: &[BuildingGroup]) -> RunReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(%run_id, buildings = groups.len(), seed = self.config.seed, "estimation run started");

        let outcomes: Vec<(&BuildingGroup, EstimationResult<Vec<UnitEstimate>>)> = groups
            .par_iter()
            .map(|group| (group, self.estimate_isolated(group)))
            .collect();

        let mut estimates = Vec::new();
        let mut dropped = Vec::new();
        for (group, outcome) in outcomes {
            match outcome {
                Ok(units) => estimates.extend(units),
                Err(err) => {
                    error!(building_id = %group.building.id, %err, "building dropped");
                    dropped.push(DroppedBuilding {
                        building_id: group.building.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let units_labelled = estimates.iter().filter(|e| e.energy_label.is_some()).count();
        let report = RunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            seed: self.config.seed,
            units: estimates.len(),
            units_labelled,
            buildings_processed: groups.len() - dropped.len(),
            buildings_dropped: dropped.len(),
            estimates,
            dropped,
        };
        info!(
            %run_id,
            buildings = report.buildings_processed,
            dropped = report.buildings_dropped,
            units = report.units,
            coverage = report.label_coverage(),
            "estimation run finished"
        );
        report
    }

    /// Group flat rows by building and estimate them
    pub fn run_rows(&self, rows: impl IntoIterator<Item = InputRow>) -> RunReport {
        self.run(&group_rows(rows))
    }

    fn estimate_isolated(&self, group: &BuildingGroup) -> EstimationResult<Vec<UnitEstimate>> {
        let building_id = group.building.id.to_string();
        catch_unwind(AssertUnwindSafe(|| {
            estimate_building(group, &self.table, &self.config)
        }))
        .unwrap_or_else(|payload| {
            Err(EstimationError::InvariantViolation(format!(
                "panicked: {}",
                panic_message(payload.as_ref())
            )))
        })
        .map_err(|err| match err {
            fault @ EstimationError::BuildingFault { .. } => fault,
            other => EstimationError::BuildingFault {
                building_id: building_id.clone(),
                message: other.to_string(),
            },
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause")
}
