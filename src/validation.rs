// Copyright 2025 Cowboy AI, LLC.

//! Comparison of estimated labels with registered ones
//!
//! Registered labels exist for part of the housing stock. Comparing them to
//! the estimates for the same units measures how often the estimate hits the
//! registered label exactly or within a number of steps, and per estimated
//! label how far off it tends to be. That offset can be fed back as a label
//! adjustment.

use std::collections::{BTreeMap, HashMap};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::OrderedCategory;
use crate::domain::EnergyLabel;
use crate::identifiers::UnitId;
use crate::pipeline::UnitEstimate;

/// Single-family house or unit in a multi-family building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Household {
    /// Detached, semi-detached and row houses
    SingleFamily,
    /// Apartments
    MultiFamily,
}

impl Household {
    fn of(estimate: &UnitEstimate) -> Option<Self> {
        if let Some(dwelling) = estimate.dwelling_type {
            return Some(if dwelling.is_apartment() {
                Household::MultiFamily
            } else {
                Household::SingleFamily
            });
        }
        estimate.dwelling_type_bucket.map(|bucket| {
            if bucket.is_single_family() {
                Household::SingleFamily
            } else {
                Household::MultiFamily
            }
        })
    }
}

/// Estimated and registered label of one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabelComparison {
    /// The unit
    pub unit_id: UnitId,
    /// Estimated label
    pub estimated: EnergyLabel,
    /// Registered label
    pub reference: EnergyLabel,
    /// Household kind, when the dwelling type is known
    pub household: Option<Household>,
}

impl LabelComparison {
    /// Steps from the registered label to the estimate; positive when the
    /// estimate is worse
    pub fn distance(&self) -> i32 {
        self.estimated.distance(self.reference)
    }
}

/// Pair every labelled estimate with the registered label of its unit
///
/// Units without an estimate or without a registered label are skipped.
pub fn compare_with_reference(
    estimates: &[UnitEstimate],
    reference: &HashMap<UnitId, EnergyLabel>,
) -> Vec<LabelComparison> {
    estimates
        .iter()
        .filter_map(|estimate| {
            Some(LabelComparison {
                unit_id: estimate.unit_id.clone(),
                estimated: estimate.energy_label?,
                reference: *reference.get(&estimate.unit_id)?,
                household: Household::of(estimate),
            })
        })
        .collect()
}

/// Share of all comparisons that belong to `household` and whose labels are
/// at most `within` apart
///
/// The denominator is every compared unit, whatever the household filter, so
/// the single-family and multi-family shares add up to the overall share.
/// `None` when there is nothing to compare.
pub fn accuracy(
    comparisons: &[LabelComparison],
    within: u32,
    household: Option<Household>,
) -> Option<f64> {
    if comparisons.is_empty() {
        return None;
    }
    let hits = comparisons
        .iter()
        .filter(|c| household.is_none() || c.household == household)
        .filter(|c| c.estimated.within(c.reference, within))
        .count();
    Some(hits as f64 / comparisons.len() as f64)
}

/// Exact and within-one accuracy, overall and per household kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationSummary {
    /// Number of compared units
    pub compared: usize,
    /// Exact matches over all units
    pub exact: Option<f64>,
    /// Within one step over all units
    pub within_one: Option<f64>,
    /// Exact matches for single-family houses
    pub exact_single_family: Option<f64>,
    /// Within one step for single-family houses
    pub within_one_single_family: Option<f64>,
    /// Exact matches for apartments
    pub exact_multi_family: Option<f64>,
    /// Within one step for apartments
    pub within_one_multi_family: Option<f64>,
}

impl ValidationSummary {
    /// Summarize a set of comparisons
    pub fn from_comparisons(comparisons: &[LabelComparison]) -> Self {
        let summary = Self {
            compared: comparisons.len(),
            exact: accuracy(comparisons, 0, None),
            within_one: accuracy(comparisons, 1, None),
            exact_single_family: accuracy(comparisons, 0, Some(Household::SingleFamily)),
            within_one_single_family: accuracy(comparisons, 1, Some(Household::SingleFamily)),
            exact_multi_family: accuracy(comparisons, 0, Some(Household::MultiFamily)),
            within_one_multi_family: accuracy(comparisons, 1, Some(Household::MultiFamily)),
        };
        debug!(
            compared = summary.compared,
            exact = ?summary.exact,
            within_one = ?summary.within_one,
            "validation summary"
        );
        summary
    }
}

/// Median distance to the registered label, per estimated label
pub fn median_distance_by_label(comparisons: &[LabelComparison]) -> BTreeMap<EnergyLabel, f64> {
    let mut grouped: BTreeMap<EnergyLabel, Vec<i32>> = BTreeMap::new();
    for comparison in comparisons {
        grouped
            .entry(comparison.estimated)
            .or_default()
            .push(comparison.distance());
    }
    grouped
        .into_iter()
        .map(|(label, mut distances)| {
            distances.sort_unstable();
            let mid = distances.len() / 2;
            let median = if distances.len() % 2 == 0 {
                f64::from(distances[mid - 1] + distances[mid]) / 2.0
            } else {
                f64::from(distances[mid])
            };
            (label, median)
        })
        .collect()
}

/// Steps to shift each estimated label by to cancel its median distance
///
/// Half-step medians are truncated toward zero, so a median of -1.5 shifts
/// by one step.
pub fn label_adjustments(comparisons: &[LabelComparison]) -> BTreeMap<EnergyLabel, i32> {
    median_distance_by_label(comparisons)
        .into_iter()
        .map(|(label, median)| (label, (-median).trunc() as i32))
        .collect()
}

/// Apply the adjustment of `label`, if any, clamped to the label scale
pub fn adjust_label(label: EnergyLabel, adjustments: &BTreeMap<EnergyLabel, i32>) -> EnergyLabel {
    adjustments
        .get(&label)
        .map_or(label, |steps| label.offset(*steps))
}
