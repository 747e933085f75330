// Copyright 2025 Cowboy AI, LLC.

//! Form factor: heat-loss surface per unit of usable floor area
//!
//! The loss surface (`A_ls`) is the sum of a unit's exterior wall, roof and
//! ground-floor areas; the usable area (`A_g`) comes from the register. Their
//! ratio is bucketed into eight half-open classes, which is one third of the
//! reference-table key.

use std::fmt;
use std::str::FromStr;

use crate::category::{impl_text_serde, split_pair, OrderedCategory};
use crate::errors::{EstimationError, EstimationResult};

/// Lower edges of every bucket but the first
const EDGES: [f64; 7] = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];

/// Form-factor class `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormFactorBucket {
    /// (-inf, 0.5)
    Below050 = 0,
    /// [0.5, 1.0)
    From050To100,
    /// [1.0, 1.5)
    From100To150,
    /// [1.5, 2.0)
    From150To200,
    /// [2.0, 2.5)
    From200To250,
    /// [2.5, 3.0)
    From250To300,
    /// [3.0, 3.5)
    From300To350,
    /// [3.5, inf)
    From350,
}

impl FormFactorBucket {
    /// Bucket containing `ratio`; a ratio on an edge belongs to the higher bucket
    ///
    /// Infinite ratios fall in the open-ended buckets; NaN has no bucket.
    pub fn from_ratio(ratio: f64) -> EstimationResult<Self> {
        if ratio.is_nan() {
            return Err(EstimationError::out_of_domain(Self::NAME, ratio));
        }
        let index = EDGES.iter().take_while(|edge| ratio >= **edge).count();
        Ok(Self::MEMBERS[index])
    }

    /// `(low, high)` edges, infinite at both extremes
    pub fn bounds(self) -> (f64, f64) {
        let i = self.index();
        let low = if i == 0 { f64::NEG_INFINITY } else { EDGES[i - 1] };
        let high = EDGES.get(i).copied().unwrap_or(f64::INFINITY);
        (low, high)
    }

    /// True when `ratio` lies in `[low, high)`
    pub fn contains(self, ratio: f64) -> bool {
        let (low, high) = self.bounds();
        low <= ratio && (ratio < high || high == f64::INFINITY)
    }
}

impl OrderedCategory for FormFactorBucket {
    const MEMBERS: &'static [Self] = &[
        FormFactorBucket::Below050,
        FormFactorBucket::From050To100,
        FormFactorBucket::From100To150,
        FormFactorBucket::From150To200,
        FormFactorBucket::From200To250,
        FormFactorBucket::From250To300,
        FormFactorBucket::From300To350,
        FormFactorBucket::From350,
    ];
    const NAME: &'static str = "FormFactorBucket";

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FormFactorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.bounds();
        write!(f, "({low:.1}, {high:.1})")
    }
}

impl FromStr for FormFactorBucket {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bounds = split_pair(s).and_then(|(low, high)| {
            Some((low.parse::<f64>().ok()?, high.parse::<f64>().ok()?))
        });
        bounds
            .and_then(|(low, high)| {
                Self::MEMBERS
                    .iter()
                    .copied()
                    .find(|bucket| bucket.bounds() == (low, high))
            })
            .ok_or_else(|| EstimationError::out_of_domain(Self::NAME, s))
    }
}

impl_text_serde!(FormFactorBucket);

/// Loss surface divided by usable area
///
/// Returns `None` when either input is missing or the area cannot divide:
/// zero, negative or non-finite.
pub fn form_factor(loss_surface: Option<f64>, usable_area: Option<f64>) -> Option<f64> {
    let loss_surface = loss_surface.filter(|v| v.is_finite())?;
    let usable_area = usable_area.filter(|v| v.is_finite() && *v > 0.0)?;
    Some(loss_surface / usable_area)
}

/// Form factor and its bucket, or `None` when the ratio cannot be computed
pub fn classify_form_factor(
    loss_surface: Option<f64>,
    usable_area: Option<f64>,
) -> EstimationResult<Option<(f64, FormFactorBucket)>> {
    form_factor(loss_surface, usable_area)
        .map(|ratio| FormFactorBucket::from_ratio(ratio).map(|bucket| (ratio, bucket)))
        .transpose()
}
