// Copyright 2025 Cowboy AI, LLC.

//! Reference label distributions
//!
//! For every combination of dwelling-type bucket, construction period and
//! form-factor bucket the reference study gives the share of each energy
//! label. Here the shares are normalized and laid out as consecutive
//! half-open bins on `[0, 1)`, so that a uniform draw picks a label with the
//! probability of its share.
//!
//! The table is persisted in long format: one [`DistributionRecord`] per
//! key and label.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{ConstructionPeriod, DwellingTypeBucket, EnergyLabel, FormFactorBucket};
use crate::errors::{EstimationError, EstimationResult};

/// Table key of one label distribution
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct DistributionKey {
    /// Dwelling-type bucket
    pub dwelling_type: DwellingTypeBucket,
    /// Construction period
    pub period: ConstructionPeriod,
    /// Form-factor bucket
    pub form_factor: FormFactorBucket,
}

impl DistributionKey {
    /// Create a key
    pub fn new(
        dwelling_type: DwellingTypeBucket,
        period: ConstructionPeriod,
        form_factor: FormFactorBucket,
    ) -> Self {
        Self {
            dwelling_type,
            period,
            form_factor,
        }
    }
}

impl fmt::Display for DistributionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.dwelling_type, self.period, self.form_factor)
    }
}

/// Probability bin of one label, `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabelBin {
    /// Label drawn when the draw falls in the bin
    pub label: EnergyLabel,
    /// Share of the label within its key
    pub probability: f64,
    /// Inclusive lower edge
    pub low: f64,
    /// Exclusive upper edge
    pub high: f64,
}

impl LabelBin {
    /// True when `low <= draw < high`
    pub fn contains(&self, draw: f64) -> bool {
        self.low <= draw && draw < self.high
    }
}

/// One row of the long-format table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DistributionRecord {
    /// Dwelling-type bucket
    pub dwelling_type: DwellingTypeBucket,
    /// Construction period
    pub construction_period: ConstructionPeriod,
    /// Form-factor bucket
    pub form_factor: FormFactorBucket,
    /// Label of this row
    pub energy_label: EnergyLabel,
    /// Normalized share of the label
    pub probability: f64,
    /// Inclusive lower edge of the bin
    pub bin_min: f64,
    /// Exclusive upper edge of the bin
    pub bin_max: f64,
}

impl DistributionRecord {
    fn key(&self) -> DistributionKey {
        DistributionKey::new(self.dwelling_type, self.construction_period, self.form_factor)
    }

    fn bin(&self) -> LabelBin {
        LabelBin {
            label: self.energy_label,
            probability: self.probability,
            low: self.bin_min,
            high: self.bin_max,
        }
    }
}

/// Read-only mapping from [`DistributionKey`] to its label bins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelDistributionTable {
    entries: BTreeMap<DistributionKey, Vec<LabelBin>>,
}

impl LabelDistributionTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the distribution of `key` from raw label shares
    ///
    /// Shares need not add up to one; they are normalized first. Bins follow
    /// label order, labels with a zero share get no bin and the last bin is
    /// closed at exactly 1.0.
    ///
    /// ```rust
    /// use wijklabels::labels::{DistributionKey, LabelDistributionTable};
    /// use wijklabels::{ConstructionPeriod, DwellingTypeBucket, EnergyLabel, FormFactorBucket};
    ///
    /// let key = DistributionKey::new(
    ///     DwellingTypeBucket::Detached,
    ///     ConstructionPeriod::From1965To1974,
    ///     FormFactorBucket::From150To200,
    /// );
    /// let mut table = LabelDistributionTable::new();
    /// table
    ///     .insert_shares(key, &[(EnergyLabel::C, 30.0), (EnergyLabel::B, 10.0)])
    ///     .unwrap();
    ///
    /// let bins = table.get(&key).unwrap();
    /// assert_eq!(bins[0].label, EnergyLabel::B);
    /// assert_eq!(bins[0].high, 0.25);
    /// assert_eq!(bins[1].high, 1.0);
    /// ```
    pub fn insert_shares(
        &mut self,
        key: DistributionKey,
        shares: &[(EnergyLabel, f64)],
    ) -> EstimationResult<()> {
        let invalid = |reason: String| EstimationError::InvalidDistribution {
            key: key.to_string(),
            reason,
        };

        let mut sorted = shares.to_vec();
        sorted.sort_by_key(|(label, _)| *label);
        if sorted.windows(2).any(|pair| pair[0].0 == pair[1].0) {
            return Err(invalid("a label appears more than once".to_owned()));
        }
        if let Some((label, share)) = sorted.iter().find(|(_, s)| !(s.is_finite() && *s >= 0.0)) {
            return Err(invalid(format!("share of {label} is {share}")));
        }
        let total: f64 = sorted.iter().map(|(_, s)| s).sum();
        if total <= 0.0 {
            return Err(invalid("shares add up to zero".to_owned()));
        }

        let mut bins = Vec::with_capacity(sorted.len());
        let mut cumulative = 0.0;
        for (label, share) in sorted.into_iter().filter(|(_, s)| *s > 0.0) {
            let probability = share / total;
            let low = cumulative;
            cumulative += probability;
            bins.push(LabelBin {
                label,
                probability,
                low,
                high: cumulative,
            });
        }
        if let Some(last) = bins.last_mut() {
            last.high = 1.0;
        }

        self.entries.insert(key, bins);
        Ok(())
    }

    /// Add already laid-out bins for `key`, replacing any previous ones
    pub fn insert_bins(&mut self, key: DistributionKey, bins: Vec<LabelBin>) -> EstimationResult<()> {
        if let Some(bin) = bins
            .iter()
            .find(|b| !(b.low.is_finite() && b.high.is_finite() && b.low <= b.high))
        {
            return Err(EstimationError::InvalidDistribution {
                key: key.to_string(),
                reason: format!("bin of {} is [{}, {})", bin.label, bin.low, bin.high),
            });
        }
        self.entries.insert(key, bins);
        Ok(())
    }

    /// Bins of `key`, in label order
    pub fn get(&self, key: &DistributionKey) -> Option<&[LabelBin]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// True when the table has a distribution for `key`
    pub fn contains_key(&self, key: &DistributionKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in table order
    pub fn keys(&self) -> impl Iterator<Item = &DistributionKey> {
        self.entries.keys()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a table from long-format rows
    pub fn from_records(records: impl IntoIterator<Item = DistributionRecord>) -> EstimationResult<Self> {
        let mut grouped: BTreeMap<DistributionKey, Vec<LabelBin>> = BTreeMap::new();
        for record in records {
            grouped.entry(record.key()).or_default().push(record.bin());
        }

        let mut table = Self::new();
        for (key, mut bins) in grouped {
            bins.sort_by_key(|b| b.label);
            table.insert_bins(key, bins)?;
        }
        Ok(table)
    }

    /// Long-format rows, ordered by key and label
    pub fn records(&self) -> Vec<DistributionRecord> {
        self.entries
            .iter()
            .flat_map(|(key, bins)| {
                bins.iter().map(move |bin| DistributionRecord {
                    dwelling_type: key.dwelling_type,
                    construction_period: key.period,
                    form_factor: key.form_factor,
                    energy_label: bin.label,
                    probability: bin.probability,
                    bin_min: bin.low,
                    bin_max: bin.high,
                })
            })
            .collect()
    }

    /// Load a table from a JSON array of records
    pub fn from_json_str(json: &str) -> EstimationResult<Self> {
        let records: Vec<DistributionRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Serialize the table as a JSON array of records
    pub fn to_json_string(&self) -> EstimationResult<String> {
        Ok(serde_json::to_string_pretty(&self.records())?)
    }
}
