// Copyright 2025 Cowboy AI, LLC.

//! Drawing a label from a reference distribution

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::EnergyLabel;
use crate::labels::distribution::{DistributionKey, LabelDistributionTable};

/// Why a draw produced no label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupMiss {
    /// The table has no distribution for the key
    #[error("no distribution for the key")]
    MissingKey,
    /// No bin contains the draw
    #[error("no bin contains the draw")]
    NoInterval,
    /// More than one bin contains the draw
    #[error("{0} bins contain the draw")]
    Ambiguous(usize),
}

/// The label whose bin contains `draw`
///
/// ```rust
/// use wijklabels::labels::{lookup, DistributionKey, LabelDistributionTable, LookupMiss};
/// use wijklabels::{ConstructionPeriod, DwellingTypeBucket, EnergyLabel, FormFactorBucket};
///
/// let key = DistributionKey::new(
///     DwellingTypeBucket::MidRow,
///     ConstructionPeriod::From1975To1991,
///     FormFactorBucket::From100To150,
/// );
/// let mut table = LabelDistributionTable::new();
/// table.insert_shares(key, &[(EnergyLabel::B, 1.0), (EnergyLabel::C, 1.0)]).unwrap();
///
/// assert_eq!(lookup(&table, &key, 0.2), Ok(EnergyLabel::B));
/// assert_eq!(lookup(&table, &key, 0.5), Ok(EnergyLabel::C));
/// assert_eq!(lookup(&table, &key, 1.0), Err(LookupMiss::NoInterval));
/// ```
pub fn lookup(
    table: &LabelDistributionTable,
    key: &DistributionKey,
    draw: f64,
) -> Result<EnergyLabel, LookupMiss> {
    let bins = table.get(key).ok_or(LookupMiss::MissingKey)?;
    let mut hits = bins.iter().filter(|bin| bin.contains(draw));
    match (hits.next(), hits.count()) {
        (None, _) => Err(LookupMiss::NoInterval),
        (Some(bin), 0) => Ok(bin.label),
        (Some(_), more) => Err(LookupMiss::Ambiguous(more + 1)),
    }
}

/// Like [`lookup`], reporting a miss as no label
pub fn sample(table: &LabelDistributionTable, key: &DistributionKey, draw: f64) -> Option<EnergyLabel> {
    match lookup(table, key, draw) {
        Ok(label) => Some(label),
        Err(miss @ LookupMiss::Ambiguous(_)) => {
            warn!(%key, draw, %miss, "overlapping label bins");
            None
        }
        Err(miss) => {
            debug!(%key, draw, %miss, "no label drawn");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConstructionPeriod, DwellingTypeBucket, FormFactorBucket};
    use crate::labels::distribution::LabelBin;

    fn key() -> DistributionKey {
        DistributionKey::new(
            DwellingTypeBucket::Detached,
            ConstructionPeriod::From1965To1974,
            FormFactorBucket::From150To200,
        )
    }

    fn bin(label: EnergyLabel, low: f64, high: f64) -> LabelBin {
        LabelBin {
            label,
            probability: high - low,
            low,
            high,
        }
    }

    fn table(bins: Vec<LabelBin>) -> LabelDistributionTable {
        let mut table = LabelDistributionTable::new();
        table.insert_bins(key(), bins).unwrap();
        table
    }

    #[test]
    fn test_bins_are_half_open() {
        let table = table(vec![
            bin(EnergyLabel::A, 0.0, 0.2),
            bin(EnergyLabel::B, 0.2, 0.6),
            bin(EnergyLabel::C, 0.6, 1.0),
        ]);
        assert_eq!(lookup(&table, &key(), 0.0), Ok(EnergyLabel::A));
        assert_eq!(lookup(&table, &key(), 0.2), Ok(EnergyLabel::B));
        assert_eq!(lookup(&table, &key(), 0.599), Ok(EnergyLabel::B));
        assert_eq!(lookup(&table, &key(), 0.6), Ok(EnergyLabel::C));
        assert_eq!(lookup(&table, &key(), 1.0), Err(LookupMiss::NoInterval));
    }

    #[test]
    fn test_missing_key() {
        let table = LabelDistributionTable::new();
        assert_eq!(lookup(&table, &key(), 0.5), Err(LookupMiss::MissingKey));
        assert_eq!(sample(&table, &key(), 0.5), None);
    }

    #[test]
    fn test_gap_between_bins() {
        let table = table(vec![bin(EnergyLabel::A, 0.0, 0.3), bin(EnergyLabel::B, 0.4, 1.0)]);
        assert_eq!(lookup(&table, &key(), 0.35), Err(LookupMiss::NoInterval));
    }

    #[test]
    fn test_overlapping_bins_are_ambiguous() {
        let table = table(vec![bin(EnergyLabel::A, 0.0, 0.6), bin(EnergyLabel::B, 0.4, 1.0)]);
        assert_eq!(lookup(&table, &key(), 0.5), Err(LookupMiss::Ambiguous(2)));
        assert_eq!(sample(&table, &key(), 0.5), None);
        assert_eq!(sample(&table, &key(), 0.7), Some(EnergyLabel::B));
    }

    #[test]
    fn test_zero_width_bin_never_matches() {
        let table = table(vec![
            bin(EnergyLabel::A, 0.0, 0.0),
            bin(EnergyLabel::B, 0.0, 1.0),
        ]);
        assert_eq!(lookup(&table, &key(), 0.0), Ok(EnergyLabel::B));
    }
}
