// Copyright 2025 Cowboy AI, LLC.

//! Construction periods of the reference study
//!
//! The study uses different year breakpoints for each group of dwelling
//! types, so the same construction year can land in different periods. All
//! bounds are inclusive. Open-ended periods use 0 and 9999 as bounds.

use std::fmt;
use std::str::FromStr;

use crate::category::{impl_text_serde, split_pair, OrderedCategory};
use crate::domain::dwelling_type::DwellingTypeBucket;
use crate::errors::EstimationError;

/// Construction-year bucket, ordered by its `(start, end)` bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstructionPeriod {
    /// (0, 1945)
    Until1945 = 0,
    /// (0, 1964)
    Until1964,
    /// (1946, 1964)
    From1946To1964,
    /// (1965, 1974)
    From1965To1974,
    /// (1975, 1991)
    From1975To1991,
    /// (1992, 2005)
    From1992To2005,
    /// (1992, 9999)
    From1992,
    /// (2006, 2014)
    From2006To2014,
    /// (2015, 9999)
    From2015,
}

impl ConstructionPeriod {
    /// Classify a construction year for a dwelling-type bucket
    ///
    /// ```rust
    /// use wijklabels::{ConstructionPeriod, DwellingTypeBucket};
    ///
    /// let period = ConstructionPeriod::classify(1970, DwellingTypeBucket::Detached);
    /// assert_eq!(period, ConstructionPeriod::From1965To1974);
    /// assert_eq!(period.to_string(), "(1965, 1974)");
    /// ```
    pub fn classify(year: i32, dwelling: DwellingTypeBucket) -> Self {
        use ConstructionPeriod::*;
        match dwelling {
            DwellingTypeBucket::Detached | DwellingTypeBucket::SemiDetached => match year {
                ..=1964 => Until1964,
                1965..=1974 => From1965To1974,
                1975..=1991 => From1975To1991,
                1992..=2005 => From1992To2005,
                2006..=2014 => From2006To2014,
                2015.. => From2015,
            },
            DwellingTypeBucket::EndOfRow | DwellingTypeBucket::MidRow => match year {
                ..=1945 => Until1945,
                1946..=1964 => From1946To1964,
                1965..=1974 => From1965To1974,
                1975..=1991 => From1975To1991,
                1992..=2005 => From1992To2005,
                2006..=2014 => From2006To2014,
                2015.. => From2015,
            },
            DwellingTypeBucket::Maisonette
            | DwellingTypeBucket::GalleryAccess
            | DwellingTypeBucket::StairwellAccess
            | DwellingTypeBucket::Other => match year {
                ..=1964 => Until1964,
                1965..=1974 => From1965To1974,
                1975..=1991 => From1975To1991,
                1992.. => From1992,
            },
        }
    }

    /// Inclusive `(start, end)` years
    pub fn bounds(self) -> (i32, i32) {
        use ConstructionPeriod::*;
        match self {
            Until1945 => (0, 1945),
            Until1964 => (0, 1964),
            From1946To1964 => (1946, 1964),
            From1965To1974 => (1965, 1974),
            From1975To1991 => (1975, 1991),
            From1992To2005 => (1992, 2005),
            From1992 => (1992, 9999),
            From2006To2014 => (2006, 2014),
            From2015 => (2015, 9999),
        }
    }

    /// Period with exactly these bounds
    pub fn from_bounds(start: i32, end: i32) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|period| period.bounds() == (start, end))
    }
}

impl OrderedCategory for ConstructionPeriod {
    const MEMBERS: &'static [Self] = &[
        ConstructionPeriod::Until1945,
        ConstructionPeriod::Until1964,
        ConstructionPeriod::From1946To1964,
        ConstructionPeriod::From1965To1974,
        ConstructionPeriod::From1975To1991,
        ConstructionPeriod::From1992To2005,
        ConstructionPeriod::From1992,
        ConstructionPeriod::From2006To2014,
        ConstructionPeriod::From2015,
    ];
    const NAME: &'static str = "ConstructionPeriod";

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ConstructionPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.bounds();
        write!(f, "({start}, {end})")
    }
}

impl FromStr for ConstructionPeriod {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bounds = split_pair(s).and_then(|(start, end)| {
            Some((start.parse::<i32>().ok()?, end.parse::<i32>().ok()?))
        });
        bounds
            .and_then(|(start, end)| Self::from_bounds(start, end))
            .ok_or_else(|| EstimationError::out_of_domain(Self::NAME, s))
    }
}

impl_text_serde!(ConstructionPeriod);
