// Copyright 2025 Cowboy AI, LLC.

//! Energy labels, from best (A++++) to worst (G)

use std::fmt;
use std::str::FromStr;

use crate::category::{impl_text_serde, OrderedCategory};
use crate::errors::EstimationError;

/// One of the 11 energy-efficiency grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnergyLabel {
    /// A++++
    APlus4 = 0,
    /// A+++
    APlus3,
    /// A++
    APlus2,
    /// A+
    APlus,
    /// A
    A,
    /// B
    B,
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// G
    G,
}

impl EnergyLabel {
    /// Label as printed on the certificate
    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLabel::APlus4 => "A++++",
            EnergyLabel::APlus3 => "A+++",
            EnergyLabel::APlus2 => "A++",
            EnergyLabel::APlus => "A+",
            EnergyLabel::A => "A",
            EnergyLabel::B => "B",
            EnergyLabel::C => "C",
            EnergyLabel::D => "D",
            EnergyLabel::E => "E",
            EnergyLabel::F => "F",
            EnergyLabel::G => "G",
        }
    }
}

impl OrderedCategory for EnergyLabel {
    const MEMBERS: &'static [Self] = &[
        EnergyLabel::APlus4,
        EnergyLabel::APlus3,
        EnergyLabel::APlus2,
        EnergyLabel::APlus,
        EnergyLabel::A,
        EnergyLabel::B,
        EnergyLabel::C,
        EnergyLabel::D,
        EnergyLabel::E,
        EnergyLabel::F,
        EnergyLabel::G,
    ];
    const NAME: &'static str = "EnergyLabel";

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EnergyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyLabel {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::MEMBERS
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EstimationError::out_of_domain(Self::NAME, s))
    }
}

impl_text_serde!(EnergyLabel);
