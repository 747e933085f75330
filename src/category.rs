// Copyright 2025 Cowboy AI, LLC.

//! Ordered, finite-domain categories
//!
//! Dwelling-type buckets, construction periods, form-factor buckets and energy
//! labels are all small enumerations with a fixed order. The order matters: it
//! groups table rows, and for energy labels the distance between two members is
//! how estimates are scored against registered labels.
//!
//! Each implementor exposes its members as a static slice in ascending order,
//! and its index is the enum discriminant, so comparisons never search.

use std::fmt;
use std::str::FromStr;

/// A totally ordered category with a finite, static set of members
///
/// # Examples
///
/// ```rust
/// use wijklabels::{EnergyLabel, OrderedCategory};
///
/// assert_eq!(EnergyLabel::A.distance(EnergyLabel::D), -3);
/// assert!(EnergyLabel::B.within(EnergyLabel::A, 1));
/// assert_eq!(EnergyLabel::parse_or_missing("not a label"), None);
/// ```
pub trait OrderedCategory: Copy + Ord + fmt::Display + FromStr + 'static {
    /// Every member, in ascending order
    const MEMBERS: &'static [Self];

    /// Human-readable name of the category, used in diagnostics
    const NAME: &'static str;

    /// Position of this member in [`Self::MEMBERS`]
    fn index(self) -> usize;

    /// Member at `index`, if any
    fn from_index(index: usize) -> Option<Self> {
        Self::MEMBERS.get(index).copied()
    }

    /// Signed difference of ordinal indices, `index(self) - index(other)`
    ///
    /// Lower indices are the "better" (or older) end of the scale, so a
    /// positive distance means `self` lies further along the scale.
    fn distance(self, other: Self) -> i32 {
        self.index() as i32 - other.index() as i32
    }

    /// True when the two members are at most `range` positions apart
    fn within(self, other: Self, range: u32) -> bool {
        self.distance(other).unsigned_abs() <= range
    }

    /// Member `steps` positions away from this one, clamped to the ends
    fn offset(self, steps: i32) -> Self {
        let last = Self::MEMBERS.len() as i64 - 1;
        let target = (self.index() as i64 + steps as i64).clamp(0, last);
        Self::MEMBERS[target as usize]
    }

    /// Parse a member from its display form, `None` for malformed input
    fn parse_or_missing(s: &str) -> Option<Self> {
        s.trim().parse().ok()
    }
}

/// Serialize a category through its display form and parse it back with `FromStr`.
///
/// The JSON schema of such a type is a plain string.
macro_rules! impl_text_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }

        impl schemars::JsonSchema for $ty {
            fn schema_name() -> String {
                stringify!($ty).to_owned()
            }

            fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
                <String as schemars::JsonSchema>::json_schema(gen)
            }
        }
    };
}

pub(crate) use impl_text_serde;

/// Split a tuple-like encoding such as `"(1965, 1974)"` or `"[0.5, 1.0)"` into its two parts
pub(crate) fn split_pair(s: &str) -> Option<(&str, &str)> {
    let inner = s
        .trim()
        .strip_prefix(['(', '['])?
        .strip_suffix([')', ']'])?;
    let (low, high) = inner.split_once(',')?;
    Some((low.trim(), high.trim()))
}
