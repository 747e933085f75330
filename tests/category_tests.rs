// Copyright (c) 2025 - Cowboy AI, LLC.

use proptest::prelude::*;
use test_case::test_case;

use wijklabels::{
    ConstructionPeriod, DwellingType, DwellingTypeBucket, EnergyLabel, FormFactorBucket,
    OrderedCategory,
};

#[test_case(EnergyLabel::B, EnergyLabel::B, 0 => true; "same label exact")]
#[test_case(EnergyLabel::B, EnergyLabel::A, 0 => false; "neighbour not exact")]
#[test_case(EnergyLabel::B, EnergyLabel::A, 1 => true; "neighbour within one")]
#[test_case(EnergyLabel::B, EnergyLabel::D, 1 => false; "two apart not within one")]
#[test_case(EnergyLabel::G, EnergyLabel::E, 2 => true; "two apart within two")]
#[test_case(EnergyLabel::G, EnergyLabel::APlus4, 2 => false; "ends of the scale")]
fn within(label: EnergyLabel, other: EnergyLabel, range: u32) -> bool {
    label.within(other, range)
}

#[test_case(EnergyLabel::A, EnergyLabel::D => -3)]
#[test_case(EnergyLabel::G, EnergyLabel::APlus4 => 10)]
#[test_case(EnergyLabel::C, EnergyLabel::C => 0)]
fn distance(label: EnergyLabel, other: EnergyLabel) -> i32 {
    label.distance(other)
}

#[test_case(1964, DwellingTypeBucket::Detached => ConstructionPeriod::Until1964)]
#[test_case(1965, DwellingTypeBucket::Detached => ConstructionPeriod::From1965To1974)]
#[test_case(1945, DwellingTypeBucket::MidRow => ConstructionPeriod::Until1945)]
#[test_case(1946, DwellingTypeBucket::MidRow => ConstructionPeriod::From1946To1964)]
#[test_case(2015, DwellingTypeBucket::SemiDetached => ConstructionPeriod::From2015)]
#[test_case(1992, DwellingTypeBucket::StairwellAccess => ConstructionPeriod::From1992)]
#[test_case(2030, DwellingTypeBucket::Maisonette => ConstructionPeriod::From1992)]
#[test_case(1800, DwellingTypeBucket::EndOfRow => ConstructionPeriod::Until1945)]
fn period(year: i32, bucket: DwellingTypeBucket) -> ConstructionPeriod {
    ConstructionPeriod::classify(year, bucket)
}

#[test_case("(0, 1964)" => Some(ConstructionPeriod::Until1964))]
#[test_case("(1992, 9999)" => Some(ConstructionPeriod::From1992))]
#[test_case("1965-1974" => None)]
#[test_case("(1.5, 2.0)" => None)]
fn parse_period(text: &str) -> Option<ConstructionPeriod> {
    ConstructionPeriod::parse_or_missing(text)
}

fn label() -> impl Strategy<Value = EnergyLabel> {
    (0..EnergyLabel::MEMBERS.len()).prop_map(|i| EnergyLabel::MEMBERS[i])
}

proptest! {
    #[test]
    fn distance_is_antisymmetric(a in label(), b in label()) {
        prop_assert_eq!(a.distance(b), -b.distance(a));
        prop_assert_eq!(a.within(b, 0), a == b);
    }

    #[test]
    fn offset_by_distance_lands_on_other(a in label(), b in label()) {
        prop_assert_eq!(b.offset(a.distance(b)), a);
    }

    #[test]
    fn offset_stays_on_the_scale(a in label(), steps in -30i32..30) {
        let shifted = a.offset(steps);
        prop_assert!(EnergyLabel::MEMBERS.contains(&shifted));
    }

    #[test]
    fn every_finite_ratio_has_one_bucket(ratio in -10.0f64..10.0) {
        let bucket = FormFactorBucket::from_ratio(ratio).unwrap();
        let containing: Vec<_> = FormFactorBucket::MEMBERS
            .iter()
            .filter(|b| b.contains(ratio))
            .collect();
        prop_assert_eq!(containing, vec![&bucket]);
    }

    #[test]
    fn every_year_has_a_period(year in any::<i32>(), i in 0usize..8) {
        let bucket = DwellingTypeBucket::MEMBERS[i];
        let period = ConstructionPeriod::classify(year, bucket);
        let (start, end) = period.bounds();
        prop_assert!(year.clamp(0, 9999) >= start && year.clamp(0, 9999) <= end);
    }
}

#[test]
fn display_forms_parse_back() {
    for label in EnergyLabel::MEMBERS {
        assert_eq!(label.to_string().parse::<EnergyLabel>().unwrap(), *label);
    }
    for bucket in DwellingTypeBucket::MEMBERS {
        assert_eq!(DwellingTypeBucket::parse_or_missing(&bucket.to_string()), Some(*bucket));
    }
    for period in ConstructionPeriod::MEMBERS {
        assert_eq!(period.to_string().parse::<ConstructionPeriod>().unwrap(), *period);
    }
    assert_eq!(EnergyLabel::parse_or_missing("Z"), None);
    assert!("appartement - hoekzolder".parse::<DwellingType>().is_err());
}

#[test]
fn json_uses_display_strings() {
    let json = serde_json::to_string(&(EnergyLabel::APlus2, ConstructionPeriod::From1965To1974))
        .unwrap();
    assert_eq!(json, r#"["A++","(1965, 1974)"]"#);
    let back: (EnergyLabel, ConstructionPeriod) = serde_json::from_str(&json).unwrap();
    assert_eq!(back, (EnergyLabel::APlus2, ConstructionPeriod::From1965To1974));
}
