// Copyright (c) 2025 - Cowboy AI, LLC.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wijklabels::labels::{DistributionKey, LabelDistributionTable};
use wijklabels::pipeline::{estimate_building, group_rows, EstimationRunner, InputRow};
use wijklabels::{
    ConstructionPeriod, DwellingTypeBucket, EnergyLabel, EstimationConfig, FormFactorBucket,
    OrderedCategory,
};

fn full_table() -> LabelDistributionTable {
    let shares: Vec<(EnergyLabel, f64)> = EnergyLabel::MEMBERS
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, 1.0 + i as f64))
        .collect();

    let mut table = LabelDistributionTable::new();
    for dwelling in DwellingTypeBucket::MEMBERS {
        for period in ConstructionPeriod::MEMBERS {
            for ff in FormFactorBucket::MEMBERS {
                table
                    .insert_shares(DistributionKey::new(*dwelling, *period, *ff), &shares)
                    .unwrap();
            }
        }
    }
    table
}

/// A street of houses and apartment blocks, `buildings` buildings long
fn street(buildings: usize) -> Vec<InputRow> {
    let mut rows = Vec::new();
    for b in 0..buildings {
        let units = if b % 4 == 0 { 12 } else { 1 };
        let dwelling = match b % 4 {
            0 => "rijwoning hoek",
            1 => "vrijstaand",
            2 => "2 onder 1 kap",
            _ => "rijwoning tussen",
        };
        for u in 0..units {
            rows.push(InputRow {
                building_id: format!("pand-{b}"),
                unit_id: format!("vbo-{b}-{u}"),
                floor_count: Some(if units > 1 { 4 } else { 2 }),
                unit_count: Some(units as u32),
                exterior_wall_area: Some(120.0 * units as f64),
                flat_roof_area: Some(40.0 * units as f64 / 4.0),
                sloped_roof_area: Some(20.0),
                ground_floor_area: Some(60.0),
                usable_area: Some(75.0 + (u % 5) as f64 * 10.0),
                construction_year: Some(1930 + (b % 90) as i32),
                dwelling_type: Some(dwelling.to_owned()),
            });
        }
    }
    rows
}

fn benchmark_single_building(c: &mut Criterion) {
    let table = full_table();
    let config = EstimationConfig::default();
    let groups = group_rows(street(1));

    c.bench_function("estimate_apartment_block", |b| {
        b.iter(|| estimate_building(black_box(&groups[0]), &table, &config).unwrap());
    });
}

fn benchmark_run(c: &mut Criterion) {
    let runner = EstimationRunner::new(full_table(), EstimationConfig::default()).unwrap();

    let mut group = c.benchmark_group("estimation_run");
    for size in [100, 1_000, 10_000].iter() {
        let groups = group_rows(street(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &groups, |b, groups| {
            b.iter(|| runner.run(black_box(groups)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_single_building, benchmark_run);
criterion_main!(benches);
