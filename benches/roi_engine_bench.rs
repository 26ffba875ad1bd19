//! Benchmark for a full engine invocation across catalog sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use techmap::config::RoiConfig;
use techmap::core::{
    Assessment, Benchmark, BusinessPriority, FinancialInputs, MaturityScore, Pillar,
    PriorityRanking, ReferenceData, Technology,
};
use techmap::engine::calculate_roi;

fn full_assessment() -> Assessment {
    let ratings = [2, 3, 1, 4, 2, 3, 5, 1];
    Assessment {
        maturity: MaturityScore::from_pairs(Pillar::ALL.into_iter().zip(ratings)).unwrap(),
        priorities: PriorityRanking::new(BusinessPriority::ALL.to_vec()).unwrap(),
        financials: Some(FinancialInputs {
            downtime_hours: Some(100.0),
            downtime_cost_per_hour: Some(500.0),
            scrap_cost: Some(20_000.0),
            energy_spend: Some(10_000.0),
            ..Default::default()
        }),
    }
}

fn reference(catalog_size: usize) -> ReferenceData {
    let technologies = (0..catalog_size)
        .map(|i| {
            let pillar = Pillar::ALL[i % Pillar::ALL.len()];
            Technology::new(i as i64, format!("Technology {i}"), pillar)
        })
        .collect();
    ReferenceData {
        benchmarks: vec![
            Benchmark::new("Downtime", 10.0, 20.0, 30.0),
            Benchmark::new("Scrap", 5.0, 10.0, 15.0),
            Benchmark::new("Energy", 3.0, 6.0, 9.0),
        ],
        technologies,
    }
}

fn bench_calculate_roi(c: &mut Criterion) {
    let assessment = full_assessment();
    let config = RoiConfig::default();
    let mut group = c.benchmark_group("calculate_roi");

    for size in [10, 100, 1000].iter() {
        let reference = reference(*size);
        group.bench_with_input(BenchmarkId::new("catalog", size), size, |b, _| {
            b.iter(|| black_box(calculate_roi(&assessment, &reference, &config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_roi);
criterion_main!(benches);
