//! Benefit estimation from benchmark percentages.
//!
//! Percentages always come from the benchmark table's median (or the
//! configured fallback). They are only turned into currency when the
//! financial figures each conversion needs are present and non-zero.

use crate::config::BenchmarkDefaults;
use crate::core::assessment::positive;
use crate::core::{
    find_benchmark, Benchmark, FinancialInputs, HeadlineBenefits, ImprovementPercentages,
    MonetaryBenefits, DOWNTIME_CATEGORY, ENERGY_CATEGORY, SCRAP_CATEGORY,
};
use tracing::debug;

/// Median improvement for `category`, or `fallback` when the table has no
/// usable entry.
pub fn benchmark_percentage(benchmarks: &[Benchmark], category: &str, fallback: f64) -> f64 {
    match find_benchmark(benchmarks, category).and_then(Benchmark::usable_med) {
        Some(med) => med,
        None => {
            debug!(category, fallback, "benchmark missing, using default");
            fallback
        }
    }
}

/// Look up the three headline percentages.
pub fn improvement_percentages(
    benchmarks: &[Benchmark],
    defaults: &BenchmarkDefaults,
) -> ImprovementPercentages {
    ImprovementPercentages {
        downtime_reduction: benchmark_percentage(benchmarks, DOWNTIME_CATEGORY, defaults.downtime),
        scrap_reduction: benchmark_percentage(benchmarks, SCRAP_CATEGORY, defaults.scrap),
        energy_savings: benchmark_percentage(benchmarks, ENERGY_CATEGORY, defaults.energy),
    }
}

/// Convert percentages to annual savings where the inputs allow it.
pub fn monetary_benefits(
    percentages: ImprovementPercentages,
    financials: &FinancialInputs,
) -> MonetaryBenefits {
    let downtime_savings_annual = positive(financials.downtime_hours)
        .zip(positive(financials.downtime_cost_per_hour))
        .map(|(hours, cost)| hours * cost * percentages.downtime_reduction / 100.0);

    let scrap_savings_annual =
        positive(financials.scrap_cost).map(|cost| cost * percentages.scrap_reduction / 100.0);

    let energy_savings_annual =
        positive(financials.energy_spend).map(|spend| spend * percentages.energy_savings / 100.0);

    let total_annual_savings: f64 = [
        downtime_savings_annual,
        scrap_savings_annual,
        energy_savings_annual,
    ]
    .into_iter()
    .flatten()
    .sum();

    MonetaryBenefits {
        downtime_reduction_pct: percentages.downtime_reduction,
        scrap_reduction_pct: percentages.scrap_reduction,
        energy_savings_pct: percentages.energy_savings,
        downtime_savings_annual,
        scrap_savings_annual,
        energy_savings_annual,
        total_annual_savings,
    }
}

/// Headline benefits: percentages only, or percentages plus currency when
/// financial inputs were supplied.
pub fn calculate_benefits(
    benchmarks: &[Benchmark],
    financials: Option<&FinancialInputs>,
    defaults: &BenchmarkDefaults,
) -> HeadlineBenefits {
    let percentages = improvement_percentages(benchmarks, defaults);
    match financials {
        Some(financials) => HeadlineBenefits::Monetary(monetary_benefits(percentages, financials)),
        None => HeadlineBenefits::Percentages(percentages),
    }
}
