use crate::config::AssumptionsConfig;
use crate::core::{FinancialInputs, HeadlineBenefits};

/// Months until annual savings cover the implementation cost.
///
/// Without financial inputs, or without positive savings, the configured
/// default is returned. Otherwise cost is `technology_count` times the
/// per-technology assumption and payback is `cost / (savings / 12)`,
/// rounded to the nearest month.
pub fn calculate_payback_period(
    benefits: &HeadlineBenefits,
    technology_count: usize,
    financials: Option<&FinancialInputs>,
    assumptions: &AssumptionsConfig,
) -> u32 {
    let savings = match (financials, benefits.total_annual_savings()) {
        (Some(_), Some(total)) if total.is_finite() && total > 0.0 => total,
        _ => return assumptions.default_payback_months,
    };

    let estimated_cost = technology_count as f64 * assumptions.cost_per_technology;
    let monthly_savings = savings / 12.0;
    // `as` saturates, so an absurdly small saving cannot wrap around
    (estimated_cost / monthly_savings).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ImprovementPercentages, MonetaryBenefits};

    fn monetary(total: f64) -> HeadlineBenefits {
        HeadlineBenefits::Monetary(MonetaryBenefits {
            downtime_reduction_pct: 15.0,
            scrap_reduction_pct: 8.0,
            energy_savings_pct: 6.0,
            downtime_savings_annual: None,
            scrap_savings_annual: None,
            energy_savings_annual: None,
            total_annual_savings: total,
        })
    }

    #[test]
    fn test_default_without_financials() {
        let benefits = HeadlineBenefits::Percentages(ImprovementPercentages {
            downtime_reduction: 15.0,
            scrap_reduction: 8.0,
            energy_savings: 6.0,
        });
        let months = calculate_payback_period(&benefits, 4, None, &AssumptionsConfig::default());
        assert_eq!(months, 18);
    }

    #[test]
    fn test_default_when_savings_are_zero() {
        let inputs = FinancialInputs::default();
        let months = calculate_payback_period(
            &monetary(0.0),
            6,
            Some(&inputs),
            &AssumptionsConfig::default(),
        );
        assert_eq!(months, 18);
    }

    #[test]
    fn test_payback_from_cost_and_savings() {
        let inputs = FinancialInputs::default();
        // 6 * 100000 / (9700 / 12) = 742.27...
        let months = calculate_payback_period(
            &monetary(9700.0),
            6,
            Some(&inputs),
            &AssumptionsConfig::default(),
        );
        assert_eq!(months, 742);
    }

    #[test]
    fn test_configured_cost_is_used() {
        let inputs = FinancialInputs::default();
        let assumptions = AssumptionsConfig {
            cost_per_technology: 10_000.0,
            ..Default::default()
        };
        // 2 * 10000 / (120000 / 12) = 2
        let months = calculate_payback_period(&monetary(120_000.0), 2, Some(&inputs), &assumptions);
        assert_eq!(months, 2);
    }

    #[test]
    fn test_no_technologies_pays_back_immediately() {
        let inputs = FinancialInputs::default();
        let months = calculate_payback_period(
            &monetary(5000.0),
            0,
            Some(&inputs),
            &AssumptionsConfig::default(),
        );
        assert_eq!(months, 0);
    }
}
