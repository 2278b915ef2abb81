use super::types::{HealthTier, Indicator};

pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

// Scores assigned to a metric sitting exactly on a benchmark breakpoint.
pub const EXCELLENT_SCORE: f64 = 100.0;
pub const GOOD_SCORE: f64 = 75.0;
pub const FAIR_SCORE: f64 = 50.0;
pub const POOR_SCORE: f64 = 25.0;

#[derive(Debug, Clone, Copy)]
pub struct MetricBenchmark {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
}

#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    pub tier_cutoffs: [(HealthTier, f64); 5],
    pub emergency_fund_months: MetricBenchmark,
    pub debt_to_income: MetricBenchmark,
    pub savings_rate: MetricBenchmark,
    pub credit_utilization: MetricBenchmark,
    pub weights: [(Indicator, f64); 8],
}

impl BenchmarkTable {
    pub fn research() -> Self {
        Self {
            tier_cutoffs: [
                (HealthTier::Excellent, 85.0),
                (HealthTier::Good, 70.0),
                (HealthTier::Fair, 55.0),
                (HealthTier::Limited, 40.0),
                (HealthTier::Critical, 0.0),
            ],
            emergency_fund_months: MetricBenchmark {
                excellent: 6.0,
                good: 4.0,
                fair: 2.0,
                poor: 1.0,
            },
            debt_to_income: MetricBenchmark {
                excellent: 0.20,
                good: 0.28,
                fair: 0.36,
                poor: 0.50,
            },
            savings_rate: MetricBenchmark {
                excellent: 0.20,
                good: 0.15,
                fair: 0.10,
                poor: 0.05,
            },
            credit_utilization: MetricBenchmark {
                excellent: 0.10,
                good: 0.30,
                fair: 0.40,
                poor: 0.50,
            },
            weights: [
                (Indicator::DebtManagement, 0.15),
                (Indicator::EmergencySavings, 0.15),
                (Indicator::SpendingVsIncome, 0.15),
                (Indicator::CreditHealth, 0.15),
                (Indicator::RetirementPlanning, 0.10),
                (Indicator::InsuranceCoverage, 0.10),
                (Indicator::FinancialPlanning, 0.10),
                (Indicator::BillPayment, 0.10),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let weight_sum: f64 = self.weights.iter().map(|(_, w)| w).sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!(
                "indicator weights must sum to 1.0, got {weight_sum}"
            ));
        }
        for (indicator, weight) in &self.weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(format!(
                    "weight for {} must be finite and >= 0",
                    indicator.label()
                ));
            }
        }
        for pair in self.tier_cutoffs.windows(2) {
            let (upper_tier, upper) = pair[0];
            let (lower_tier, lower) = pair[1];
            if upper <= lower {
                return Err(format!(
                    "tier cutoffs must be strictly descending: {upper_tier:?} ({upper}) vs {lower_tier:?} ({lower})"
                ));
            }
        }
        let (floor_tier, floor) = self.tier_cutoffs[4];
        if floor != 0.0 {
            return Err(format!(
                "{floor_tier:?} must be the catch-all floor with cutoff 0, got {floor}"
            ));
        }
        Ok(())
    }

    pub fn weight_of(&self, indicator: Indicator) -> f64 {
        self.weights
            .iter()
            .find(|(candidate, _)| *candidate == indicator)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }

    // Spending-ratio tiers are the complement of the savings-rate tiers: a
    // household saving 20% of income is spending 80% of it.
    pub fn spending_ratio(&self) -> MetricBenchmark {
        MetricBenchmark {
            excellent: 1.0 - self.savings_rate.excellent,
            good: 1.0 - self.savings_rate.good,
            fair: 1.0 - self.savings_rate.fair,
            poor: 1.0 - self.savings_rate.poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_table_passes_validation() {
        BenchmarkTable::research().validate().expect("valid table");
    }

    #[test]
    fn research_weights_sum_to_one() {
        let table = BenchmarkTable::research();
        let sum: f64 = table.weights.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn validation_rejects_weights_not_summing_to_one() {
        let mut table = BenchmarkTable::research();
        table.weights[0].1 = 0.30;
        let err = table.validate().expect_err("must reject bad weights");
        assert!(err.contains("sum to 1.0"));
    }

    #[test]
    fn validation_rejects_negative_weight() {
        let mut table = BenchmarkTable::research();
        table.weights[0].1 = -0.05;
        table.weights[1].1 = 0.35;
        let err = table.validate().expect_err("must reject negative weight");
        assert!(err.contains(">= 0"));
    }

    #[test]
    fn validation_rejects_non_descending_cutoffs() {
        let mut table = BenchmarkTable::research();
        table.tier_cutoffs[1].1 = 90.0;
        let err = table.validate().expect_err("must reject bad cutoffs");
        assert!(err.contains("strictly descending"));
    }

    #[test]
    fn validation_rejects_nonzero_floor() {
        let mut table = BenchmarkTable::research();
        table.tier_cutoffs[4].1 = 10.0;
        let err = table.validate().expect_err("must reject raised floor");
        assert!(err.contains("cutoff 0"));
    }

    #[test]
    fn spending_ratio_complements_savings_rate() {
        let table = BenchmarkTable::research();
        let spending = table.spending_ratio();
        assert!((spending.excellent - 0.80).abs() < 1e-12);
        assert!((spending.good - 0.85).abs() < 1e-12);
        assert!((spending.fair - 0.90).abs() < 1e-12);
        assert!((spending.poor - 0.95).abs() < 1e-12);
    }

    #[test]
    fn weight_of_returns_declared_weight() {
        let table = BenchmarkTable::research();
        assert!((table.weight_of(Indicator::DebtManagement) - 0.15).abs() < 1e-12);
        assert!((table.weight_of(Indicator::BillPayment) - 0.10).abs() < 1e-12);
    }
}
