use super::benchmarks::{
    BenchmarkTable, EXCELLENT_SCORE, FAIR_SCORE, GOOD_SCORE, MetricBenchmark, POOR_SCORE,
};
use super::types::{
    AnalysisResult, FinancialProfile, HealthTier, Impact, Indicator, IndicatorScore, Insight,
    Timeframe,
};

const CREDIT_SCORE_MIN: f64 = 300.0;
const CREDIT_SCORE_MAX: f64 = 850.0;
const CREDIT_UTILIZATION_BLEND: f64 = 0.5;
const INSURANCE_TARGET_INCOME_SHARE: f64 = 0.05;

const PLANNING_EMERGENCY_POINTS: f64 = 30.0;
const PLANNING_DEBT_POINTS: f64 = 40.0;
const PLANNING_DIVERSIFICATION_POINTS: f64 = 30.0;

const HIGH_IMPACT_PRODUCT: f64 = 4.0;
const MEDIUM_IMPACT_PRODUCT: f64 = 1.5;
const ACTION_PLAN_LIMIT: usize = 3;

// Savings multiple of annual income expected at each age, interpolated
// between anchor points and clamped at the ends.
const RETIREMENT_TARGET_CURVE: [(f64, f64); 6] = [
    (25.0, 0.5),
    (30.0, 1.0),
    (40.0, 3.0),
    (50.0, 6.0),
    (60.0, 8.0),
    (67.0, 10.0),
];

pub fn compute_analysis(
    profile: &FinancialProfile,
    benchmarks: &BenchmarkTable,
) -> AnalysisResult {
    let mut warnings = Vec::new();

    let indicator_scores: Vec<IndicatorScore> = benchmarks
        .weights
        .iter()
        .map(|(indicator, weight)| IndicatorScore {
            indicator: *indicator,
            label: indicator.label(),
            score: score_indicator(*indicator, profile, benchmarks, &mut warnings),
            weight: *weight,
        })
        .collect();

    let weighted_sum: f64 = indicator_scores
        .iter()
        .map(|entry| entry.weight * entry.score)
        .sum();
    let overall_score = weighted_sum.round().clamp(0.0, 100.0) as u32;
    let tier = classify_tier(overall_score as f64, benchmarks);

    let insights = build_insights(profile, benchmarks, &indicator_scores);
    let action_plan = insights
        .iter()
        .take(ACTION_PLAN_LIMIT)
        .map(|insight| action_for(insight.indicator, profile, benchmarks))
        .collect();

    AnalysisResult {
        overall_score,
        tier,
        indicator_scores,
        insights,
        action_plan,
        warnings,
    }
}

pub fn classify_tier(overall_score: f64, benchmarks: &BenchmarkTable) -> HealthTier {
    for (tier, cutoff) in &benchmarks.tier_cutoffs {
        if overall_score >= *cutoff {
            return *tier;
        }
    }
    HealthTier::Critical
}

fn score_indicator(
    indicator: Indicator,
    profile: &FinancialProfile,
    benchmarks: &BenchmarkTable,
    warnings: &mut Vec<String>,
) -> f64 {
    match indicator {
        Indicator::SpendingVsIncome => score_spending_vs_income(profile, benchmarks, warnings),
        Indicator::BillPayment => score_bill_payment(profile),
        Indicator::EmergencySavings => score_emergency_savings(profile, benchmarks),
        Indicator::DebtManagement => score_debt_management(profile, benchmarks, warnings),
        Indicator::CreditHealth => score_credit_health(profile, benchmarks),
        Indicator::InsuranceCoverage => score_insurance_coverage(profile, warnings),
        Indicator::RetirementPlanning => score_retirement_planning(profile),
        Indicator::FinancialPlanning => score_financial_planning(profile, benchmarks),
    }
}

fn score_spending_vs_income(
    profile: &FinancialProfile,
    benchmarks: &BenchmarkTable,
    warnings: &mut Vec<String>,
) -> f64 {
    let income = profile.gross_monthly_income();
    if income <= 0.0 {
        warnings.push(
            "Gross monthly income is zero; spending-vs-income indicator floored at 0.".to_string(),
        );
        return 0.0;
    }
    let ratio = profile.total_monthly_expenses() / income;
    score_lower_better(ratio, &benchmarks.spending_ratio())
}

// No delinquency history exists in the input model, so on-time payment is
// assumed. Carrying card debt with no recorded monthly payment is the one
// available missed-payment signal.
fn score_bill_payment(profile: &FinancialProfile) -> f64 {
    if profile.credit_card_debt > 0.0 && profile.credit_card_payments <= 0.0 {
        40.0
    } else {
        100.0
    }
}

pub fn emergency_fund_months(profile: &FinancialProfile) -> f64 {
    let essential = profile.essential_monthly_expenses();
    if essential <= 0.0 {
        return if profile.emergency_fund > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };
    }
    profile.emergency_fund / essential
}

fn score_emergency_savings(profile: &FinancialProfile, benchmarks: &BenchmarkTable) -> f64 {
    let months = emergency_fund_months(profile);
    if months.is_infinite() {
        return EXCELLENT_SCORE;
    }
    score_higher_better(months, &benchmarks.emergency_fund_months)
}

pub fn debt_to_income_ratio(profile: &FinancialProfile) -> Option<f64> {
    let income = profile.gross_monthly_income();
    if income <= 0.0 {
        return None;
    }
    Some(profile.monthly_debt_service() / income)
}

fn score_debt_management(
    profile: &FinancialProfile,
    benchmarks: &BenchmarkTable,
    warnings: &mut Vec<String>,
) -> f64 {
    match debt_to_income_ratio(profile) {
        Some(ratio) => score_lower_better(ratio, &benchmarks.debt_to_income),
        None => {
            if profile.monthly_debt_service() > 0.0 {
                warnings.push(
                    "Gross monthly income is zero with outstanding debt; debt-management indicator floored at 0."
                        .to_string(),
                );
                0.0
            } else {
                EXCELLENT_SCORE
            }
        }
    }
}

pub fn credit_utilization_ratio(profile: &FinancialProfile) -> f64 {
    if profile.total_credit_limit <= 0.0 {
        return if profile.credit_card_debt > 0.0 { 1.0 } else { 0.0 };
    }
    profile.credit_card_debt / profile.total_credit_limit
}

fn score_credit_health(profile: &FinancialProfile, benchmarks: &BenchmarkTable) -> f64 {
    let utilization_score = score_lower_better(
        credit_utilization_ratio(profile),
        &benchmarks.credit_utilization,
    );
    let normalized_credit_score = ((profile.credit_score as f64)
        .clamp(CREDIT_SCORE_MIN, CREDIT_SCORE_MAX)
        - CREDIT_SCORE_MIN)
        / (CREDIT_SCORE_MAX - CREDIT_SCORE_MIN)
        * 100.0;
    CREDIT_UTILIZATION_BLEND * utilization_score
        + (1.0 - CREDIT_UTILIZATION_BLEND) * normalized_credit_score
}

// Adequacy proxy from the premium line, not a coverage audit: spending about
// 5% of gross income on insurance is treated as fully covered.
fn score_insurance_coverage(profile: &FinancialProfile, warnings: &mut Vec<String>) -> f64 {
    let income = profile.gross_monthly_income();
    if income <= 0.0 {
        warnings.push(
            "Gross monthly income is zero; insurance-coverage indicator floored at 0.".to_string(),
        );
        return 0.0;
    }
    let share = profile.insurance / income;
    (share / INSURANCE_TARGET_INCOME_SHARE).clamp(0.0, 1.0) * 100.0
}

pub fn retirement_target_factor(age: u32) -> f64 {
    let age = age as f64;
    let (first_age, first_factor) = RETIREMENT_TARGET_CURVE[0];
    if age <= first_age {
        return first_factor;
    }
    for pair in RETIREMENT_TARGET_CURVE.windows(2) {
        let (lo_age, lo_factor) = pair[0];
        let (hi_age, hi_factor) = pair[1];
        if age <= hi_age {
            return lerp(age, lo_age, hi_age, lo_factor, hi_factor);
        }
    }
    RETIREMENT_TARGET_CURVE[RETIREMENT_TARGET_CURVE.len() - 1].1
}

pub fn retirement_target_balance(profile: &FinancialProfile) -> f64 {
    profile.annual_gross_income() * retirement_target_factor(profile.age)
}

fn score_retirement_planning(profile: &FinancialProfile) -> f64 {
    let target = retirement_target_balance(profile);
    if target <= 0.0 {
        return EXCELLENT_SCORE;
    }
    (profile.retirement_balance / target).clamp(0.0, 1.0) * 100.0
}

fn has_manageable_debt(profile: &FinancialProfile, benchmarks: &BenchmarkTable) -> bool {
    match debt_to_income_ratio(profile) {
        Some(ratio) => ratio <= benchmarks.debt_to_income.fair,
        None => profile.monthly_debt_service() <= 0.0,
    }
}

fn has_diversified_assets(profile: &FinancialProfile) -> bool {
    profile.brokerage > 0.0 && profile.retirement_balance > 0.0
}

fn score_financial_planning(profile: &FinancialProfile, benchmarks: &BenchmarkTable) -> f64 {
    let mut score = 0.0;
    if profile.emergency_fund > 0.0 {
        score += PLANNING_EMERGENCY_POINTS;
    }
    if has_manageable_debt(profile, benchmarks) {
        score += PLANNING_DEBT_POINTS;
    }
    if has_diversified_assets(profile) {
        score += PLANNING_DIVERSIFICATION_POINTS;
    }
    score
}

fn lerp(value: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if (x1 - x0).abs() <= f64::EPSILON {
        return y1;
    }
    y0 + (value - x0) / (x1 - x0) * (y1 - y0)
}

fn score_higher_better(value: f64, bench: &MetricBenchmark) -> f64 {
    let value = value.max(0.0);
    let score = if value >= bench.excellent {
        EXCELLENT_SCORE
    } else if value >= bench.good {
        lerp(value, bench.good, bench.excellent, GOOD_SCORE, EXCELLENT_SCORE)
    } else if value >= bench.fair {
        lerp(value, bench.fair, bench.good, FAIR_SCORE, GOOD_SCORE)
    } else if value >= bench.poor {
        lerp(value, bench.poor, bench.fair, POOR_SCORE, FAIR_SCORE)
    } else {
        lerp(value, 0.0, bench.poor, 0.0, POOR_SCORE)
    };
    score.clamp(0.0, 100.0)
}

fn score_lower_better(value: f64, bench: &MetricBenchmark) -> f64 {
    let value = value.max(0.0);
    let score = if value <= bench.excellent {
        EXCELLENT_SCORE
    } else if value <= bench.good {
        lerp(value, bench.excellent, bench.good, EXCELLENT_SCORE, GOOD_SCORE)
    } else if value <= bench.fair {
        lerp(value, bench.good, bench.fair, GOOD_SCORE, FAIR_SCORE)
    } else if value <= bench.poor {
        lerp(value, bench.fair, bench.poor, FAIR_SCORE, POOR_SCORE)
    } else {
        // Falls to zero by twice the poor breakpoint.
        lerp(value, bench.poor, bench.poor * 2.0, POOR_SCORE, 0.0)
    };
    score.clamp(0.0, 100.0)
}

fn build_insights(
    profile: &FinancialProfile,
    benchmarks: &BenchmarkTable,
    indicator_scores: &[IndicatorScore],
) -> Vec<Insight> {
    struct Candidate {
        insight: Insight,
        impact_product: f64,
    }

    let mut candidates: Vec<Candidate> = indicator_scores
        .iter()
        .filter(|entry| entry.score < GOOD_SCORE)
        .map(|entry| {
            let impact_product = entry.weight * (GOOD_SCORE - entry.score);
            Candidate {
                insight: insight_for(entry.indicator, impact_product, profile, benchmarks),
                impact_product,
            }
        })
        .collect();

    // Stable sort: candidates are built in declared weight order, so equal
    // impact products keep the declared indicator priority.
    candidates.sort_by(|a, b| b.impact_product.total_cmp(&a.impact_product));
    candidates
        .into_iter()
        .map(|candidate| candidate.insight)
        .collect()
}

fn classify_impact(impact_product: f64) -> Impact {
    if impact_product >= HIGH_IMPACT_PRODUCT {
        Impact::High
    } else if impact_product >= MEDIUM_IMPACT_PRODUCT {
        Impact::Medium
    } else {
        Impact::Low
    }
}

fn timeframe_for(indicator: Indicator) -> Timeframe {
    match indicator {
        Indicator::SpendingVsIncome | Indicator::BillPayment => Timeframe::ShortTerm,
        Indicator::RetirementPlanning => Timeframe::LongTerm,
        Indicator::DebtManagement
        | Indicator::EmergencySavings
        | Indicator::CreditHealth
        | Indicator::InsuranceCoverage
        | Indicator::FinancialPlanning => Timeframe::MediumTerm,
    }
}

fn insight_for(
    indicator: Indicator,
    impact_product: f64,
    profile: &FinancialProfile,
    benchmarks: &BenchmarkTable,
) -> Insight {
    let (title, explanation) = match indicator {
        Indicator::DebtManagement => {
            let explanation = match debt_to_income_ratio(profile) {
                Some(ratio) => format!(
                    "Debt payments take {:.0}% of gross income; the benchmark for good is {:.0}%.",
                    ratio * 100.0,
                    benchmarks.debt_to_income.good * 100.0
                ),
                None => "Outstanding debt with no income to service it.".to_string(),
            };
            ("Bring debt payments down".to_string(), explanation)
        }
        Indicator::EmergencySavings => {
            let months = emergency_fund_months(profile);
            (
                "Grow your emergency fund".to_string(),
                format!(
                    "Your emergency fund covers {:.1} months of essential expenses versus the {:.0}-month target for good.",
                    months, benchmarks.emergency_fund_months.good
                ),
            )
        }
        Indicator::SpendingVsIncome => {
            let income = profile.gross_monthly_income();
            let explanation = if income > 0.0 {
                format!(
                    "You spend {:.0}% of gross income each month; the benchmark for good is {:.0}%.",
                    profile.total_monthly_expenses() / income * 100.0,
                    benchmarks.spending_ratio().good * 100.0
                )
            } else {
                "Monthly expenses with no income to cover them.".to_string()
            };
            ("Reduce monthly spending".to_string(), explanation)
        }
        Indicator::CreditHealth => (
            "Improve your credit position".to_string(),
            format!(
                "Credit utilization is {:.0}% (good benchmark {:.0}%) and your credit score is {}.",
                credit_utilization_ratio(profile) * 100.0,
                benchmarks.credit_utilization.good * 100.0,
                profile.credit_score
            ),
        ),
        Indicator::RetirementPlanning => {
            let target = retirement_target_balance(profile);
            let coverage = if target > 0.0 {
                profile.retirement_balance / target * 100.0
            } else {
                100.0
            };
            (
                "Increase retirement savings".to_string(),
                format!(
                    "Retirement savings cover {:.0}% of the age-{} target of {:.0}.",
                    coverage, profile.age, target
                ),
            )
        }
        Indicator::InsuranceCoverage => {
            let income = profile.gross_monthly_income();
            let share = if income > 0.0 {
                profile.insurance / income * 100.0
            } else {
                0.0
            };
            (
                "Review your insurance coverage".to_string(),
                format!(
                    "Insurance spending is {:.1}% of income versus the {:.1}% reference level.",
                    share,
                    INSURANCE_TARGET_INCOME_SHARE * 100.0
                ),
            )
        }
        Indicator::FinancialPlanning => {
            let mut missing = Vec::new();
            if profile.emergency_fund <= 0.0 {
                missing.push("an emergency fund");
            }
            if !has_manageable_debt(profile, benchmarks) {
                missing.push("manageable debt levels");
            }
            if !has_diversified_assets(profile) {
                missing.push("diversified holdings across brokerage and retirement accounts");
            }
            (
                "Strengthen your financial foundations".to_string(),
                format!("Your plan is missing {}.", missing.join(", ")),
            )
        }
        Indicator::BillPayment => (
            "Get back on top of bill payments".to_string(),
            "Credit-card debt with no recorded monthly payment suggests missed bills.".to_string(),
        ),
    };

    Insight {
        indicator,
        title,
        explanation,
        impact: classify_impact(impact_product),
        timeframe: timeframe_for(indicator),
    }
}

fn action_for(
    indicator: Indicator,
    profile: &FinancialProfile,
    benchmarks: &BenchmarkTable,
) -> String {
    match indicator {
        Indicator::DebtManagement => format!(
            "Pay down high-rate balances until debt payments fall below {:.0}% of gross income.",
            benchmarks.debt_to_income.good * 100.0
        ),
        Indicator::EmergencySavings => format!(
            "Set aside savings each month until your emergency fund covers {:.0} months of essential expenses.",
            benchmarks.emergency_fund_months.good
        ),
        Indicator::SpendingVsIncome => format!(
            "Trim discretionary spending to keep monthly expenses below {:.0}% of income.",
            benchmarks.spending_ratio().good * 100.0
        ),
        Indicator::CreditHealth => format!(
            "Reduce card balances to bring credit utilization below {:.0}%.",
            benchmarks.credit_utilization.good * 100.0
        ),
        Indicator::RetirementPlanning => format!(
            "Raise retirement contributions toward the age-{} savings target of {:.0}.",
            profile.age,
            retirement_target_balance(profile)
        ),
        Indicator::InsuranceCoverage => {
            "Review your insurance policies and close any protection gaps.".to_string()
        }
        Indicator::FinancialPlanning => {
            "Put the missing financial foundations in place, starting with an emergency fund."
                .to_string()
        }
        Indicator::BillPayment => {
            "Resume at least the minimum payment on every open account.".to_string()
        }
    }
}
