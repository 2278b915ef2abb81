mod benchmarks;
mod engine;
mod types;

pub use benchmarks::{BenchmarkTable, MetricBenchmark, WEIGHT_SUM_TOLERANCE};
pub use engine::{classify_tier, compute_analysis};
pub use types::{
    AnalysisResult, EmploymentStatus, FinancialProfile, HealthTier, Impact, IncomeVariability,
    Indicator, IndicatorScore, Insight, MaritalStatus, Timeframe,
};
