use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    AnalysisResult, BenchmarkTable, EmploymentStatus, FinancialProfile, IncomeVariability,
    MaritalStatus, compute_analysis,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliMaritalStatus {
    Single,
    Married,
    Partnered,
    Divorced,
    Widowed,
}

impl From<CliMaritalStatus> for MaritalStatus {
    fn from(value: CliMaritalStatus) -> Self {
        match value {
            CliMaritalStatus::Single => MaritalStatus::Single,
            CliMaritalStatus::Married => MaritalStatus::Married,
            CliMaritalStatus::Partnered => MaritalStatus::Partnered,
            CliMaritalStatus::Divorced => MaritalStatus::Divorced,
            CliMaritalStatus::Widowed => MaritalStatus::Widowed,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliEmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Retired,
    Student,
}

impl From<CliEmploymentStatus> for EmploymentStatus {
    fn from(value: CliEmploymentStatus) -> Self {
        match value {
            CliEmploymentStatus::Employed => EmploymentStatus::Employed,
            CliEmploymentStatus::SelfEmployed => EmploymentStatus::SelfEmployed,
            CliEmploymentStatus::Unemployed => EmploymentStatus::Unemployed,
            CliEmploymentStatus::Retired => EmploymentStatus::Retired,
            CliEmploymentStatus::Student => EmploymentStatus::Student,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliIncomeVariability {
    Stable,
    Seasonal,
    Volatile,
}

impl From<CliIncomeVariability> for IncomeVariability {
    fn from(value: CliIncomeVariability) -> Self {
        match value {
            CliIncomeVariability::Stable => IncomeVariability::Stable,
            CliIncomeVariability::Seasonal => IncomeVariability::Seasonal,
            CliIncomeVariability::Volatile => IncomeVariability::Volatile,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiMaritalStatus {
    Single,
    Married,
    Partnered,
    Divorced,
    Widowed,
}

impl From<ApiMaritalStatus> for CliMaritalStatus {
    fn from(value: ApiMaritalStatus) -> Self {
        match value {
            ApiMaritalStatus::Single => CliMaritalStatus::Single,
            ApiMaritalStatus::Married => CliMaritalStatus::Married,
            ApiMaritalStatus::Partnered => CliMaritalStatus::Partnered,
            ApiMaritalStatus::Divorced => CliMaritalStatus::Divorced,
            ApiMaritalStatus::Widowed => CliMaritalStatus::Widowed,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiEmploymentStatus {
    Employed,
    #[serde(alias = "selfEmployed", alias = "self_employed")]
    SelfEmployed,
    Unemployed,
    Retired,
    Student,
}

impl From<ApiEmploymentStatus> for CliEmploymentStatus {
    fn from(value: ApiEmploymentStatus) -> Self {
        match value {
            ApiEmploymentStatus::Employed => CliEmploymentStatus::Employed,
            ApiEmploymentStatus::SelfEmployed => CliEmploymentStatus::SelfEmployed,
            ApiEmploymentStatus::Unemployed => CliEmploymentStatus::Unemployed,
            ApiEmploymentStatus::Retired => CliEmploymentStatus::Retired,
            ApiEmploymentStatus::Student => CliEmploymentStatus::Student,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiIncomeVariability {
    Stable,
    Seasonal,
    Volatile,
}

impl From<ApiIncomeVariability> for CliIncomeVariability {
    fn from(value: ApiIncomeVariability) -> Self {
        match value {
            ApiIncomeVariability::Stable => CliIncomeVariability::Stable,
            ApiIncomeVariability::Seasonal => CliIncomeVariability::Seasonal,
            ApiIncomeVariability::Volatile => CliIncomeVariability::Volatile,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AnalyzePayload {
    age: Option<u32>,
    marital_status: Option<ApiMaritalStatus>,
    dependents: Option<u32>,
    employment_status: Option<ApiEmploymentStatus>,
    employment_tenure_years: Option<f64>,

    primary_income: Option<f64>,
    secondary_income: Option<f64>,
    business_income: Option<f64>,
    investment_income: Option<f64>,
    rental_income: Option<f64>,
    benefits_income: Option<f64>,
    other_income: Option<f64>,
    income_growth_rate: Option<f64>,
    income_variability: Option<ApiIncomeVariability>,
    effective_tax_rate: Option<f64>,

    housing: Option<f64>,
    utilities: Option<f64>,
    food: Option<f64>,
    transportation: Option<f64>,
    healthcare: Option<f64>,
    insurance: Option<f64>,
    entertainment: Option<f64>,
    shopping: Option<f64>,
    credit_card_payments: Option<f64>,

    checking: Option<f64>,
    savings: Option<f64>,
    emergency_fund: Option<f64>,
    retirement_balance: Option<f64>,
    brokerage: Option<f64>,

    credit_card_debt: Option<f64>,
    student_loans: Option<f64>,
    auto_loans: Option<f64>,
    mortgage_balance: Option<f64>,
    credit_score: Option<u32>,
    total_credit_limit: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "fincheck",
    about = "Financial health self-assessment (weighted benchmark scoring with insights and an action plan)"
)]
struct Cli {
    #[arg(long, default_value_t = 35)]
    age: u32,
    #[arg(long, value_enum, default_value_t = CliMaritalStatus::Single)]
    marital_status: CliMaritalStatus,
    #[arg(long, default_value_t = 0)]
    dependents: u32,
    #[arg(long, value_enum, default_value_t = CliEmploymentStatus::Employed)]
    employment_status: CliEmploymentStatus,
    #[arg(long, default_value_t = 5.0, help = "Years with the current employer")]
    employment_tenure_years: f64,

    #[arg(
        long,
        default_value_t = 5000.0,
        help = "Primary monthly income before tax"
    )]
    primary_income: f64,
    #[arg(long, default_value_t = 0.0)]
    secondary_income: f64,
    #[arg(long, default_value_t = 0.0)]
    business_income: f64,
    #[arg(long, default_value_t = 0.0)]
    investment_income: f64,
    #[arg(long, default_value_t = 0.0)]
    rental_income: f64,
    #[arg(long, default_value_t = 0.0)]
    benefits_income: f64,
    #[arg(long, default_value_t = 0.0)]
    other_income: f64,
    #[arg(
        long,
        default_value_t = 3.0,
        help = "Expected annual income growth in percent"
    )]
    income_growth_rate: f64,
    #[arg(long, value_enum, default_value_t = CliIncomeVariability::Stable)]
    income_variability: CliIncomeVariability,
    #[arg(long, default_value_t = 22.0, help = "Effective tax rate in percent")]
    effective_tax_rate: f64,

    #[arg(long, default_value_t = 1200.0, help = "Monthly housing cost")]
    housing: f64,
    #[arg(long, default_value_t = 250.0)]
    utilities: f64,
    #[arg(long, default_value_t = 600.0)]
    food: f64,
    #[arg(long, default_value_t = 400.0)]
    transportation: f64,
    #[arg(long, default_value_t = 200.0)]
    healthcare: f64,
    #[arg(long, default_value_t = 200.0, help = "Monthly insurance premiums")]
    insurance: f64,
    #[arg(long, default_value_t = 300.0)]
    entertainment: f64,
    #[arg(long, default_value_t = 300.0)]
    shopping: f64,
    #[arg(long, default_value_t = 300.0, help = "Monthly credit-card payments")]
    credit_card_payments: f64,

    #[arg(long, default_value_t = 2000.0)]
    checking: f64,
    #[arg(long, default_value_t = 5000.0)]
    savings: f64,
    #[arg(
        long,
        default_value_t = 10000.0,
        help = "Dedicated emergency fund balance"
    )]
    emergency_fund: f64,
    #[arg(long, default_value_t = 45000.0, help = "Retirement account balance")]
    retirement_balance: f64,
    #[arg(long, default_value_t = 5000.0, help = "Taxable brokerage balance")]
    brokerage: f64,

    #[arg(
        long,
        default_value_t = 4000.0,
        help = "Outstanding credit-card balance"
    )]
    credit_card_debt: f64,
    #[arg(
        long,
        default_value_t = 12000.0,
        help = "Outstanding student-loan balance"
    )]
    student_loans: f64,
    #[arg(long, default_value_t = 8000.0, help = "Outstanding auto-loan balance")]
    auto_loans: f64,
    #[arg(
        long,
        default_value_t = 150000.0,
        help = "Outstanding mortgage balance"
    )]
    mortgage_balance: f64,
    #[arg(long, default_value_t = 720, help = "Credit score, 300 to 850")]
    credit_score: u32,
    #[arg(
        long,
        default_value_t = 20000.0,
        help = "Total credit limit across cards"
    )]
    total_credit_limit: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MonthlySummary {
    gross_income: f64,
    total_expenses: f64,
    essential_expenses: f64,
    debt_service: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    monthly_summary: MonthlySummary,
    #[serde(flatten)]
    analysis: AnalysisResult,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_profile(cli: Cli) -> Result<FinancialProfile, String> {
    if !(18..=120).contains(&cli.age) {
        return Err("--age must be between 18 and 120".to_string());
    }

    if !(300..=850).contains(&cli.credit_score) {
        return Err("--credit-score must be between 300 and 850".to_string());
    }

    if !(0.0..=100.0).contains(&cli.income_growth_rate) {
        return Err("--income-growth-rate must be between 0 and 100".to_string());
    }

    if !(0.0..=100.0).contains(&cli.effective_tax_rate) {
        return Err("--effective-tax-rate must be between 0 and 100".to_string());
    }

    if !cli.employment_tenure_years.is_finite() || cli.employment_tenure_years < 0.0 {
        return Err("--employment-tenure-years must be >= 0".to_string());
    }

    for (name, value) in [
        ("--primary-income", cli.primary_income),
        ("--secondary-income", cli.secondary_income),
        ("--business-income", cli.business_income),
        ("--investment-income", cli.investment_income),
        ("--rental-income", cli.rental_income),
        ("--benefits-income", cli.benefits_income),
        ("--other-income", cli.other_income),
        ("--housing", cli.housing),
        ("--utilities", cli.utilities),
        ("--food", cli.food),
        ("--transportation", cli.transportation),
        ("--healthcare", cli.healthcare),
        ("--insurance", cli.insurance),
        ("--entertainment", cli.entertainment),
        ("--shopping", cli.shopping),
        ("--credit-card-payments", cli.credit_card_payments),
        ("--checking", cli.checking),
        ("--savings", cli.savings),
        ("--emergency-fund", cli.emergency_fund),
        ("--retirement-balance", cli.retirement_balance),
        ("--brokerage", cli.brokerage),
        ("--credit-card-debt", cli.credit_card_debt),
        ("--student-loans", cli.student_loans),
        ("--auto-loans", cli.auto_loans),
        ("--mortgage-balance", cli.mortgage_balance),
        ("--total-credit-limit", cli.total_credit_limit),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{name} must be a finite number >= 0"));
        }
    }

    Ok(FinancialProfile {
        age: cli.age,
        marital_status: cli.marital_status.into(),
        dependents: cli.dependents,
        employment_status: cli.employment_status.into(),
        employment_tenure_years: cli.employment_tenure_years,
        primary_income: cli.primary_income,
        secondary_income: cli.secondary_income,
        business_income: cli.business_income,
        investment_income: cli.investment_income,
        rental_income: cli.rental_income,
        benefits_income: cli.benefits_income,
        other_income: cli.other_income,
        income_growth_rate: cli.income_growth_rate / 100.0,
        income_variability: cli.income_variability.into(),
        effective_tax_rate: cli.effective_tax_rate / 100.0,
        housing: cli.housing,
        utilities: cli.utilities,
        food: cli.food,
        transportation: cli.transportation,
        healthcare: cli.healthcare,
        insurance: cli.insurance,
        entertainment: cli.entertainment,
        shopping: cli.shopping,
        credit_card_payments: cli.credit_card_payments,
        checking: cli.checking,
        savings: cli.savings,
        emergency_fund: cli.emergency_fund,
        retirement_balance: cli.retirement_balance,
        brokerage: cli.brokerage,
        credit_card_debt: cli.credit_card_debt,
        student_loans: cli.student_loans,
        auto_loans: cli.auto_loans,
        mortgage_balance: cli.mortgage_balance,
        credit_score: cli.credit_score,
        total_credit_limit: cli.total_credit_limit,
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let benchmarks = BenchmarkTable::research();
    if let Err(msg) = benchmarks.validate() {
        return Err(std::io::Error::other(format!(
            "invalid benchmark table: {msg}"
        )));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/analyze",
            get(analyze_get_handler).post(analyze_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("fincheck HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn analyze_get_handler(Query(payload): Query<AnalyzePayload>) -> Response {
    analyze_handler_impl(payload).await
}

async fn analyze_post_handler(Json(payload): Json<AnalyzePayload>) -> Response {
    analyze_handler_impl(payload).await
}

async fn analyze_handler_impl(payload: AnalyzePayload) -> Response {
    let profile = match profile_from_payload(payload) {
        Ok(profile) => profile,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let benchmarks = BenchmarkTable::research();
    let analysis = compute_analysis(&profile, &benchmarks);
    json_response(StatusCode::OK, build_analyze_response(&profile, analysis))
}

fn build_analyze_response(profile: &FinancialProfile, analysis: AnalysisResult) -> AnalyzeResponse {
    AnalyzeResponse {
        monthly_summary: MonthlySummary {
            gross_income: profile.gross_monthly_income(),
            total_expenses: profile.total_monthly_expenses(),
            essential_expenses: profile.essential_monthly_expenses(),
            debt_service: profile.monthly_debt_service(),
        },
        analysis,
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn profile_from_json(json: &str) -> Result<FinancialProfile, String> {
    let payload = serde_json::from_str::<AnalyzePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    profile_from_payload(payload)
}

fn profile_from_payload(payload: AnalyzePayload) -> Result<FinancialProfile, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.age {
        cli.age = v;
    }
    if let Some(v) = payload.marital_status {
        cli.marital_status = v.into();
    }
    if let Some(v) = payload.dependents {
        cli.dependents = v;
    }
    if let Some(v) = payload.employment_status {
        cli.employment_status = v.into();
    }
    if let Some(v) = payload.employment_tenure_years {
        cli.employment_tenure_years = v;
    }

    if let Some(v) = payload.primary_income {
        cli.primary_income = v;
    }
    if let Some(v) = payload.secondary_income {
        cli.secondary_income = v;
    }
    if let Some(v) = payload.business_income {
        cli.business_income = v;
    }
    if let Some(v) = payload.investment_income {
        cli.investment_income = v;
    }
    if let Some(v) = payload.rental_income {
        cli.rental_income = v;
    }
    if let Some(v) = payload.benefits_income {
        cli.benefits_income = v;
    }
    if let Some(v) = payload.other_income {
        cli.other_income = v;
    }
    if let Some(v) = payload.income_growth_rate {
        cli.income_growth_rate = v;
    }
    if let Some(v) = payload.income_variability {
        cli.income_variability = v.into();
    }
    if let Some(v) = payload.effective_tax_rate {
        cli.effective_tax_rate = v;
    }

    if let Some(v) = payload.housing {
        cli.housing = v;
    }
    if let Some(v) = payload.utilities {
        cli.utilities = v;
    }
    if let Some(v) = payload.food {
        cli.food = v;
    }
    if let Some(v) = payload.transportation {
        cli.transportation = v;
    }
    if let Some(v) = payload.healthcare {
        cli.healthcare = v;
    }
    if let Some(v) = payload.insurance {
        cli.insurance = v;
    }
    if let Some(v) = payload.entertainment {
        cli.entertainment = v;
    }
    if let Some(v) = payload.shopping {
        cli.shopping = v;
    }
    if let Some(v) = payload.credit_card_payments {
        cli.credit_card_payments = v;
    }

    if let Some(v) = payload.checking {
        cli.checking = v;
    }
    if let Some(v) = payload.savings {
        cli.savings = v;
    }
    if let Some(v) = payload.emergency_fund {
        cli.emergency_fund = v;
    }
    if let Some(v) = payload.retirement_balance {
        cli.retirement_balance = v;
    }
    if let Some(v) = payload.brokerage {
        cli.brokerage = v;
    }

    if let Some(v) = payload.credit_card_debt {
        cli.credit_card_debt = v;
    }
    if let Some(v) = payload.student_loans {
        cli.student_loans = v;
    }
    if let Some(v) = payload.auto_loans {
        cli.auto_loans = v;
    }
    if let Some(v) = payload.mortgage_balance {
        cli.mortgage_balance = v;
    }
    if let Some(v) = payload.credit_score {
        cli.credit_score = v;
    }
    if let Some(v) = payload.total_credit_limit {
        cli.total_credit_limit = v;
    }

    build_profile(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        age: 35,
        marital_status: CliMaritalStatus::Single,
        dependents: 0,
        employment_status: CliEmploymentStatus::Employed,
        employment_tenure_years: 5.0,
        primary_income: 5_000.0,
        secondary_income: 0.0,
        business_income: 0.0,
        investment_income: 0.0,
        rental_income: 0.0,
        benefits_income: 0.0,
        other_income: 0.0,
        income_growth_rate: 3.0,
        income_variability: CliIncomeVariability::Stable,
        effective_tax_rate: 22.0,
        housing: 1_200.0,
        utilities: 250.0,
        food: 600.0,
        transportation: 400.0,
        healthcare: 200.0,
        insurance: 200.0,
        entertainment: 300.0,
        shopping: 300.0,
        credit_card_payments: 300.0,
        checking: 2_000.0,
        savings: 5_000.0,
        emergency_fund: 10_000.0,
        retirement_balance: 45_000.0,
        brokerage: 5_000.0,
        credit_card_debt: 4_000.0,
        student_loans: 12_000.0,
        auto_loans: 8_000.0,
        mortgage_balance: 150_000.0,
        credit_score: 720,
        total_credit_limit: 20_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HealthTier;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    #[test]
    fn build_profile_converts_percent_rates_to_fractions() {
        let profile = build_profile(sample_cli()).expect("valid profile");
        assert_approx(profile.income_growth_rate, 0.03);
        assert_approx(profile.effective_tax_rate, 0.22);
    }

    #[test]
    fn build_profile_rejects_negative_income() {
        let mut cli = sample_cli();
        cli.primary_income = -1.0;
        let err = build_profile(cli).expect_err("must reject negative income");
        assert!(err.contains("--primary-income"));
    }

    #[test]
    fn build_profile_rejects_out_of_range_credit_score() {
        let mut cli = sample_cli();
        cli.credit_score = 200;
        let err = build_profile(cli).expect_err("must reject low credit score");
        assert!(err.contains("--credit-score"));

        let mut cli = sample_cli();
        cli.credit_score = 900;
        let err = build_profile(cli).expect_err("must reject high credit score");
        assert!(err.contains("--credit-score"));
    }

    #[test]
    fn build_profile_rejects_non_finite_values() {
        let mut cli = sample_cli();
        cli.mortgage_balance = f64::NAN;
        let err = build_profile(cli).expect_err("must reject NaN");
        assert!(err.contains("--mortgage-balance"));
    }

    #[test]
    fn payload_overrides_merge_onto_defaults() {
        let profile = profile_from_json(
            r#"{"primaryIncome": 8000, "emergencyFund": 24000, "creditScore": 810}"#,
        )
        .expect("valid payload");
        assert_approx(profile.primary_income, 8_000.0);
        assert_approx(profile.emergency_fund, 24_000.0);
        assert_eq!(profile.credit_score, 810);
        // Untouched fields keep the documented defaults.
        assert_approx(profile.housing, 1_200.0);
    }

    #[test]
    fn payload_accepts_kebab_case_enums() {
        let profile = profile_from_json(
            r#"{"employmentStatus": "self-employed", "incomeVariability": "volatile"}"#,
        )
        .expect("valid payload");
        assert_eq!(profile.employment_status, EmploymentStatus::SelfEmployed);
        assert_eq!(profile.income_variability, IncomeVariability::Volatile);
    }

    #[test]
    fn payload_with_invalid_field_is_rejected_with_flag_name() {
        let err = profile_from_json(r#"{"creditScore": 299}"#).expect_err("must reject");
        assert!(err.contains("--credit-score"));
    }

    #[test]
    fn default_profile_analyzes_to_good_tier() {
        let profile = build_profile(sample_cli()).expect("valid profile");
        let benchmarks = BenchmarkTable::research();
        let analysis = compute_analysis(&profile, &benchmarks);
        assert_eq!(analysis.overall_score, 81);
        assert_eq!(analysis.tier, HealthTier::Good);
    }

    #[test]
    fn analyze_response_serializes_camel_case() {
        let profile = build_profile(sample_cli()).expect("valid profile");
        let benchmarks = BenchmarkTable::research();
        let analysis = compute_analysis(&profile, &benchmarks);
        let response = build_analyze_response(&profile, analysis);
        let json = serde_json::to_string(&response).expect("response should serialize");

        assert!(json.contains("\"monthlySummary\""));
        assert!(json.contains("\"grossIncome\""));
        assert!(json.contains("\"essentialExpenses\""));
        assert!(json.contains("\"overallScore\""));
        assert!(json.contains("\"indicatorScores\""));
        assert!(json.contains("\"actionPlan\""));
        assert!(json.contains("\"tier\":\"good\""));
    }

    #[test]
    fn benchmark_table_is_valid_at_server_startup() {
        BenchmarkTable::research()
            .validate()
            .expect("startup table must validate");
    }
}
