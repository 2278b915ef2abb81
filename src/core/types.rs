use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MaritalStatus {
    Single,
    Married,
    Partnered,
    Divorced,
    Widowed,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Retired,
    Student,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IncomeVariability {
    Stable,
    Seasonal,
    Volatile,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Indicator {
    DebtManagement,
    EmergencySavings,
    SpendingVsIncome,
    CreditHealth,
    RetirementPlanning,
    InsuranceCoverage,
    FinancialPlanning,
    BillPayment,
}

impl Indicator {
    pub fn label(self) -> &'static str {
        match self {
            Indicator::DebtManagement => "Debt management",
            Indicator::EmergencySavings => "Emergency savings",
            Indicator::SpendingVsIncome => "Spending vs. income",
            Indicator::CreditHealth => "Credit health",
            Indicator::RetirementPlanning => "Retirement planning",
            Indicator::InsuranceCoverage => "Insurance coverage",
            Indicator::FinancialPlanning => "Financial planning",
            Indicator::BillPayment => "Bill payment",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthTier {
    Excellent,
    Good,
    Fair,
    Limited,
    Critical,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Timeframe {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

// Estimated monthly payment per unit of outstanding balance, used to turn
// liability balances into a monthly debt-service figure.
pub const STUDENT_LOAN_PAYMENT_FACTOR: f64 = 0.01;
pub const AUTO_LOAN_PAYMENT_FACTOR: f64 = 0.02;
pub const MORTGAGE_PAYMENT_FACTOR: f64 = 0.005;

#[derive(Debug, Clone)]
pub struct FinancialProfile {
    pub age: u32,
    pub marital_status: MaritalStatus,
    pub dependents: u32,
    pub employment_status: EmploymentStatus,
    pub employment_tenure_years: f64,

    pub primary_income: f64,
    pub secondary_income: f64,
    pub business_income: f64,
    pub investment_income: f64,
    pub rental_income: f64,
    pub benefits_income: f64,
    pub other_income: f64,
    pub income_growth_rate: f64,
    pub income_variability: IncomeVariability,
    pub effective_tax_rate: f64,

    pub housing: f64,
    pub utilities: f64,
    pub food: f64,
    pub transportation: f64,
    pub healthcare: f64,
    pub insurance: f64,
    pub entertainment: f64,
    pub shopping: f64,
    pub credit_card_payments: f64,

    pub checking: f64,
    pub savings: f64,
    pub emergency_fund: f64,
    pub retirement_balance: f64,
    pub brokerage: f64,

    pub credit_card_debt: f64,
    pub student_loans: f64,
    pub auto_loans: f64,
    pub mortgage_balance: f64,
    pub credit_score: u32,
    pub total_credit_limit: f64,
}

impl FinancialProfile {
    pub fn gross_monthly_income(&self) -> f64 {
        self.primary_income
            + self.secondary_income
            + self.business_income
            + self.investment_income
            + self.rental_income
            + self.benefits_income
            + self.other_income
    }

    pub fn annual_gross_income(&self) -> f64 {
        self.gross_monthly_income() * 12.0
    }

    pub fn total_monthly_expenses(&self) -> f64 {
        self.housing
            + self.utilities
            + self.food
            + self.transportation
            + self.healthcare
            + self.insurance
            + self.entertainment
            + self.shopping
            + self.credit_card_payments
    }

    pub fn essential_monthly_expenses(&self) -> f64 {
        self.housing
            + self.utilities
            + self.food
            + self.transportation
            + self.healthcare
            + self.insurance
    }

    pub fn monthly_debt_service(&self) -> f64 {
        self.credit_card_payments
            + self.student_loans * STUDENT_LOAN_PAYMENT_FACTOR
            + self.auto_loans * AUTO_LOAN_PAYMENT_FACTOR
            + self.mortgage_balance * MORTGAGE_PAYMENT_FACTOR
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorScore {
    pub indicator: Indicator,
    pub label: &'static str,
    pub score: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub indicator: Indicator,
    pub title: String,
    pub explanation: String,
    pub impact: Impact,
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub tier: HealthTier,
    pub indicator_scores: Vec<IndicatorScore>,
    pub insights: Vec<Insight>,
    pub action_plan: Vec<String>,
    pub warnings: Vec<String>,
}
