use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Borrower identification captured alongside the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowerMeta {
    pub company_name: String,
    pub reg_no: String,
    #[serde(default)]
    pub industry: Option<String>,
    pub fiscal_year: String,
}

impl BorrowerMeta {
    /// Industry code, if one was declared with actual content.
    pub fn industry_code(&self) -> Option<&str> {
        self.industry
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Raw statement fields as entered by the analyst. All amounts share one
/// currency unit; the pipeline never converts between units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    pub net_sales: f64,
    pub cogs: f64,
    pub depreciation: f64,
    pub ebit: f64,
    pub net_income: f64,
    pub inventory: f64,
    pub receivables: f64,
    pub current_assets: f64,
    pub current_liabilities: f64,
    pub long_term_debt: f64,
    pub retained_earnings: f64,
    pub market_value: f64,
}

impl FinancialInputs {
    /// Field name/value pairs, in statement order, for uniform validation.
    pub(crate) fn named_fields(&self) -> [(&'static str, f64); 12] {
        [
            ("net_sales", self.net_sales),
            ("cogs", self.cogs),
            ("depreciation", self.depreciation),
            ("ebit", self.ebit),
            ("net_income", self.net_income),
            ("inventory", self.inventory),
            ("receivables", self.receivables),
            ("current_assets", self.current_assets),
            ("current_liabilities", self.current_liabilities),
            ("long_term_debt", self.long_term_debt),
            ("retained_earnings", self.retained_earnings),
            ("market_value", self.market_value),
        ]
    }
}

/// Inbound scoring request before intake validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub meta: BorrowerMeta,
    pub statement_date: NaiveDate,
    pub financials: FinancialInputs,
}

/// Sanitized profile produced by the intake guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub assessment_id: AssessmentId,
    pub meta: BorrowerMeta,
    pub statement_date: NaiveDate,
    pub financials: FinancialInputs,
}

/// Ratios derived from a statement. Recomputed in full on every scoring
/// pass; never stored independently of the inputs that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    pub gross_profit: f64,
    pub gross_margin: f64,
    pub net_margin: f64,
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub working_capital: f64,
    pub debt_to_asset: f64,
    pub return_on_assets: f64,
    pub altman_z: f64,
    pub ohlson_o: f64,
}

/// Letter grades, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskGrade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "BBB+")]
    BbbPlus,
    #[serde(rename = "BBB")]
    Bbb,
    #[serde(rename = "BB+")]
    BbPlus,
    #[serde(rename = "BB")]
    Bb,
    #[serde(rename = "B+")]
    BPlus,
}

impl RiskGrade {
    pub const fn label(self) -> &'static str {
        match self {
            RiskGrade::A => "A",
            RiskGrade::AMinus => "A-",
            RiskGrade::BbbPlus => "BBB+",
            RiskGrade::Bbb => "BBB",
            RiskGrade::BbPlus => "BB+",
            RiskGrade::Bb => "BB",
            RiskGrade::BPlus => "B+",
        }
    }
}

/// Severity attached to a policy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Danger,
    Warning,
    Info,
}

/// Threshold breach surfaced next to the grade badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFlag {
    pub text: String,
    pub severity: FlagSeverity,
}

/// Which margin the what-if margin slider perturbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginMode {
    #[default]
    Gross,
    Net,
}

/// Hypothetical perturbation applied on top of a scored assessment.
///
/// Revenue, market, and FX deltas are percentages; margin and base-rate
/// deltas are percentage points; the debt delta is an index shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub revenue_delta: f64,
    pub margin_delta: f64,
    pub debt_delta: f64,
    pub market_delta: f64,
    pub fx_delta: f64,
    pub base_rate_delta: f64,
    pub margin_mode: MarginMode,
}
