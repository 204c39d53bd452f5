use super::super::domain::FinancialInputs;
use serde::{Deserialize, Serialize};

const BASE_RATE: f64 = 5.0;
const RISK_SPREAD_SLOPE: f64 = 6.5;
const LIMIT_SHARE_OF_SALES: f64 = 0.18;

/// Recommended facility terms: a currency limit and an annual rate in
/// percent. The rate is not clamped here; only the scenario recompute
/// bounds it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditTerms {
    pub limit: f64,
    pub rate: f64,
}

/// Size the facility from net sales and PD. The base limit is a fixed share
/// of sales, scaled between 0.55x and 1.40x as PD improves.
pub(crate) fn suggest_terms(
    pd: f64,
    fin: &FinancialInputs,
    base_rate_delta: f64,
) -> CreditTerms {
    let base_limit = (fin.net_sales * LIMIT_SHARE_OF_SALES).max(0.0);
    let limit = (base_limit * (0.55 + 0.85 * (1.0 - pd))).round();

    let risk_spread = RISK_SPREAD_SLOPE * pd + base_rate_delta * 0.4;
    let rate = ((BASE_RATE + risk_spread) * 100.0).round() / 100.0;

    CreditTerms { limit, rate }
}
