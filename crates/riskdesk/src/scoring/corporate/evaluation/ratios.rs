use super::super::domain::{FinancialInputs, Ratios};

/// Derive statement ratios from raw inputs.
///
/// Every division is guarded: a zero denominator yields 0 rather than an
/// error, so the pipeline stays total over the whole input domain. Total
/// assets are a working proxy (current assets plus 40% of sales), not a
/// balance-sheet total.
pub(crate) fn compute_ratios(fin: &FinancialInputs) -> Ratios {
    let gross_profit = (fin.net_sales - fin.cogs).max(0.0);
    let gross_margin = if fin.net_sales > 0.0 {
        gross_profit / fin.net_sales
    } else {
        0.0
    };
    let net_margin = if fin.net_sales > 0.0 {
        fin.net_income / fin.net_sales
    } else {
        0.0
    };

    let current_ratio = if fin.current_liabilities > 0.0 {
        fin.current_assets / fin.current_liabilities
    } else {
        0.0
    };
    let quick_assets = (fin.current_assets - fin.inventory).max(0.0);
    let quick_ratio = if fin.current_liabilities > 0.0 {
        quick_assets / fin.current_liabilities
    } else {
        0.0
    };

    let total_assets = (fin.current_assets + (fin.net_sales * 0.4).max(0.0)).max(1.0);
    let total_liabilities = fin.current_liabilities + fin.long_term_debt;
    let debt_to_asset = total_liabilities / total_assets;
    let return_on_assets = fin.net_income / total_assets;

    let working_capital = fin.current_assets - fin.current_liabilities;
    let altman_z = 1.2 * (working_capital / total_assets)
        + 1.4 * (fin.retained_earnings / total_assets)
        + 3.3 * (fin.ebit / total_assets)
        + 0.6 * (fin.market_value / total_liabilities.max(1.0))
        + 1.0 * (fin.net_sales / total_assets);

    let log_total_assets = total_assets.max(1.0).ln();
    let ohlson_o = -1.32 - 0.407 * log_total_assets + 6.03 * (total_liabilities / total_assets)
        - 1.43 * (working_capital / total_assets)
        + 0.076 * (fin.current_liabilities / fin.current_assets.max(1.0))
        - 1.72 * (fin.net_income / total_assets);

    Ratios {
        gross_profit,
        gross_margin,
        net_margin,
        current_ratio,
        quick_ratio,
        total_assets,
        total_liabilities,
        working_capital,
        debt_to_asset,
        return_on_assets,
        altman_z,
        ohlson_o,
    }
}
