use super::common::*;
use crate::scoring::corporate::domain::FlagSeverity;
use crate::scoring::corporate::evaluation::{
    compute_ratios, policy_flags, rate_metrics, MetricKind, MetricStatus,
};

#[test]
fn reference_statement_raises_only_the_industry_flag() {
    let ratios = compute_ratios(&financials());
    let flags = policy_flags(&ratios, Some("C26"));

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].severity, FlagSeverity::Info);
    assert!(flags[0].text.contains("industry"));
}

#[test]
fn industry_flag_needs_an_industry_code() {
    let ratios = compute_ratios(&financials());
    let flags = policy_flags(&ratios, None);

    assert!(flags.is_empty());
}

#[test]
fn current_ratio_of_exactly_one_is_not_flagged() {
    let mut fin = financials();
    fin.current_liabilities = fin.current_assets;

    let ratios = compute_ratios(&fin);
    assert_eq!(ratios.current_ratio, 1.0);

    let flags = policy_flags(&ratios, None);
    assert!(flags
        .iter()
        .all(|flag| flag.severity != FlagSeverity::Danger));
}

#[test]
fn illiquid_statement_raises_the_danger_flag_first() {
    let mut fin = financials();
    fin.current_assets = 900.0;
    fin.current_liabilities = 1850.0;
    fin.long_term_debt = 4000.0;

    let ratios = compute_ratios(&fin);
    let flags = policy_flags(&ratios, Some("C26"));

    assert!(flags.len() >= 2);
    assert_eq!(flags[0].severity, FlagSeverity::Danger);
    assert!(flags
        .iter()
        .any(|flag| flag.severity == FlagSeverity::Warning));
}

#[test]
fn metric_badges_rate_the_reference_statement() {
    let ratios = compute_ratios(&financials());
    let readings = rate_metrics(&ratios);

    let status_of = |kind: MetricKind| {
        readings
            .iter()
            .find(|reading| reading.metric == kind)
            .map(|reading| reading.status)
            .expect("metric present")
    };

    assert_eq!(status_of(MetricKind::GrossMargin), MetricStatus::Good);
    assert_eq!(status_of(MetricKind::NetMargin), MetricStatus::Watch);
    assert_eq!(status_of(MetricKind::CurrentRatio), MetricStatus::Good);
    assert_eq!(status_of(MetricKind::QuickRatio), MetricStatus::Good);
    assert_eq!(status_of(MetricKind::DebtToAsset), MetricStatus::Watch);
    assert_eq!(status_of(MetricKind::ReturnOnAssets), MetricStatus::Good);
    assert_eq!(status_of(MetricKind::AltmanZ), MetricStatus::Good);
    assert_eq!(status_of(MetricKind::OhlsonO), MetricStatus::Good);
}

#[test]
fn metric_badges_flag_a_distressed_statement() {
    let mut fin = financials();
    fin.net_income = -300.0;
    fin.current_assets = 1000.0;
    fin.inventory = 950.0;
    fin.long_term_debt = 6000.0;

    let ratios = compute_ratios(&fin);
    let readings = rate_metrics(&ratios);

    let risky = readings
        .iter()
        .filter(|reading| reading.status == MetricStatus::Risk)
        .count();
    assert!(risky >= 3, "expected several risk badges, got {risky}");
}
