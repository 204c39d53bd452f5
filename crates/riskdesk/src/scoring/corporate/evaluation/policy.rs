use super::super::domain::{FlagSeverity, PolicyFlag, Ratios};
use serde::{Deserialize, Serialize};

/// Compare ratios against the policy thresholds and emit warning tags.
///
/// Flags are independent; any subset may fire, and the list is rebuilt from
/// scratch on every scoring pass. All comparisons are strict inequalities, so
/// a current ratio of exactly 1.0 raises nothing.
pub(crate) fn policy_flags(ratios: &Ratios, industry: Option<&str>) -> Vec<PolicyFlag> {
    let mut flags = Vec::new();

    if ratios.current_ratio < 1.0 {
        flags.push(PolicyFlag {
            text: "current ratio below 1.0".to_string(),
            severity: FlagSeverity::Danger,
        });
    }
    if ratios.debt_to_asset > 0.6 {
        flags.push(PolicyFlag {
            text: "debt-to-asset above 60%".to_string(),
            severity: FlagSeverity::Warning,
        });
    }
    if ratios.ohlson_o > 1.0 {
        flags.push(PolicyFlag {
            text: "Ohlson O-Score elevated".to_string(),
            severity: FlagSeverity::Warning,
        });
    }
    if industry.is_some() && ratios.debt_to_asset > 0.55 {
        flags.push(PolicyFlag {
            text: "approaching industry leverage ceiling".to_string(),
            severity: FlagSeverity::Info,
        });
    }

    flags
}

/// Traffic-light rating for a single ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Good,
    Watch,
    Risk,
}

/// Which ratio a reading describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    GrossMargin,
    NetMargin,
    CurrentRatio,
    QuickRatio,
    DebtToAsset,
    ReturnOnAssets,
    AltmanZ,
    OhlsonO,
}

/// One rated ratio, as rendered on the metric badge strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricReading {
    pub metric: MetricKind,
    pub value: f64,
    pub status: MetricStatus,
}

/// Rate each headline ratio against its badge thresholds.
pub(crate) fn rate_metrics(ratios: &Ratios) -> Vec<MetricReading> {
    [
        (MetricKind::GrossMargin, ratios.gross_margin, floor(ratios.gross_margin, 0.2, 0.1)),
        (MetricKind::NetMargin, ratios.net_margin, floor(ratios.net_margin, 0.08, 0.04)),
        (MetricKind::CurrentRatio, ratios.current_ratio, floor(ratios.current_ratio, 1.5, 1.0)),
        (MetricKind::QuickRatio, ratios.quick_ratio, floor(ratios.quick_ratio, 1.2, 0.8)),
        (MetricKind::DebtToAsset, ratios.debt_to_asset, ceiling(ratios.debt_to_asset, 0.5, 0.6)),
        (
            MetricKind::ReturnOnAssets,
            ratios.return_on_assets,
            floor(ratios.return_on_assets, 0.05, 0.02),
        ),
        (MetricKind::AltmanZ, ratios.altman_z, floor(ratios.altman_z, 3.0, 1.8)),
        (MetricKind::OhlsonO, ratios.ohlson_o, ceiling(ratios.ohlson_o, 0.5, 1.0)),
    ]
    .into_iter()
    .map(|(metric, value, status)| MetricReading {
        metric,
        value,
        status,
    })
    .collect()
}

/// Higher is better: at or above `good` is green, at or above `watch` amber.
fn floor(value: f64, good: f64, watch: f64) -> MetricStatus {
    if value >= good {
        MetricStatus::Good
    } else if value >= watch {
        MetricStatus::Watch
    } else {
        MetricStatus::Risk
    }
}

/// Lower is better: at or below `good` is green, at or below `watch` amber.
fn ceiling(value: f64, good: f64, watch: f64) -> MetricStatus {
    if value <= good {
        MetricStatus::Good
    } else if value <= watch {
        MetricStatus::Watch
    } else {
        MetricStatus::Risk
    }
}
