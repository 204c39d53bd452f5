use serde::{Deserialize, Serialize};

/// Reviewer-facing stance shown next to a scored probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionTone {
    Approve,
    Hold,
    Reject,
}

impl DecisionTone {
    pub const fn label(self) -> &'static str {
        match self {
            DecisionTone::Approve => "approve",
            DecisionTone::Hold => "hold",
            DecisionTone::Reject => "reject",
        }
    }
}
