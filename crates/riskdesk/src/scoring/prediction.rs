//! Wire contract for the upstream scoring model.
//!
//! The model endpoint answers with either `p_hat` (the default probability
//! directly) or `model_raw` (the probability of the complementary event,
//! which must be inverted). Anything else is a malformed response. There is
//! no retry: one failed round-trip surfaces as one error.

use serde::{Deserialize, Serialize};

use super::corporate::CompanyProfile;

/// Response body accepted from the prediction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_hat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_raw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl PredictionResponse {
    /// Extract the default probability. `p_hat` wins when both fields are
    /// present; `model_raw` scores repayment and is inverted. Non-finite
    /// values are treated as absent.
    pub fn resolve_probability(&self) -> Result<f64, PredictionError> {
        if let Some(p_hat) = self.p_hat {
            if p_hat.is_finite() {
                return Ok(p_hat.clamp(0.0, 1.0));
            }
        }
        if let Some(model_raw) = self.model_raw {
            if model_raw.is_finite() {
                return Ok((1.0 - model_raw).clamp(0.0, 1.0));
            }
        }
        Err(PredictionError::MalformedResponse)
    }
}

/// Failures surfaced by the model round-trip.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction endpoint unavailable: {0}")]
    Unavailable(String),
    #[error("malformed prediction response")]
    MalformedResponse,
}

/// Single-shot gateway to the scoring model. Implementations decide whether
/// the call crosses the network or runs a local scorecard.
pub trait ModelGateway: Send + Sync {
    fn predict(&self, profile: &CompanyProfile) -> Result<PredictionResponse, PredictionError>;
}
