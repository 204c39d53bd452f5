use super::domain::{AssessmentId, AssessmentSubmission, CompanyProfile};

/// Validation errors raised at the input boundary. Invalid statements are
/// rejected outright, never clamped into range.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("{field} must be a non-negative amount (found {found})")]
    NegativeAmount { field: &'static str, found: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },
    #[error("cost of goods sold ({cogs}) cannot exceed net sales ({net_sales})")]
    CostExceedsRevenue { cogs: f64, net_sales: f64 },
    #[error("company name is required")]
    MissingCompanyName,
}

/// Guard responsible for producing `CompanyProfile` instances.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Convert an inbound submission into a sanitized company profile.
    pub fn profile_from_submission(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<CompanyProfile, IntakeViolation> {
        if submission.meta.company_name.trim().is_empty() {
            return Err(IntakeViolation::MissingCompanyName);
        }

        for (field, value) in submission.financials.named_fields() {
            if !value.is_finite() {
                return Err(IntakeViolation::NonFiniteAmount { field });
            }
            if value < 0.0 {
                return Err(IntakeViolation::NegativeAmount { field, found: value });
            }
        }

        if submission.financials.cogs > submission.financials.net_sales {
            return Err(IntakeViolation::CostExceedsRevenue {
                cogs: submission.financials.cogs,
                net_sales: submission.financials.net_sales,
            });
        }

        Ok(CompanyProfile {
            assessment_id: AssessmentId("pending".to_string()),
            meta: submission.meta,
            statement_date: submission.statement_date,
            financials: submission.financials,
        })
    }
}
