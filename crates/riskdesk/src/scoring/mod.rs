//! Credit-risk scoring pipelines.
//!
//! Two lending desks share this module: `corporate` scores statement-level
//! financials through the ratio/PD/grade pipeline, while `personal` sizes
//! consumer loans from a grade and a handful of loan terms. `prediction`
//! carries the wire contract for the upstream scoring model.

pub mod corporate;
pub mod personal;
pub mod prediction;

mod tone;

pub use tone::DecisionTone;
