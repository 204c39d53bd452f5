use crate::infra::{
    sample_submission, InMemoryAlertPublisher, InMemoryAssessmentRepository, ScorecardModelGateway,
};
use clap::Args;
use riskdesk::error::AppError;
use riskdesk::scoring::corporate::{
    AssessmentRecord, AssessmentSubmission, FlagSeverity, MetricKind, MetricStatus,
    RiskAssessmentService, Scenario,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a JSON file containing an assessment submission
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Revenue delta (%) applied in the what-if pass
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    pub(crate) revenue_delta: f64,
    /// Margin delta (%p) applied in the what-if pass
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub(crate) margin_delta: f64,
    /// Base-rate delta (%p) applied in the what-if pass
    #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
    pub(crate) base_rate_delta: f64,
    /// Skip the what-if portion of the demo
    #[arg(long)]
    pub(crate) skip_what_if: bool,
}

type LocalService =
    RiskAssessmentService<InMemoryAssessmentRepository, InMemoryAlertPublisher, ScorecardModelGateway>;

fn build_local_service() -> (LocalService, Arc<InMemoryAlertPublisher>) {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let gateway = Arc::new(ScorecardModelGateway::default());
    let service = RiskAssessmentService::new(repository, alerts.clone(), gateway);
    (service, alerts)
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let submission: AssessmentSubmission = serde_json::from_str(&raw)?;

    let (service, _alerts) = build_local_service();
    let record = service.submit(submission)?;

    println!("{}", serde_json::to_string_pretty(&record.summary_view())?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (service, alerts) = build_local_service();

    let submission = sample_submission();
    println!("Credit risk desk demo");
    println!(
        "Company: {} ({}), fiscal year {}",
        submission.meta.company_name, submission.meta.reg_no, submission.meta.fiscal_year
    );

    let record = service.submit(submission)?;
    render_assessment(&record);

    if !args.skip_what_if {
        let scenario = Scenario {
            revenue_delta: args.revenue_delta,
            margin_delta: args.margin_delta,
            base_rate_delta: args.base_rate_delta,
            ..Scenario::default()
        };
        let outcome = service.what_if(&record.profile.assessment_id, &scenario)?;

        println!(
            "\nWhat-if (revenue {:+.1}%, margin {:+.1}%p, base rate {:+.1}%p)",
            args.revenue_delta, args.margin_delta, args.base_rate_delta
        );
        for line in &outcome.deltas_summary {
            println!("- {line}");
        }
        println!(
            "- New PD {:.1}%, grade {}, limit {:.0}, rate {:.2}%",
            outcome.probability_of_default * 100.0,
            outcome.grade.label(),
            outcome.terms.limit,
            outcome.terms.rate
        );
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("\nReview alerts: none");
    } else {
        println!("\nReview alerts");
        for alert in &events {
            println!(
                "- {} (grade {}): {}",
                alert.assessment_id.0,
                alert.grade,
                alert.reasons.join("; ")
            );
        }
    }

    Ok(())
}

fn render_assessment(record: &AssessmentRecord) {
    let assessment = &record.assessment;

    println!("\nAssessment {}", record.profile.assessment_id.0);
    println!(
        "PD {:.1}% | grade {} | tone {} | review threshold {:.0}%",
        assessment.probability_of_default * 100.0,
        assessment.grade.label(),
        assessment.tone.label(),
        assessment.review_threshold * 100.0
    );
    println!(
        "Recommended limit {:.0} at {:.2}% ({})",
        assessment.terms.limit, assessment.terms.rate, record.model_version
    );

    println!("\nKey ratios");
    println!(
        "- gross margin {:.1}% | net margin {:.1}%",
        assessment.ratios.gross_margin * 100.0,
        assessment.ratios.net_margin * 100.0
    );
    println!(
        "- current ratio {:.2} | quick ratio {:.2}",
        assessment.ratios.current_ratio, assessment.ratios.quick_ratio
    );
    println!(
        "- debt-to-asset {:.1}% | ROA {:.1}%",
        assessment.ratios.debt_to_asset * 100.0,
        assessment.ratios.return_on_assets * 100.0
    );
    println!(
        "- Altman Z {:.2} | Ohlson O {:.2}",
        assessment.ratios.altman_z, assessment.ratios.ohlson_o
    );

    println!("\nMetric badges");
    for reading in &assessment.metrics {
        println!(
            "- {}: {:.2} [{}]",
            metric_label(reading.metric),
            reading.value,
            status_label(reading.status)
        );
    }

    if assessment.flags.is_empty() {
        println!("\nPolicy flags: none");
    } else {
        println!("\nPolicy flags");
        for flag in &assessment.flags {
            println!("- [{}] {}", severity_label(flag.severity), flag.text);
        }
    }

    println!("\nCovenants");
    for covenant in &assessment.covenants {
        println!("- {covenant}");
    }
}

fn metric_label(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::GrossMargin => "gross margin",
        MetricKind::NetMargin => "net margin",
        MetricKind::CurrentRatio => "current ratio",
        MetricKind::QuickRatio => "quick ratio",
        MetricKind::DebtToAsset => "debt-to-asset",
        MetricKind::ReturnOnAssets => "return on assets",
        MetricKind::AltmanZ => "Altman Z",
        MetricKind::OhlsonO => "Ohlson O",
    }
}

fn status_label(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Good => "good",
        MetricStatus::Watch => "watch",
        MetricStatus::Risk => "risk",
    }
}

fn severity_label(severity: FlagSeverity) -> &'static str {
    match severity {
        FlagSeverity::Danger => "danger",
        FlagSeverity::Warning => "warning",
        FlagSeverity::Info => "info",
    }
}
