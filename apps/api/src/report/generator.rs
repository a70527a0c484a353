//! Report generation backends behind the `ReportGenerator` trait.
//!
//! `AppState` holds an `Arc<dyn ReportGenerator>`, chosen at startup:
//! `LlmReportGenerator` when a Gemini key is configured, `StaticReportGenerator`
//! otherwise. Either way the endpoint always produces a report.

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::report::fallback::build_fallback_report;
use crate::report::models::{CareerReport, ReportInput};
use crate::report::prompts::{REPORT_PROMPT_TEMPLATE, REPORT_SYSTEM};

/// The report generator trait. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(&self, input: &ReportInput) -> Result<CareerReport, AppError>;
}

/// Gemini-backed generator. Any LLM failure (after the client's own retries)
/// degrades to the deterministic fallback report instead of erroring, so a
/// model outage never reaches the user.
pub struct LlmReportGenerator {
    llm: LlmClient,
}

impl LlmReportGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ReportGenerator for LlmReportGenerator {
    async fn generate(&self, input: &ReportInput) -> Result<CareerReport, AppError> {
        let prompt = build_report_prompt(input);
        match self
            .llm
            .call_json::<CareerReport>(&prompt, REPORT_SYSTEM)
            .await
        {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!("LLM report generation failed, serving fallback report: {e}");
                Ok(build_fallback_report(input))
            }
        }
    }
}

/// Offline backend used when no Gemini key is configured.
pub struct StaticReportGenerator;

#[async_trait]
impl ReportGenerator for StaticReportGenerator {
    async fn generate(&self, input: &ReportInput) -> Result<CareerReport, AppError> {
        Ok(build_fallback_report(input))
    }
}

fn build_report_prompt(input: &ReportInput) -> String {
    REPORT_PROMPT_TEMPLATE
        .replace("{degree}", &input.profile.degree)
        .replace("{year}", &input.profile.year)
        .replace("{skills}", &input.profile.skills)
        .replace("{quiz_answers}", &input.quiz_answers.join(", "))
}
