use std::sync::Arc;

use crate::config::Config;
use crate::report::generator::ReportGenerator;
use crate::resources::ResourceFinder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable report backend. LLM-backed when GEMINI_API_KEY is set,
    /// deterministic static generator otherwise.
    pub report_generator: Arc<dyn ReportGenerator>,
    /// The resource-aggregation core. Stateless per call.
    pub resources: ResourceFinder,
}
