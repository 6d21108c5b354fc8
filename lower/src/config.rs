//! Lowering pipeline configuration.
//!
//! Provides typed configuration with bon builders and environment variable
//! fallbacks, plus assembly of the configured pass pipeline.

use bon::bon;

use crate::passes::InsertPerfCount;
use crate::pipeline::Pipeline;

/// Toggles for the lowering pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowerConfig {
    /// Bracket the kernel body with performance-counter markers.
    pub perf_count: bool,
}

#[bon]
impl LowerConfig {
    /// Create a lowering configuration with builder pattern.
    #[builder]
    pub fn builder(#[builder(default = false)] perf_count: bool) -> Self {
        Self { perf_count }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `SEAM_PERF_COUNT` - Insert performance-counter markers if set
    pub fn from_env() -> Self {
        let perf_count = std::env::var("SEAM_PERF_COUNT").is_ok();
        Self { perf_count }
    }
}

/// Assemble the lowering pipeline for `config`.
///
/// Instrumentation passes are registered only when enabled; the pipeline
/// keeps its registration order as the execution order.
pub fn build_pipeline(config: &LowerConfig) -> Pipeline {
    let mut pipeline = Pipeline::new();
    if config.perf_count {
        pipeline.register(InsertPerfCount);
    }
    pipeline
}
