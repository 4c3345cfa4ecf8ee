//! Narrative generation seam.
//!
//! The compliance narrative is produced by a hosted text-generation service
//! the crate does not talk to directly: implementations live behind
//! [`NarrativeGenerator`]. What this module owns is the request assembly,
//! the retry policy for rate-limited calls, and a deterministic built-in
//! generator so the report pipeline works without external credentials.

use std::time::Duration;

use async_trait::async_trait;

use crate::models::WorkflowResult;
use crate::services::job_tracker::{JobTracker, LogLevel};

/// Error type for narrative generation.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    /// The service signalled a rate limit; the call may be retried.
    #[error("generation rate-limited: {0}")]
    RateLimited(String),

    /// The service failed in a way retrying will not fix.
    #[error("generation failed: {0}")]
    Service(String),

    /// Every attempt allowed by the retry policy was exhausted.
    #[error("generation failed after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

/// A generation request: role framing, context blocks and instructions,
/// assembled into one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeRequest {
    /// Professional role the narrative is written as.
    pub system_role: String,
    /// Labelled context sections (legal references, extracted documents).
    pub context_blocks: Vec<(String, String)>,
    /// What to produce.
    pub instructions: String,
}

impl NarrativeRequest {
    /// Render the full prompt: role, then each context block under a
    /// delimited header, then the instructions.
    pub fn prompt(&self) -> String {
        let mut prompt = format!("Atua como {}.\n", self.system_role);
        for (label, content) in &self.context_blocks {
            prompt.push_str(&format!("\n=== {} ===\n{}\n", label, content));
        }
        prompt.push_str(&format!("\n=== INSTRUÇÕES ===\n{}\n", self.instructions));
        prompt
    }
}

/// Interface to the hosted text-generation service.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}

/// Retry policy for rate-limited generation calls: a bounded number of
/// attempts with linearly increasing waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Wait before retry number `attempt` (1-based): `base_delay * attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_secs(10),
        }
    }
}

/// Execute a generation request under a retry policy.
///
/// Only [`NarrativeError::RateLimited`] is retried; service errors surface
/// immediately. Each wait is logged to the job tracker so clients following
/// the job see why it is paused. After the last allowed attempt the failure
/// is terminal.
pub async fn generate_with_retry(
    generator: &dyn NarrativeGenerator,
    request: &NarrativeRequest,
    policy: RetryPolicy,
    tracker: &JobTracker,
    job_id: &str,
) -> Result<String, NarrativeError> {
    let mut last_error = String::new();
    for attempt in 1..=policy.max_attempts {
        match generator.generate(request).await {
            Ok(text) => return Ok(text),
            Err(NarrativeError::RateLimited(reason)) => {
                last_error = reason;
                if attempt < policy.max_attempts {
                    let wait = policy.delay_for(attempt);
                    tracker.log(
                        job_id,
                        LogLevel::Warning,
                        format!(
                            "Limite de velocidade atingido. A aguardar {}s (tentativa {}/{})",
                            wait.as_secs(),
                            attempt,
                            policy.max_attempts
                        ),
                    );
                    tokio::time::sleep(wait).await;
                }
            }
            Err(other) => return Err(other),
        }
    }
    Err(NarrativeError::Exhausted {
        attempts: policy.max_attempts,
        last_error,
    })
}

/// Deterministic generator: renders the narrative straight from the
/// workflow data, in the same Markdown subset a hosted model is asked for.
///
/// Serves as the built-in backend and as the reference output shape for
/// pluggable implementations.
#[derive(Debug, Clone, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// Render the milestone narrative for a computed workflow.
    pub fn render(workflow: &WorkflowResult, regime_label: &str) -> String {
        let mut text = String::new();
        text.push_str("## Enquadramento\n");
        text.push_str(&format!(
            "Procedimento instruído ao abrigo do **{}**.\n\n",
            regime_label
        ));
        text.push_str("## Cronograma Oficial\n");
        for milestone in &workflow.milestones {
            text.push_str(&format!(
                "- **{}**: {} ({} dias úteis)\n",
                milestone.name,
                milestone.resolved_date.format("%d/%m/%Y"),
                milestone.legal_offset_business_days
            ));
        }
        if !workflow.complementary.is_empty() {
            text.push_str("\n## Prazos Complementares\n");
            for entry in &workflow.complementary {
                text.push_str(&format!(
                    "- {}: {} ({})\n",
                    entry.name,
                    entry.date.format("%d/%m/%Y"),
                    entry.reference
                ));
            }
        }
        if workflow.total_suspended_days > 0 {
            text.push_str(&format!(
                "\n> O procedimento esteve suspenso {} dias de calendário.\n",
                workflow.total_suspended_days
            ));
        }
        text
    }
}

#[async_trait]
impl NarrativeGenerator for TemplateGenerator {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        // The workflow rendering arrives as a context block; echo it with the
        // role framing as heading.
        let mut text = String::new();
        for (label, content) in &request.context_blocks {
            if label == "CRONOGRAMA" {
                text.push_str(content);
            }
        }
        if text.is_empty() {
            return Err(NarrativeError::Service(
                "request carries no CRONOGRAMA context block".to_string(),
            ));
        }
        Ok(text)
    }
}
