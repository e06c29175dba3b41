//! Optimization Orchestrator: render, call once, trim.
//!
//! Flow: resolve mode/domain → build instruction → [system, user] messages →
//!       one completion call → trimmed text.
//!
//! `Optimizer::optimize` trusts its inputs: unknown keys fall back to the
//! catalog defaults inside the template builder. Callers that want hard
//! failures use `optimize_validated` (or run `validate_config` first, as the
//! CLI does). Once validation is requested no key is auto-corrected: the mode
//! and domain must be exact catalog keys, empty strings included.

use tracing::{debug, info};

use crate::catalog::{Catalog, DEFAULT_MODE};
use crate::config::{Config, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::errors::{IsoPromptError, Result};
use crate::llm_client::prompts::user_query;
use crate::llm_client::{ChatMessage, ChatRequest, CompletionBackend, LlmClient};
use crate::template::{build_optimization_template, resolve_domain, resolve_mode};
use crate::validation::{validate_config_with, OptimizationConfig};

/// Per-call options. `Default` matches the CLI defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeOptions {
    pub mode: String,
    pub domain: Option<String>,
    pub model: String,
    pub temperature: f64,
    /// Emits the resolved records, messages and raw response as `info!` events.
    pub verbose: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            domain: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            verbose: false,
        }
    }
}

impl OptimizeOptions {
    /// The subset the validator checks.
    pub fn to_config(&self) -> OptimizationConfig {
        OptimizationConfig {
            mode: Some(self.mode.clone()),
            domain: self.domain.clone(),
            temperature: Some(self.temperature),
            model: Some(self.model.clone()),
        }
    }
}

/// Runs optimizations against one completion backend.
pub struct Optimizer<B> {
    backend: B,
    catalog: &'static Catalog,
}

impl<B: CompletionBackend> Optimizer<B> {
    pub fn new(backend: B) -> Self {
        Self::with_catalog(backend, Catalog::builtin())
    }

    pub fn with_catalog(backend: B, catalog: &'static Catalog) -> Self {
        Self { backend, catalog }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Builds the outbound request without sending it.
    pub fn build_request(
        &self,
        user_input: &str,
        options: &OptimizeOptions,
    ) -> Result<ChatRequest> {
        let system_prompt =
            build_optimization_template(self.catalog, &options.mode, options.domain.as_deref())?;

        Ok(ChatRequest {
            model: options.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_query(user_input)),
            ],
            temperature: options.temperature,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Optimizes without validating `options`.
    pub async fn optimize(&self, user_input: &str, options: &OptimizeOptions) -> Result<String> {
        if options.verbose {
            let mode = resolve_mode(self.catalog, &options.mode)?;
            let domain = resolve_domain(self.catalog, options.domain.as_deref())?;
            info!(
                "Optimizing prompt with mode: {}, domain: {}, model: {}, temperature: {}",
                mode.key, domain.key, options.model, options.temperature
            );
        }

        let request = self.build_request(user_input, options)?;

        if options.verbose {
            info!("System prompt:\n{}", request.messages[0].content);
            info!("User prompt: {}", request.messages[1].content);
            match serde_json::to_string_pretty(&request.messages) {
                Ok(json) => info!("Messages: {json}"),
                Err(e) => debug!("Could not serialize messages: {e}"),
            }
        }

        let response = self
            .backend
            .complete(&request)
            .await
            .map_err(|e| IsoPromptError::OptimizationFailed(e.to_string()))?;

        let content = response
            .text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(IsoPromptError::EmptyResponse)?;

        if options.verbose {
            info!("Response: {content}");
        }

        Ok(content.to_string())
    }

    /// Validates `options` against the catalog, then optimizes.
    pub async fn optimize_validated(
        &self,
        user_input: &str,
        options: &OptimizeOptions,
    ) -> Result<String> {
        check_request(self.catalog, user_input, options)?;
        self.optimize(user_input, options).await
    }
}

/// Strict gate for the validated entry points.
///
/// Stricter than `validate_config` on keys: `options` always carries a mode,
/// so an empty mode or `Some("")` domain is rejected rather than defaulted.
fn check_request(catalog: &Catalog, user_input: &str, options: &OptimizeOptions) -> Result<()> {
    if user_input.trim().is_empty() {
        return Err(IsoPromptError::EmptyInput);
    }

    if !catalog.is_valid_mode(&options.mode) {
        return Err(IsoPromptError::InvalidMode {
            given: options.mode.clone(),
            available: catalog.mode_keys().into_iter().map(str::to_string).collect(),
        });
    }

    if let Some(domain) = &options.domain {
        if !catalog.is_valid_domain(domain) {
            return Err(IsoPromptError::InvalidDomain {
                given: domain.clone(),
                available: catalog.domain_keys().into_iter().map(str::to_string).collect(),
            });
        }
    }

    validate_config_with(catalog, &options.to_config())
}

/// Optimizes with an HTTP client built from the environment.
///
/// Fails with `MissingCredential` before any request when the API key is unset.
pub async fn optimize_prompt(user_input: &str, options: &OptimizeOptions) -> Result<String> {
    let config = Config::from_env()?;
    let client = LlmClient::from_config(&config)
        .map_err(|e| IsoPromptError::OptimizationFailed(e.to_string()))?;
    Optimizer::new(client).optimize(user_input, options).await
}

/// Like [`optimize_prompt`] but rejects invalid options before reading credentials.
pub async fn optimize_prompt_validated(
    user_input: &str,
    options: &OptimizeOptions,
) -> Result<String> {
    check_request(Catalog::builtin(), user_input, options)?;
    optimize_prompt(user_input, options).await
}
