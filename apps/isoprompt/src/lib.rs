//! isoprompt turns a terse request into a production-ready prompt.
//!
//! A mode (reasoning style) and an optional domain (subject specialization)
//! select records from a static catalog; the template builder renders them
//! into a system instruction; one chat-completion call rewrites the request.
//!
//! ```no_run
//! # async fn demo() -> isoprompt::Result<()> {
//! use isoprompt::{optimize_prompt_validated, OptimizeOptions};
//!
//! let options = OptimizeOptions {
//!     mode: "analytical".to_string(),
//!     domain: Some("finance".to_string()),
//!     ..Default::default()
//! };
//! let prompt = optimize_prompt_validated("Write a blog post about AI", &options).await?;
//! println!("{prompt}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod optimizer;
pub mod template;
pub mod validation;

pub use catalog::{Catalog, Domain, Mode, Strictness};
pub use errors::{IsoPromptError, Result};
pub use llm_client::{CompletionBackend, LlmClient};
pub use optimizer::{optimize_prompt, optimize_prompt_validated, OptimizeOptions, Optimizer};
pub use template::render_instruction;
pub use validation::{validate_config, OptimizationConfig};

/// Mode keys in catalog order.
pub fn available_mode_names() -> Vec<&'static str> {
    Catalog::builtin().mode_keys()
}

/// Domain keys in catalog order.
pub fn available_domain_names() -> Vec<&'static str> {
    Catalog::builtin().domain_keys()
}

pub fn available_modes() -> &'static [Mode] {
    Catalog::builtin().modes()
}

pub fn available_domains() -> &'static [Domain] {
    Catalog::builtin().domains()
}
