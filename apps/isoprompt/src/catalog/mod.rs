//! Catalog Store: the fixed mode and domain reference tables.
//!
//! Records live in `&'static` slices; a `Catalog` only indexes them. The
//! default entries are resolved once at construction so `default_mode()` and
//! `default_domain()` are O(1), but a catalog whose default key is absent still
//! fails on every call, exactly as a scan would.

use std::sync::OnceLock;

use crate::errors::{IsoPromptError, Result};

pub mod domains;
pub mod models;
pub mod modes;

pub use domains::{DEFAULT_DOMAIN, DOMAINS};
pub use models::{Domain, Mode, Strictness};
pub use modes::{DEFAULT_MODE, MODES};

/// Read-only view over one mode table and one domain table.
#[derive(Debug, Clone)]
pub struct Catalog {
    modes: &'static [Mode],
    domains: &'static [Domain],
    default_mode_key: &'static str,
    default_domain_key: &'static str,
    default_mode: Option<usize>,
    default_domain: Option<usize>,
}

impl Catalog {
    pub fn new(
        modes: &'static [Mode],
        domains: &'static [Domain],
        default_mode_key: &'static str,
        default_domain_key: &'static str,
    ) -> Self {
        Self {
            modes,
            domains,
            default_mode_key,
            default_domain_key,
            default_mode: modes.iter().position(|m| m.key == default_mode_key),
            default_domain: domains.iter().position(|d| d.key == default_domain_key),
        }
    }

    /// The catalog compiled into the binary. Built on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog::new(MODES, DOMAINS, DEFAULT_MODE, DEFAULT_DOMAIN))
    }

    pub fn modes(&self) -> &'static [Mode] {
        self.modes
    }

    pub fn domains(&self) -> &'static [Domain] {
        self.domains
    }

    /// All mode keys in table order.
    pub fn mode_keys(&self) -> Vec<&'static str> {
        self.modes.iter().map(|m| m.key).collect()
    }

    /// All domain keys in table order.
    pub fn domain_keys(&self) -> Vec<&'static str> {
        self.domains.iter().map(|d| d.key).collect()
    }

    pub fn get_mode(&self, key: &str) -> Result<&'static Mode> {
        self.modes
            .iter()
            .find(|m| m.key == key)
            .ok_or_else(|| IsoPromptError::ModeNotFound(key.to_string()))
    }

    pub fn get_domain(&self, key: &str) -> Result<&'static Domain> {
        self.domains
            .iter()
            .find(|d| d.key == key)
            .ok_or_else(|| IsoPromptError::DomainNotFound(key.to_string()))
    }

    pub fn default_mode(&self) -> Result<&'static Mode> {
        let modes = self.modes;
        self.default_mode
            .map(|idx| &modes[idx])
            .ok_or_else(|| {
                IsoPromptError::Configuration(format!(
                    "default mode '{}' not found in available modes",
                    self.default_mode_key
                ))
            })
    }

    pub fn default_domain(&self) -> Result<&'static Domain> {
        let domains = self.domains;
        self.default_domain
            .map(|idx| &domains[idx])
            .ok_or_else(|| {
                IsoPromptError::Configuration(format!(
                    "default domain '{}' not found in available domains",
                    self.default_domain_key
                ))
            })
    }

    pub fn is_valid_mode(&self, key: &str) -> bool {
        self.modes.iter().any(|m| m.key == key)
    }

    pub fn is_valid_domain(&self, key: &str) -> bool {
        self.domains.iter().any(|d| d.key == key)
    }
}
