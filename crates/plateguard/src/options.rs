use std::sync::Arc;

use plateguard_core::config::PlateguardConfig;
use plateguard_core::traits::{ICodeGenerator, IEntityStore, ILedgerStore, IScoreDecayPolicy};

/// Options for building a [`PolicyEngine`](crate::PolicyEngine).
///
/// Every field is optional. Stores not supplied are built from the
/// `[storage]` config section; the decay policy defaults to the one named
/// in `[decay]`.
#[derive(Default)]
pub struct EngineOptions {
    /// Parsed configuration. Takes precedence over `config_toml`.
    pub config: Option<PlateguardConfig>,
    /// TOML configuration string. If both are None, uses defaults.
    pub config_toml: Option<String>,
    pub ledger: Option<Arc<dyn ILedgerStore>>,
    pub entities: Option<Arc<dyn IEntityStore>>,
    pub code_generator: Option<Box<dyn ICodeGenerator>>,
    pub decay_policy: Option<Box<dyn IScoreDecayPolicy>>,
    /// Install the global tracing subscriber from `[observability]`.
    pub init_tracing: bool,
}

impl EngineOptions {
    pub fn with_config(mut self, config: PlateguardConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_toml(mut self, toml_str: impl Into<String>) -> Self {
        self.config_toml = Some(toml_str.into());
        self
    }

    pub fn with_tracing(mut self) -> Self {
        self.init_tracing = true;
        self
    }

    pub fn with_ledger(mut self, ledger: Arc<dyn ILedgerStore>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn with_entities(mut self, entities: Arc<dyn IEntityStore>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn with_code_generator(mut self, generator: Box<dyn ICodeGenerator>) -> Self {
        self.code_generator = Some(generator);
        self
    }

    pub fn with_decay_policy(mut self, policy: Box<dyn IScoreDecayPolicy>) -> Self {
        self.decay_policy = Some(policy);
        self
    }
}
