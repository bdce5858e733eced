//! Optional TOML configuration overriding the built-in model parameters.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::kind::TokenKind;
use crate::policy::RebalancePolicy;
use crate::solver::SolverSettings;

/// Top-level configuration. Every section and field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bull: PolicyConfig,
    pub bear: PolicyConfig,
    pub solver: SolverSettings,
}

/// Overrides for one token kind; unset fields keep the built-in value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub leverage: Option<f64>,
    pub threshold: Option<f64>,
    pub decay_factor: Option<f64>,
    pub step_base: Option<f64>,
}

impl PolicyConfig {
    fn apply(&self, base: RebalancePolicy) -> RebalancePolicy {
        RebalancePolicy {
            leverage: self.leverage.unwrap_or(base.leverage),
            threshold: self.threshold.unwrap_or(base.threshold),
            decay_factor: self.decay_factor.unwrap_or(base.decay_factor),
            step_base: self.step_base.unwrap_or(base.step_base),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate config invariants.
    pub fn validate(&self) -> Result<()> {
        for kind in [TokenKind::Bull, TokenKind::Bear] {
            self.policy(kind).validate(kind)?;
        }
        self.solver.validate()
    }

    /// Effective policy for `kind`.
    pub fn policy(&self, kind: TokenKind) -> RebalancePolicy {
        let overrides = match kind {
            TokenKind::Bull => &self.bull,
            TokenKind::Bear => &self.bear,
        };
        overrides.apply(RebalancePolicy::for_kind(kind))
    }
}
