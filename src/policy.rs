//! Rebalance policy parameters for each token kind.
//!
//! A token resets to its target leverage whenever the underlying moves far
//! enough against it intraday that effective leverage reaches 4x. Each reset
//! locks in a fixed loss on the token (the decay factor), and the number of
//! resets for a given adverse move follows a geometric progression in the
//! step base.

use crate::error::{Error, Result};
use crate::kind::TokenKind;

/// Bull trigger: drop from start to trough, as a fraction.
///
/// Published documentation quotes 11%; the traded value is 11.12%.
pub const BULL_THRESHOLD: f64 = 0.1112;
/// Bull token value retained per rebalance event.
pub const BULL_DECAY_FACTOR: f64 = 0.6664;
/// Bull step base: `1 - BULL_STEP_BASE^k` is the cumulative drop after `k` events.
pub const BULL_STEP_BASE: f64 = 0.8812;

/// Bear trigger: rise from start to peak, as a fraction.
///
/// Published documentation quotes 6.5%; the traded value is 6.7%.
pub const BEAR_THRESHOLD: f64 = 0.067;
/// Bear token value retained per rebalance event.
pub const BEAR_DECAY_FACTOR: f64 = 0.799;
/// Bear step base: `BEAR_STEP_BASE^k - 1` is the cumulative rise after `k` events.
pub const BEAR_STEP_BASE: f64 = 1.067;

/// Target leverage of both token kinds.
pub const LEVERAGE: f64 = 3.0;

/// Parameters of the rebalance model for one token kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RebalancePolicy {
    pub leverage: f64,
    pub threshold: f64,
    pub decay_factor: f64,
    pub step_base: f64,
}

impl RebalancePolicy {
    /// Built-in policy for `kind`.
    pub fn for_kind(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Bull => RebalancePolicy {
                leverage: LEVERAGE,
                threshold: BULL_THRESHOLD,
                decay_factor: BULL_DECAY_FACTOR,
                step_base: BULL_STEP_BASE,
            },
            TokenKind::Bear => RebalancePolicy {
                leverage: LEVERAGE,
                threshold: BEAR_THRESHOLD,
                decay_factor: BEAR_DECAY_FACTOR,
                step_base: BEAR_STEP_BASE,
            },
        }
    }

    /// Gap between the move reached after `steps` rebalance events and
    /// `adverse`; increasing in `steps`, zero at the event count's root.
    ///
    /// Bull: `(1 - adverse) - b^steps`. Bear: `b^steps - (1 + adverse)`.
    /// The remaining fraction is formed before subtracting so a Bull move
    /// close to 100% does not cancel to zero.
    pub fn step_gap(&self, kind: TokenKind, adverse: f64, steps: f64) -> f64 {
        let growth = self.step_base.powf(steps);
        match kind {
            TokenKind::Bull => (1.0 - adverse) - growth,
            TokenKind::Bear => growth - (1.0 + adverse),
        }
    }

    /// Validate policy invariants for `kind`.
    pub fn validate(&self, kind: TokenKind) -> Result<()> {
        if !(self.leverage.is_finite() && self.leverage > 0.0) {
            return Err(Error::Config(format!("{kind}: leverage must be > 0")));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(Error::Config(format!(
                "{kind}: threshold must be in (0.0, 1.0)"
            )));
        }
        if !(self.decay_factor > 0.0 && self.decay_factor <= 1.0) {
            return Err(Error::Config(format!(
                "{kind}: decay_factor must be in (0.0, 1.0]"
            )));
        }
        let base_ok = match kind {
            TokenKind::Bull => self.step_base > 0.0 && self.step_base < 1.0,
            TokenKind::Bear => self.step_base.is_finite() && self.step_base > 1.0,
        };
        if !base_ok {
            let range = match kind {
                TokenKind::Bull => "(0.0, 1.0)",
                TokenKind::Bear => "(1.0, inf)",
            };
            return Err(Error::Config(format!(
                "{kind}: step_base must be in {range}"
            )));
        }
        Ok(())
    }
}
