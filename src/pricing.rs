//! End-of-day token pricing.
//!
//! The model, for a token with leverage `L`:
//!
//! 1. `adverse` is the fraction the underlying moved against the token
//!    between the start price and the intraday extreme.
//! 2. If `adverse >= threshold`, the token rebalanced intraday. The number of
//!    events `n` comes from the root `x` of the cumulative-move identity
//!    (`1 - b^(x-1) = adverse` for Bull, `b^(x-1) - 1 = adverse` for Bear),
//!    with `n = floor(x) - 1`.
//! 3. A rebalanced token ends at
//!    `start * decay^(n+1) * (1 + L * r_final)`, where `r_final` is the
//!    return from the extreme to the end price.
//! 4. Otherwise it ends at `start * (1 + L * r_total)`.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::kind::TokenKind;
use crate::policy::RebalancePolicy;
use crate::solver::{self, SolverSettings};

/// A validated pricing request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRequest {
    pub kind: TokenKind,
    pub start_price: f64,
    /// Intraday trough (Bull) or peak (Bear) of the underlying.
    pub extreme_price: f64,
    pub end_price: f64,
    pub token_start_price: f64,
    /// Start, extreme, end and token start prices as entered, echoed by the
    /// text report.
    #[serde(skip)]
    pub entered: [String; 4],
}

const FIELDS: [&str; 4] = [
    "start price",
    "extreme price",
    "end price",
    "token start price",
];

impl PricingRequest {
    /// Build a request, checking that every price is positive and finite.
    pub fn new(
        kind: TokenKind,
        start_price: f64,
        extreme_price: f64,
        end_price: f64,
        token_start_price: f64,
    ) -> Result<Self> {
        let prices = [start_price, extreme_price, end_price, token_start_price];
        for (field, value) in FIELDS.into_iter().zip(prices) {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::NonPositivePrice { field, value });
            }
        }
        Ok(PricingRequest {
            kind,
            start_price,
            extreme_price,
            end_price,
            token_start_price,
            entered: prices.map(|p| p.to_string()),
        })
    }

    /// Parse `<kind> <start> <extreme> <end> <token_start>`.
    ///
    /// Arguments past the fifth are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() < 5 {
            return Err(Error::InsufficientArguments { given: args.len() });
        }
        if args.len() > 5 {
            log::warn!("ignoring {} extra argument(s)", args.len() - 5);
        }

        let kind: TokenKind = args[0].as_ref().parse()?;
        let mut prices = [0.0_f64; 4];
        for (i, field) in FIELDS.into_iter().enumerate() {
            let raw = args[i + 1].as_ref();
            prices[i] = raw.trim().parse().map_err(|_| Error::InvalidNumber {
                field,
                value: raw.to_string(),
            })?;
        }

        let [start, extreme, end, token_start] = prices;
        let mut request = Self::new(kind, start, extreme, end, token_start)?;
        request.entered = std::array::from_fn(|i| args[i + 1].as_ref().to_string());
        Ok(request)
    }
}

/// Outcome of solving for the number of intraday rebalances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RebalanceCount {
    /// Root of the cumulative-move identity.
    pub root: f64,
    /// Number of rebalance events, `floor(root) - 1`.
    pub count: u32,
}

/// Solve for the number of rebalances triggered by `adverse`.
pub fn rebalance_count(
    kind: TokenKind,
    adverse: f64,
    policy: &RebalancePolicy,
    settings: &SolverSettings,
) -> Result<RebalanceCount> {
    // A Bull drop of 100% or more leaves nothing for further events to remove
    if kind == TokenKind::Bull && adverse >= 1.0 {
        return Err(Error::NoRoot {
            adverse,
            bracket: settings.max_bracket,
        });
    }

    let identity = |x: f64| policy.step_gap(kind, adverse, x - 1.0);
    let root = solver::find_root(identity, adverse, settings)?;

    let count = (root.x.floor() - 1.0).max(0.0) as u32;
    Ok(RebalanceCount {
        root: root.x,
        count,
    })
}

/// Result of pricing one token over one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    #[serde(flatten)]
    pub request: PricingRequest,
    /// Fraction the underlying moved against the token by the extreme.
    pub adverse_move: f64,
    /// Whether the adverse move reached the rebalance threshold.
    pub triggered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<f64>,
    pub rebalances: u32,
    /// Full-day underlying return, signed in the token's favour.
    pub total_return: f64,
    pub token_end_price: f64,
}

/// Price the token at the end of the day.
pub fn price_token(
    request: &PricingRequest,
    policy: &RebalancePolicy,
    settings: &SolverSettings,
) -> Result<PricingReport> {
    let kind = request.kind;
    let adverse = kind.adverse_move(request.start_price, request.extreme_price);
    let total_return = kind.underlying_return(request.start_price, request.end_price);
    log::debug!("{kind}: adverse move {adverse}, total return {total_return}");

    let triggered = adverse >= policy.threshold;
    let (root, rebalances, token_end_price) = if triggered {
        let solved = rebalance_count(kind, adverse, policy, settings)?;
        log::info!(
            "{kind}: adverse move {adverse} reached threshold {}, {} rebalance(s)",
            policy.threshold,
            solved.count
        );
        let decay = policy.decay_factor.powi(solved.count as i32 + 1);
        let final_return = kind.underlying_return(request.extreme_price, request.end_price);
        let end = request.token_start_price * decay * (1.0 + final_return * policy.leverage);
        (Some(solved.root), solved.count, end)
    } else {
        let end = request.token_start_price * (1.0 + total_return * policy.leverage);
        (None, 0, end)
    };

    Ok(PricingReport {
        request: request.clone(),
        adverse_move: adverse,
        triggered,
        root,
        rebalances,
        total_return,
        token_end_price,
    })
}
