//! Token kind: 3x long (Bull) or 3x short (Bear)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Direction of a leveraged token relative to its underlying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Bull,
    Bear,
}

impl TokenKind {
    /// Return on the underlying from `from` to `to`, signed in the token's favour.
    ///
    /// Bull: `(to - from) / from`. Bear: `(from - to) / from`.
    #[inline]
    pub fn underlying_return(self, from: f64, to: f64) -> f64 {
        match self {
            TokenKind::Bull => (to - from) / from,
            TokenKind::Bear => (from - to) / from,
        }
    }

    /// Fraction the underlying moved against the token between the start and
    /// the intraday extreme (drop to trough for Bull, rise to peak for Bear).
    #[inline]
    pub fn adverse_move(self, start: f64, extreme: f64) -> f64 {
        match self {
            TokenKind::Bull => (start - extreme) / start,
            TokenKind::Bear => (extreme - start) / start,
        }
    }

    /// Name of the intraday extreme: "trough" or "peak".
    pub fn extreme_label(self) -> &'static str {
        match self {
            TokenKind::Bull => "trough",
            TokenKind::Bear => "peak",
        }
    }

    /// Verb for the adverse move: "Drop" or "Jump".
    pub fn move_label(self) -> &'static str {
        match self {
            TokenKind::Bull => "Drop",
            TokenKind::Bear => "Jump",
        }
    }

    /// Noun used when no rebalance triggered: "drop" or "rise".
    pub fn untriggered_label(self) -> &'static str {
        match self {
            TokenKind::Bull => "drop",
            TokenKind::Bear => "rise",
        }
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bull" => Ok(TokenKind::Bull),
            "bear" => Ok(TokenKind::Bear),
            other => Err(Error::InvalidTokenKind(other.to_string())),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Bull => write!(f, "bull"),
            TokenKind::Bear => write!(f, "bear"),
        }
    }
}
