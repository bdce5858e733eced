//! # levtoken
//!
//! End-of-day pricing for 3x leveraged tokens (long "bull" and short "bear")
//! that rebalance to target leverage intraday when the underlying moves
//! sharply against them.
//!
//! ## Quick Start
//!
//! ```
//! use levtoken::{PricingRequest, RebalancePolicy, SolverSettings, TokenKind, price_token};
//!
//! // ETH bull token: underlying 130 -> trough 81.564 -> close 84, token opened at 20
//! let request = PricingRequest::new(TokenKind::Bull, 130.0, 81.564, 84.0, 20.0).unwrap();
//! let policy = RebalancePolicy::for_kind(TokenKind::Bull);
//! let report = price_token(&request, &policy, &SolverSettings::default()).unwrap();
//!
//! assert!(report.triggered);
//! assert_eq!(report.rebalances, 3);
//! assert!((report.token_end_price - 4.2977).abs() < 1e-4);
//! ```
//!
//! ## The model
//!
//! | | Bull | Bear |
//! |---|---|---|
//! | adverse move | drop to trough | rise to peak |
//! | trigger | 11.12% | 6.7% |
//! | value kept per rebalance | 0.6664 | 0.799 |
//! | count identity | `1 - 0.8812^(x-1) = adverse` | `1.067^(x-1) - 1 = adverse` |
//!
//! Without a trigger the token simply returns three times the underlying's
//! daily return:
//!
//! ```
//! use levtoken::{PricingRequest, RebalancePolicy, SolverSettings, TokenKind, price_token};
//!
//! let request = PricingRequest::new(TokenKind::Bull, 100.0, 95.0, 110.0, 10.0).unwrap();
//! let policy = RebalancePolicy::for_kind(TokenKind::Bull);
//! let report = price_token(&request, &policy, &SolverSettings::default()).unwrap();
//!
//! assert_eq!(report.rebalances, 0);
//! assert_eq!(report.token_end_price, 13.0);
//! ```

pub mod cli;
pub mod config;
mod error;
mod kind;
pub mod policy;
mod pricing;
pub mod report;
pub mod solver;

// Re-export public API
pub use config::Config;
pub use error::{Error, Result};
pub use kind::TokenKind;
pub use policy::RebalancePolicy;
pub use pricing::{PricingReport, PricingRequest, RebalanceCount, price_token, rebalance_count};
pub use solver::SolverSettings;
