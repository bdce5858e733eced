//! Bracketed bisection for monotonically increasing functions on `x >= 1`.
//!
//! The rebalance count is `floor(x) - 1` for the root `x` of an exponential
//! identity, so the observable output is sensitive to the root's position
//! relative to integers. Bisection gives a guaranteed bracket width, and a
//! root that lands within `integer_snap` of an integer is rounded onto it.
//!
//! Search domain:
//! - lower bound `x = 1`, where the function must be negative;
//! - upper bound starts at `x = 2` and its distance from 1 doubles until
//!   the function turns non-negative or the bound exceeds `max_bracket`.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Numeric settings for the root finder.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Stop once the bracket is at most this wide.
    pub tolerance: f64,
    /// Bisection iteration cap.
    pub max_iterations: u32,
    /// Largest upper bound tried while bracketing.
    pub max_bracket: f64,
    /// Distance from an integer within which a root is rounded onto it.
    pub integer_snap: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            tolerance: 1e-12,
            max_iterations: 200,
            max_bracket: 1e6,
            integer_snap: 1e-9,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(Error::Config("solver tolerance must be > 0".into()));
        }
        if self.max_iterations == 0 {
            return Err(Error::Config("solver max_iterations must be > 0".into()));
        }
        if !(self.max_bracket > 2.0 && self.max_bracket.is_finite()) {
            return Err(Error::Config("solver max_bracket must be > 2.0".into()));
        }
        if !(self.integer_snap >= 0.0 && self.integer_snap < 0.5) {
            return Err(Error::Config(
                "solver integer_snap must be in [0.0, 0.5)".into(),
            ));
        }
        Ok(())
    }
}

/// Root located by [`find_root`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub x: f64,
    pub iterations: u32,
}

/// Find `x >= 1` with `f(x) = 0` for a monotonically increasing `f`.
///
/// `f(1)` must be negative. `adverse` is only carried into the error when
/// no bracket can be found.
pub fn find_root<F>(f: F, adverse: f64, settings: &SolverSettings) -> Result<Root>
where
    F: Fn(f64) -> f64,
{
    let mut lo = 1.0_f64;
    let mut hi = 2.0_f64;

    while f(hi) < 0.0 {
        lo = hi;
        hi = 1.0 + 2.0 * (hi - 1.0);
        if hi > settings.max_bracket {
            return Err(Error::NoRoot {
                adverse,
                bracket: settings.max_bracket,
            });
        }
    }
    log::debug!("root bracketed in [{lo}, {hi}]");

    let mut iterations = 0;
    while hi - lo > settings.tolerance {
        if iterations == settings.max_iterations {
            return Err(Error::NoConvergence { iterations });
        }
        let mid = lo + (hi - lo) / 2.0;
        // Stalled: lo and hi are adjacent floats
        if mid <= lo || mid >= hi {
            break;
        }
        if f(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        iterations += 1;
    }

    let mut x = lo + (hi - lo) / 2.0;
    let nearest = x.round();
    if (x - nearest).abs() <= settings.integer_snap {
        x = nearest;
    }
    log::debug!("root x = {x} after {iterations} iterations");

    Ok(Root { x, iterations })
}
