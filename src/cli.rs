//! Library side of the `levtoken` binary.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::pricing::{self, PricingRequest};
use crate::report;

/// How the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse `args`, price the token, and write the report to `out`.
///
/// Nothing is written unless pricing succeeds.
pub fn run<S, W>(args: &[S], config: &Config, format: OutputFormat, out: &mut W) -> Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    let request = PricingRequest::from_args(args)?;
    log::debug!("request: {request:?}");

    let policy = config.policy(request.kind);
    let report = pricing::price_token(&request, &policy, &config.solver)?;

    match format {
        OutputFormat::Text => report::render_text(&report, out),
        OutputFormat::Json => report::render_json(&report, out),
    }
}
