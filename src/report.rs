//! Text and JSON rendering of a [`PricingReport`].

use std::io::Write;

use crate::error::Result;
use crate::pricing::PricingReport;

/// Write the report in the line-oriented text layout.
///
/// Input prices are echoed as entered; the token end price is printed with
/// full round-trip precision. Decay is applied as a power, so the last digit
/// can differ from multiplying one event at a time.
///
/// ```text
/// Start price of underlying: $130
/// Price of trough: $81.564
/// Drop to trough: 37.26%
/// Number of rebalances: 3
/// End price of underlying: $84
/// Daily return on underlying: -35.38%
/// Token start price: $20
/// Token end price: $4.297702876389842
/// ```
pub fn render_text<W: Write>(report: &PricingReport, out: &mut W) -> Result<()> {
    let req = &report.request;
    let kind = req.kind;
    let [start, extreme_price, end, token_start] = &req.entered;

    writeln!(out, "Start price of underlying: ${start}")?;
    if report.triggered {
        let extreme = kind.extreme_label();
        writeln!(out, "Price of {extreme}: ${extreme_price}")?;
        writeln!(
            out,
            "{} to {extreme}: {}%",
            kind.move_label(),
            percent(report.adverse_move)
        )?;
        writeln!(out, "Number of rebalances: {}", report.rebalances)?;
    } else {
        writeln!(
            out,
            "No {} triggering rebalance for peak ${extreme_price}",
            kind.untriggered_label()
        )?;
    }
    writeln!(out, "End price of underlying: ${end}")?;
    writeln!(
        out,
        "Daily return on underlying: {}%",
        percent(report.total_return)
    )?;
    writeln!(out, "Token start price: ${token_start}")?;
    writeln!(out, "Token end price: ${:?}", report.token_end_price)?;
    Ok(())
}

/// Write the report as pretty-printed JSON followed by a newline.
pub fn render_json<W: Write>(report: &PricingReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Fraction as a percentage with two decimals.
fn percent(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TokenKind;
    use crate::pricing::{PricingRequest, price_token};
    use crate::policy::RebalancePolicy;
    use crate::solver::SolverSettings;

    fn report(kind: TokenKind, prices: [f64; 4]) -> PricingReport {
        let [s, x, e, t] = prices;
        let req = PricingRequest::new(kind, s, x, e, t).unwrap();
        price_token(&req, &RebalancePolicy::for_kind(kind), &SolverSettings::default()).unwrap()
    }

    fn text(report: &PricingReport) -> String {
        let mut buf = Vec::new();
        render_text(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn percent_two_decimals() {
        assert_eq!(percent(-0.35384615), "-35.38");
        assert_eq!(percent(0.1), "10.00");
    }

    #[test]
    fn untriggered_bull_layout() {
        let out = text(&report(TokenKind::Bull, [100.0, 95.0, 110.0, 10.0]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "Start price of underlying: $100",
                "No drop triggering rebalance for peak $95",
                "End price of underlying: $110",
                "Daily return on underlying: 10.00%",
                "Token start price: $10",
                "Token end price: $13.0",
            ]
        );
    }

    #[test]
    fn triggered_bear_layout() {
        let out = text(&report(TokenKind::Bear, [100.0, 110.0, 95.0, 10.0]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "Price of peak: $110");
        assert_eq!(lines[2], "Jump to peak: 10.00%");
        assert_eq!(lines[3], "Number of rebalances: 1");
        assert_eq!(lines[5], "Daily return on underlying: 5.00%");
        assert!(lines[7].starts_with("Token end price: $8.99565045454545"));
    }

    #[test]
    fn echoes_prices_as_entered() {
        let req = PricingRequest::from_args(&["bull", "130.0", "81.5640", "84.00", "2e1"]).unwrap();
        let policy = RebalancePolicy::for_kind(TokenKind::Bull);
        let r = price_token(&req, &policy, &SolverSettings::default()).unwrap();
        let out = text(&r);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Start price of underlying: $130.0");
        assert_eq!(lines[1], "Price of trough: $81.5640");
        assert_eq!(lines[4], "End price of underlying: $84.00");
        assert_eq!(lines[6], "Token start price: $2e1");
    }

    #[test]
    fn untriggered_bear_says_rise() {
        let out = text(&report(TokenKind::Bear, [100.0, 103.0, 99.0, 10.0]));
        assert!(out.contains("No rise triggering rebalance for peak $103\n"));
    }

    #[test]
    fn json_is_parseable() {
        let r = report(TokenKind::Bull, [130.0, 81.564, 84.0, 20.0]);
        let mut buf = Vec::new();
        render_json(&r, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["rebalances"], 3);
        assert_eq!(value["triggered"], true);
        assert!(value["root"].as_f64().unwrap() > 4.0);
    }
}
