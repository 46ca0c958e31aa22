//! Result cards for analysis outcomes.
//!
//! Renders an [`Outcome`] as a short human-readable card: verdict heading,
//! real/fake percentages with a bar, or the failure and what to do about it.

use std::fmt::Write;

use truthlens_core::{LiveResult, Outcome, ProbabilityPair, VerdictKind};

const BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 14;

/// Shown when the session has no live result.
pub const NO_RESULT: &str = "No result yet. Enter a passage to analyze.";

// ── Public API ──

/// Render an outcome as a card, or as pretty JSON when `json` is set.
pub fn render(outcome: &Outcome, json: bool) -> anyhow::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(outcome)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_card(outcome))
    }
}

/// Render the live session result with the time it was produced.
pub fn render_live(live: &LiveResult, json: bool) -> anyhow::Result<String> {
    let mut out = render(&live.outcome, json)?;
    if !json {
        let _ = writeln!(
            out,
            "  {:<LABEL_WIDTH$} {}",
            "Analyzed at",
            live.stored_at.format("%H:%M:%S UTC")
        );
    }
    Ok(out)
}

pub fn render_card(outcome: &Outcome) -> String {
    let mut out = String::new();
    match outcome {
        Outcome::Success { pair, verdict } => success_card(&mut out, pair, *verdict),
        Outcome::Failure { kind, message } => {
            let _ = writeln!(out, "=== Analysis failed ({kind}) ===");
            let _ = writeln!(out, "  {message}");
            let _ = writeln!(out, "  {:<LABEL_WIDTH$} {}", "Hint", kind.hint());
            if kind.is_retryable() {
                let _ = writeln!(out, "  Run the analysis again to retry.");
            }
        }
    }
    out
}

// ── Sections ──

fn success_card(out: &mut String, pair: &ProbabilityPair, verdict: VerdictKind) {
    let _ = writeln!(out, "=== {} ===", heading(verdict));

    if pair.is_no_signal() {
        let _ = writeln!(out, "  The model response had no recognised labels.");
        return;
    }

    let _ = writeln!(
        out,
        "  {:<LABEL_WIDTH$} {:>3}%  {}",
        "Real chance",
        pair.real_percent(),
        progress_bar(pair.real)
    );
    let _ = writeln!(
        out,
        "  {:<LABEL_WIDTH$} {:>3}%",
        "Fake chance",
        pair.fake_percent()
    );
}

// ── Helpers ──

fn heading(verdict: VerdictKind) -> &'static str {
    match verdict {
        VerdictKind::Authentic => "Likely authentic",
        VerdictKind::Fake => "Likely fake",
        VerdictKind::Uncertain => "Uncertain",
    }
}

/// Fixed-width bar, e.g. `[################----]` for 0.8.
fn progress_bar(p: f64) -> String {
    let filled = ((p.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
