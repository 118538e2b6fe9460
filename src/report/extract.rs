//! Lenient extraction of a hiking report from free-text assistant output.
//!
//! Assistant replies may be bare JSON, JSON inside a fenced code block, or
//! prose with a fenced payload somewhere in the middle. The fenced block (if
//! any) is tried first, then the whole trimmed text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::shape::check_shape;
use crate::model::types::HikingReport;

/// First fenced block, optionally tagged `json`. Non-greedy so prose after the
/// closing fence is never swallowed.
static FENCED_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(?:json)?\s*([\s\S]*?)```").expect("fenced block regex"));

/// Candidate payloads in the order they are tried.
pub fn candidates(content: &str) -> Vec<&str> {
    let trimmed = content.trim();
    let mut candidates = vec![trimmed];

    if let Some(inner) = FENCED_BLOCK_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .filter(|m| !m.as_str().is_empty())
    {
        candidates.insert(0, inner.as_str().trim());
    }

    candidates
}

/// Return the first candidate that parses as JSON and has the report shape.
///
/// Parse and shape failures are not errors here; they only move on to the next
/// candidate.
pub fn extract(content: &str) -> Option<HikingReport> {
    let candidates = candidates(content);
    trace!(
        component = "extract",
        operation = "extract",
        content_len = content.len(),
        candidates = candidates.len(),
        "Extracting hiking report"
    );

    for (idx, candidate) in candidates.iter().enumerate() {
        let value = match serde_json::from_str::<serde_json::Value>(candidate) {
            Ok(value) => value,
            Err(err) => {
                trace!(
                    component = "extract",
                    operation = "parse_candidate",
                    candidate = idx,
                    error = %err,
                    "Candidate is not JSON"
                );
                continue;
            }
        };
        let check = check_shape(&value);
        trace!(
            component = "extract",
            operation = "check_candidate",
            candidate = idx,
            valid = check.is_valid(),
            "Candidate shape checked"
        );
        if let Some(report) = check.into_report() {
            trace!(
                component = "extract",
                operation = "extract_complete",
                candidate = idx,
                "Hiking report found"
            );
            return Some(report);
        }
    }

    None
}
