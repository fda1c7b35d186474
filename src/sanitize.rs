//! Sanitization of raw form values.
//!
//! Field values arrive from the rendering layer as text and may be malformed.
//! The policy is clamping, not rejection: a seat count that is not a positive
//! integer becomes 1, a usage value that is negative or unparsable becomes 0.
//! The engine can therefore assume well-formed [`PricingInput`].
//!
//! The plan key is passed through verbatim; rejecting unknown keys is the
//! engine's job, not the sanitizer's.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::PricingInput;

/// The four raw values supplied by the rendering layer on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFormInput {
    /// Selected plan key, as emitted by the plan selector.
    pub plan_key: String,
    /// Seat count field text.
    pub seats: String,
    /// Usage field text.
    pub usage: String,
    /// Discount checkbox state.
    pub apply_discount: bool,
}

/// Sanitize a full raw form snapshot into an engine input.
#[must_use]
pub fn sanitize(raw: &RawFormInput) -> PricingInput {
    PricingInput {
        plan_key: raw.plan_key.clone(),
        seats: sanitize_seats(&raw.seats),
        usage: sanitize_usage(&raw.usage),
        apply_discount: raw.apply_discount,
    }
}

/// Parse a raw seat count, clamping anything that is not a positive integer
/// to 1.
#[must_use]
pub fn sanitize_seats(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => {
            warn!(raw = %raw, "seat count is not a positive integer, clamping to 1");
            1
        }
    }
}

/// Parse a raw usage amount, clamping negative or unparsable values to 0.
#[must_use]
pub fn sanitize_usage(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n >= 0.0 && n.is_finite() => n,
        _ => {
            warn!(raw = %raw, "usage is not a non-negative number, clamping to 0");
            0.0
        }
    }
}
