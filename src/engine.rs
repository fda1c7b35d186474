//! The pricing engine: a pure function from input to breakdown.
//!
//! [`compute_breakdown`] is deterministic, performs no I/O, and touches no
//! state beyond the read-only catalog it is given. Identical inputs always
//! produce an identical breakdown, which is what makes the engine testable
//! without any rendering harness.

use serde::{Deserialize, Serialize};

use crate::catalog::PlanCatalog;
use crate::error::Result;

/// Discount applied when the discount flag is set. Fixed in this version.
pub const DISCOUNT_RATE: f64 = 0.10;

/// A snapshot of the four user-controlled inputs.
///
/// Reconstructed wholesale on every edit; never persisted. Values are assumed
/// to already be sanitized (see [`crate::sanitize`]) — the only thing the
/// engine itself checks is that `plan_key` exists in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    /// Key of the selected plan; must exist in the catalog.
    pub plan_key: String,
    /// Seat count, at least 1.
    pub seats: u32,
    /// Monthly usage in GB, non-negative.
    pub usage: f64,
    /// Whether the flat discount applies.
    pub apply_discount: bool,
}

/// The full set of intermediate figures plus the final total.
///
/// Recomputed wholesale on every change and never partially mutated. Every
/// line the display layer shows comes straight from here, so the rendered
/// line items and the total can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Base price per seat for the selected plan.
    pub base_price: f64,
    /// Seat count the price was computed for.
    pub seats: u32,
    /// Usage allowance included in the plan.
    pub included_usage: f64,
    /// Usage beyond the allowance; zero when within it.
    pub overage_usage: f64,
    /// Cost of the overage usage.
    pub overage_cost: f64,
    /// Seat cost plus overage cost, before any discount.
    pub subtotal: f64,
    /// Whether the discount was applied to this computation.
    pub discount_applied: bool,
    /// The rate that applies when the discount flag is set.
    pub discount_rate: f64,
    /// Amount subtracted from the subtotal; zero without the discount.
    pub discount_amount: f64,
    /// Final monthly cost.
    pub total: f64,
}

/// Compute the price breakdown for a sanitized input.
///
/// # Errors
///
/// Fails with [`crate::PricingError::UnknownPlan`] when `input.plan_key` is
/// not in the catalog. There are no other failure modes and no partial
/// results.
pub fn compute_breakdown(catalog: &PlanCatalog, input: &PricingInput) -> Result<PricingBreakdown> {
    let plan = catalog.lookup(&input.plan_key)?;

    let overage_usage = (input.usage - plan.included_usage).max(0.0);
    let overage_cost = overage_usage * plan.overage_price_per_unit;
    let subtotal = plan.base_price_per_seat * f64::from(input.seats) + overage_cost;

    let total = if input.apply_discount {
        subtotal * (1.0 - DISCOUNT_RATE)
    } else {
        subtotal
    };

    Ok(PricingBreakdown {
        base_price: plan.base_price_per_seat,
        seats: input.seats,
        included_usage: plan.included_usage,
        overage_usage,
        overage_cost,
        subtotal,
        discount_applied: input.apply_discount,
        discount_rate: DISCOUNT_RATE,
        discount_amount: subtotal - total,
        total,
    })
}
