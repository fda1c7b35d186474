//! Reactive form state for the calculator.
//!
//! [`PricingForm`] owns the current input snapshot and the breakdown derived
//! from it. Each setter sanitizes the new value, runs the engine exactly
//! once, replaces the stored breakdown wholesale, and notifies subscribers.
//! A failed recomputation (unknown plan key) leaves both the input and the
//! breakdown untouched — no partial state is ever observable.
//!
//! # Example
//!
//! ```rust
//! use seatwise::PricingForm;
//!
//! let mut form = PricingForm::standard();
//! form.set_seats("3");
//! form.set_usage("150");
//! assert_eq!(form.breakdown().total, 35.0);
//! ```

use tracing::debug;

use crate::catalog::PlanCatalog;
use crate::engine::{compute_breakdown, PricingBreakdown, PricingInput};
use crate::error::{PricingError, Result};
use crate::sanitize::{sanitize, sanitize_seats, sanitize_usage, RawFormInput};

type Subscriber = Box<dyn FnMut(&PricingBreakdown)>;

/// Form state holding the four tracked inputs and the derived breakdown.
///
/// Single-threaded and synchronous: every recomputation completes before the
/// triggering setter returns. Independent form instances share nothing but
/// the read-only catalog, so any number of them can coexist.
pub struct PricingForm {
    catalog: PlanCatalog,
    input: PricingInput,
    breakdown: PricingBreakdown,
    subscribers: Vec<Subscriber>,
}

impl PricingForm {
    /// Create a form over the given catalog.
    ///
    /// The initial state selects the first plan in the catalog with one seat,
    /// zero usage, and no discount; the breakdown is computed eagerly.
    ///
    /// # Errors
    ///
    /// Fails with [`PricingError::UnknownPlan`] when the catalog is empty.
    pub fn new(catalog: PlanCatalog) -> Result<Self> {
        let plan_key = catalog
            .plans()
            .next()
            .map(|p| p.key.clone())
            .ok_or_else(|| PricingError::unknown_plan(""))?;

        let input = PricingInput {
            plan_key,
            seats: 1,
            usage: 0.0,
            apply_discount: false,
        };
        let breakdown = compute_breakdown(&catalog, &input)?;

        Ok(Self {
            catalog,
            input,
            breakdown,
            subscribers: Vec::new(),
        })
    }

    /// Create a form over the built-in plan table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(PlanCatalog::standard()).expect("built-in catalog is non-empty")
    }

    /// Register a subscriber notified after every successful recomputation.
    ///
    /// Each input change produces exactly one notification per subscriber,
    /// carrying the freshly computed breakdown.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&PricingBreakdown) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Set the seat count from raw field text, clamping invalid values to 1.
    pub fn set_seats(&mut self, raw: &str) {
        let mut input = self.input.clone();
        input.seats = sanitize_seats(raw);
        self.recompute_with_current_plan(input);
    }

    /// Set the usage from raw field text, clamping invalid values to 0.
    pub fn set_usage(&mut self, raw: &str) {
        let mut input = self.input.clone();
        input.usage = sanitize_usage(raw);
        self.recompute_with_current_plan(input);
    }

    /// Toggle the discount flag.
    pub fn set_discount(&mut self, apply: bool) {
        let mut input = self.input.clone();
        input.apply_discount = apply;
        self.recompute_with_current_plan(input);
    }

    /// Select a different plan.
    ///
    /// # Errors
    ///
    /// Fails with [`PricingError::UnknownPlan`] when the key is not in the
    /// catalog; the previous input and breakdown are kept.
    pub fn set_plan(&mut self, key: &str) -> Result<()> {
        let mut input = self.input.clone();
        input.plan_key = key.to_string();

        let breakdown = compute_breakdown(&self.catalog, &input)?;
        self.input = input;
        self.install(breakdown);
        Ok(())
    }

    /// Replace all four inputs at once from a raw form snapshot.
    ///
    /// Numeric fields are clamped as usual; an unknown plan key fails the
    /// whole update and keeps the previous state.
    pub fn apply_raw(&mut self, raw: &RawFormInput) -> Result<()> {
        let input = sanitize(raw);
        let breakdown = compute_breakdown(&self.catalog, &input)?;
        self.input = input;
        self.install(breakdown);
        Ok(())
    }

    /// The current sanitized input snapshot.
    #[must_use]
    pub fn input(&self) -> &PricingInput {
        &self.input
    }

    /// The breakdown derived from the current input.
    #[must_use]
    pub fn breakdown(&self) -> &PricingBreakdown {
        &self.breakdown
    }

    /// The catalog this form prices against.
    #[must_use]
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    fn recompute_with_current_plan(&mut self, input: PricingInput) {
        // The plan key was validated when it was set; with an immutable
        // catalog the engine cannot fail here.
        if let Ok(breakdown) = compute_breakdown(&self.catalog, &input) {
            self.input = input;
            self.install(breakdown);
        }
    }

    fn install(&mut self, breakdown: PricingBreakdown) {
        debug!(
            plan = %self.input.plan_key,
            seats = self.input.seats,
            usage = self.input.usage,
            total = breakdown.total,
            "recomputed price breakdown"
        );
        self.breakdown = breakdown;
        for subscriber in &mut self.subscribers {
            subscriber(&self.breakdown);
        }
    }
}

impl std::fmt::Debug for PricingForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingForm")
            .field("input", &self.input)
            .field("breakdown", &self.breakdown)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state_matches_defaults() {
        let form = PricingForm::standard();
        assert_eq!(form.input().plan_key, "basic");
        assert_eq!(form.input().seats, 1);
        assert_eq!(form.input().usage, 0.0);
        assert!(!form.input().apply_discount);
        assert_eq!(form.breakdown().total, 10.0);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = PricingForm::new(PlanCatalog::builder().build());
        assert!(result.is_err());
    }

    #[test]
    fn test_each_edit_notifies_once() {
        let mut form = PricingForm::standard();
        let totals: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&totals);
        form.subscribe(move |b| sink.borrow_mut().push(b.total));

        form.set_seats("3");
        form.set_usage("150");
        form.set_discount(true);

        assert_eq!(*totals.borrow(), vec![30.0, 35.0, 35.0 * 0.9]);
    }

    #[test]
    fn test_unknown_plan_keeps_previous_state() {
        let mut form = PricingForm::standard();
        form.set_seats("2");
        let before = form.breakdown().clone();

        let notified = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&notified);
        form.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(form.set_plan("platinum").is_err());
        assert_eq!(form.input().plan_key, "basic");
        assert_eq!(form.breakdown(), &before);
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn test_set_plan_switches_allowance() {
        let mut form = PricingForm::standard();
        form.set_usage("300");
        assert_eq!(form.breakdown().overage_usage, 200.0);

        form.set_plan("enterprise").unwrap();
        assert_eq!(form.breakdown().overage_usage, 0.0);
        assert_eq!(form.breakdown().base_price, 50.0);
    }

    #[test]
    fn test_invalid_field_text_is_clamped() {
        let mut form = PricingForm::standard();
        form.set_seats("not a number");
        form.set_usage("-40");

        assert_eq!(form.input().seats, 1);
        assert_eq!(form.input().usage, 0.0);
        assert_eq!(form.breakdown().total, 10.0);
    }

    #[test]
    fn test_apply_raw_replaces_all_inputs() {
        let mut form = PricingForm::standard();
        form.apply_raw(&RawFormInput {
            plan_key: "pro".to_string(),
            seats: "2".to_string(),
            usage: "300".to_string(),
            apply_discount: true,
        })
        .unwrap();

        assert_eq!(form.breakdown().subtotal, 44.0);
        assert_eq!(form.breakdown().total, 44.0 * 0.9);
    }

    #[test]
    fn test_apply_raw_unknown_plan_fails_whole_update() {
        let mut form = PricingForm::standard();
        let before = form.input().clone();

        let result = form.apply_raw(&RawFormInput {
            plan_key: "platinum".to_string(),
            seats: "9".to_string(),
            usage: "9000".to_string(),
            apply_discount: true,
        });

        assert!(result.is_err());
        assert_eq!(form.input(), &before);
    }

    #[test]
    fn test_independent_forms_share_nothing() {
        let mut a = PricingForm::standard();
        let mut b = PricingForm::standard();

        a.set_seats("10");
        b.set_usage("500");

        assert_eq!(a.breakdown().total, 100.0);
        assert_eq!(b.breakdown().total, 10.0 + 400.0 * 0.10);
    }
}
