//! Seatwise - a reactive SaaS pricing estimator
//!
//! Seatwise computes a monthly cost from four user-entered inputs (seat
//! count, usage, plan tier, discount flag) and recomputes a full price
//! breakdown whenever any of them changes. The core is a pure function over
//! a read-only plan catalog; the form layer wraps it in a small reactive
//! store that any rendering toolkit can drive.
//!
//! # Quick Start
//!
//! ```rust
//! use seatwise::PricingForm;
//!
//! let mut form = PricingForm::standard();
//! form.subscribe(|breakdown| {
//!     println!("new total: {}", seatwise::format_usd(breakdown.total));
//! });
//!
//! form.set_seats("2");
//! form.set_usage("300");
//! form.set_plan("pro").unwrap();
//! form.set_discount(true);
//!
//! assert_eq!(seatwise::format_usd(form.breakdown().total), "$39.60");
//! ```
//!
//! The engine can also be called directly, without a form:
//!
//! ```rust
//! use seatwise::{compute_breakdown, PlanCatalog, PricingInput};
//!
//! let catalog = PlanCatalog::standard();
//! let breakdown = compute_breakdown(&catalog, &PricingInput {
//!     plan_key: "basic".to_string(),
//!     seats: 3,
//!     usage: 150.0,
//!     apply_discount: false,
//! }).unwrap();
//! assert_eq!(breakdown.total, 35.0);
//! ```

pub mod catalog;
pub mod display;
pub mod engine;
mod error;
pub mod form;
pub mod sanitize;

// Re-exports for public API
pub use catalog::{PlanBuilder, PlanCatalog, PlanCatalogBuilder, PlanDefinition};
pub use display::{format_usd, render_lines, BreakdownLine, LineEmphasis};
pub use engine::{compute_breakdown, PricingBreakdown, PricingInput, DISCOUNT_RATE};
pub use error::{PricingError, Result};
pub use form::PricingForm;
pub use sanitize::{sanitize, sanitize_seats, sanitize_usage, RawFormInput};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging with sensible defaults
///
/// Call this early in the host application, before constructing forms.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "seatwise=debug")
/// - `SEATWISE_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("SEATWISE_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
