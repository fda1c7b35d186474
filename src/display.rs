//! Rendering helpers for the breakdown panel.
//!
//! The display layer is a literal transcription of [`PricingBreakdown`]
//! fields into labeled lines; it computes nothing of its own. Monetary
//! values are formatted as dollars with two decimal places.

use serde::Serialize;

use crate::catalog::PlanDefinition;
use crate::engine::PricingBreakdown;

/// Format a monetary amount as dollars with two decimal places.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// How a rendered line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEmphasis {
    /// A regular line item.
    Normal,
    /// The conditional discount line.
    Discount,
    /// The final total line.
    Total,
}

/// One row of the price breakdown panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub label: String,
    pub value: String,
    pub emphasis: LineEmphasis,
}

impl BreakdownLine {
    fn normal(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            emphasis: LineEmphasis::Normal,
        }
    }
}

/// Render the breakdown as literal line items.
///
/// The discount line is present only when the discount was applied. `plan`
/// must be the definition the breakdown was computed from; it contributes
/// only the display name and the overage rate label.
#[must_use]
pub fn render_lines(plan: &PlanDefinition, breakdown: &PricingBreakdown) -> Vec<BreakdownLine> {
    let mut lines = vec![
        BreakdownLine::normal(
            format!("Base Price ({} Plan)", plan.name),
            format!("{} per seat", format_usd(breakdown.base_price)),
        ),
        BreakdownLine::normal("Number of Seats", breakdown.seats.to_string()),
        BreakdownLine::normal("Included Usage", format!("{} GB", breakdown.included_usage)),
        BreakdownLine::normal("Overage Usage", format!("{} GB", breakdown.overage_usage)),
        BreakdownLine::normal(
            "Overage Price",
            format!("{} per GB", format_usd(plan.overage_price_per_unit)),
        ),
    ];

    if breakdown.discount_applied {
        lines.push(BreakdownLine {
            label: "Discount Applied".to_string(),
            value: format!("{:.0}%", breakdown.discount_rate * 100.0),
            emphasis: LineEmphasis::Discount,
        });
    }

    lines.push(BreakdownLine {
        label: "Total Monthly Cost".to_string(),
        value: format_usd(breakdown.total),
        emphasis: LineEmphasis::Total,
    });

    lines
}
