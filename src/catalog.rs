//! Plan catalog: the read-only table of pricing tiers.
//!
//! Plans are defined once at startup and never mutated afterwards. Insertion
//! order is preserved so a plan selector can list tiers the way they were
//! declared.
//!
//! # Example
//!
//! ```rust
//! use seatwise::PlanCatalog;
//!
//! let catalog = PlanCatalog::builder()
//!     .plan("starter")
//!         .name("Starter")
//!         .base_price_per_seat(5.0)
//!         .included_usage(50.0)
//!         .overage_price_per_unit(0.15)
//!         .done()
//!     .build();
//!
//! let plan = catalog.lookup("starter").unwrap();
//! assert_eq!(plan.name, "Starter");
//! ```
//!
//! The built-in table used by the calculator is [`PlanCatalog::standard`].

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// A single pricing tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDefinition {
    /// Plan identifier (e.g., "basic", "pro").
    pub key: String,
    /// Display name for the plan.
    pub name: String,
    /// Monthly base price per seat.
    pub base_price_per_seat: f64,
    /// Usage allowance (in GB) included in the base price.
    pub included_usage: f64,
    /// Price per GB of usage beyond the allowance.
    pub overage_price_per_unit: f64,
}

/// An ordered, read-only collection of plan definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanCatalog {
    plans: Vec<PlanDefinition>,
}

impl PlanCatalog {
    /// Create a builder for constructing a catalog.
    #[must_use]
    pub fn builder() -> PlanCatalogBuilder {
        PlanCatalogBuilder::new()
    }

    /// The built-in plan table.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .plan("basic")
            .name("Basic")
            .base_price_per_seat(10.0)
            .included_usage(100.0)
            .overage_price_per_unit(0.10)
            .done()
            .plan("pro")
            .name("Pro")
            .base_price_per_seat(20.0)
            .included_usage(250.0)
            .overage_price_per_unit(0.08)
            .done()
            .plan("enterprise")
            .name("Enterprise")
            .base_price_per_seat(50.0)
            .included_usage(1000.0)
            .overage_price_per_unit(0.05)
            .done()
            .build()
    }

    /// Look up a plan by key.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownPlan`] if the key is not in the catalog.
    pub fn lookup(&self, key: &str) -> Result<&PlanDefinition> {
        self.plans
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| PricingError::unknown_plan(key))
    }

    /// Iterate plans in declaration order.
    ///
    /// The order is stable across calls; it drives the display order of any
    /// plan selector.
    pub fn plans(&self) -> impl Iterator<Item = &PlanDefinition> {
        self.plans.iter()
    }

    /// Check if a plan exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.plans.iter().any(|p| p.key == key)
    }

    /// Get the number of plans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Check if there are no plans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// Builder for constructing a plan catalog.
#[derive(Debug, Default)]
pub struct PlanCatalogBuilder {
    plans: Vec<PlanDefinition>,
}

impl PlanCatalogBuilder {
    /// Create a new catalog builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start defining a new plan.
    #[must_use]
    pub fn plan(self, key: &str) -> PlanBuilder {
        PlanBuilder {
            parent: self,
            key: key.to_string(),
            name: None,
            base_price_per_seat: 0.0,
            included_usage: 0.0,
            overage_price_per_unit: 0.0,
        }
    }

    /// Build the catalog.
    #[must_use]
    pub fn build(self) -> PlanCatalog {
        PlanCatalog { plans: self.plans }
    }

    fn add_plan(mut self, plan: PlanDefinition) -> Self {
        // Re-declaring a key replaces the definition but keeps its position.
        match self.plans.iter_mut().find(|p| p.key == plan.key) {
            Some(existing) => *existing = plan,
            None => self.plans.push(plan),
        }
        self
    }
}

/// Builder for a single plan definition.
#[derive(Debug)]
pub struct PlanBuilder {
    parent: PlanCatalogBuilder,
    key: String,
    name: Option<String>,
    base_price_per_seat: f64,
    included_usage: f64,
    overage_price_per_unit: f64,
}

impl PlanBuilder {
    /// Set the display name. Defaults to the plan key.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the monthly base price per seat.
    #[must_use]
    pub fn base_price_per_seat(mut self, price: f64) -> Self {
        self.base_price_per_seat = price;
        self
    }

    /// Set the usage allowance included in the base price.
    #[must_use]
    pub fn included_usage(mut self, usage: f64) -> Self {
        self.included_usage = usage;
        self
    }

    /// Set the price per unit of usage beyond the allowance.
    #[must_use]
    pub fn overage_price_per_unit(mut self, price: f64) -> Self {
        self.overage_price_per_unit = price;
        self
    }

    /// Finish defining this plan and return to the parent builder.
    #[must_use]
    pub fn done(self) -> PlanCatalogBuilder {
        let name = self.name.unwrap_or_else(|| self.key.clone());
        let plan = PlanDefinition {
            key: self.key,
            name,
            base_price_per_seat: self.base_price_per_seat,
            included_usage: self.included_usage,
            overage_price_per_unit: self.overage_price_per_unit,
        };
        self.parent.add_plan(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_seed_data() {
        let catalog = PlanCatalog::standard();
        assert_eq!(catalog.len(), 3);

        let basic = catalog.lookup("basic").unwrap();
        assert_eq!(basic.name, "Basic");
        assert_eq!(basic.base_price_per_seat, 10.0);
        assert_eq!(basic.included_usage, 100.0);
        assert_eq!(basic.overage_price_per_unit, 0.10);

        let pro = catalog.lookup("pro").unwrap();
        assert_eq!(pro.base_price_per_seat, 20.0);
        assert_eq!(pro.included_usage, 250.0);
        assert_eq!(pro.overage_price_per_unit, 0.08);

        let enterprise = catalog.lookup("enterprise").unwrap();
        assert_eq!(enterprise.base_price_per_seat, 50.0);
        assert_eq!(enterprise.included_usage, 1000.0);
        assert_eq!(enterprise.overage_price_per_unit, 0.05);
    }

    #[test]
    fn test_plans_preserve_insertion_order() {
        let catalog = PlanCatalog::standard();
        let keys: Vec<&str> = catalog.plans().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["basic", "pro", "enterprise"]);

        // Restartable: same order on every call
        let again: Vec<&str> = catalog.plans().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, again);
    }

    #[test]
    fn test_lookup_unknown_plan() {
        let catalog = PlanCatalog::standard();
        let err = catalog.lookup("nonexistent").unwrap_err();
        assert_eq!(
            err,
            PricingError::UnknownPlan {
                plan_key: "nonexistent".to_string()
            }
        );
    }

    #[test]
    fn test_contains() {
        let catalog = PlanCatalog::standard();
        assert!(catalog.contains("basic"));
        assert!(!catalog.contains("unknown"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PlanCatalog::builder().build();
        assert!(catalog.is_empty());
        assert!(catalog.lookup("anything").is_err());
    }

    #[test]
    fn test_builder_defaults_name_to_key() {
        let catalog = PlanCatalog::builder()
            .plan("trial")
            .base_price_per_seat(1.0)
            .done()
            .build();

        assert_eq!(catalog.lookup("trial").unwrap().name, "trial");
    }

    #[test]
    fn test_redeclared_key_replaces_in_place() {
        let catalog = PlanCatalog::builder()
            .plan("a")
            .base_price_per_seat(1.0)
            .done()
            .plan("b")
            .base_price_per_seat(2.0)
            .done()
            .plan("a")
            .base_price_per_seat(3.0)
            .done()
            .build();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("a").unwrap().base_price_per_seat, 3.0);

        let keys: Vec<&str> = catalog.plans().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
