/// The error type for pricing computations.
///
/// The calculator has exactly one domain failure: a plan key that does not
/// exist in the catalog. Malformed numeric input is never an error here; it
/// is clamped at the form boundary before the engine sees it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Unknown plan: {plan_key}")]
    UnknownPlan { plan_key: String },
}

impl PricingError {
    pub fn unknown_plan(key: impl Into<String>) -> Self {
        Self::UnknownPlan {
            plan_key: key.into(),
        }
    }
}

/// Result type alias for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_plan_display() {
        let err = PricingError::unknown_plan("starter");
        assert_eq!(err.to_string(), "Unknown plan: starter");
    }

    #[test]
    fn test_unknown_plan_equality() {
        assert_eq!(
            PricingError::unknown_plan("basic"),
            PricingError::UnknownPlan {
                plan_key: "basic".to_string()
            }
        );
    }
}
