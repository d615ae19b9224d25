//! Structured interpretation of a free-text query.

use serde::{Deserialize, Serialize};

/// Constraints extracted from a query.
///
/// All fields are independently optional. A `None` field means "no
/// constraint", never "exclude non-matching" - an unmatched city token
/// simply leaves `city` unset and the filter ignores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedConstraints {
    /// Supported city, normalized lowercase (e.g. "pune")
    pub city: Option<String>,

    /// Unit type token, normalized (e.g. "3BHK")
    pub unit_type: Option<String>,

    /// Budget ceiling in rupees (base currency unit)
    pub budget: Option<u64>,
}

impl ParsedConstraints {
    /// Create an empty (unconstrained) set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no field imposes a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.city.is_none() && self.unit_type.is_none() && self.budget.is_none()
    }

    /// Set the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the unit type.
    pub fn with_unit_type(mut self, unit_type: impl Into<String>) -> Self {
        self.unit_type = Some(unit_type.into());
        self
    }

    /// Set the budget ceiling in rupees.
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = Some(budget);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained() {
        assert!(ParsedConstraints::new().is_unconstrained());
        assert!(!ParsedConstraints::new().with_city("pune").is_unconstrained());
        assert!(!ParsedConstraints::new().with_budget(10_000_000).is_unconstrained());
    }
}
