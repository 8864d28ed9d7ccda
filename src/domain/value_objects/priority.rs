//! Priority value object - an immutable (level, name) pair
//!
//! Priorities are pure values: assignment and `clone()` produce independent
//! copies, and there is no way to mutate one after construction. The only
//! "mutation" a holder can perform is replacing the whole value.

use serde::{Deserialize, Serialize};

/// A task priority with a numeric rank and a human-readable label
///
/// `level` 1 is the highest priority. Construction accepts any level/name
/// combination; no validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Priority {
    level: u8,
    name: String,
}

impl Priority {
    /// Create a new priority from a rank and a label
    pub fn new(level: u8, name: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
        }
    }

    /// Conventional highest priority (level 1)
    pub fn high() -> Self {
        Self::new(1, "High")
    }

    /// Conventional middle priority (level 2)
    pub fn medium() -> Self {
        Self::new(2, "Medium")
    }

    /// Conventional lowest priority (level 3)
    pub fn low() -> Self {
        Self::new(3, "Low")
    }

    /// Numeric rank (1 = highest)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Human-readable label
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}
