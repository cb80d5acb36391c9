//! Core domain types for the BMI calculator.
//!
//! This module defines the values that cross the evaluator boundary:
//! - BMI categories
//! - Evaluation results

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Category Types
// ============================================================================

/// Weight category derived from a BMI value
///
/// Serialized and displayed with the same capitalized names the result card
/// shows (`"Underweight"`, `"Normal"`, ...).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// All categories, lowest band first
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Outcome of a successful evaluation
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BmiResult {
    /// BMI rendered with one fractional digit, e.g. `"24.2"`
    pub bmi: String,
    pub category: Category,
    pub recommendation: &'static str,
    /// Unrounded BMI the category was derived from
    pub value: f64,
}
