//! BMI evaluation: validation, arithmetic and classification.
//!
//! `evaluate` is pure and synchronous. Every call recomputes from its two
//! arguments; nothing is cached between calls.

use crate::{BmiResult, Category, ValidationError};

/// Evaluate a height (cm) and weight (kg) pair given as entered text
///
/// ## Validation order
///
/// 1. Both fields must be non-blank, else [`ValidationError::MissingInput`]
/// 2. Height in meters must be a positive, finite number, else
///    [`ValidationError::NonPositiveHeight`]
/// 3. Weight must be a positive, finite number, else
///    [`ValidationError::NonPositiveWeight`]
///
/// Text that does not parse is rejected exactly like a non-positive value
/// for the same field. The first failing check wins. A BMI that overflows
/// to infinity is rejected as [`ValidationError::NonPositiveHeight`].
pub fn evaluate(height_cm: &str, weight_kg: &str) -> Result<BmiResult, ValidationError> {
    let height_cm = height_cm.trim();
    let weight_kg = weight_kg.trim();

    if height_cm.is_empty() || weight_kg.is_empty() {
        tracing::debug!("Rejected measurement: missing input");
        return Err(ValidationError::MissingInput);
    }

    let height_m = parse_positive(height_cm).map(|cm| cm / 100.0);
    // A height so small its square underflows to zero counts as non-positive
    let height_m = match height_m {
        Some(m) if m * m > 0.0 => m,
        _ => {
            tracing::debug!("Rejected height {:?}", height_cm);
            return Err(ValidationError::NonPositiveHeight);
        }
    };

    let weight_kg = match parse_positive(weight_kg) {
        Some(kg) => kg,
        None => {
            tracing::debug!("Rejected weight {:?}", weight_kg);
            return Err(ValidationError::NonPositiveWeight);
        }
    };

    let value = weight_kg / (height_m * height_m);
    // Overflow leaves nothing to classify; reject it like an unusable height
    if !value.is_finite() {
        tracing::debug!("Rejected measurement: BMI overflowed for {} m", height_m);
        return Err(ValidationError::NonPositiveHeight);
    }

    let category = classify(value);

    tracing::debug!(
        "Computed BMI {:.3} ({}) from {} m / {} kg",
        value,
        category,
        height_m,
        weight_kg
    );

    Ok(BmiResult {
        bmi: format_bmi(value),
        category,
        recommendation: category.recommendation(),
        value,
    })
}

/// Classify an unrounded BMI value into its category
pub fn classify(bmi: f64) -> Category {
    Category::from_bmi(bmi)
}

/// Render a BMI value with one fractional digit
pub fn format_bmi(bmi: f64) -> String {
    format!("{:.1}", bmi)
}

/// Parse a decimal that must be finite and strictly positive
///
/// `f64::from_str` accepts `"NaN"` and `"inf"`; both are rejected here so a
/// non-number can never reach the category comparisons.
fn parse_positive(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
