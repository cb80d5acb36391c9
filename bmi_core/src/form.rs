//! Input form state for interactive front ends.
//!
//! The form holds the two raw text fields and the last outcome. A result and
//! an error can never be shown together: [`Outcome`] is a single variant, and
//! every submit replaces it wholesale.

use crate::{evaluate, BmiResult, ValidationError};

/// What the form currently displays
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Outcome {
    /// Nothing submitted yet (or the form was reset)
    #[default]
    Idle,
    /// Last submit produced a result
    Success(BmiResult),
    /// Last submit was rejected
    Failed(ValidationError),
}

/// Height/weight entry form
#[derive(Clone, Debug, Default)]
pub struct BmiForm {
    height: String,
    weight: String,
    outcome: Outcome,
}

impl BmiForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the height field (centimeters). Does not re-evaluate.
    pub fn set_height(&mut self, text: impl Into<String>) {
        self.height = text.into();
    }

    /// Replace the weight field (kilograms). Does not re-evaluate.
    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight = text.into();
    }

    /// Evaluate the current fields and replace the outcome
    pub fn submit(&mut self) -> &Outcome {
        self.outcome = match evaluate(&self.height, &self.weight) {
            Ok(result) => Outcome::Success(result),
            Err(e) => Outcome::Failed(e),
        };
        &self.outcome
    }

    /// Clear both fields and return to idle
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The displayed result, if the last submit succeeded
    pub fn result(&self) -> Option<&BmiResult> {
        match &self.outcome {
            Outcome::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The displayed error, if the last submit failed
    pub fn error(&self) -> Option<&ValidationError> {
        match &self.outcome {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn test_new_form_is_idle() {
        let form = BmiForm::new();
        assert_eq!(form.outcome(), &Outcome::Idle);
        assert!(form.result().is_none());
        assert!(form.error().is_none());
        assert_eq!(form.height(), "");
        assert_eq!(form.weight(), "");
    }

    #[test]
    fn test_editing_fields_keeps_outcome() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.set_weight("70");
        form.submit();

        form.set_weight("95");
        assert_eq!(form.result().map(|r| r.bmi.as_str()), Some("24.2"));
        assert_eq!(form.weight(), "95");
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.submit();
        assert_eq!(form.error(), Some(&ValidationError::MissingInput));

        form.set_weight("70");
        let outcome = form.submit();
        assert!(matches!(outcome, Outcome::Success(r) if r.category == Category::Normal));
        assert!(form.error().is_none());
    }

    #[test]
    fn test_error_clears_previous_result() {
        let mut form = BmiForm::new();
        form.set_height("150");
        form.set_weight("90");
        form.submit();
        assert_eq!(form.result().map(|r| r.category), Some(Category::Obese));

        form.set_height("0");
        form.submit();
        assert!(form.result().is_none());
        assert_eq!(form.error(), Some(&ValidationError::NonPositiveHeight));
    }

    #[test]
    fn test_resubmit_recomputes() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.set_weight("70");
        let first = form.submit().clone();
        let second = form.submit().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.set_weight("70");
        form.submit();

        form.reset();
        assert_eq!(form.outcome(), &Outcome::Idle);
        assert_eq!(form.height(), "");
        assert_eq!(form.weight(), "");
    }
}
