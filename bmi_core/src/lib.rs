#![forbid(unsafe_code)]

//! Core domain model and logic for the BMI calculator.
//!
//! This crate provides:
//! - Domain types (categories, results)
//! - The fixed category table
//! - The evaluator (validation, BMI arithmetic, classification)
//! - Form state for interactive front ends
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod category;
pub mod config;
pub mod logging;
pub mod evaluator;
pub mod form;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use types::*;
pub use category::{bands, CategoryBand};
pub use config::{Config, DisplayConfig, OutputFormat};
pub use evaluator::{classify, evaluate, format_bmi};
pub use form::{BmiForm, Outcome};
