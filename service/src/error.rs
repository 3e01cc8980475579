//! Service error handling
//!
//! Wraps the calculator errors from the shared crate together with
//! configuration problems found after loading.

use healthy_estate_shared::{BmiError, GeneratorError, RatingError};
use thiserror::Error;

/// Service layer error type
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("BMI error: {0}")]
    Bmi(#[from] BmiError),

    #[error("Rating error: {0}")]
    Rating(#[from] RatingError),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}
