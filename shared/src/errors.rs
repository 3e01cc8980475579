//! Error types for the BMI and apartment toolkits

use rust_decimal::Decimal;
use thiserror::Error;

/// BMI calculation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiError {
    /// Height of zero would make the BMI formula divide by zero
    #[error("Divide by zero")]
    DivideByZero,
}

/// Apartment rating errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    #[error("Cannot calculate average rating for empty list")]
    EmptyApartmentList,
}

/// Random apartment generation errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeneratorError {
    #[error("Area bounds must be finite, got min {min_area} and max {max_area}")]
    NonFiniteArea { min_area: f64, max_area: f64 },

    #[error("Maximum price per square meter overflows for minimum {0}")]
    PriceBoundOverflow(Decimal),

    #[error("Area {0} cannot be represented as a decimal")]
    AreaNotRepresentable(f64),

    #[error("Price overflows for area {area} at {price_per_square_meter} per square meter")]
    PriceOverflow {
        area: f64,
        price_per_square_meter: Decimal,
    },
}
