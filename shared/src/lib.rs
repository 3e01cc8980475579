//! Healthy Estate Shared Library
//!
//! Pure numeric toolkits used by the service crate:
//! - BMI scoring and diet recommendations for coders
//! - Apartment rating and synthetic apartment generation

pub mod apartment;
pub mod bmi;
pub mod errors;
pub mod generator;

// Re-export commonly used items
pub use apartment::*;
pub use bmi::*;
pub use errors::*;
pub use generator::*;
