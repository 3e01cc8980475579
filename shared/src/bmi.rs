//! BMI calculations for coders
//!
//! Provides the BMI formula, the diet recommendation predicate, and scans
//! over collections of [`Coder`] records.
//!
//! Heights are in meters and weights in kilograms throughout this module.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::BmiError;

/// BMI at and above which a diet is recommended (start of the overweight band)
pub const DIET_RECOMMENDED_BMI: f64 = 25.0;

// ============================================================================
// Coder
// ============================================================================

/// A person's height and weight, as used for BMI analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coder {
    /// Height in meters
    height: f64,
    /// Weight in kilograms
    weight: f64,
}

impl Coder {
    pub fn new(height: f64, weight: f64) -> Self {
        Self { height, weight }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Unchecked BMI; a zero height yields an infinite (or NaN) value
    pub fn bmi(&self) -> f64 {
        self.weight / (self.height * self.height)
    }

    /// WHO category of this coder's BMI
    pub fn bmi_category(&self) -> BmiCategory {
        classify_bmi(self.bmi())
    }
}

// ============================================================================
// BMI Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Half-open BMI range `[low, high)` covered by this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::SeverelyUnderweight => (0.0, 16.0),
            BmiCategory::Underweight => (16.0, 18.5),
            BmiCategory::Normal => (18.5, DIET_RECOMMENDED_BMI),
            BmiCategory::Overweight => (DIET_RECOMMENDED_BMI, 30.0),
            BmiCategory::ObeseClass1 => (30.0, 35.0),
            BmiCategory::ObeseClass2 => (35.0, 40.0),
            BmiCategory::ObeseClass3 => (40.0, f64::INFINITY),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    [
        BmiCategory::SeverelyUnderweight,
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::ObeseClass1,
        BmiCategory::ObeseClass2,
    ]
    .into_iter()
    .find(|category| bmi < category.range().1)
    .unwrap_or(BmiCategory::ObeseClass3)
}

// ============================================================================
// Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight: f64, height: f64) -> Result<f64, BmiError> {
    if height == 0.0 {
        return Err(BmiError::DivideByZero);
    }
    Ok(weight / (height * height))
}

/// Whether a diet is recommended, i.e. the BMI is overweight or worse
pub fn is_diet_recommended(weight: f64, height: f64) -> Result<bool, BmiError> {
    is_diet_recommended_with(weight, height, DIET_RECOMMENDED_BMI)
}

/// [`is_diet_recommended`] with a caller-supplied BMI threshold
pub fn is_diet_recommended_with(weight: f64, height: f64, threshold: f64) -> Result<bool, BmiError> {
    let bmi = calculate_bmi(weight, height)?;
    Ok(bmi >= threshold)
}

/// Find the coder with the highest BMI
///
/// Single pass; on ties the first coder wins. NaN scores never displace a
/// real one.
pub fn find_coder_with_worst_bmi(coders: &[Coder]) -> Option<&Coder> {
    let mut worst: Option<(&Coder, f64)> = None;

    for coder in coders {
        let bmi = coder.bmi();
        if !bmi.is_finite() {
            warn!(height = coder.height, weight = coder.weight, bmi, "Non-finite BMI in scan");
        }
        let replace = match worst {
            None => true,
            Some((_, max)) => bmi > max || (max.is_nan() && !bmi.is_nan()),
        };
        if replace {
            worst = Some((coder, bmi));
        }
    }

    if let Some((coder, bmi)) = worst {
        debug!(count = coders.len(), height = coder.height, weight = coder.weight, bmi, "Worst BMI found");
    }
    worst.map(|(coder, _)| coder)
}

/// BMI of every coder, in input order, rounded to 2 decimal places
pub fn get_bmi_scores(coders: &[Coder]) -> Vec<f64> {
    coders.iter().map(|coder| round_to_cents(coder.bmi())).collect()
}

/// Healthy weight range (kg) for a height in meters
///
/// Based on BMI 18.5-25 (normal range)
pub fn healthy_weight_range_kg(height: f64) -> (f64, f64) {
    let (low, high) = BmiCategory::Normal.range();
    let height_sq = height * height;
    (low * height_sq, high * height_sq)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
