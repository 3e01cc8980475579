//! Report building
//!
//! Composes the pure calculators with configured thresholds into
//! serializable summaries for coders and apartments.

use healthy_estate_shared::{
    find_coder_with_worst_bmi, get_bmi_scores, is_diet_recommended_with, Apartment,
    ApartmentRater, BmiCategory, Coder, ERROR_RATING,
};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::config::{BmiConfig, GeneratorConfig};
use crate::error::ServiceError;

// ============================================================================
// Coder Reports
// ============================================================================

/// Per-coder line of a [`CoderReport`]
#[derive(Debug, Clone, Serialize)]
pub struct CoderSummary {
    pub coder: Coder,
    /// BMI rounded to 2 decimals
    pub bmi: f64,
    pub category: BmiCategory,
    pub diet_recommended: bool,
}

/// BMI overview of a group of coders
#[derive(Debug, Clone, Serialize)]
pub struct CoderReport {
    pub coders: Vec<CoderSummary>,
    pub worst: Option<Coder>,
    pub diet_recommended_count: usize,
}

impl CoderReport {
    /// Build a report; a coder with zero height fails the whole report
    pub fn build(coders: &[Coder], config: &BmiConfig) -> Result<Self, ServiceError> {
        let summaries = coders
            .iter()
            .zip(get_bmi_scores(coders))
            .map(|(coder, bmi)| -> Result<CoderSummary, ServiceError> {
                let diet_recommended =
                    is_diet_recommended_with(coder.weight(), coder.height(), config.diet_threshold)?;
                Ok(CoderSummary {
                    coder: *coder,
                    bmi,
                    category: coder.bmi_category(),
                    diet_recommended,
                })
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;

        let diet_recommended_count = summaries.iter().filter(|s| s.diet_recommended).count();
        let worst = find_coder_with_worst_bmi(coders).copied();

        info!(
            coders = coders.len(),
            diet_recommended_count,
            threshold = config.diet_threshold,
            "Coder report built"
        );

        Ok(Self {
            coders: summaries,
            worst,
            diet_recommended_count,
        })
    }
}

// ============================================================================
// Apartment Reports
// ============================================================================

/// Per-apartment line of an [`ApartmentReport`]
#[derive(Debug, Clone, Serialize)]
pub struct RatedApartment {
    pub apartment: Apartment,
    pub rating: i32,
}

/// Rating overview of a group of apartments
#[derive(Debug, Clone, Serialize)]
pub struct ApartmentReport {
    pub apartments: Vec<RatedApartment>,
    pub average_rating: f64,
    pub invalid_count: usize,
}

impl ApartmentReport {
    /// Build a report; fails for an empty list
    pub fn build(apartments: &[Apartment], rater: &ApartmentRater) -> Result<Self, ServiceError> {
        let average_rating = rater.average_rating(apartments)?;

        let rated: Vec<RatedApartment> = apartments
            .iter()
            .map(|apartment| RatedApartment {
                apartment: apartment.clone(),
                rating: rater.rate(apartment),
            })
            .collect();
        let invalid_count = rated.iter().filter(|r| r.rating == ERROR_RATING).count();

        info!(
            apartments = apartments.len(),
            average_rating,
            invalid_count,
            "Apartment report built"
        );

        Ok(Self {
            apartments: rated,
            average_rating,
            invalid_count,
        })
    }
}

/// Generate `count` apartments with the configured bounds
pub fn generate_apartments<R: Rng + ?Sized>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<Apartment>, ServiceError> {
    let generator = config.generator()?;
    let apartments = (0..count)
        .map(|_| generator.generate_with(&mut *rng))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count, "Apartments generated");
    Ok(apartments)
}
