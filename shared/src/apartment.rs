//! Apartment rating
//!
//! An apartment is rated by its price per square meter against an ascending
//! threshold table: the rating is how many thresholds the ratio reaches.
//! With the default table `[6000, 8000]`:
//!
//! | price per m²      | rating |
//! |-------------------|--------|
//! | below 6000        | 0      |
//! | 6000 up to 8000   | 1      |
//! | 8000 and above    | 2      |
//!
//! Apartments with a non-positive area or price get [`ERROR_RATING`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::RatingError;

/// Rating returned for apartments that cannot be rated
pub const ERROR_RATING: i32 = -1;

/// Default price-per-square-meter thresholds
pub const DEFAULT_RATING_THRESHOLDS: [Decimal; 2] = [
    Decimal::from_parts(6000, 0, 0, false, 0),
    Decimal::from_parts(8000, 0, 0, false, 0),
];

/// A real-estate unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    /// Area in square meters
    area: f64,
    price: Decimal,
}

impl Apartment {
    pub fn new(area: f64, price: Decimal) -> Self {
        Self { area, price }
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Whether both area and price are strictly positive
    pub fn is_valid(&self) -> bool {
        self.area > 0.0 && self.area.is_finite() && self.price > Decimal::ZERO
    }

    /// Price divided by area, if the apartment is valid
    ///
    /// Also `None` when the exact ratio falls outside the decimal range, as
    /// for an area far below a square millimeter.
    pub fn price_per_square_meter(&self) -> Option<Decimal> {
        if !self.is_valid() {
            return None;
        }
        let area = Decimal::try_from(self.area).ok()?;
        self.price.checked_div(area)
    }
}

/// Rates apartments against a configurable threshold table
#[derive(Debug, Clone, PartialEq)]
pub struct ApartmentRater {
    thresholds: Vec<Decimal>,
}

impl Default for ApartmentRater {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_RATING_THRESHOLDS.to_vec(),
        }
    }
}

impl ApartmentRater {
    /// Create a rater; thresholds are sorted ascending
    pub fn new(mut thresholds: Vec<Decimal>) -> Self {
        thresholds.sort();
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &[Decimal] {
        &self.thresholds
    }

    /// Rate a single apartment, or [`ERROR_RATING`] if it is invalid
    pub fn rate(&self, apartment: &Apartment) -> i32 {
        rate_with(apartment, &self.thresholds)
    }

    /// Mean rating over all apartments; invalid ones count as [`ERROR_RATING`]
    pub fn average_rating(&self, apartments: &[Apartment]) -> Result<f64, RatingError> {
        average_with(apartments, &self.thresholds)
    }
}

/// Rate an apartment with the default threshold table
pub fn rate_apartment(apartment: &Apartment) -> i32 {
    rate_with(apartment, &DEFAULT_RATING_THRESHOLDS)
}

/// Average rating with the default threshold table
pub fn calculate_average_rating(apartments: &[Apartment]) -> Result<f64, RatingError> {
    average_with(apartments, &DEFAULT_RATING_THRESHOLDS)
}

fn rate_with(apartment: &Apartment, thresholds: &[Decimal]) -> i32 {
    if !apartment.is_valid() {
        warn!(area = apartment.area, price = %apartment.price, "Apartment cannot be rated");
        return ERROR_RATING;
    }

    let reached = match apartment.price_per_square_meter() {
        Some(ratio) => thresholds.iter().filter(|threshold| ratio >= **threshold).count(),
        // Ratio out of decimal range; floating point still orders it correctly
        None => {
            let ratio = apartment.price.to_f64().unwrap_or(f64::MAX) / apartment.area;
            thresholds
                .iter()
                .filter(|threshold| threshold.to_f64().map_or(false, |t| ratio >= t))
                .count()
        }
    };
    let rating = i32::try_from(reached).unwrap_or(i32::MAX);
    debug!(area = apartment.area, price = %apartment.price, rating, "Apartment rated");
    rating
}

fn average_with(apartments: &[Apartment], thresholds: &[Decimal]) -> Result<f64, RatingError> {
    if apartments.is_empty() {
        return Err(RatingError::EmptyApartmentList);
    }

    let sum: i64 = apartments
        .iter()
        .map(|apartment| i64::from(rate_with(apartment, thresholds)))
        .sum();
    Ok(sum as f64 / apartments.len() as f64)
}
