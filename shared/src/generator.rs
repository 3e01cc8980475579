//! Synthetic apartment generation
//!
//! Apartments are drawn uniformly between a minimum and `MAX_MULTIPLIER`
//! times that minimum, for both the area and the price per square meter.
//! Bounds are taken as given; negative minimums are not rejected.

use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::apartment::Apartment;
use crate::errors::GeneratorError;

/// Ratio between the upper and lower generation bounds
pub const MAX_MULTIPLIER: f64 = 4.0;

/// [`MAX_MULTIPLIER`] for decimal prices
pub const PRICE_MULTIPLIER: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Default minimum area in square meters
pub const DEFAULT_MIN_AREA: f64 = 30.0;

/// Default minimum price per square meter
pub const DEFAULT_MIN_PRICE_PER_SQUARE_METER: Decimal = Decimal::from_parts(3000, 0, 0, false, 0);

const DEFAULT_MAX_PRICE_PER_SQUARE_METER: Decimal = Decimal::from_parts(12000, 0, 0, false, 0);

// Price per square meter is interpolated in steps of 1e-9 of the band.
const FRACTION_SCALE: u32 = 9;
const FRACTION_STEPS: i64 = 1_000_000_000;

/// Generates apartments with random area and price inside configured bounds
#[derive(Debug, Clone, PartialEq)]
pub struct RandomApartmentGenerator {
    min_area: f64,
    max_area: f64,
    min_price_per_square_meter: Decimal,
    max_price_per_square_meter: Decimal,
}

impl Default for RandomApartmentGenerator {
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_AREA,
            max_area: DEFAULT_MIN_AREA * MAX_MULTIPLIER,
            min_price_per_square_meter: DEFAULT_MIN_PRICE_PER_SQUARE_METER,
            max_price_per_square_meter: DEFAULT_MAX_PRICE_PER_SQUARE_METER,
        }
    }
}

impl RandomApartmentGenerator {
    /// Create a generator; fails only when the bounds themselves are not numbers
    /// the generator can work with
    pub fn new(min_area: f64, min_price_per_square_meter: Decimal) -> Result<Self, GeneratorError> {
        let max_area = min_area * MAX_MULTIPLIER;
        if !max_area.is_finite() {
            return Err(GeneratorError::NonFiniteArea { min_area, max_area });
        }

        let max_price_per_square_meter = min_price_per_square_meter
            .checked_mul(PRICE_MULTIPLIER)
            .ok_or(GeneratorError::PriceBoundOverflow(min_price_per_square_meter))?;

        Ok(Self {
            min_area,
            max_area,
            min_price_per_square_meter,
            max_price_per_square_meter,
        })
    }

    pub fn min_area(&self) -> f64 {
        self.min_area
    }

    pub fn max_area(&self) -> f64 {
        self.max_area
    }

    pub fn min_price_per_square_meter(&self) -> Decimal {
        self.min_price_per_square_meter
    }

    pub fn max_price_per_square_meter(&self) -> Decimal {
        self.max_price_per_square_meter
    }

    /// Generate an apartment using the thread-local RNG
    pub fn generate(&self) -> Result<Apartment, GeneratorError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate an apartment from the given random source
    ///
    /// The price is `area * price_per_square_meter`, with the area converted
    /// to a decimal first, so it lies between `area * min` and `area * max`
    /// per square meter. Fails when the area or the price does not fit in a
    /// decimal.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Apartment, GeneratorError> {
        let (low_area, high_area) = ordered(self.min_area, self.max_area);
        let area = (self.min_area + rng.gen::<f64>() * (self.max_area - self.min_area))
            .clamp(low_area, high_area);

        let fraction = Decimal::new(rng.gen_range(0..FRACTION_STEPS), FRACTION_SCALE);
        let spread = self.max_price_per_square_meter - self.min_price_per_square_meter;
        let (low_price, high_price) =
            ordered(self.min_price_per_square_meter, self.max_price_per_square_meter);
        // Rounding to cents must not leave the configured band.
        let price_per_square_meter = (self.min_price_per_square_meter + spread * fraction)
            .round_dp(2)
            .clamp(low_price, high_price);

        let decimal_area =
            Decimal::try_from(area).map_err(|_| GeneratorError::AreaNotRepresentable(area))?;
        let price = decimal_area
            .checked_mul(price_per_square_meter)
            .ok_or(GeneratorError::PriceOverflow {
                area,
                price_per_square_meter,
            })?;

        debug!(area, %price_per_square_meter, %price, "Apartment generated");
        Ok(Apartment::new(area, price))
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
