//! Random apartment generator integration tests
//!
//! Each case re-seeds the RNG so failures are reproducible.

use fake::Fake;
use healthy_estate_shared::{
    Apartment, GeneratorError, RandomApartmentGenerator, MAX_MULTIPLIER, PRICE_MULTIPLIER,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use rust_decimal::Decimal;

const TRIALS: usize = 10;

fn assert_within_bounds(apartment: &Apartment, min_area: f64, min_price_per_square_meter: Decimal) {
    let max_area = min_area * MAX_MULTIPLIER;
    let max_price_per_square_meter = PRICE_MULTIPLIER * min_price_per_square_meter;
    let area = Decimal::try_from(apartment.area()).unwrap();

    assert!(apartment.area() >= min_area, "{:?}", apartment);
    assert!(apartment.area() <= max_area, "{:?}", apartment);
    assert!(apartment.price() >= area * min_price_per_square_meter, "{:?}", apartment);
    assert!(apartment.price() <= area * max_price_per_square_meter, "{:?}", apartment);
}

#[test]
fn default_generator_respects_bounds() {
    let generator = RandomApartmentGenerator::default();

    for _ in 0..TRIALS {
        let apartment = generator.generate().unwrap();
        assert_within_bounds(&apartment, 30.0, Decimal::from(3000));
    }
}

#[rstest]
#[case(11)]
#[case(23)]
#[case(37)]
#[case(41)]
#[case(59)]
fn custom_generator_respects_bounds(#[case] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let min_area = f64::from((20..30).fake_with_rng::<i32, _>(&mut rng));
    let min_price_per_square_meter = Decimal::from((3000..5000).fake_with_rng::<i32, _>(&mut rng));
    let generator = RandomApartmentGenerator::new(min_area, min_price_per_square_meter).unwrap();

    for _ in 0..TRIALS {
        let apartment = generator.generate_with(&mut rng).unwrap();
        assert_within_bounds(&apartment, min_area, min_price_per_square_meter);
    }
}

#[rstest]
#[case(5)]
#[case(8)]
#[case(13)]
fn possibly_negative_config_still_generates(#[case] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let min_area = f64::from((-20..30).fake_with_rng::<i32, _>(&mut rng));
    let min_price_per_square_meter = Decimal::from((-3000..5000).fake_with_rng::<i32, _>(&mut rng));
    let generator = RandomApartmentGenerator::new(min_area, min_price_per_square_meter).unwrap();

    for _ in 0..TRIALS {
        let apartment = generator.generate_with(&mut rng).unwrap();
        // Only positive configurations promise ordered bounds
        if min_area > 0.0 && min_price_per_square_meter > Decimal::ZERO {
            assert_within_bounds(&apartment, min_area, min_price_per_square_meter);
        } else {
            assert!(apartment.area().is_finite());
        }
    }
}

#[rstest]
#[case(1e12, 100_000_000_000_000_000)]
#[case(1e20, 1_000_000_000)]
fn oversized_config_reports_price_overflow(#[case] min_area: f64, #[case] min_price: i64) {
    let generator = RandomApartmentGenerator::new(min_area, Decimal::from(min_price)).unwrap();
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..TRIALS {
        let err = generator.generate_with(&mut rng).unwrap_err();
        assert!(matches!(err, GeneratorError::PriceOverflow { .. }), "{:?}", err);
    }
}
