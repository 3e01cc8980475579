//! Report integration tests against the checked-in configuration

use healthy_estate::config::AppConfig;
use healthy_estate::reports::{generate_apartments, ApartmentReport, CoderReport};
use healthy_estate_shared::{Apartment, Coder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use std::path::PathBuf;

fn development_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("config")
        .join("development")
}

#[fixture]
fn config() -> AppConfig {
    AppConfig::load_from(&development_config_path()).expect("development config should load")
}

#[test]
fn development_config_file_is_checked_in() {
    assert!(development_config_path().with_extension("toml").is_file());
}

#[rstest]
fn development_config_overrides_logging(config: AppConfig) {
    // The checked-in file turns on debug output for both crates
    assert_ne!(config.logging.filter, AppConfig::default().logging.filter);
    assert_eq!(
        config.logging.filter,
        "healthy_estate=debug,healthy_estate_shared=debug"
    );
    assert!(!config.logging.json);
}

#[rstest]
fn development_config_matches_defaults(config: AppConfig) {
    let defaults = AppConfig::default();
    assert_eq!(config.bmi.diet_threshold, defaults.bmi.diet_threshold);
    assert_eq!(config.rating.thresholds, defaults.rating.thresholds);
    assert_eq!(config.generator.min_area, defaults.generator.min_area);
    assert_eq!(
        config.generator.min_price_per_square_meter,
        defaults.generator.min_price_per_square_meter
    );
}

#[rstest]
fn coder_report_serializes(config: AppConfig) {
    let coders = vec![
        Coder::new(1.80, 60.0),
        Coder::new(1.82, 98.0),
        Coder::new(1.82, 64.7),
    ];
    let report = CoderReport::build(&coders, &config.bmi).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["diet_recommended_count"], 1);
    assert_eq!(json["worst"]["weight"], 98.0);
    assert_eq!(json["coders"][1]["bmi"], 29.59);
    assert_eq!(json["coders"][1]["category"], "overweight");
}

#[rstest]
fn apartment_report_for_fixture(config: AppConfig) {
    let apartments = vec![
        Apartment::new(122.0, Decimal::from(900_000)),
        Apartment::new(66.0, Decimal::from(567_000)),
        Apartment::new(36.0, Decimal::from(1_260_000)),
        Apartment::new(96.0, Decimal::from(1_260_000)),
        Apartment::new(116.0, Decimal::from(677_000)),
        Apartment::new(82.0, Decimal::from(720_000)),
        Apartment::new(280.0, Decimal::from(999_000)),
    ];
    let report = ApartmentReport::build(&apartments, &config.rating.rater()).unwrap();

    assert_eq!(report.invalid_count, 0);
    assert_eq!((report.average_rating * 10_000.0).round() / 10_000.0, 1.2857);
}

#[rstest]
#[case(1, 10)]
#[case(2, 50)]
fn generated_apartments_rate_validly(config: AppConfig, #[case] seed: u64, #[case] count: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let apartments = generate_apartments(count, &config.generator, &mut rng).unwrap();
    let report = ApartmentReport::build(&apartments, &config.rating.rater()).unwrap();

    assert_eq!(report.apartments.len(), count);
    assert_eq!(report.invalid_count, 0);
    assert!(report.apartments.iter().all(|r| (0..=2).contains(&r.rating)));
}
