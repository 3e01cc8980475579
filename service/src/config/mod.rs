//! Configuration management
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HE__)

use anyhow::Result;
use healthy_estate_shared::{
    ApartmentRater, GeneratorError, RandomApartmentGenerator, DEFAULT_MIN_AREA,
    DEFAULT_MIN_PRICE_PER_SQUARE_METER, DEFAULT_RATING_THRESHOLDS, DIET_RECOMMENDED_BMI,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::ServiceError;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub bmi: BmiConfig,
    #[serde(default)]
    pub rating: RatingConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// BMI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiConfig {
    /// BMI at and above which a diet is recommended
    pub diet_threshold: f64,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            diet_threshold: DIET_RECOMMENDED_BMI,
        }
    }
}

/// Apartment rating configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Price-per-square-meter thresholds, one per rating step
    pub thresholds: Vec<Decimal>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_RATING_THRESHOLDS.to_vec(),
        }
    }
}

impl RatingConfig {
    pub fn rater(&self) -> ApartmentRater {
        ApartmentRater::new(self.thresholds.clone())
    }
}

/// Random apartment generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub min_area: f64,
    pub min_price_per_square_meter: Decimal,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_AREA,
            min_price_per_square_meter: DEFAULT_MIN_PRICE_PER_SQUARE_METER,
        }
    }
}

impl GeneratorConfig {
    pub fn generator(&self) -> Result<RandomApartmentGenerator, GeneratorError> {
        RandomApartmentGenerator::new(self.min_area, self.min_price_per_square_meter)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    pub filter: String,
    /// Emit JSON lines instead of pretty output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "healthy_estate=info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HE__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}", env);
        Self::load_from(Path::new(&config_file))
    }

    /// Load configuration with an explicit config file (extension optional)
    pub fn load_from(config_file: &Path) -> Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from the config file, if present
            .add_source(config::File::from(config_file).required(false))
            // Override with environment variables (HE__ prefix)
            // e.g., HE__GENERATOR__MIN_AREA=40 sets generator.min_area
            .add_source(
                config::Environment::with_prefix("HE")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("rating.thresholds"),
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the calculators cannot work with
    ///
    /// Negative generator bounds are accepted; only bounds that cannot be
    /// represented are rejected.
    pub fn validate(&self) -> Result<(), ServiceError> {
        let threshold = self.bmi.diet_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ServiceError::Validation(format!(
                "bmi.diet_threshold must be a positive number, got {}",
                threshold
            )));
        }

        if self.rating.thresholds.is_empty() {
            return Err(ServiceError::Validation(
                "rating.thresholds must contain at least one value".to_string(),
            ));
        }
        if let Some(bad) = self.rating.thresholds.iter().find(|t| **t <= Decimal::ZERO) {
            return Err(ServiceError::Validation(format!(
                "rating.thresholds must be positive, got {}",
                bad
            )));
        }

        self.generator.generator()?;

        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
