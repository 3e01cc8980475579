//! Healthy Estate Service Library
//!
//! Configuration, logging, and report building on top of the
//! `healthy-estate-shared` calculators.

pub mod config;
pub mod error;
pub mod reports;
pub mod telemetry;
