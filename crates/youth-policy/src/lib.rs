//! Youth support programme recommendations for Seoul residents.

pub mod config;
pub mod error;
pub mod recommender;
pub mod telemetry;
