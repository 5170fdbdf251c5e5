use chrono::FixedOffset;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_FLIGHT_DATE_UTC_OFFSET: &str = "+00:00";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Offset used to turn a `departure_date` filter into a UTC range.
    pub flight_date_offset: FixedOffset,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let offset = std::env::var("FLIGHT_DATE_UTC_OFFSET")
            .unwrap_or_else(|_| DEFAULT_FLIGHT_DATE_UTC_OFFSET.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            flight_date_offset: parse_utc_offset(&offset)?,
        })
    }
}

/// Parses an offset such as `+02:00` or `-05:30`.
fn parse_utc_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    value
        .parse::<FixedOffset>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "FLIGHT_DATE_UTC_OFFSET".to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
