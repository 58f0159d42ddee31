use std::fmt;
use std::ops::RangeInclusive;

use rmcp::ErrorData as McpError;
use serde_json::json;
use thiserror::Error;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Rejection raised before any tool logic runs
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("state must be exactly 2 characters, got {0}")]
    StateLength(usize),
    #[error("latitude must be between -90 and 90, got {0}")]
    Latitude(f64),
    #[error("longitude must be between -180 and 180, got {0}")]
    Longitude(f64),
}

impl ValidationError {
    fn field(&self) -> &'static str {
        match self {
            ValidationError::StateLength(_) => "state",
            ValidationError::Latitude(_) => "latitude",
            ValidationError::Longitude(_) => "longitude",
        }
    }
}

impl From<ValidationError> for McpError {
    fn from(err: ValidationError) -> Self {
        McpError::invalid_params(err.to_string(), Some(json!({ "field": err.field() })))
    }
}

/// Two-character state code, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCode(String);

impl StateCode {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        // length in UTF-16 code units, matching how JSON Schema clients count
        let len = raw.encode_utf16().count();
        if len != 2 {
            return Err(ValidationError::StateLength(len));
        }
        Ok(Self(raw.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A latitude/longitude pair inside the valid geographic range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn parse(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        // RangeInclusive::contains rejects NaN as well
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(ValidationError::Latitude(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(ValidationError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// `lat,lon` rounded to four decimals, as used by the points endpoint
    pub fn grid_key(&self) -> String {
        format!("{},{}", fixed4(self.latitude), fixed4(self.longitude))
    }
}

/// Four-decimal rendering that breaks exact halfway cases away from zero.
///
/// A value sits exactly halfway between two four-decimal neighbours only
/// when it is an odd multiple of 1/32, so those are the only inputs that
/// need to bypass the round-half-to-even of `{:.4}`.
fn fixed4(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    let scaled = magnitude * 32.0;
    if scaled.fract() != 0.0 || scaled % 2.0 != 1.0 {
        return format!("{:.4}", value);
    }

    let units = (magnitude * 10_000.0).ceil() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:04}", sign, units / 10_000, units % 10_000)
}

/// Renders the coordinates as the caller supplied them
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
