use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::validation::{Coordinates, StateCode, ValidationError};

// ============================================================================
// National Weather Service API Models
// ============================================================================
//
// Every field the provider sends is treated as optional so that a sparse
// record still renders with placeholders instead of failing to decode.
// `null` lists decode as empty and leaf values of an unexpected JSON type
// decode as absent.

fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertResponse {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: Option<AlertProperties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    #[serde(default, deserialize_with = "text")]
    pub event: Option<String>,
    #[serde(rename = "areaDesc", default, deserialize_with = "text")]
    pub area_desc: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub headline: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub properties: Option<PointsProperties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointsProperties {
    #[serde(default, deserialize_with = "text")]
    pub forecast: Option<String>,
}

impl PointsResponse {
    /// Forecast URL the grid point resolved to, if the provider sent one
    pub fn forecast_url(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.forecast.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub properties: Option<ForecastProperties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastProperties {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub periods: Vec<ForecastPeriod>,
}

impl ForecastResponse {
    pub fn periods(&self) -> &[ForecastPeriod] {
        self.properties
            .as_ref()
            .map(|p| p.periods.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ForecastPeriod {
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "number")]
    pub temperature: Option<f64>,
    #[serde(rename = "temperatureUnit", default, deserialize_with = "text")]
    pub temperature_unit: Option<String>,
    #[serde(rename = "windSpeed", default, deserialize_with = "text")]
    pub wind_speed: Option<String>,
    #[serde(rename = "windDirection", default, deserialize_with = "text")]
    pub wind_direction: Option<String>,
    #[serde(rename = "shortForecast", default, deserialize_with = "text")]
    pub short_forecast: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    #[schemars(
        description = "Two-letter state code (e.g. CA, NY)",
        length(min = 2, max = 2)
    )]
    pub state: String,
}

impl GetAlertsRequest {
    pub fn validate(&self) -> Result<StateCode, ValidationError> {
        StateCode::parse(&self.state)
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    #[schemars(description = "Latitude of the location", range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[schemars(description = "Longitude of the location", range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GetForecastRequest {
    pub fn validate(&self) -> Result<Coordinates, ValidationError> {
        Coordinates::parse(self.latitude, self.longitude)
    }
}
