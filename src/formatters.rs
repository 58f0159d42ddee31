use crate::models::{AlertFeature, AlertProperties, ForecastPeriod};
use crate::validation::{Coordinates, StateCode};

const SEPARATOR: &str = "---";

/// Falls back to `placeholder` when the field is missing or empty
fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

/// Formats a single alert as five field lines followed by a separator
pub fn format_alert(feature: &AlertFeature) -> String {
    let default = AlertProperties::default();
    let props = feature.properties.as_ref().unwrap_or(&default);
    [
        format!("Event: {}", or_placeholder(&props.event, "Unknown")),
        format!("Area: {}", or_placeholder(&props.area_desc, "Unknown")),
        format!("Severity: {}", or_placeholder(&props.severity, "Unknown")),
        format!("Status: {}", or_placeholder(&props.status, "Unknown")),
        format!("Headline: {}", or_placeholder(&props.headline, "No headline")),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

/// Formats weather alerts for a state into a human-readable string
pub fn format_alerts(state: &StateCode, features: &[AlertFeature]) -> String {
    if features.is_empty() {
        return format!("No active alerts for {}", state);
    }

    let alerts: Vec<String> = features.iter().map(format_alert).collect();
    format!("Active alerts for {}:\n\n{}", state, alerts.join("\n"))
}

/// Formats a single forecast period as four lines followed by a separator
pub fn format_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .map(|t| t.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    [
        format!("{}:", or_placeholder(&period.name, "Unknown")),
        format!(
            "Temperature: {}\u{00b0}{}",
            temperature,
            or_placeholder(&period.temperature_unit, "F")
        ),
        format!(
            "Wind: {} {}",
            or_placeholder(&period.wind_speed, "Unknown"),
            or_placeholder(&period.wind_direction, "")
        ),
        or_placeholder(&period.short_forecast, "No forecast available").to_string(),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

/// Formats NWS forecast periods under a header naming the requested coordinates
pub fn format_forecast(coordinates: &Coordinates, periods: &[ForecastPeriod]) -> String {
    if periods.is_empty() {
        return "No forecast periods available".to_string();
    }

    let formatted: Vec<String> = periods.iter().map(format_period).collect();
    format!("Forecast for {}:\n\n{}", coordinates, formatted.join("\n"))
}
