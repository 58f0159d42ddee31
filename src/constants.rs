/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Media type the NWS API serves its GeoJSON documents as
pub const GEO_JSON: &str = "application/geo+json";

/// Diagnostic log written next to the working directory unless overridden
pub const DEFAULT_LOG_FILE: &str = "weather-server.log";

/// Name advertised in the MCP server info
pub const SERVER_NAME: &str = "weather";
