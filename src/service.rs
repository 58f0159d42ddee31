use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::Config;
use crate::constants::SERVER_NAME;
use crate::diagnostics::DiagnosticLog;
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{AlertResponse, ForecastResponse, GetAlertsRequest, GetForecastRequest, PointsResponse};
use crate::upstream::{Fetch, NwsClient};
use crate::validation::{Coordinates, StateCode};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<NwsClient>,
    log: DiagnosticLog,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &Config, log: DiagnosticLog) -> Result<Self> {
        let client = NwsClient::new(config, log.clone())?;

        Ok(Self {
            client: Arc::new(client),
            log,
            tool_router: Self::tool_router(),
        })
    }

    /// Looks up active alerts for a state and renders them as text
    pub async fn alerts_text(&self, state: &StateCode) -> String {
        let url = format!(
            "{}/alerts?area={}",
            self.client.base_url(),
            urlencoding::encode(state.as_str())
        );

        match self.client.fetch::<AlertResponse>(&url).await {
            Fetch::Unavailable => "Failed to retrieve alerts data".to_string(),
            Fetch::Success(alerts) => format_alerts(state, &alerts.features),
        }
    }

    /// Resolves the grid point for the coordinates, then fetches and renders its forecast
    pub async fn forecast_text(&self, coordinates: &Coordinates) -> String {
        let points_url = format!("{}/points/{}", self.client.base_url(), coordinates.grid_key());

        let points = match self.client.fetch::<PointsResponse>(&points_url).await {
            Fetch::Success(points) => points,
            Fetch::Unavailable => {
                return format!(
                    "Failed to retrieve grid point data for coordinates: {}. \
                     This location may not be supported by the NWS API (only US locations are supported).",
                    coordinates
                );
            }
        };

        let Some(forecast_url) = points.forecast_url() else {
            return "Failed to get forecast URL from grid point data".to_string();
        };

        match self.client.fetch::<ForecastResponse>(forecast_url).await {
            Fetch::Unavailable => "Failed to retrieve forecast data".to_string(),
            Fetch::Success(forecast) => format_forecast(coordinates, forecast.periods()),
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and forecasts for US locations, powered by the National Weather Service API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(name = "get-alerts", description = "Get weather alerts for a state")]
    pub async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let state = request.validate()?;
        self.log.record(format!("Get alerts tool called with state: {}", request.state));
        tracing::info!("Getting alerts for state: {}", state);

        let text = self.alerts_text(&state).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the weather forecast for a coordinate pair
    #[tool(name = "get-forecast", description = "Get weather forecast for a location")]
    pub async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        let coordinates = request.validate()?;
        self.log.record(format!(
            "Get forecast tool called with lat: {}, lon: {}",
            request.latitude, request.longitude
        ));
        tracing::info!("Getting forecast for coordinates: {}", coordinates);

        let text = self.forecast_text(&coordinates).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
