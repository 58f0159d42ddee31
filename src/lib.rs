//! MCP server exposing National Weather Service alerts and forecasts as tools.

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod formatters;
pub mod models;
pub mod service;
pub mod upstream;
pub mod validation;

pub use config::Config;
pub use diagnostics::DiagnosticLog;
pub use service::Weather;
