// ABOUTME: Logging configuration and tracing-subscriber setup for the engine and CLI
// ABOUTME: Reads RUST_LOG/LOG_FORMAT style variables and writes structured logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors

//! Structured logging configuration
//!
//! Logs always go to stderr so the CLI can print JSON results on stdout.
//! Production environments always record source location and thread.

use anyhow::Result;
use std::env;
use std::io;
use swinglab_core::constants::service_names;
use tracing::{info, Level};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Crates whose logs follow the configured level
const ENGINE_TARGETS: [&str; 4] = [
    "swinglab",
    "swinglab_core",
    "swinglab_intelligence",
    "swinglab_providers",
];

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shipping
    Json,
    /// Multi-line human format
    Pretty,
    /// Single-line human format
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unrecognised is `Pretty`
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Where and how the engine logs
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to the engine crates
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Record source file and line
    pub include_location: bool,
    /// Record thread ids and names
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Name reported in the startup event
    pub service_name: String,
    /// Version reported in the startup event
    pub service_version: String,
    /// Deployment environment name
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::SWINGLAB_ENGINE.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: DEFAULT_ENVIRONMENT.to_owned(),
        }
    }
}

/// Whether a flag variable is set at all
fn env_flag(name: &str) -> bool {
    env::var_os(name).is_some()
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `SERVICE_NAME`,
    /// `SERVICE_VERSION` and the `LOG_INCLUDE_*` flags
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: production || env_flag("LOG_INCLUDE_LOCATION"),
            include_thread: production || env_flag("LOG_INCLUDE_THREAD"),
            include_spans: env_flag("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: env::var("SERVICE_VERSION").unwrap_or(defaults.service_version),
            environment,
        }
    }

    /// Override the service name
    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Override the level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// `RUST_LOG` (or the configured level) plus a directive per engine crate
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(&directive),
        );
        ENGINE_TARGETS.iter().fold(base, |filter, target| {
            let directive = format!("{target}={}", self.level)
                .parse()
                .unwrap_or_else(|_| Level::INFO.into());
            filter.add_directive(directive)
        })
    }

    fn output_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let spans = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_span_events(spans);

        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber and log the effective settings
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.output_layer())
            .with(self.env_filter())
            .try_init()?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            log.location = self.include_location,
            log.spans = self.include_spans,
            "Logging initialized"
        );
        Ok(())
    }
}
