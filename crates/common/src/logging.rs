//! Logging setup for the staking witness tools, with optional OpenTelemetry export.
use std::env;

use opentelemetry::{trace::TracerProvider, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use tracing::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Environment variable holding the OTLP collector endpoint.
pub const OTLP_URL_ENVVAR: &str = "STAKING_WITNESS_OTLP_URL";

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "STAKING_WITNESS_SVC_LABEL";

/// Configuration for the logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the service in logs.
    whoami: String,

    /// The OpenTelemetry URL for exporting traces.
    otel_url: Option<String>,

    /// Whether log lines should carry the source file and line number.
    with_location: bool,
}

impl LoggerConfig {
    /// Creates a new instance with only the whoami string set.
    pub const fn new(whoami: String) -> Self {
        Self {
            whoami,
            otel_url: None,
            with_location: false,
        }
    }

    /// Creates a new instance whose whoami string is derived from `base` and the service
    /// label in the environment, if any.
    pub fn with_base_name(base: &str) -> Self {
        Self::new(get_whoami_string(base))
    }

    /// Sets the OpenTelemetry URL.
    pub fn set_otlp_url(&mut self, url: String) {
        self.otel_url = Some(url);
    }

    /// Enables or disables file and line numbers in log lines.
    pub fn set_with_location(&mut self, with_location: bool) {
        self.with_location = with_location;
    }

    /// Returns the whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }

    /// Returns the OpenTelemetry URL, if configured.
    pub fn otlp_url(&self) -> Option<&str> {
        self.otel_url.as_deref()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(staking-witness)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// Logs go to stderr so that the output of the binaries stays machine-readable.
///
/// # Panics
///
/// If an OTLP URL is configured but the exporter cannot be built, or if a global subscriber has
/// already been installed.
pub fn init(config: LoggerConfig) {
    let filt = tracing_subscriber::EnvFilter::from_default_env();

    let stderr_sub = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(config.with_location)
                .with_line_number(config.with_location),
        )
        .with_filter(filt);

    if let Some(otel_url) = &config.otel_url {
        let resource = Resource::builder()
            .with_attribute(KeyValue::new("service.name", config.whoami.clone()))
            .build();

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(otel_url)
            .build()
            .expect("must be able to initialize exporter");

        let tp = opentelemetry_sdk::trace::SdkTracerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(exporter)
            .build();

        let tracer = tp.tracer("staking-witness");

        let otel_sub = tracing_opentelemetry::layer().with_tracer(tracer);

        tracing_subscriber::registry()
            .with(stderr_sub)
            .with(otel_sub)
            .init();
    } else {
        tracing_subscriber::registry().with(stderr_sub).init();
    }

    info!(whoami = %config.whoami, "logging started");
}

/// Gets the OTLP URL from the standard envvar.
pub fn get_otlp_url_from_env() -> Option<String> {
    env::var(OTLP_URL_ENVVAR).ok()
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    format_whoami(base, get_service_label_from_env().as_deref())
}

fn format_whoami(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
