use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, Status, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use opentelemetry_sdk::{logs::SdkLoggerProvider, trace::SdkTracerProvider, Resource};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::jwt::Claims;

const SERVICE: &str = "acharya-portal";

static LOGGER_PROVIDER: OnceLock<SdkLoggerProvider> = OnceLock::new();

/// Runtime the gRPC exporters connect on. The serve closure can run before
/// a Tokio runtime is entered, and tonic needs one to spawn its channel.
static EXPORT_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Where and how to export, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub endpoint: String,
    pub service_name: String,
    pub environment: String,
}

impl ExportSettings {
    /// `None` when `OTEL_EXPORTER_OTLP_ENDPOINT` is unset or blank.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .filter(|e| !e.trim().is_empty())?;
        Some(Self {
            endpoint,
            service_name: std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| SERVICE.into()),
            environment: std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".into()),
        })
    }

    fn uses_tls(&self) -> bool {
        self.endpoint.starts_with("https://")
    }

    fn resource(&self) -> Resource {
        Resource::builder()
            .with_service_name(self.service_name.clone())
            .with_attribute(KeyValue::new("service.version", env!("CARGO_PKG_VERSION")))
            .with_attribute(KeyValue::new("deployment.environment", self.environment.clone()))
            .build()
    }
}

/// Export portal traces and `log` records over OTLP.
///
/// Dioxus installs the tracing subscriber; this only wires the exporters.
/// Nothing here can stop the portal from starting: a missing endpoint or
/// a failed exporter is reported on stderr and export stays off.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Some(settings) = ExportSettings::from_env() else {
        eprintln!("OTEL_EXPORTER_OTLP_ENDPOINT not set, portal telemetry off");
        return;
    };

    match install(&settings) {
        Ok(()) => eprintln!("Portal telemetry exporting to {}", settings.endpoint),
        Err(e) => eprintln!("Portal telemetry off: {e}"),
    }
}

fn export_runtime() -> Result<&'static tokio::runtime::Runtime, String> {
    if let Some(rt) = EXPORT_RUNTIME.get() {
        return Ok(rt);
    }
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(|e| format!("export runtime: {e}"))?;
    Ok(EXPORT_RUNTIME.get_or_init(|| rt))
}

fn tls() -> opentelemetry_otlp::tonic_types::transport::ClientTlsConfig {
    opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots()
}

fn install(settings: &ExportSettings) -> Result<(), String> {
    let _entered = export_runtime()?.enter();
    let resource = settings.resource();

    let mut spans = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(settings.endpoint.clone());
    if settings.uses_tls() {
        spans = spans.with_tls_config(tls());
    }
    let spans = spans.build().map_err(|e| format!("span exporter: {e}"))?;
    global::set_tracer_provider(
        SdkTracerProvider::builder()
            .with_batch_exporter(spans)
            .with_resource(resource.clone())
            .build(),
    );

    let mut logs = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(settings.endpoint.clone());
    if settings.uses_tls() {
        logs = logs.with_tls_config(tls());
    }
    let logs = logs.build().map_err(|e| format!("log exporter: {e}"))?;
    let provider = LOGGER_PROVIDER.get_or_init(|| {
        SdkLoggerProvider::builder()
            .with_batch_exporter(logs)
            .with_resource(resource)
            .build()
    });

    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => eprintln!("log bridge skipped, a logger is already installed"),
    }
    Ok(())
}

/// Which part of the portal a request path belongs to.
fn surface(path: &str) -> &'static str {
    match path.split('/').nth(1).unwrap_or("") {
        "" | "about" | "faculty" | "gallery" | "notices" | "contact" | "admissions" | "fees" => {
            "marketing"
        }
        "auth" | "login" => "auth",
        "dashboard" => "dashboard",
        "api" => "server_fn",
        "health" => "health",
        "assets" | "wasm" => "static",
        _ => "other",
    }
}

/// Tower layer that opens one server span per portal request, tagged with
/// the surface, the request id and the signed-in role when there is one.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(SERVICE);
        let method = req.method().as_str().to_string();
        let path = req.uri().path().to_string();
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.request_id", header("x-request-id")),
            KeyValue::new("portal.surface", surface(&path)),
        ];
        match req.extensions().get::<Claims>() {
            Some(claims) => {
                attributes.push(KeyValue::new("user.id", claims.sub.clone()));
                attributes.push(KeyValue::new("user.role", claims.role.clone()));
            }
            None => attributes.push(KeyValue::new("user.role", "anonymous")),
        }

        let span = tracer
            .span_builder(format!("{method} {path}"))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);
        let cx = Context::current_with_span(span);

        let mut inner = self.inner.clone();
        let future = {
            let _attached = cx.clone().attach();
            inner.call(req)
        };

        Box::pin(async move {
            let response = future.await?;
            let status = response.status();
            let span = cx.span();
            span.set_attribute(KeyValue::new("http.status_code", i64::from(status.as_u16())));
            if status.is_server_error() {
                span.set_status(Status::error(status.to_string()));
            }
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_surfaces() {
        assert_eq!(surface("/"), "marketing");
        assert_eq!(surface("/fees"), "marketing");
        assert_eq!(surface("/login"), "auth");
        assert_eq!(surface("/dashboard"), "dashboard");
        assert_eq!(surface("/health"), "health");
        assert_eq!(surface("/api/get_session"), "server_fn");
        assert_eq!(surface("/library"), "other");
    }

    #[test]
    fn https_endpoints_use_tls() {
        let settings = ExportSettings {
            endpoint: "https://collector.example:4317".into(),
            service_name: SERVICE.into(),
            environment: "test".into(),
        };
        assert!(settings.uses_tls());
        let plain = ExportSettings {
            endpoint: "http://localhost:4317".into(),
            ..settings
        };
        assert!(!plain.uses_tls());
    }
}
