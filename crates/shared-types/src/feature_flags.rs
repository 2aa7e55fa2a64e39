use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Integrations default to `false`; the demo
/// role-selection gate defaults to `true` so a fresh checkout is usable
/// without any identity backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Look profiles up in Postgres. When off the records collaborator
    /// answers `NotFound` and dashboards fall back to role labels.
    #[serde(default)]
    pub records_db: bool,
    /// Show the demo role cards on the auth screen.
    #[serde(default = "enabled")]
    pub demo_login: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            telemetry: false,
            records_db: false,
            demo_login: true,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
