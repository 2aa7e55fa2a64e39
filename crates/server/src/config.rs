use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse the contents of a config file. Malformed input yields defaults.
pub fn parse_config(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}; using default flags");
            FeatureFlags::default()
        }
    }
}

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, flags take their defaults
/// (integrations off, demo login on).
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let flags = parse_config(&contents);
            eprintln!("[config] Feature flags: {flags:?}");
            flags
        }
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}); using default flags");
            FeatureFlags::default()
        }
    });
}

/// Get the loaded feature flags. Returns defaults if
/// `load_feature_flags()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        records_db: false,
        demo_login: true,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_features_table() {
        let flags = parse_config("[features]\nrecords_db = true\ndemo_login = false\n");
        assert!(flags.records_db);
        assert!(!flags.demo_login);
        assert!(!flags.telemetry);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(parse_config("features = ["), FeatureFlags::default());
    }

    #[test]
    fn empty_file_keeps_demo_login_on() {
        assert!(parse_config("").demo_login);
    }
}
