use shared_types::{AppConfig, AppError};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "AURA_CONFIG";

/// Environment variable overriding `session.login_delay_ms`.
pub const LOGIN_DELAY_ENV: &str = "AURA_LOGIN_DELAY_MS";

/// Parse and validate the contents of a config file.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig =
        toml::from_str(contents).map_err(|e| AppError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// The config file location: `$AURA_CONFIG` or `config.toml`.
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_PATH))
}

/// Read a config file, falling back to defaults when it is missing or
/// invalid.
pub fn read_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "No config file, using defaults");
            AppConfig::default()
        }
    }
}

/// Apply a raw `AURA_LOGIN_DELAY_MS` value. Unparseable values are ignored.
pub fn apply_login_delay_override(config: &mut AppConfig, raw: Option<&str>) {
    let Some(raw) = raw else {
        return;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) => config.session.login_delay_ms = ms,
        Err(_) => tracing::warn!(value = raw, "Ignoring invalid AURA_LOGIN_DELAY_MS"),
    }
}

/// Load `.env`, read the config file, apply environment overrides and cache
/// the result. Only the first call has any effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = read_config(&config_path());
        let delay = std::env::var(LOGIN_DELAY_ENV).ok();
        apply_login_delay_override(&mut config, delay.as_deref());
        tracing::info!(
            credentials = config.credentials.len(),
            storage_key = %config.session.storage_key,
            login_delay_ms = config.session.login_delay_ms,
            "Config loaded"
        );
        config
    })
}

/// The loaded config, or defaults if `load_config()` has not run yet.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
