//! Typed application configuration parsed from environment variables.
//!
//! Every knob has a default except the identity provider API key. Parsing goes
//! through a lookup function so tests can feed a map instead of mutating the
//! process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

use time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 14;
/// Longest accepted session lifetime (10 years).
pub const MAX_SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 365 * 10;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Hosted identity provider settings (Firebase web app config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: Option<String>,
    pub auth_domain: Option<String>,
    pub app_id: Option<String>,
    /// REST base URL, without trailing slash.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub firebase: FirebaseConfig,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
    pub session_ttl: Duration,
    pub sweep_interval_secs: u64,
    pub static_dir: PathBuf,
    pub reviews_path: Option<PathBuf>,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Required:
    /// - `FIREBASE_API_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FIREBASE_PROJECT_ID`, `FIREBASE_AUTH_DOMAIN`, `FIREBASE_APP_ID`
    /// - `FIREBASE_AUTH_EMULATOR_HOST`: route provider calls to a local emulator
    /// - `APP_ENV`: `production` turns on secure cookies
    /// - `COOKIE_SECURE`: explicit override for the above
    /// - `SESSION_TTL_SECS`: default 14 days
    /// - `SESSION_SWEEP_INTERVAL_SECS`: default 300
    /// - `STATIC_DIR`: default `<crate>/static`
    /// - `REVIEWS_PATH`: JSON review catalog, empty catalog when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("FIREBASE_API_KEY").ok_or(ConfigError::Missing("FIREBASE_API_KEY"))?;
        let base_url = match get("FIREBASE_AUTH_EMULATOR_HOST") {
            Some(host) => format!("http://{}/identitytoolkit.googleapis.com/v1", host.trim()),
            None => DEFAULT_IDENTITY_BASE_URL.to_owned(),
        };
        let firebase = FirebaseConfig {
            api_key,
            project_id: get("FIREBASE_PROJECT_ID"),
            auth_domain: get("FIREBASE_AUTH_DOMAIN"),
            app_id: get("FIREBASE_APP_ID"),
            base_url,
        };

        let production = get("APP_ENV").is_some_and(|env| env.trim().eq_ignore_ascii_case("production"));
        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => production,
        };

        let session_ttl_secs = parse_or("SESSION_TTL_SECS", get("SESSION_TTL_SECS"), DEFAULT_SESSION_TTL_SECS)?;
        if session_ttl_secs <= 0 || session_ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ConfigError::Invalid { key: "SESSION_TTL_SECS", value: session_ttl_secs.to_string() });
        }

        Ok(Self {
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            firebase,
            cookie_secure,
            session_ttl: Duration::seconds(session_ttl_secs),
            sweep_interval_secs: parse_or(
                "SESSION_SWEEP_INTERVAL_SECS",
                get("SESSION_SWEEP_INTERVAL_SECS"),
                DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
            )?
            .max(1),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")),
            reviews_path: get("REVIEWS_PATH").map(PathBuf::from),
        })
    }
}

/// Parse common boolean spellings (`1/true/yes/on`, `0/false/no/off`).
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
