//! Server Configuration
//!
//! Read from the process environment (after `.env` is loaded).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub database_max_connections: u32,
    /// Landing page and assets
    pub static_dir: PathBuf,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
    pub session_ttl: Duration,
    pub cookie_secure: bool,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; `DATABASE_URL` is the only
    /// required key.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let session_ttl = Duration::from_secs(parse_or(&get, "SESSION_TTL_SECS", 3600)?);
        if session_ttl.is_zero() || session_ttl > AuthConfig::MAX_SESSION_TTL {
            bail!(
                "SESSION_TTL_SECS must be between 1 and {}",
                AuthConfig::MAX_SESSION_TTL.as_secs()
            );
        }

        Ok(Self {
            database_url,
            host: parse_or(&get, "APP_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_or(&get, "APP_PORT", 3000)?,
            database_max_connections: parse_or(&get, "DATABASE_MAX_CONNECTIONS", 5)?,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            frontend_origins,
            session_ttl,
            cookie_secure: match get("COOKIE_SECURE") {
                Some(raw) => parse_bool(&raw).context("COOKIE_SECURE must be true or false")?,
                None => !cfg!(debug_assertions),
            },
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::default()
            .with_session_ttl(self.session_ttl)
            .with_cookie_secure(self.cookie_secure)
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("not a boolean: {other:?}"),
    }
}
