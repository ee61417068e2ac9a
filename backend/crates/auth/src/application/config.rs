//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session lifetime, also used as the cookie Max-Age
    pub session_ttl: Duration,
    /// Whether to set the Secure attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    pub cookie_http_only: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "token".to_string(),
            session_ttl: Duration::from_secs(3600), // 1 hour
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            cookie_http_only: true,
        }
    }
}

impl AuthConfig {
    /// Longest session lifetime accepted from configuration
    pub const MAX_SESSION_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    /// Session TTL as a chrono duration (saturates on overflow)
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::MAX)
    }

    /// Cookie settings for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: self.cookie_http_only,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(i64::try_from(self.session_ttl.as_secs()).unwrap_or(i64::MAX)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "token");
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert!(config.cookie_secure);
        assert!(!AuthConfig::development().cookie_secure);
    }

    #[test]
    fn test_cookie_config() {
        let cookie = AuthConfig::development()
            .with_session_ttl(Duration::from_secs(120))
            .cookie_config()
            .build_set_cookie("abc");

        assert_eq!(cookie, "token=abc; HttpOnly; SameSite=Lax; Path=/; Max-Age=120");
    }

    #[test]
    fn test_cookie_max_age_does_not_wrap() {
        let config = AuthConfig::development().with_session_ttl(Duration::MAX);
        assert_eq!(config.cookie_config().max_age_secs, Some(i64::MAX));
        assert_eq!(config.session_ttl_chrono(), chrono::Duration::MAX);
    }
}
