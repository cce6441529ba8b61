//! Runtime configuration loaded from environment variables.

use anyhow::{bail, Context, Result};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Sessions
    pub max_sessions: usize,
    pub session_cookie: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,

            // Sessions
            max_sessions: parse_var("MAX_SESSIONS", 10_000)?,
            session_cookie: std::env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| "farm_portal_session".to_string()),
        };

        if config.max_sessions == 0 {
            bail!("MAX_SESSIONS must be at least 1");
        }
        if config.session_cookie.is_empty()
            || config
                .session_cookie
                .contains(|c: char| c.is_whitespace() || c == ';' || c == '=')
        {
            bail!("SESSION_COOKIE is not a valid cookie name: '{}'", config.session_cookie);
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_sessions: 10_000,
            session_cookie: "farm_portal_session".to_string(),
        }
    }
}

/// Read a numeric variable. Unset means `default`; set but unparsable is an error.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}
