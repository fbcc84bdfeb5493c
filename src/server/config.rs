use std::{env::VarError, fmt::Display, str::FromStr};

use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
static DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration read from environment variables, every value has a default.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub sql_logging: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Builds the configuration from an arbitrary variable source, `from_env` uses the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Ok(Self {
            database_url: optional_var(&lookup, "DATABASE_URL")?
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: optional_var(&lookup, "HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed_var(&lookup, "PORT", DEFAULT_PORT)?,
            sql_logging: parsed_var(&lookup, "SQL_LOGGING", false)?,
        })
    }

    /// Socket address string the HTTP listener binds to
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional_var<F>(lookup: &F, var: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}

fn parsed_var<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
    T: FromStr,
    T::Err: Display,
{
    match optional_var(lookup, var)? {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
