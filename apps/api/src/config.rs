use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// `None` means permissive CORS.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got '{raw}'"))?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").and_then(|raw| parse_origins(&raw)),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();

    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(config.cors_allowed_origins.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RUST_LOG", "debug"),
            ("MAX_UPLOAD_BYTES", "2048"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_upload_bytes, 2048);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_upload_limit_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("MAX_UPLOAD_BYTES", "-1")])).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_BYTES"));
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let config = Config::from_lookup(lookup_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000, https://example.com ,",
        )]))
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            Some(vec![
                "http://localhost:3000".to_string(),
                "https://example.com".to_string()
            ])
        );
    }

    #[test]
    fn test_blank_cors_origins_mean_permissive() {
        let config = Config::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGINS", " , ")])).unwrap();
        assert!(config.cors_allowed_origins.is_none());
    }
}
