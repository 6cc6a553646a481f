//! Server Configuration
//!
//! Read from the environment (after `.env` has been loaded).

use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: CorsOrigins,
    /// JSON document loaded into the store at startup
    pub seed_file: Option<PathBuf>,
}

impl ApiConfig {
    /// Load from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HBNB_API_HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .trim()
            .parse()
            .with_context(|| format!("HBNB_API_HOST is not an IP address: {host}"))?;

        let port = match lookup("HBNB_API_PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("HBNB_API_PORT is not a port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let cors_origins = parse_origins(lookup("HBNB_CORS_ORIGINS").as_deref().unwrap_or("*"));

        let seed_file = lookup("HBNB_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            cors_origins,
            seed_file,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HBNB_API_HOST", "127.0.0.1"),
            ("HBNB_API_PORT", "8080"),
            (
                "HBNB_CORS_ORIGINS",
                "http://localhost:3000, http://127.0.0.1:3000",
            ),
            ("HBNB_SEED_FILE", "seed.json"),
        ])
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                "http://localhost:3000".into(),
                "http://127.0.0.1:3000".into()
            ])
        );
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config(&[("HBNB_API_PORT", "http")]).is_err());
        assert!(config(&[("HBNB_API_PORT", "70000")]).is_err());
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        assert!(config(&[("HBNB_API_HOST", "localhost")]).is_err());
    }

    #[test]
    fn test_wildcard_in_list_means_any() {
        assert_eq!(parse_origins("http://a.test,*"), CorsOrigins::Any);
        assert_eq!(parse_origins(""), CorsOrigins::Any);
    }
}
