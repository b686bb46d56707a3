//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // Content API
    #[serde(default)]
    pub api: ApiConfig,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "starlog".to_string(),
            description: String::new(),
            language: "en".to_string(),
            api: ApiConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;
        config.api.apply_env_overrides();
        Ok(config)
    }
}

/// Content API configuration
///
/// The endpoint, content type, and field projection follow the API's own
/// query contract; this side only carries the values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the content API, e.g. https://my-repo.cdn.example.io/api/v2
    pub endpoint: String,

    /// Content type queried for the listing and the detail pages
    pub content_type: String,

    /// Fields projected into listing responses
    pub fetch_fields: Vec<String>,

    /// Page size for the listing query
    pub page_size: usize,

    /// Page size used when pre-resolving slugs at startup
    pub prefetch_page_size: usize,

    /// Access token, if the repository is private.
    /// Overridden by the CMS_ACCESS_TOKEN environment variable.
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            content_type: "posts".to_string(),
            fetch_fields: vec!["post.title".to_string(), "post.content".to_string()],
            page_size: 20,
            prefetch_page_size: 2,
            access_token: None,
        }
    }
}

impl ApiConfig {
    /// Apply environment-variable overrides (credentials do not live in the
    /// config file of a deployed site)
    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var("CMS_ACCESS_TOKEN") {
            if !token.is_empty() {
                self.access_token = Some(token);
            }
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "starlog");
        assert_eq!(config.api.content_type, "posts");
        assert_eq!(config.api.page_size, 20);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
description: Notes from orbit
api:
  endpoint: https://example.cdn.example.io/api/v2
  content_type: posts
  page_size: 5
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.api.endpoint, "https://example.cdn.example.io/api/v2");
        assert_eq!(config.api.page_size, 5);
        assert_eq!(config.server.port, 8080);
        // Untouched fields keep their defaults
        assert_eq!(config.api.prefetch_page_size, 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        std::fs::write(&path, "title: Disk Blog\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "Disk Blog");
    }
}
