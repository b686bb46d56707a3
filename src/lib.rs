//! starlog: a server-rendered blog front-end for a headless CMS
//!
//! This crate fetches article listings and article bodies from a headless
//! content-management API and renders them as HTML pages, with a
//! client-side "load more" control and a derived reading-time estimate.

pub mod cms;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main starlog application
#[derive(Clone)]
pub struct Starlog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Starlog {
    /// Create a new application from a directory, loading `_config.yml`
    /// when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            // Environment credentials apply with or without a config file
            let mut config = config::SiteConfig::default();
            config.api.apply_env_overrides();
            config
        };

        Ok(Self { config, base_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_still_reads_token_from_env() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("CMS_ACCESS_TOKEN", "env-token");

        let app = Starlog::new(dir.path()).unwrap();
        assert_eq!(app.config.api.access_token.as_deref(), Some("env-token"));

        std::env::remove_var("CMS_ACCESS_TOKEN");
    }
}
