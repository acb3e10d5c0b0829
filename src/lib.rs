//! folio: render blog pages from a flat directory of Markdown files
//!
//! Posts and pages are plain `.md` files with an optional `---` delimited
//! front-matter block. A post is looked up by the `slug` in its front-matter,
//! pages become the navigation menu, and the result is composed into a themed
//! HTML page with embedded Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main site handle
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding posts
    pub posts_dir: PathBuf,
    /// Directory holding static pages
    pub pages_dir: PathBuf,
}

impl Site {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let pages_dir = base_dir.join(&config.pages_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            pages_dir,
        }
    }

    /// Content loader over this site's directories
    pub fn loader(&self) -> content::ContentLoader {
        content::ContentLoader::new(self)
    }
}
