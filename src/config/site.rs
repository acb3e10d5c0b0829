//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Branding
    pub blog_name: String,
    pub tagline: String,
    pub default_image: String,

    // Footer
    pub footer_text: String,
    pub privacy_policy_link: String,
    pub terms_service_link: String,

    // URL
    pub root: String,

    // Directory
    pub posts_dir: String,
    pub pages_dir: String,

    // Listing
    pub excerpt_length: usize,

    #[serde(default)]
    pub highlight: HighlightConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            blog_name: "My Blog".to_string(),
            tagline: String::new(),
            default_image: "https://via.placeholder.com/1200x600".to_string(),

            footer_text: String::new(),
            privacy_policy_link: "#".to_string(),
            terms_service_link: "#".to_string(),

            root: "/".to_string(),

            posts_dir: "posts".to_string(),
            pages_dir: "pages".to_string(),

            excerpt_length: crate::helpers::DEFAULT_EXCERPT_LENGTH,

            highlight: HighlightConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }
}

/// Code block highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
