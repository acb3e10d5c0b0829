//! Built-in bootstrap theme templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off: every value is
//! escaped while the view data is built, so rendered Markdown and trusted
//! config snippets pass through untouched.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{Document, MenuEntry};
use crate::helpers::{self, html_escape};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("post.html", include_str!("theme/post.html")),
            ("page.html", include_str!("theme/page.html")),
            ("index.html", include_str!("theme/index.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("theme/partials/header.html"),
            ),
            ("partials/hero.html", include_str!("theme/partials/hero.html")),
            ("partials/nav.html", include_str!("theme/partials/nav.html")),
            (
                "partials/footer.html",
                include_str!("theme/partials/footer.html"),
            ),
        ])?;

        tera.register_filter("excerpt", excerpt_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: plain-text excerpt of raw Markdown
fn excerpt_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("excerpt", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("excerpt", "length", usize, val),
        None => helpers::DEFAULT_EXCERPT_LENGTH,
    };
    Ok(tera::Value::String(html_escape(&helpers::excerpt(
        &s, length,
    ))))
}

/// Data structures for template context

/// Site-wide values; config snippets are inserted verbatim
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub blog_name: String,
    pub tagline: String,
    pub footer_text: String,
    pub privacy_policy_link: String,
    pub terms_service_link: String,
    pub home_url: String,
    pub excerpt_length: usize,
}

impl From<&SiteConfig> for SiteData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            blog_name: config.blog_name.clone(),
            tagline: config.tagline.clone(),
            footer_text: config.footer_text.clone(),
            privacy_policy_link: config.privacy_policy_link.clone(),
            terms_service_link: config.terms_service_link.clone(),
            home_url: helpers::home_url(config),
            excerpt_length: config.excerpt_length,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
}

impl NavItem {
    pub fn from_entry(config: &SiteConfig, entry: &MenuEntry) -> Self {
        Self {
            title: html_escape(&entry.title),
            url: helpers::page_url(config, &entry.slug),
        }
    }
}

/// Hero banner: heading, optional date line, background image
#[derive(Debug, Clone, Serialize)]
pub struct HeroData {
    pub title: String,
    pub date: Option<String>,
    pub image: String,
}

impl HeroData {
    /// Banner for a post page.
    ///
    /// Falls back to "Untitled", "Date not available" and the configured
    /// default image when the post (or the field) is missing.
    pub fn for_post(config: &SiteConfig, post: Option<&Document>) -> Self {
        let title = post
            .and_then(|p| p.title.as_deref())
            .unwrap_or("Untitled");
        let date = post
            .and_then(|p| p.date.as_deref())
            .unwrap_or("Date not available");

        Self {
            title: html_escape(title),
            date: Some(html_escape(date)),
            image: hero_image(config, post),
        }
    }

    /// Banner for a static page; pages show no date line
    pub fn for_page(config: &SiteConfig, page: Option<&Document>) -> Self {
        let title = page
            .map(Document::menu_title)
            .unwrap_or_else(|| "Not Found".to_string());

        Self {
            title: html_escape(&title),
            date: None,
            image: hero_image(config, page),
        }
    }

    /// Banner for the post listing
    pub fn for_index(config: &SiteConfig) -> Self {
        Self {
            title: html_escape(&config.blog_name),
            date: None,
            image: hero_image(config, None),
        }
    }
}

/// Document image if set, else the configured default, made safe for the
/// inline `background-image: url('...')` style
fn hero_image(config: &SiteConfig, doc: Option<&Document>) -> String {
    let image = doc
        .and_then(|d| d.image.as_deref())
        .unwrap_or(&config.default_image);
    html_escape(&helpers::css_url(image))
}

/// One entry of the post listing
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub title: String,
    pub date: Option<String>,
    pub url: String,
    /// Raw Markdown; the template turns it into an excerpt
    pub body: String,
}

impl PostSummary {
    pub fn new(config: &SiteConfig, post: &Document) -> Self {
        Self {
            title: html_escape(post.title.as_deref().unwrap_or("Untitled")),
            date: post.date.as_deref().map(html_escape),
            url: helpers::post_url(config, &post.slug),
            body: post.body.clone(),
        }
    }
}
