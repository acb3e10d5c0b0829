//! URL helper functions

use percent_encoding::{AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters that could end a quoted CSS `url('...')` value
const CSS_URL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'\\')
    .add(b'<')
    .add(b'>');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "post") // -> "/blog/post"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Link to the post listing
pub fn home_url(config: &SiteConfig) -> String {
    url_for(config, "")
}

/// Link to a post by slug
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    format!("{}?slug={}", url_for(config, "post"), encode_url(slug))
}

/// Link to a static page by slug
pub fn page_url(config: &SiteConfig, slug: &str) -> String {
    format!("{}?slug={}", url_for(config, "page"), encode_url(slug))
}

/// Percent-encode a query component
pub fn encode_url(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// Make a URL safe to place inside `url('...')` in an inline style
pub fn css_url(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, CSS_URL).to_string()
}
