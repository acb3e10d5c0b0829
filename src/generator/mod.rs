//! Generator module - composes full HTML pages from documents and the menu

use anyhow::Result;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::{Document, MarkdownRenderer, MenuEntry};
use crate::helpers::html_escape;
use crate::templates::{HeroData, NavItem, PostSummary, SiteData, TemplateRenderer};
use crate::Site;

/// Body used when no post matches the requested slug
pub const POST_NOT_FOUND: &str = "<p>Post not found.</p>";

/// Body used when no page matches the requested slug
pub const PAGE_NOT_FOUND: &str = "<p>Page not found.</p>";

/// Page composer using the embedded Tera templates
pub struct Generator {
    config: SiteConfig,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Self::with_config(site.config.clone())
    }

    pub fn with_config(config: SiteConfig) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let markdown = MarkdownRenderer::with_config(&config.highlight);

        Ok(Self {
            config,
            renderer,
            markdown,
        })
    }

    /// Compose a post page, or the "not found" page when `post` is `None`
    ///
    /// The `<title>` falls back to the blog name; the hero banner falls back
    /// as described on [`HeroData::for_post`].
    pub fn post_page(&self, post: Option<&Document>, menu: &[MenuEntry]) -> Result<String> {
        let mut context = self.create_base_context(menu);

        let page_title = post
            .and_then(|p| p.title.as_deref())
            .unwrap_or(&self.config.blog_name);
        let content = match post {
            Some(post) => self.markdown.render(&post.body),
            None => POST_NOT_FOUND.to_string(),
        };

        context.insert("page_title", &html_escape(page_title));
        context.insert("page_content", &content);
        context.insert("hero", &HeroData::for_post(&self.config, post));

        self.renderer.render("post.html", &context)
    }

    /// Compose a static page from the pages directory
    pub fn static_page(&self, page: Option<&Document>, menu: &[MenuEntry]) -> Result<String> {
        let mut context = self.create_base_context(menu);

        let page_title = match page {
            Some(page) => page.menu_title(),
            None => self.config.blog_name.clone(),
        };
        let content = match page {
            Some(page) => self.markdown.render(&page.body),
            None => PAGE_NOT_FOUND.to_string(),
        };

        context.insert("page_title", &html_escape(&page_title));
        context.insert("page_content", &content);
        context.insert("hero", &HeroData::for_page(&self.config, page));

        self.renderer.render("page.html", &context)
    }

    /// Compose the post listing; `posts` are shown in the given order
    pub fn index_page(&self, posts: &[Document], menu: &[MenuEntry]) -> Result<String> {
        let mut context = self.create_base_context(menu);

        let summaries: Vec<PostSummary> = posts
            .iter()
            .map(|post| PostSummary::new(&self.config, post))
            .collect();

        context.insert("posts", &summaries);
        context.insert("hero", &HeroData::for_index(&self.config));

        self.renderer.render("index.html", &context)
    }

    /// Create a base context with common variables
    fn create_base_context(&self, menu: &[MenuEntry]) -> Context {
        let nav: Vec<NavItem> = menu
            .iter()
            .map(|entry| NavItem::from_entry(&self.config, entry))
            .collect();

        let mut context = Context::new();
        context.insert("site", &SiteData::from(&self.config));
        context.insert("menu", &nav);
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use std::path::Path;

    fn config() -> SiteConfig {
        SiteConfig {
            blog_name: "Field Notes".to_string(),
            tagline: "Things I wrote down".to_string(),
            default_image: "/img/default.jpg".to_string(),
            footer_text: "&copy; 2024 Field Notes".to_string(),
            privacy_policy_link: "/privacy".to_string(),
            terms_service_link: "/terms".to_string(),
            ..Default::default()
        }
    }

    fn doc(raw: &str) -> Document {
        let (fm, body) = FrontMatter::parse(raw);
        Document::from_parts_or_stem(fm, body, Path::new("doc.md"))
    }

    fn menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry {
                slug: "about".to_string(),
                title: "About".to_string(),
            },
            MenuEntry {
                slug: "contact".to_string(),
                title: "Contact".to_string(),
            },
        ]
    }

    #[test]
    fn test_post_page() {
        let generator = Generator::with_config(config()).unwrap();
        let post = doc("---\ntitle: Hello World\nslug: hello\ndate: 2024-01-01\nimage: /img/hello.jpg\n---\n# Hi there");

        let html = generator.post_page(Some(&post), &menu()).unwrap();
        assert!(html.contains("<title>Hello World</title>"));
        assert!(html.contains("<h1>Hi there</h1>"));
        assert!(html.contains("<p>2024-01-01</p>"));
        assert!(html.contains("url('/img/hello.jpg')"));
        assert!(html.contains(r#"<a class="nav-link" href="/page?slug=about">About</a>"#));
        assert!(html.contains(r#"<a class="nav-link" href="/page?slug=contact">Contact</a>"#));
        assert!(html.contains("&copy; 2024 Field Notes"));
        assert!(html.contains(r#"<a href="/privacy">Privacy Policy</a>"#));
        assert!(html.contains(r#"<a href="/terms">Terms of Service</a>"#));
        assert!(html.contains("Things I wrote down"));
    }

    #[test]
    fn test_post_not_found() {
        let generator = Generator::with_config(config()).unwrap();
        let html = generator.post_page(None, &[]).unwrap();

        assert!(html.contains("<title>Field Notes</title>"));
        assert!(html.contains(POST_NOT_FOUND));
        assert!(html.contains("<h1>Untitled</h1>"));
        assert!(html.contains("<p>Date not available</p>"));
        assert!(html.contains("url('/img/default.jpg')"));
        assert!(html.contains(r#"href="/">Home</a>"#));
    }

    #[test]
    fn test_post_missing_fields_fall_back() {
        let generator = Generator::with_config(config()).unwrap();
        let post = doc("---\nslug: bare\n---\ntext");
        let html = generator.post_page(Some(&post), &[]).unwrap();

        assert!(html.contains("<title>Field Notes</title>"));
        assert!(html.contains("<h1>Untitled</h1>"));
        assert!(html.contains("<p>Date not available</p>"));
        assert!(html.contains("url('/img/default.jpg')"));
        assert!(html.contains("<p>text</p>"));
    }

    #[test]
    fn test_post_title_is_escaped() {
        let generator = Generator::with_config(config()).unwrap();
        let post = doc("---\nslug: x\ntitle: <script>alert(1)</script>\n---\n");
        let html = generator.post_page(Some(&post), &[]).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("<title>&lt;script&gt;alert(1)&lt;/script&gt;</title>"));
    }

    #[test]
    fn test_static_page() {
        let generator = Generator::with_config(config()).unwrap();
        let page = doc("Reach me at **home**.");
        let html = generator.static_page(Some(&page), &menu()).unwrap();
        assert!(html.contains("<title>Doc</title>"));
        assert!(html.contains("<strong>home</strong>"));

        let html = generator.static_page(None, &menu()).unwrap();
        assert!(html.contains(PAGE_NOT_FOUND));
    }

    #[test]
    fn test_index_page() {
        let generator = Generator::with_config(config()).unwrap();
        let posts = vec![
            doc("---\nslug: first post\ntitle: First\ndate: 2024-02-01\n---\n<em>Opening</em> words"),
            doc("---\nslug: second\n---\nMore"),
        ];
        let html = generator.index_page(&posts, &menu()).unwrap();

        assert!(html.contains(r#"<a href="/post?slug=first%20post">First</a>"#));
        assert!(html.contains("Opening words..."));
        assert!(!html.contains("<em>Opening</em>"));
        assert!(html.contains(r#"<a href="/post?slug=second">Untitled</a>"#));
        assert!(!html.contains("No posts yet."));

        let empty = generator.index_page(&[], &[]).unwrap();
        assert!(empty.contains("No posts yet."));
    }
}
