//! Render a post, a page, or the post listing to HTML

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::content::{ContentLoader, Document, MenuEntry};
use crate::generator::Generator;
use crate::Site;

/// Render the post page for `slug`
///
/// A missing post is not an error: the page is composed with the
/// "not found" body instead.
pub async fn post(site: &Site, slug: &str) -> Result<String> {
    let slug = slug.to_string();
    let (post, menu) = with_menu(site, move |loader| loader.find_post_by_slug(&slug)).await?;

    match &post {
        Some(post) => tracing::info!("Rendering post {:?} from {:?}", post.slug, post.path),
        None => tracing::info!("Post not found, rendering placeholder"),
    }

    Generator::new(site)?.post_page(post.as_ref(), &menu)
}

/// Render the static page for `slug`
pub async fn page(site: &Site, slug: &str) -> Result<String> {
    let slug = slug.to_string();
    let (page, menu) = with_menu(site, move |loader| loader.find_page_by_slug(&slug)).await?;

    if page.is_none() {
        tracing::info!("Page not found, rendering placeholder");
    }

    Generator::new(site)?.static_page(page.as_ref(), &menu)
}

/// Render the post listing
pub async fn index(site: &Site) -> Result<String> {
    let (posts, menu): (Vec<Document>, _) =
        with_menu(site, |loader| loader.load_posts()).await?;
    tracing::info!("Listing {} posts", posts.len());

    Generator::new(site)?.index_page(&posts, &menu)
}

/// Run a lookup and the menu scan side by side
///
/// The two scans touch different directories and share nothing, so each gets
/// its own blocking task and both are awaited before composing.
async fn with_menu<T, F>(site: &Site, lookup: F) -> Result<(T, Vec<MenuEntry>)>
where
    F: FnOnce(&ContentLoader) -> T + Send + 'static,
    T: Send + 'static,
{
    let loader = site.loader();
    let menu_loader = loader.clone();

    let (found, menu) = tokio::try_join!(
        tokio::task::spawn_blocking(move || lookup(&loader)),
        tokio::task::spawn_blocking(move || menu_loader.build_menu()),
    )?;

    Ok((found, menu))
}

/// Write rendered HTML to `output`, or to stdout when no file is given
pub fn write_output(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create dir {:?}", parent))?;
            }
            fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Wrote {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
