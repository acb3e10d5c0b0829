//! Create a new post or page

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::FrontMatter;
use crate::helpers::today;
use crate::Site;

/// Scaffold a Markdown file with a front-matter block
///
/// Posts go to the posts directory and get `title`, `slug` and today's
/// `date`; pages go to the pages directory and get `title` and `slug`.
/// The file is named after the slug. Existing files are never overwritten.
pub fn create(site: &Site, title: &str, slug: Option<&str>, page: bool) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}; pass --slug", title);
    }

    let target_dir = if page {
        &site.pages_dir
    } else {
        &site.posts_dir
    };
    fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create dir {:?}", target_dir))?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut fm = FrontMatter::default();
    fm.insert("title", title);
    fm.insert("slug", slug.as_str());
    if !page {
        fm.insert("date", today());
    }

    fs::write(&file_path, fm.to_block())
        .with_context(|| format!("Failed to write {:?}", file_path))?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}
