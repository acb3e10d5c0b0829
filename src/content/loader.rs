//! Content loader - finds posts and pages in their flat directories
//!
//! Every call rescans the filesystem; nothing is cached between calls, so
//! edits on disk show up on the next render.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Document, FrontMatter, MenuEntry};
use crate::helpers::parse_date;
use crate::Site;

/// Loads documents from the posts and pages directories
#[derive(Debug, Clone)]
pub struct ContentLoader {
    posts_dir: PathBuf,
    pages_dir: PathBuf,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(site: &Site) -> Self {
        Self::with_dirs(&site.posts_dir, &site.pages_dir)
    }

    pub fn with_dirs<P: AsRef<Path>, Q: AsRef<Path>>(posts_dir: P, pages_dir: Q) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            pages_dir: pages_dir.as_ref().to_path_buf(),
        }
    }

    /// Find the first post whose front-matter `slug` equals `slug`
    ///
    /// Files are visited in directory listing order and the scan stops at the
    /// first match, so with duplicate slugs the earliest listed file wins.
    pub fn find_post_by_slug(&self, slug: &str) -> Option<Document> {
        if slug.is_empty() {
            tracing::debug!("Empty slug, skipping post lookup");
            return None;
        }

        for path in markdown_files(&self.posts_dir) {
            let Some(text) = read_markdown(&path) else {
                continue;
            };
            let (fm, body) = parse_logged(&text, &path);
            if fm.get("slug") == Some(slug) {
                tracing::debug!("Post {:?} matched by {:?}", slug, path);
                return Document::from_parts(fm, body, &path);
            }
        }

        tracing::debug!("No post with slug {:?} in {:?}", slug, self.posts_dir);
        None
    }

    /// Find a static page by slug (front-matter slug, else file stem)
    pub fn find_page_by_slug(&self, slug: &str) -> Option<Document> {
        if slug.is_empty() {
            return None;
        }

        markdown_files(&self.pages_dir)
            .filter_map(|path| load_page(&path))
            .find(|page| page.slug == slug)
    }

    /// Build the navigation menu from the pages directory
    pub fn build_menu(&self) -> Vec<MenuEntry> {
        self.load_pages().iter().map(MenuEntry::from).collect()
    }

    /// Load every page in listing order
    pub fn load_pages(&self) -> Vec<Document> {
        markdown_files(&self.pages_dir)
            .filter_map(|path| load_page(&path))
            .collect()
    }

    /// Load every post that has a slug, newest first
    ///
    /// Posts whose date is missing or unparsable go last; ties keep listing
    /// order.
    pub fn load_posts(&self) -> Vec<Document> {
        let mut posts: Vec<Document> = markdown_files(&self.posts_dir)
            .filter_map(|path| {
                let text = read_markdown(&path)?;
                let (fm, body) = parse_logged(&text, &path);
                let post = Document::from_parts(fm, body, &path);
                if post.is_none() {
                    tracing::debug!("Skipping {:?}: no slug in front-matter", path);
                }
                post
            })
            .collect();

        posts.sort_by_cached_key(|post| {
            std::cmp::Reverse(post.date.as_deref().and_then(parse_date))
        });

        posts
    }
}

/// Markdown files directly inside `dir`, in directory listing order
///
/// A missing or unreadable directory yields nothing.
pub fn markdown_files(dir: &Path) -> impl Iterator<Item = PathBuf> {
    if !dir.is_dir() {
        tracing::warn!("Content directory {:?} does not exist", dir);
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to list entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_markdown_file(entry.path()))
        .map(|entry| entry.into_path())
}

/// Check if a file has the `.md` extension (case-sensitive)
fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

fn read_markdown(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

fn parse_logged<'t>(text: &'t str, path: &Path) -> (FrontMatter, &'t str) {
    let (fm, body) = FrontMatter::parse(text);
    for problem in fm.malformed() {
        tracing::warn!("{:?}: {}", path, problem);
    }
    (fm, body)
}

fn load_page(path: &Path) -> Option<Document> {
    let text = read_markdown(path)?;
    let (fm, body) = parse_logged(&text, path);
    Some(Document::from_parts_or_stem(fm, body, path))
}
