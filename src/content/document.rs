//! Document and menu models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::FrontMatter;

/// A parsed Markdown file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Slug from front-matter, or derived from the filename for pages
    pub slug: String,

    /// Title, if the front-matter declares one
    pub title: Option<String>,

    /// Date exactly as written in the front-matter
    pub date: Option<String>,

    /// Hero image; an empty value counts as absent
    pub image: Option<String>,

    /// Front-matter fields other than slug/title/date/image
    pub extra: IndexMap<String, String>,

    /// Raw Markdown after the front-matter block
    pub body: String,

    /// Source file path
    pub path: PathBuf,

    /// All front-matter fields in written order
    #[serde(skip)]
    pub fields: IndexMap<String, String>,
}

impl Document {
    /// Build a document from parsed front-matter.
    ///
    /// Returns `None` when the front-matter has no `slug`.
    pub fn from_parts(fm: FrontMatter, body: &str, path: &Path) -> Option<Self> {
        let fields = fm.into_fields();
        let slug = fields.get("slug")?.clone();
        Some(Self::assemble(slug, fields, body, path))
    }

    /// Build a document whose slug falls back to the file stem
    pub fn from_parts_or_stem(fm: FrontMatter, body: &str, path: &Path) -> Self {
        let fields = fm.into_fields();
        let slug = fields
            .get("slug")
            .cloned()
            .unwrap_or_else(|| file_stem(path));
        Self::assemble(slug, fields, body, path)
    }

    fn assemble(slug: String, fields: IndexMap<String, String>, body: &str, path: &Path) -> Self {
        let mut extra = fields.clone();
        extra.shift_remove("slug");
        let title = extra.shift_remove("title");
        let date = extra.shift_remove("date");
        let image = extra.shift_remove("image").filter(|i| !i.is_empty());

        Self {
            slug,
            title,
            date,
            image,
            extra,
            body: body.to_string(),
            path: path.to_path_buf(),
            fields,
        }
    }

    /// Every front-matter field, in the order it was written
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    /// Title used in menus: declared title, else the capitalized slug
    pub fn menu_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| capitalize_first(&self.slug))
    }
}

/// A navigation menu entry derived from a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub slug: String,
    pub title: String,
}

impl From<&Document> for MenuEntry {
    fn from(doc: &Document) -> Self {
        Self {
            slug: doc.slug.clone(),
            title: doc.menu_title(),
        }
    }
}

/// File name without extension
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Upper-case the first character, leave the rest alone
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
