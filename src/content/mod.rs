//! Content module - front-matter, documents, and the post/page loader

mod document;
mod frontmatter;
pub mod loader;
mod markdown;

pub use document::{capitalize_first, Document, MenuEntry};
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
