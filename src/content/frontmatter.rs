//! Front-matter parsing
//!
//! A front-matter block sits at the very start of a document: a line that is
//! exactly `---`, any number of `key: value` lines, and another `---` line.
//! Anything else (no opening line, no closing line) means the document has no
//! metadata and the whole text is body.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref BLOCK_RE: Regex = Regex::new(r"(?ms)\A---\r?\n(.*?)^---\r?$")
        .expect("valid front-matter regex");
}

/// Recoverable problems found while reading a front-matter block
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontMatterError {
    #[error("line {line}: front-matter entry has no ':' separator: {text:?}")]
    MalformedLine { line: usize, text: String },
}

/// Metadata of a post or page, in the order it was written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
    malformed: Vec<FrontMatterError>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(block) = BLOCK_RE.captures(content) else {
            return (FrontMatter::default(), content);
        };

        // Group 1 always participates when the expression matches
        let inner = block.get(1).map_or("", |m| m.as_str());
        let end = block.get(0).map_or(0, |m| m.end());

        let mut fm = FrontMatter::default();
        for (idx, line) in inner.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match line.split_once(':') {
                Some((key, value)) => {
                    fm.fields
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
                None => fm.malformed.push(FrontMatterError::MalformedLine {
                    // +1 for the opening delimiter, +1 for 1-based numbering
                    line: idx + 2,
                    text: line.to_string(),
                }),
            }
        }

        (fm, &content[end..])
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Set a field, keeping the position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Lines that were skipped because they had no separator
    pub fn malformed(&self) -> &[FrontMatterError] {
        &self.malformed
    }

    pub fn into_fields(self) -> IndexMap<String, String> {
        self.fields
    }

    /// Serialize back into a `---` delimited block
    pub fn to_block(&self) -> String {
        let mut out = String::from("---\n");
        for (key, value) in &self.fields {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }
}
