//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;
use crate::helpers::html_escape;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    highlight: HighlightConfig,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_config(&HighlightConfig::default())
    }

    /// Create with custom settings
    pub fn with_config(highlight: &HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            highlight: highlight.clone(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Front-matter is already stripped, so no metadata block option here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a code block
        let mut code_block: Option<Option<String>> = None;
        let mut code = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().map(str::to_string)
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some(lang);
                    code.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(lang) = code_block.take() {
                        let block = self.code_block_html(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(block)));
                    }
                }
                Event::Text(text) if code_block.is_some() => code.push_str(&text),
                event if code_block.is_none() => events.push(event),
                _ => {}
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    fn code_block_html(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        if self.highlight.enable {
            if let Some(highlighted) = self.highlight_code(code, lang) {
                return if self.highlight.line_number {
                    add_line_numbers(&highlighted, lang)
                } else {
                    format!(
                        r#"<figure class="highlight {}">{}</figure>"#,
                        lang, highlighted
                    )
                };
            }
        }

        format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            lang,
            html_escape(code)
        )
    }

    /// Highlight a code block, `None` when no theme is available or syntect fails
    fn highlight_code(&self, code: &str, lang: &str) -> Option<String> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.highlight.theme)
            .or_else(|| self.theme_set.themes.values().next())?;

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::debug!("Highlighting {} block failed: {}", lang, e);
                None
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap highlighted code in a two-column table with a line-number gutter
fn add_line_numbers(code: &str, lang: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();

    let gutter = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        lang,
        gutter,
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> MarkdownRenderer {
        MarkdownRenderer::with_config(&HighlightConfig {
            enable: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_leading_newline_body() {
        let html = plain().render("\n# Hi there");
        assert_eq!(html.trim(), "<h1>Hi there</h1>");
    }

    #[test]
    fn test_render_code_block_highlighted() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains("highlight rust"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_render_code_block_plain_is_escaped() {
        let html = plain().render("```html\n<b>x</b>\n```");
        assert!(html.contains(r#"<pre><code class="language-html">&lt;b&gt;x&lt;/b&gt;"#));
    }

    #[test]
    fn test_line_numbers() {
        let renderer = MarkdownRenderer::with_config(&HighlightConfig {
            line_number: true,
            ..Default::default()
        });
        let html = renderer.render("```\na\nb\n```");
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
    }

    #[test]
    fn test_render_table() {
        let html = plain().render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
