//! Plain-text summaries of markdown post bodies

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Marker separating a post's excerpt from the rest of its body
const MORE_MARKER: &str = "<!-- more -->";

/// Derives listing metadata (excerpt, read time) from markdown bodies
pub struct MarkdownSummarizer {
    words_per_minute: usize,
}

impl MarkdownSummarizer {
    /// Create a summarizer with the usual 200 words-per-minute reading pace
    pub fn new() -> Self {
        Self {
            words_per_minute: 200,
        }
    }

    /// Create with a custom reading pace
    pub fn with_pace(words_per_minute: usize) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
        }
    }

    /// Plain-text excerpt: everything before `<!-- more -->`, else the first paragraph
    pub fn excerpt(&self, markdown: &str) -> String {
        match Self::split_excerpt(markdown) {
            Some(excerpt) => plain_text(excerpt, false),
            None => plain_text(markdown, true),
        }
    }

    /// Estimated read time, e.g. "3 min" (never less than one minute)
    pub fn read_time(&self, markdown: &str) -> String {
        let words = plain_text(markdown, false).split_whitespace().count();
        let minutes = words.div_ceil(self.words_per_minute).max(1);
        format!("{} min", minutes)
    }

    /// The markdown before `<!-- more -->`, if the marker is present
    pub fn split_excerpt(content: &str) -> Option<&str> {
        content
            .find(MORE_MARKER)
            .map(|pos| content[..pos].trim())
    }
}

impl Default for MarkdownSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect the readable text of a markdown document.
///
/// Paragraphs are joined with a blank line. With `first_paragraph_only`,
/// headings are skipped and collection stops after the first paragraph.
fn plain_text(markdown: &str, first_paragraph_only: bool) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);

    let mut out = String::new();
    let mut paragraph = String::new();
    let mut in_code_block = false;

    for event in parser {
        let ends_paragraph = matches!(event, Event::End(TagEnd::Paragraph));
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) | Event::Code(text) if !in_code_block => paragraph.push_str(&text),
            Event::SoftBreak | Event::HardBreak => paragraph.push(' '),
            Event::End(TagEnd::Heading(_)) if first_paragraph_only => paragraph.clear(),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => {
                let text = paragraph.trim();
                if !text.is_empty() {
                    if !out.is_empty() {
                        out.push_str("\n\n");
                    }
                    out.push_str(text);
                    if first_paragraph_only && ends_paragraph {
                        return out;
                    }
                }
                paragraph.clear();
            }
            _ => {}
        }
    }

    let tail = paragraph.trim();
    if !tail.is_empty() {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(tail);
    }
    out
}
