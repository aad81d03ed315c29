//! Plain-text excerpts from Markdown bodies.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Maximum length of a derived description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// Text of the first level-1 heading.
#[must_use]
pub fn first_heading(markdown: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let heading = text.trim();
                if !heading.is_empty() {
                    return Some(heading.to_owned());
                }
                in_h1 = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_h1 => text.push_str(&t),
            _ => {}
        }
    }
    None
}

/// Plain text of the first prose paragraph.
///
/// MDX `import`/`export` lines parse as paragraphs and are skipped, as are
/// paragraphs nested in lists or block quotes.
#[must_use]
pub fn first_paragraph(markdown: &str) -> Option<String> {
    let mut depth = 0usize;
    let mut in_paragraph = false;
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Paragraph) if depth == 0 => {
                in_paragraph = true;
                text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                in_paragraph = false;
                let paragraph = collapse_whitespace(&text);
                if !paragraph.is_empty() && !is_mdx_statement(&paragraph) {
                    return Some(paragraph);
                }
            }
            Event::Start(Tag::List(_) | Tag::BlockQuote(_)) => depth += 1,
            Event::End(TagEnd::List(_) | TagEnd::BlockQuote(_)) => {
                depth = depth.saturating_sub(1);
            }
            Event::Text(t) | Event::Code(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }
    None
}

/// Shorten `text` to at most `max_chars`, cutting at a word boundary.
#[must_use]
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == '.'))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_mdx_statement(paragraph: &str) -> bool {
    paragraph.starts_with("import ") || paragraph.starts_with("export ")
}
