//! Text helpers for turning content identifiers and markup into display text.

use pulldown_cmark::{Event, Parser, TagEnd};

/// Turns an identifier such as `sarah_nurse` into `Sarah Nurse`.
///
/// Underscores become spaces and the first character of every word is
/// upper-cased; the rest of each word is left as written.
#[must_use]
pub fn humanize_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut at_boundary = true;
    for ch in id.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let is_word = ch.is_alphanumeric();
        if is_word && at_boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_boundary = !is_word;
    }
    out
}

/// Renders Markdown to plain text, dropping emphasis, links and other markup.
#[must_use]
pub fn to_plain_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak | Event::End(TagEnd::Paragraph) => out.push('\n'),
            _ => {}
        }
    }
    out.trim_end().to_owned()
}
