/*
 * markdown.rs
 *
 * docwell-core - Documentation workspace service
 * Copyright (C) 2019-2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! Markdown rendering for pages and documents.
//!
//! Conversion is done by `pulldown-cmark` with the GitHub-style extensions
//! (tables, strikethrough, task lists). Fenced code blocks keep their
//! `language-*` class so a highlighter can pick them up. Raw HTML in the
//! source is escaped, never passed through.

use crate::slug::slugify;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::HashMap;

const ELLIPSIS: char = '…';

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub anchor: String,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Renders Markdown to HTML. Headings get `id` attributes matching [`outline`].
pub fn render(source: &str) -> String {
    let mut anchors = outline(source).into_iter().map(|heading| heading.anchor);

    let events = Parser::new_ext(source, options()).map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            id,
            classes,
            attrs,
        }) => {
            let anchor = anchors.next();
            let id = id.or_else(|| anchor.map(CowStr::from));

            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            })
        }
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        _ => event,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}

/// Lists the headings of a document in order, with unique anchors.
pub fn outline(source: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut seen = HashMap::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(source, options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level as u8, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, ref mut buffer)) = current {
                    buffer.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    let anchor = unique_anchor(&mut seen, &text);

                    headings.push(Heading {
                        level,
                        text,
                        anchor,
                    });
                }
            }
            _ => (),
        }
    }

    headings
}

fn unique_anchor(seen: &mut HashMap<String, usize>, text: &str) -> String {
    let mut base = slugify(text);
    if base.is_empty() {
        base.push_str("section");
    }

    let count = seen.entry(base.clone()).or_insert(0);
    let anchor = match *count {
        0 => base,
        n => format!("{}-{}", base, n),
    };

    *count += 1;
    anchor
}

/// Plain text of the first paragraph, cut to at most `max_chars` characters.
/// Returns `None` if the source has no paragraph text.
pub fn excerpt(source: &str, max_chars: usize) -> Option<String> {
    let mut text = String::new();
    let mut in_paragraph = false;

    for event in Parser::new_ext(source, options()) {
        match event {
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) if !text.trim().is_empty() => break,
            Event::End(TagEnd::Paragraph) => in_paragraph = false,
            Event::Text(part) | Event::Code(part) if in_paragraph => text.push_str(&part),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => (),
        }
    }

    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(truncate(text, max_chars))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();

    // Prefer ending on a word boundary
    let cut = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => cut[..idx].trim_end(),
        _ => cut.as_str(),
    };

    let mut output = cut.to_string();
    output.push(ELLIPSIS);
    output
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tables() {
        let html = render("| Name | Value |\n|------|-------|\n| a | 1 |\n");

        assert!(html.contains("<table>"), "No table in {}", html);
        assert!(html.contains("<th>Name</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn code_blocks() {
        let html = render("```rust\nfn main() {}\n```\n");

        assert!(html.contains(r#"<code class="language-rust">"#), "No language class in {}", html);
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn raw_html_escaped() {
        let html = render("Hello <script>alert(1)</script>\n\n<div onclick=\"x()\">block</div>\n");

        assert!(!html.contains("<script>"), "Raw HTML passed through: {}", html);
        assert!(!html.contains("<div"), "Raw HTML passed through: {}", html);
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn headings() {
        let source = "# Getting Started\n\ntext\n\n## Install `docwell`\n\n## Getting Started\n";
        let headings = outline(source);

        assert_eq!(
            headings,
            vec![
                Heading {
                    level: 1,
                    text: "Getting Started".into(),
                    anchor: "getting-started".into(),
                },
                Heading {
                    level: 2,
                    text: "Install docwell".into(),
                    anchor: "install-docwell".into(),
                },
                Heading {
                    level: 2,
                    text: "Getting Started".into(),
                    anchor: "getting-started-1".into(),
                },
            ],
        );

        let html = render(source);
        assert!(html.contains(r#"<h1 id="getting-started">"#), "Missing anchor in {}", html);
        assert!(html.contains(r#"<h2 id="getting-started-1">"#));
    }

    #[test]
    fn excerpts() {
        let source = "# Title\n\nFirst paragraph\ncontinues here.\n\nSecond paragraph.";
        assert_eq!(
            excerpt(source, 200).as_deref(),
            Some("First paragraph continues here."),
        );

        assert_eq!(
            excerpt("A fairly long sentence that goes on", 16).as_deref(),
            Some("A fairly long…"),
        );

        assert_eq!(excerpt("# Only a heading", 50), None);
        assert_eq!(excerpt("", 50), None);
    }
}
