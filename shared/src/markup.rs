//! The minimal text conventions used by blog bodies and project articles.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://\S+").unwrap_or_else(|err| panic!("invalid url pattern: {err}"))
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    Text(String),
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(Vec<Inline>),
    List(Vec<Vec<Inline>>),
    Code(String),
}

/// Splits plain text into text and bare-URL spans.
pub fn split_links(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for found in URL_PATTERN.find_iter(text) {
        if found.start() > cursor {
            spans.push(Inline::Text(text[cursor..found.start()].to_string()));
        }
        spans.push(Inline::Link(found.as_str().to_string()));
        cursor = found.end();
    }
    if cursor < text.len() {
        spans.push(Inline::Text(text[cursor..].to_string()));
    }
    spans
}

/// Blog bodies: one block per non-empty line, `##` lines are headings.
pub fn parse_blog(content: &str) -> Vec<Block> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix("##") {
            Some(heading) => Block::Heading {
                level: 2,
                text: heading.trim_start_matches('#').trim().to_string(),
            },
            None => Block::Paragraph(vec![Inline::Text(line.to_string())]),
        })
        .collect()
}

/// Project articles: fenced code, `##`/`###` headings, `- ` lists and
/// paragraphs made of consecutive lines joined by a space.
pub fn parse_article(content: &str) -> Vec<Block> {
    let lines: Vec<&str> = content.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() {
            i += 1;
            continue;
        }

        if line.starts_with("```") {
            i += 1;
            let mut code = Vec::new();
            while i < lines.len() && !lines[i].trim().starts_with("```") {
                code.push(lines[i]);
                i += 1;
            }
            // closing fence
            if i < lines.len() {
                i += 1;
            }
            blocks.push(Block::Code(code.join("\n")));
            continue;
        }

        if let Some(text) = line.strip_prefix("### ") {
            blocks.push(Block::Heading {
                level: 3,
                text: text.trim().to_string(),
            });
            i += 1;
            continue;
        }

        if let Some(text) = line.strip_prefix("## ") {
            blocks.push(Block::Heading {
                level: 2,
                text: text.trim().to_string(),
            });
            i += 1;
            continue;
        }

        if line.starts_with("- ") {
            let mut items = Vec::new();
            while let Some(item) = lines.get(i).and_then(|raw| raw.trim().strip_prefix("- ")) {
                items.push(split_links(item));
                i += 1;
            }
            blocks.push(Block::List(items));
            continue;
        }

        let mut paragraph = vec![line];
        i += 1;
        while let Some(next) = lines.get(i).map(|raw| raw.trim()) {
            if next.is_empty() || starts_block(next) {
                break;
            }
            paragraph.push(next);
            i += 1;
        }
        blocks.push(Block::Paragraph(split_links(&paragraph.join(" "))));
    }

    blocks
}

fn starts_block(line: &str) -> bool {
    line.starts_with("## ")
        || line.starts_with("### ")
        || line.starts_with("- ")
        || line.starts_with("```")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Inline {
        Inline::Text(value.to_string())
    }

    #[test]
    fn blog_lines_become_headings_and_paragraphs() {
        let blocks = parse_blog("Intro line.\n\n## The Garden\n\n  Second paragraph.  \n");
        assert_eq!(blocks, vec![
            Block::Paragraph(vec![text("Intro line.")]),
            Block::Heading {
                level: 2,
                text: "The Garden".to_string()
            },
            Block::Paragraph(vec![text("Second paragraph.")]),
        ]);
    }

    #[test]
    fn blog_heading_marker_needs_no_space() {
        let blocks = parse_blog("##Tight");
        assert_eq!(blocks, vec![Block::Heading {
            level: 2,
            text: "Tight".to_string()
        }]);
    }

    #[test]
    fn article_joins_wrapped_lines_and_groups_lists() {
        let article = "First line\nsecond line\n## Setup\n- one\n- see https://example.com/docs\n\nTail";
        let blocks = parse_article(article);
        assert_eq!(blocks, vec![
            Block::Paragraph(vec![text("First line second line")]),
            Block::Heading {
                level: 2,
                text: "Setup".to_string()
            },
            Block::List(vec![vec![text("one")], vec![
                text("see "),
                Inline::Link("https://example.com/docs".to_string())
            ]]),
            Block::Paragraph(vec![text("Tail")]),
        ]);
    }

    #[test]
    fn article_keeps_code_verbatim_and_tolerates_unclosed_fence() {
        let blocks = parse_article("### Build\n```\ncargo build\n  --release\n```\nafter\n```\nopen");
        assert_eq!(blocks, vec![
            Block::Heading {
                level: 3,
                text: "Build".to_string()
            },
            Block::Code("cargo build\n  --release".to_string()),
            Block::Paragraph(vec![text("after")]),
            Block::Code("open".to_string()),
        ]);
    }

    #[test]
    fn links_are_split_out_of_text() {
        assert_eq!(split_links("a http://x.io b https://y.io"), vec![
            text("a "),
            Inline::Link("http://x.io".to_string()),
            text(" b "),
            Inline::Link("https://y.io".to_string()),
        ]);
        assert!(split_links("").is_empty());
    }
}
