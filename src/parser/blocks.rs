use std::sync::LazyLock;

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};

pub const PARAGRAPH_SELECTOR: &str = "div.entry-content p";
pub const MARKER_SELECTOR: &str = r#"span[style*="underline"]"#;

static PARAGRAPH_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(PARAGRAPH_SELECTOR).unwrap());

/// Paragraph-level blocks of the post body, in document order.
pub fn paragraphs(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&PARAGRAPH_SEL).collect()
}

/// Decides which blocks open a new episode, and where the episode
/// location line lives inside them.
#[derive(Debug, Clone)]
pub struct Splitter {
    marker: Selector,
}

impl Splitter {
    pub fn new(marker_css: &str) -> Result<Self> {
        let marker = Selector::parse(marker_css)
            .map_err(|e| anyhow!("invalid marker selector {:?}: {}", marker_css, e))?;
        Ok(Self { marker })
    }

    pub fn is_header(&self, block: &ElementRef) -> bool {
        self.marker(block).is_some()
    }

    pub fn marker<'a>(&self, block: &ElementRef<'a>) -> Option<ElementRef<'a>> {
        block.select(&self.marker).next()
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self {
            marker: Selector::parse(MARKER_SELECTOR).unwrap(),
        }
    }
}

/// All text under `el`, every whitespace run collapsed to one space.
/// Line breaks and repeated spaces inside a quote or title do not survive.
pub fn element_text(el: &ElementRef) -> String {
    normalize(&el.text().collect::<String>())
}

/// The first non-blank text node under `el`.
pub fn first_text_line(el: &ElementRef) -> Option<String> {
    el.text()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(normalize)
}

pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_body(body: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div class="entry-content">{}</div></body></html>"#,
            body
        ))
    }

    #[test]
    fn paragraphs_in_document_order() {
        let doc = parse_body("<p>one</p><p>two</p><div><p>three</p></div>");
        let texts: Vec<String> = paragraphs(&doc).iter().map(element_text).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn paragraphs_outside_entry_content_ignored() {
        let doc = Html::parse_document(
            r#"<body><p>sidebar</p><div class="entry-content"><p>post</p></div></body>"#,
        );
        let texts: Vec<String> = paragraphs(&doc).iter().map(element_text).collect();
        assert_eq!(texts, vec!["post"]);
    }

    #[test]
    fn underlined_span_is_header() {
        let doc = parse_body(
            r#"<p><span style="text-decoration:underline;">Season 7 Episode 13 </span></p>
               <p><strong>Rossi:</strong> “Quote.”</p>
               <p><span>plain span</span></p>"#,
        );
        let splitter = Splitter::default();
        let flags: Vec<bool> = paragraphs(&doc)
            .iter()
            .map(|p| splitter.is_header(p))
            .collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn custom_marker() {
        let doc = parse_body("<p><b>Season 1 Episode 1</b></p><p>x</p>");
        let splitter = Splitter::new("b").unwrap();
        let blocks = paragraphs(&doc);
        assert!(splitter.is_header(&blocks[0]));
        assert!(!splitter.is_header(&blocks[1]));
    }

    #[test]
    fn bad_marker_selector() {
        assert!(Splitter::new("span[").is_err());
    }

    #[test]
    fn first_text_line_skips_blank_nodes() {
        let doc = parse_body(
            "<p><span>\n  <br>Season 7 Episode 13 <em>Snake Eyes</em></span></p>",
        );
        let span = Splitter::new("span").unwrap();
        let blocks = paragraphs(&doc);
        let marker = span.marker(&blocks[0]).unwrap();
        assert_eq!(first_text_line(&marker).as_deref(), Some("Season 7 Episode 13"));
    }

    #[test]
    fn text_is_concatenated_then_collapsed() {
        let doc = parse_body("<p><strong>Reid:</strong>\u{a0} Hello   <em>there</em>.</p>");
        assert_eq!(element_text(&paragraphs(&doc)[0]), "Reid: Hello there.");
    }

    #[test]
    fn inner_whitespace_runs_collapse() {
        let doc = parse_body("<p><strong>JJ:</strong> a   b\n  c</p>");
        assert_eq!(element_text(&paragraphs(&doc)[0]), "JJ: a b c");
        assert_eq!(normalize("  a   b\n  c  "), "a b c");
    }
}
