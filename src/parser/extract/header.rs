use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::trace;

use crate::error::HeaderError;
use crate::parser::blocks::{element_text, first_text_line, Splitter};

static EM_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("em").unwrap());
static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[“”"](.+)[“”"]"#).unwrap());

const QUOTE_CHARS: &[char] = &['"', '“', '”'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeHeader {
    pub season: String,
    pub episode: String,
    pub title: String,
}

/// A title strategy sees the header block and its marker element.
type TitleStrategy = fn(&ElementRef, &ElementRef) -> Option<String>;

/// Tried in order; the first non-empty title wins.
const TITLE_STRATEGIES: &[(&str, TitleStrategy)] = &[
    ("marker_emphasis", marker_emphasis),
    ("block_emphasis", block_emphasis),
    ("quoted_text", quoted_text),
];

pub fn extract(block: &ElementRef, splitter: &Splitter) -> Result<EpisodeHeader, HeaderError> {
    let marker = splitter.marker(block).ok_or(HeaderError::MissingMarker)?;
    let (season, episode) = parse_location(&marker)?;

    match resolve_title(block, &marker) {
        Some(title) => Ok(EpisodeHeader {
            season,
            episode,
            title,
        }),
        None => Err(HeaderError::Title { season, episode }),
    }
}

/// "Season 7 Episode 13 ..." → ("7", "13"), read by token position.
fn parse_location(marker: &ElementRef) -> Result<(String, String), HeaderError> {
    let line = first_text_line(marker).unwrap_or_default();
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match (tokens.get(1), tokens.get(3)) {
        (Some(season), Some(episode)) => Ok((season.to_string(), episode.to_string())),
        _ => Err(HeaderError::Location(line)),
    }
}

fn resolve_title(block: &ElementRef, marker: &ElementRef) -> Option<String> {
    TITLE_STRATEGIES.iter().find_map(|(name, strategy)| {
        let title = strategy(block, marker)
            .map(|t| clean_title(&t))
            .filter(|t| !t.is_empty())?;
        trace!(strategy = *name, title = %title, "title resolved");
        Some(title)
    })
}

fn marker_emphasis(_block: &ElementRef, marker: &ElementRef) -> Option<String> {
    marker.select(&EM_SEL).next().map(|em| element_text(&em))
}

fn block_emphasis(block: &ElementRef, marker: &ElementRef) -> Option<String> {
    block
        .select(&EM_SEL)
        .find(|em| !em.ancestors().any(|a| a.id() == marker.id()))
        .map(|em| element_text(&em))
}

fn quoted_text(block: &ElementRef, _marker: &ElementRef) -> Option<String> {
    let text = element_text(block);
    QUOTED_RE.captures(&text).map(|caps| caps[1].to_string())
}

fn clean_title(raw: &str) -> String {
    raw.trim().trim_matches(QUOTE_CHARS).trim().to_string()
}
