use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::error::QuoteError;
use crate::parser::blocks::element_text;

static STRONG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("strong").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    pub speaker: String,
    pub quote: String,
}

/// `<p><strong>Reid:</strong> line</p>` → speaker "Reid", quote "line".
pub fn extract(block: &ElementRef) -> Result<QuoteLine, QuoteError> {
    let speaker = block
        .select(&STRONG_SEL)
        .next()
        .map(|strong| clean_speaker(&element_text(&strong)))
        .filter(|s| !s.is_empty())
        .ok_or(QuoteError::MissingSpeaker)?;

    let text = element_text(block);
    let quote = strip_label(&text).ok_or_else(|| QuoteError::MissingSeparator(text.clone()))?;
    if quote.is_empty() {
        return Err(QuoteError::EmptyQuote(speaker));
    }

    Ok(QuoteLine {
        quote: quote.to_string(),
        speaker,
    })
}

/// Everything after the first colon, trimmed.
pub fn strip_label(text: &str) -> Option<&str> {
    text.split_once(':').map(|(_, rest)| rest.trim())
}

fn clean_speaker(raw: &str) -> String {
    raw.trim().trim_end_matches(':').trim_end().to_string()
}
