pub mod header;
pub mod quote;

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::blocks::Splitter;
use super::episodes::Segments;

/// One output row. Key order here is the key order of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub speaker: String,
    pub quote: String,
    pub season: String,
    pub episode: String,
    pub title: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    pub episodes_processed: usize,
    pub episodes_skipped: usize,
    pub quotes_extracted: usize,
    pub quotes_skipped: usize,
}

impl ParseStats {
    pub fn log(&self) {
        info!(
            "Parsed {} episodes ({} skipped), {} quotes ({} skipped)",
            self.episodes_processed, self.episodes_skipped, self.quotes_extracted, self.quotes_skipped,
        );
    }
}

pub struct ExtractedData {
    pub records: Vec<QuoteRecord>,
    pub stats: ParseStats,
}

/// Turn episode groups into quote records. A bad header drops its episode,
/// a bad quote drops only itself. Headers without quotes are still resolved
/// and counted.
pub fn extract_all(segments: &Segments<ElementRef<'_>>, splitter: &Splitter) -> ExtractedData {
    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for block in &segments.bare_headers {
        match header::extract(block, splitter) {
            Ok(episode) => {
                stats.episodes_processed += 1;
                debug!(
                    season = %episode.season,
                    episode = %episode.episode,
                    title = %episode.title,
                    "episode has no quotes"
                );
            }
            Err(e) => {
                warn!("Skipping episode (0 quotes): {}", e);
                stats.episodes_skipped += 1;
            }
        }
    }

    for group in &segments.groups {
        let episode = match header::extract(&group.header, splitter) {
            Ok(h) => h,
            Err(e) => {
                warn!("Skipping episode ({} quotes): {}", group.quotes.len(), e);
                stats.episodes_skipped += 1;
                stats.quotes_skipped += group.quotes.len();
                continue;
            }
        };
        stats.episodes_processed += 1;
        debug!(
            season = %episode.season,
            episode = %episode.episode,
            title = %episode.title,
            quotes = group.quotes.len(),
            "episode"
        );

        for block in &group.quotes {
            match quote::extract(block) {
                Ok(line) => {
                    stats.quotes_extracted += 1;
                    records.push(QuoteRecord {
                        speaker: line.speaker,
                        quote: line.quote,
                        season: episode.season.clone(),
                        episode: episode.episode.clone(),
                        title: episode.title.clone(),
                    });
                }
                Err(e) => {
                    warn!(
                        "Skipping quote in S{}E{} {:?}: {}",
                        episode.season, episode.episode, episode.title, e
                    );
                    stats.quotes_skipped += 1;
                }
            }
        }
    }

    ExtractedData { records, stats }
}

// ── Tests ──
