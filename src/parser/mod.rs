pub mod blocks;
pub mod episodes;
pub mod extract;

use scraper::Html;

use blocks::Splitter;
use extract::ExtractedData;

/// Three-pass pipeline: html → blocks → episodes → quote records.
pub fn process_page(html: &str, splitter: &Splitter) -> ExtractedData {
    let document = Html::parse_document(html);
    let blocks = blocks::paragraphs(&document);
    let segments = episodes::split_episodes(blocks, |b| splitter.is_header(b));
    extract::extract_all(&segments, splitter)
}
