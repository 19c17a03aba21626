use itertools::Itertools;
use tracing::debug;

/// One header block and the quote blocks that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeGroup<T> {
    pub header: T,
    pub quotes: Vec<T>,
}

/// Output of [`split_episodes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segments<T> {
    /// Headers that own a quote-run, in document order.
    pub groups: Vec<EpisodeGroup<T>>,
    /// Headers directly followed by another header or by the end of input.
    pub bare_headers: Vec<T>,
}

/// Partition blocks into (header, quote-run) groups in document order.
///
/// Blocks before the first header are dropped. A header that is directly
/// followed by another header, or by the end of input, owns no quote-run; it
/// goes to `bare_headers` instead of `groups`.
pub fn split_episodes<T, I, F>(blocks: I, is_header: F) -> Segments<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> bool,
{
    let mut groups = Vec::new();
    let mut bare_headers = Vec::new();
    let mut pending: Option<T> = None;

    let runs = blocks.into_iter().group_by(|b| is_header(b));
    for (header_run, run) in &runs {
        if header_run {
            for header in run {
                bare_headers.extend(pending.replace(header));
            }
        } else if let Some(header) = pending.take() {
            groups.push(EpisodeGroup {
                header,
                quotes: run.collect(),
            });
        } else {
            debug!(blocks = run.count(), "dropped blocks before first header");
        }
    }
    bare_headers.extend(pending);

    if !bare_headers.is_empty() {
        debug!(headers = bare_headers.len(), "headers without a quote-run");
    }

    Segments {
        groups,
        bare_headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_header(s: &&str) -> bool {
        s.starts_with('#')
    }

    fn shape<'a>(segments: &Segments<&'a str>) -> Vec<(&'a str, Vec<&'a str>)> {
        segments
            .groups
            .iter()
            .map(|g| (g.header, g.quotes.clone()))
            .collect()
    }

    #[test]
    fn pairs_headers_with_following_runs() {
        let blocks = vec!["intro", "blurb", "#1", "a", "b", "#2", "c"];
        let segments = split_episodes(blocks, is_header);
        assert_eq!(
            shape(&segments),
            vec![("#1", vec!["a", "b"]), ("#2", vec!["c"])]
        );
        assert!(segments.bare_headers.is_empty());
    }

    #[test]
    fn first_header_keeps_its_quotes_without_preamble() {
        let segments = split_episodes(vec!["#1", "a", "#2", "b"], is_header);
        assert_eq!(segments.groups.len(), 2);
        assert_eq!(segments.groups[0].quotes, vec!["a"]);
    }

    #[test]
    fn back_to_back_headers() {
        let segments = split_episodes(vec!["#1", "#2", "a", "#3"], is_header);
        assert_eq!(shape(&segments), vec![("#2", vec!["a"])]);
        assert_eq!(segments.bare_headers, vec!["#1", "#3"]);
    }

    #[test]
    fn no_headers() {
        let segments = split_episodes(vec!["a", "b"], is_header);
        assert!(segments.groups.is_empty());
        assert!(segments.bare_headers.is_empty());
    }

    #[test]
    fn no_quote_runs() {
        let segments = split_episodes(vec!["#1", "#2"], is_header);
        assert!(segments.groups.is_empty());
        assert_eq!(segments.bare_headers, vec!["#1", "#2"]);
    }

    #[test]
    fn empty_input() {
        let segments = split_episodes(Vec::<&str>::new(), is_header);
        assert!(segments.groups.is_empty());
        assert!(segments.bare_headers.is_empty());
    }

    #[test]
    fn length_matches_headers_with_runs() {
        let blocks = vec!["pre", "#1", "a", "#2", "#3", "b", "c", "#4", "d", "#5"];
        let segments = split_episodes(blocks.clone(), is_header);
        let expected = blocks
            .windows(2)
            .filter(|w| is_header(&w[0]) && !is_header(&w[1]))
            .count();
        assert_eq!(segments.groups.len(), expected);
        let headers: Vec<&str> = segments.groups.iter().map(|g| g.header).collect();
        assert_eq!(headers, vec!["#1", "#3", "#4"]);
        assert_eq!(segments.bare_headers, vec!["#2", "#5"]);
    }
}
