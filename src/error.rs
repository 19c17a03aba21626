use std::path::PathBuf;

use thiserror::Error;

/// Network failure while retrieving the quotes page. Fatal.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read page body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// An episode header that could not be resolved. The episode is skipped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeaderError {
    #[error("header block has no marker element")]
    MissingMarker,

    #[error("location line {0:?} does not read \"Season <N> Episode <M>\"")]
    Location(String),

    #[error("no title found for season {season} episode {episode}")]
    Title { season: String, episode: String },
}

/// A quote block that could not be split into speaker and line. The quote is skipped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuoteError {
    #[error("quote block has no speaker element")]
    MissingSpeaker,

    #[error("quote block {0:?} has no ':' separator")]
    MissingSeparator(String),

    #[error("quote for {0} is empty")]
    EmptyQuote(String),
}

/// Failure rendering, writing or re-reading a dump. Fatal for a run.
#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_error_messages_name_the_episode() {
        let e = HeaderError::Title {
            season: "7".into(),
            episode: "14".into(),
        };
        assert_eq!(e.to_string(), "no title found for season 7 episode 14");
    }

    #[test]
    fn write_error_names_the_path() {
        let e = SerializeError::Write {
            path: PathBuf::from("/nope/quotes.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(e.to_string().contains("/nope/quotes.yaml"));
    }
}
