use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::error::FetchError;

pub const QUOTES_PAGE_URL: &str =
    "https://agoldoffish.wordpress.com/criminal-minds-opening-and-closing-quotes/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetch a page and return its body. One attempt, no retries.
pub async fn fetch_page(url: &str, show_progress: bool) -> Result<String, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let pb = if show_progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(format!("fetching {}", url));
    pb.enable_steady_tick(Duration::from_millis(120));

    info!("Fetching quotes page: {}", url);
    let start = Instant::now();
    let result = get_body(&client, url).await;
    pb.finish_and_clear();

    let body = result?;
    debug!(
        bytes = body.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "page fetched"
    );
    Ok(body)
}

async fn get_body(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    check_status(url, response.status())?;

    response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

fn check_status(url: &str, status: reqwest::StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}
