use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::error::SerializeError;
use crate::parser::extract::QuoteRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

pub fn render(records: &[QuoteRecord], format: Format) -> Result<String, SerializeError> {
    match format {
        Format::Yaml => Ok(serde_yaml::to_string(records)?),
        Format::Json => {
            let mut text = serde_json::to_string_pretty(records)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Render `records` and write them to `path`, or to stdout when `path` is `None`.
pub fn dump(records: &[QuoteRecord], format: Format, path: Option<&Path>) -> Result<(), SerializeError> {
    let text = render(records, format)?;

    match path {
        None => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())
                .and_then(|_| out.flush())
                .map_err(SerializeError::Stdout)?;
        }
        Some(path) => {
            fs::write(path, &text).map_err(|source| SerializeError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Wrote {} quotes to {}", records.len(), path.display());
        }
    }
    Ok(())
}

/// Read back a dump produced by [`render`].
#[cfg(test)]
pub fn load(text: &str, format: Format) -> Result<Vec<QuoteRecord>, SerializeError> {
    match format {
        Format::Yaml => Ok(serde_yaml::from_str(text)?),
        Format::Json => Ok(serde_json::from_str(text)?),
    }
}
