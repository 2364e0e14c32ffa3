use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("cannot read spreadsheet '{}': {reason}", .path.display())]
    SourceRead { path: PathBuf, reason: String },

    #[error("missing required column(s): {}", .0.join(", "))]
    Schema(Vec<String>),

    #[error("cannot write output '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConverterError>;
