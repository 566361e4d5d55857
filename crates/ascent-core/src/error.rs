// File: crates/ascent-core/src/error.rs
// Summary: Error type shared by parsing, data sources and scale construction.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("dataset is empty; nothing to plot")]
    EmptyDataset,

    #[error("invalid time {value:?}, expected MM:SS")]
    InvalidTime { value: String },

    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<ChartError>,
    },

    #[error("invalid {field} {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("missing CSV column {0:?}")]
    MissingColumn(&'static str),

    #[error("unsupported input {}; expected a .json or .csv file", .0.display())]
    UnsupportedInput(PathBuf),

    #[error("server answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn at(index: usize, source: ChartError) -> Self {
        Self::Record { index, source: Box::new(source) }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
