use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PpError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("output directory error at {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
