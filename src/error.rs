//! Error types for the color_sort library

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorSortError>;

#[derive(Error, Debug)]
pub enum ColorSortError {
    /// The image could not be opened or decoded. Covers missing files, permission
    /// errors, unsupported formats and corrupt data alike.
    #[error("{}: {source}", path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The report could not be written to its output stream.
    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl ColorSortError {
    pub fn image_open(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::ImageOpen {
            path: path.into(),
            source,
        }
    }
}
