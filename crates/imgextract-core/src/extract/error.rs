//! Error taxonomy for the extraction pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The data URI marker does not occur in the document.
    #[error("Could not find the base64 image data.")]
    MarkerNotFound,

    /// The marker was found but no closing `"` follows it.
    #[error("Could not find the end of the image data.")]
    UnterminatedPayload,

    /// Payload is not valid base64 after padding repair.
    #[error("Error decoding or saving image")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error decoding or saving image: failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Diagnostics could not be written to the console sink.
    #[error("failed to write diagnostics")]
    Console(#[source] io::Error),
}

impl ExtractError {
    /// True for the two "payload not present" failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ExtractError::MarkerNotFound | ExtractError::UnterminatedPayload
        )
    }
}
