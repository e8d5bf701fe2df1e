//! Extract an embedded base64 PNG from an HTML document.
//!
//! The pipeline is linear: locate the data URI payload, repair its padding,
//! decode strictly, and persist the bytes. Every stage is a terminal failure
//! point; nothing is retried and no output file is written unless decoding
//! succeeded.

mod decode;
mod error;
mod locate;
mod padding;
mod persist;
mod run;

pub use decode::{decode_payload, has_png_signature, PNG_SIGNATURE};
pub use error::ExtractError;
pub use locate::locate_payload;
pub use padding::{padding_for_len, repair_padding};
pub use persist::persist;
pub use run::{extract_image, inspect_image, ExtractOptions, Extraction, Inspection};

/// Marker that opens an inline PNG data URI.
pub const PNG_DATA_URI_MARKER: &str = "data:image/png;base64,";
