//! The end-to-end pipeline: read → locate → repair → decode → persist.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::{
    decode_payload, has_png_signature, locate_payload, padding_for_len, persist, repair_padding,
    ExtractError,
};
use crate::checksum;
use crate::config::ExtractConfig;

/// Where to read, where to write and what to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub marker: String,
    /// How many trailing payload characters to echo in diagnostics.
    pub tail_preview_chars: usize,
}

impl ExtractOptions {
    /// Options with the default marker and preview width.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::from(&ExtractConfig::default())
    }
}

impl From<&ExtractConfig> for ExtractOptions {
    fn from(cfg: &ExtractConfig) -> Self {
        Self {
            input: cfg.input_path.clone(),
            output: cfg.output_path.clone(),
            marker: cfg.marker.clone(),
            tail_preview_chars: cfg.tail_preview_chars,
        }
    }
}

/// Outcome of a successful [`extract_image`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub output: PathBuf,
    pub bytes_written: usize,
    /// Payload length in characters before padding repair.
    pub payload_len: usize,
    pub padding_added: usize,
    /// SHA-256 of the written bytes, lowercase hex.
    pub sha256: String,
}

/// Outcome of [`inspect_image`]: everything [`extract_image`] would do short
/// of writing the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub payload_len: usize,
    pub padding_added: usize,
    pub decoded_len: usize,
    pub png_signature: bool,
}

struct Prepared {
    payload_len: usize,
    padding_added: usize,
    padded: String,
}

/// Last `n` characters of `s`.
fn tail_chars(s: &str, n: usize) -> &str {
    let skip = s.chars().count().saturating_sub(n);
    match s.char_indices().nth(skip) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

fn prepare<W: Write>(opts: &ExtractOptions, console: &mut W) -> Result<Prepared, ExtractError> {
    let document = fs::read_to_string(&opts.input).map_err(|source| ExtractError::Read {
        path: opts.input.clone(),
        source,
    })?;
    tracing::debug!(
        "read {} bytes from {}",
        document.len(),
        opts.input.display()
    );

    let payload = locate_payload(&document, &opts.marker).inspect_err(|e| {
        tracing::warn!("{} (input={})", e, opts.input.display());
    })?;
    let payload_len = payload.chars().count();

    writeln!(console, "Length of extracted data: {}", payload_len)
        .map_err(ExtractError::Console)?;
    writeln!(
        console,
        "Last {} chars of extracted data: {}",
        opts.tail_preview_chars,
        tail_chars(payload, opts.tail_preview_chars)
    )
    .map_err(ExtractError::Console)?;

    let padding_added = padding_for_len(payload_len);
    if padding_added > 0 {
        writeln!(console, "Trying to fix padding...").map_err(ExtractError::Console)?;
        if payload_len % 4 == 1 {
            tracing::warn!(
                "payload length {} is one more than a multiple of 4; appending '===' cannot yield valid base64",
                payload_len
            );
        } else {
            tracing::info!("appending {} padding character(s)", padding_added);
        }
    }

    Ok(Prepared {
        payload_len,
        padding_added,
        padded: repair_padding(payload),
    })
}

/// Run the full pipeline and write the image to `opts.output`.
///
/// Diagnostics (payload length, payload tail, padding repair) go to `console`.
/// The output file is only touched after decoding succeeded.
pub fn extract_image<W: Write>(
    opts: &ExtractOptions,
    console: &mut W,
) -> Result<Extraction, ExtractError> {
    let prepared = prepare(opts, console)?;

    let bytes = decode_payload(&prepared.padded).inspect_err(|e| {
        tracing::error!("decode failed: {:?}", e);
    })?;
    if !has_png_signature(&bytes) {
        tracing::warn!("decoded {} bytes without a PNG signature", bytes.len());
    }

    persist(&opts.output, &bytes)?;
    let sha256 = checksum::sha256_bytes(&bytes);
    tracing::info!(
        "wrote {} bytes to {} (sha256 {})",
        bytes.len(),
        opts.output.display(),
        sha256
    );

    Ok(Extraction {
        output: opts.output.clone(),
        bytes_written: bytes.len(),
        payload_len: prepared.payload_len,
        padding_added: prepared.padding_added,
        sha256,
    })
}

/// Locate, repair and decode without writing anything. `opts.output` is ignored.
pub fn inspect_image<W: Write>(
    opts: &ExtractOptions,
    console: &mut W,
) -> Result<Inspection, ExtractError> {
    let prepared = prepare(opts, console)?;
    let bytes = decode_payload(&prepared.padded)?;
    Ok(Inspection {
        payload_len: prepared.payload_len,
        padding_added: prepared.padding_added,
        decoded_len: bytes.len(),
        png_signature: has_png_signature(&bytes),
    })
}
