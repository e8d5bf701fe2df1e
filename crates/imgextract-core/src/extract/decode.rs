//! Strict base64 decoding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use super::ExtractError;

/// Leading bytes of every PNG file.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Standard alphabet with canonical padding. Leftover bits in the last symbol
/// are ignored rather than rejected.
const STRICT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode with the standard alphabet, requiring canonical padding. Non-alphabet
/// characters (whitespace included) and misplaced or excess padding are
/// rejected.
pub fn decode_payload(padded: &str) -> Result<Vec<u8>, ExtractError> {
    Ok(STRICT.decode(padded)?)
}

pub fn has_png_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(&PNG_SIGNATURE)
}
