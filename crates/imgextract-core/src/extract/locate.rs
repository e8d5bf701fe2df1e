//! Locate the data URI payload inside the document text.

use super::ExtractError;

/// Return the text strictly between the first `marker` and the next `"`.
///
/// The quote search starts right after the marker. The returned slice may be
/// empty (`data:image/png;base64,""`).
pub fn locate_payload<'a>(document: &'a str, marker: &str) -> Result<&'a str, ExtractError> {
    let start = document
        .find(marker)
        .ok_or(ExtractError::MarkerNotFound)?
        + marker.len();
    let len = document[start..]
        .find('"')
        .ok_or(ExtractError::UnterminatedPayload)?;
    Ok(&document[start..start + len])
}
