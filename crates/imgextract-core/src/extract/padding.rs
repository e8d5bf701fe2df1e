//! Padding repair for base64 payloads that lost their trailing `=`.

/// Number of `=` to append so that a payload of `len` characters becomes a
/// multiple of four.
///
/// A remainder of 1 can never come from a valid encoding; three pad characters
/// are still appended so the length check passes, and strict decoding is left
/// to reject the result.
pub fn padding_for_len(len: usize) -> usize {
    match len % 4 {
        1 => 3,
        2 => 2,
        3 => 1,
        _ => 0,
    }
}

/// Append the padding chosen by [`padding_for_len`], counting characters.
pub fn repair_padding(payload: &str) -> String {
    let pad = padding_for_len(payload.chars().count());
    let mut out = String::with_capacity(payload.len() + pad);
    out.push_str(payload);
    out.extend(std::iter::repeat('=').take(pad));
    out
}
