use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use xhtmlchardet::detect;

use crate::error::Error;

pub(crate) fn encoding(data: &[u8], hint: Option<String>) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, hint).ok()?;
    // no encoding detected
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        &charsets[0]
    };
    Encoding::for_label(label.as_bytes())
}

/// Decode markup bytes to text, using the detected encoding or UTF-8.
///
/// Malformed byte sequences are an error rather than replaced.
pub(crate) fn decode(data: &[u8]) -> Result<Cow<str>, Error> {
    let encoding = encoding(data, None).unwrap_or(UTF_8);
    let (text, _, had_errors) = encoding.decode(data);
    if had_errors {
        return Err(Error::Encoding(encoding.name()));
    }
    Ok(text)
}
