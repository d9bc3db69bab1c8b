/*!
Conversions between text, bytes and hex strings.

All adapters move data through these helpers: text is turned into bytes
before it reaches a cipher, and binary results are handed back as lowercase
hex. The default text conversion is single-byte: every UTF-16 code unit is
truncated to its low 8 bits, exactly like copying a JavaScript string into a
`Uint8Array`. [`TextCodec::Utf8`] is the multi-byte safe alternative.
*/

use crate::core::error::{CryptoError, Error, Result};
use crate::format_err;

/// Convert text to bytes, one byte per UTF-16 code unit.
///
/// Code units above `0xFF` keep only their low byte, so non-Latin-1 text does
/// not survive a round trip. Percent-encode such text first
/// (see [`encode_uri_component`]).
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| unit as u8).collect()
}

/// Convert bytes back to text, one char per byte (U+0000..=U+00FF).
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Render bytes as a lowercase hex string, or `None` for an empty buffer.
pub fn bytes_to_hex_string(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    Some(hex::encode(bytes))
}

/// Parse a hex string into bytes.
///
/// Fails with [`Error::Format`] on odd length or any non-hex character.
pub fn hex_string_to_bytes(text: &str) -> Result<Vec<u8>> {
    if text.len() % 2 != 0 {
        return Err(format_err!("Invalid string (%2 !== 0)"));
    }

    hex::decode(text).map_err(|e| format_err!("Invalid hexString: {}", e))
}

/// How adapters turn text into bytes and back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum TextCodec {
    /// One byte per UTF-16 code unit, high bits dropped
    #[default]
    Latin1,
    /// UTF-8
    Utf8,
}

impl TextCodec {
    /// Encode text to bytes
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextCodec::Latin1 => text_to_bytes(text),
            TextCodec::Utf8 => text.as_bytes().to_vec(),
        }
    }

    /// Decode bytes to text
    ///
    /// Only [`TextCodec::Utf8`] can fail, with [`Error::Decryption`].
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            TextCodec::Latin1 => Ok(bytes_to_text(bytes)),
            TextCodec::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|_| Error::Decryption(CryptoError::InvalidText)),
        }
    }

    /// Codec name
    pub fn name(&self) -> &'static str {
        match self {
            TextCodec::Latin1 => "latin1",
            TextCodec::Utf8 => "utf-8",
        }
    }
}

const HEX_UPPER: [u8; 16] = *b"0123456789ABCDEF";

/// Percent-encode text the way `encodeURIComponent` does.
///
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched and escapes every other
/// UTF-8 byte as `%XX`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if b.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX_UPPER[(b >> 4) as usize] as char);
            out.push(HEX_UPPER[(b & 0xF) as usize] as char);
        }
    }
    out
}

/// Reverse [`encode_uri_component`].
///
/// Fails with [`Error::Format`] on a truncated or non-hex escape, or when the
/// escaped bytes are not valid UTF-8.
pub fn decode_uri_component(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes
                .get(i + 1..i + 3)
                .ok_or_else(|| format_err!("URI malformed: truncated escape at {}", i))?;
            let (hi, lo) = match (hex_val(escape[0]), hex_val(escape[1])) {
                (Some(hi), Some(lo)) => (hi, lo),
                _ => return Err(format_err!("URI malformed: bad escape at {}", i)),
            };
            out.push(hi << 4 | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).map_err(|_| format_err!("URI malformed: invalid UTF-8"))
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
