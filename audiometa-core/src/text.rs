//! Text decoding for tag payloads.
//!
//! ID3 frame text is self-describing: a leading byte selects the character
//! encoding of the remainder. Vorbis comments and M4A atom values carry no
//! flag byte and are always UTF-8.

/// Character encodings an ID3 text frame can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// ISO-8859-1.
    Latin1,
    /// UTF-16 with a leading byte-order mark.
    Utf16Bom,
    /// UTF-16 without a byte-order mark (big-endian assumed).
    Utf16,
    /// UTF-8.
    Utf8,
}

impl TextEncoding {
    /// Map an ID3 encoding byte to an encoding.
    pub fn from_id3_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(TextEncoding::Latin1),
            1 => Some(TextEncoding::Utf16Bom),
            2 => Some(TextEncoding::Utf16),
            3 => Some(TextEncoding::Utf8),
            _ => None,
        }
    }
}

/// Decode an ID3 text frame payload.
///
/// The first byte selects the encoding; the remainder is the text with a
/// trailing NUL terminator (one byte for Latin-1/UTF-8, two for UTF-16).
/// Payloads with an unrecognized encoding byte or no content decode to an
/// empty string. Exactly one trailing terminator is stripped when present,
/// so NULs embedded in the value survive; truncated payloads decode to
/// whatever text is there.
pub fn decode_id3_text(payload: &[u8]) -> String {
    let Some((&flag, rest)) = payload.split_first() else {
        return String::new();
    };
    let Some(encoding) = TextEncoding::from_id3_byte(flag) else {
        return String::new();
    };

    let text = match encoding {
        TextEncoding::Latin1 => decode_latin1(rest),
        TextEncoding::Utf16Bom => match rest {
            [0xFE, 0xFF, tail @ ..] => decode_utf16(tail, true),
            [0xFF, 0xFE, tail @ ..] => decode_utf16(tail, false),
            // no BOM present despite the declared encoding
            _ => decode_utf16(rest, true),
        },
        TextEncoding::Utf16 => decode_utf16(rest, true),
        TextEncoding::Utf8 => String::from_utf8_lossy(rest).into_owned(),
    };

    match text.strip_suffix('\0') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Decode raw UTF-8 with no flag byte and no terminator stripping.
///
/// Used for Vorbis comment values and M4A atom values.
pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decode ISO-8859-1 bytes; every byte maps directly to the code point.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Decode UTF-16 bytes in the given byte order, dropping a trailing odd
/// byte if the payload was truncated mid code unit.
pub fn decode_utf16(bytes: &[u8], big_endian: bool) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16_lossy(&units)
}
