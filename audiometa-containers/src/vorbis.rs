//! Vorbis comment block parsing, shared by the FLAC and OGG readers.
//!
//! A comment block is a little-endian structure: vendor string length and
//! bytes, a comment count, then length-prefixed `KEY=value` entries.

use audiometa_core::cursor::ByteCursor;
use audiometa_core::error::Result;
use audiometa_core::metadata::Metadata;
use audiometa_core::{fields, text};
use tracing::debug;

/// Parse a Vorbis comment block and add its entries to `metadata`.
///
/// Entries are added as they are decoded, so everything parsed before a
/// truncation survives in the output.
pub fn parse_comments(data: &[u8], metadata: &mut Metadata) -> Result<()> {
    let mut cursor = ByteCursor::new(data);

    let vendor_len = cursor.read_u32_le()? as usize;
    cursor.skip(vendor_len)?;

    let count = cursor.read_u32_le()?;
    for _ in 0..count {
        let len = cursor.read_u32_le()? as usize;
        let comment = cursor.read_bytes(len)?;

        let Some(eq) = comment.iter().position(|&b| b == b'=') else {
            debug!("dropping vorbis comment without separator");
            continue;
        };
        let key = String::from_utf8_lossy(&comment[..eq]).to_uppercase();
        let value = text::decode_utf8(&comment[eq + 1..]);

        let tag = fields::vorbis_tag_name(&key).unwrap_or(&key);
        metadata.add_text_field(tag, value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_block(vendor: &[u8], comments: &[&[u8]]) -> Vec<u8> {
        let mut block = Vec::new();
        block.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
        block.extend_from_slice(vendor);
        block.extend_from_slice(&(comments.len() as u32).to_le_bytes());
        for comment in comments {
            block.extend_from_slice(&(comment.len() as u32).to_le_bytes());
            block.extend_from_slice(comment);
        }
        block
    }

    #[test]
    fn test_known_keys_normalize() {
        let block = build_block(
            b"vendor",
            &[b"TITLE=Song", b"ARTIST=Band", b"TRACKNUMBER=7"],
        );
        let mut metadata = Metadata::new();
        parse_comments(&block, &mut metadata).unwrap();

        assert_eq!(metadata.first_text_value("Title").unwrap(), "Song");
        assert_eq!(metadata.first_text_value("Artist").unwrap(), "Band");
        assert_eq!(metadata.first_text_value("Track Number").unwrap(), "7");
    }

    #[test]
    fn test_key_comparison_is_case_insensitive() {
        let block = build_block(b"v", &[b"title=Lower"]);
        let mut metadata = Metadata::new();
        parse_comments(&block, &mut metadata).unwrap();

        assert_eq!(metadata.first_text_value("Title").unwrap(), "Lower");
    }

    #[test]
    fn test_unknown_key_passes_through_uppercased() {
        let block = build_block(b"v", &[b"replaygain_track_gain=-6.2 dB"]);
        let mut metadata = Metadata::new();
        parse_comments(&block, &mut metadata).unwrap();

        assert_eq!(
            metadata.first_text_value("REPLAYGAIN_TRACK_GAIN").unwrap(),
            "-6.2 dB"
        );
    }

    #[test]
    fn test_comment_without_separator_is_dropped() {
        let block = build_block(b"v", &[b"noseparator", b"TITLE=Kept"]);
        let mut metadata = Metadata::new();
        parse_comments(&block, &mut metadata).unwrap();

        assert_eq!(metadata.field_count(), 1);
        assert_eq!(metadata.first_text_value("Title").unwrap(), "Kept");
    }

    #[test]
    fn test_value_may_contain_equals() {
        let block = build_block(b"v", &[b"DESCRIPTION=a=b=c"]);
        let mut metadata = Metadata::new();
        parse_comments(&block, &mut metadata).unwrap();

        assert_eq!(metadata.first_text_value("DESCRIPTION").unwrap(), "a=b=c");
    }

    #[test]
    fn test_truncated_block_keeps_earlier_comments() {
        let mut block = build_block(b"v", &[b"TITLE=First"]);
        // count claims two comments but the second is cut short
        block[5..9].copy_from_slice(&2u32.to_le_bytes());
        block.extend_from_slice(&50u32.to_le_bytes());
        block.extend_from_slice(b"ARTIST=trunc");

        let mut metadata = Metadata::new();
        let err = parse_comments(&block, &mut metadata).unwrap_err();
        assert!(err.is_truncation());
        assert_eq!(metadata.first_text_value("Title").unwrap(), "First");
    }
}
