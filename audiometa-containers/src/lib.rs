//! Container format parsers for metadata extraction.
//!
//! One module per container family (ID3v2, FLAC, WAVE/RIFF, ISO-BMFF
//! M4A, and OGG) plus the dispatch that classifies a source and routes
//! it to the matching parser. All parsers read from a seekable byte source
//! and accumulate into one [`Metadata`] aggregate.
//!
//! Failure policy: a truncated or malformed structural unit ends the
//! current parse loop and keeps what was already extracted. The only
//! error the dispatch itself propagates is [`Error::UnrecognizedFormat`],
//! raised when no parser can be selected at all.

pub mod flac;
pub mod id3;
pub mod mp4;
pub mod ogg;
pub mod vorbis;
pub mod wave;

use std::io::{Read, Seek, SeekFrom};

use tracing::warn;

use audiometa_core::error::{Error, Result};
use audiometa_core::format::{Format, SNIFF_LEN};
use audiometa_core::metadata::Metadata;

/// Classify `reader` by its leading bytes and extract metadata with the
/// matching container parser.
///
/// The reader is rewound before parsing; its position afterwards is
/// unspecified. Recognized-but-unsupported formats (MP4 proper, DASH,
/// WMA) yield empty metadata rather than an error.
pub fn read_metadata<R: Read + Seek>(reader: &mut R) -> Result<Metadata> {
    reader.seek(SeekFrom::Start(0))?;
    let mut header = [0u8; SNIFF_LEN];
    let n = read_at_most(reader, &mut header)?;
    reader.seek(SeekFrom::Start(0))?;

    let format = Format::sniff(&header[..n]);
    match format {
        Format::Mp3 => id3::read_metadata(reader),
        Format::Wav => wave::read_metadata(reader),
        Format::Flac => flac::read_metadata(reader),
        Format::Ogg => ogg::read_metadata(reader),
        Format::M4a => mp4::read_metadata(reader),
        Format::Mp4 | Format::Dash => {
            warn!(format = %format, "unsupported ISO-BMFF sub-format");
            Ok(Metadata::new())
        }
        Format::Wma => {
            warn!("unsupported format: WMA");
            Ok(Metadata::new())
        }
        _ => Err(Error::UnrecognizedFormat),
    }
}

/// Fill as much of `buf` as the source can provide; short sources are not
/// an error here, classification just sees a smaller window.
fn read_at_most<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// Read exactly `len` bytes into a fresh buffer.
///
/// `len` comes from untrusted container length fields, so the buffer
/// grows with the bytes actually read rather than being reserved up
/// front; a short source reports truncation.
pub(crate) fn read_vec<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take(len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        return Err(Error::UnexpectedEnd);
    }
    Ok(buf)
}

/// Run a container parse step, recovering truncation and malformed-unit
/// errors locally per the shared failure policy.
///
/// Returns `Ok(())` when the step completed or was recovered; only
/// non-recoverable errors (real I/O faults) flow back to the caller.
pub(crate) fn recover<F>(step: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match step() {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            tracing::debug!(error = %e, "partial extraction, keeping accumulated metadata");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_unknown_header_is_an_error() {
        let mut cursor = Cursor::new(vec![0u8; 64]);
        let result = read_metadata(&mut cursor);
        assert!(matches!(result, Err(Error::UnrecognizedFormat)));
    }

    #[test]
    fn test_empty_source_is_an_error() {
        let mut cursor = Cursor::new(Vec::new());
        let result = read_metadata(&mut cursor);
        assert!(matches!(result, Err(Error::UnrecognizedFormat)));
    }

    #[test]
    fn test_reader_not_at_start_is_rewound() {
        let mut frame = b"TIT2".to_vec();
        frame.extend_from_slice(&4u32.to_be_bytes());
        frame.extend_from_slice(&[0, 0]);
        frame.extend_from_slice(&[0x03, b'H', b'i', 0x00]);
        let mut file = b"ID3\x03\x00\x00".to_vec();
        file.extend_from_slice(&[0, 0, 0, frame.len() as u8]);
        file.extend_from_slice(&frame);

        let mut cursor = Cursor::new(file);
        cursor.set_position(9);
        let metadata = read_metadata(&mut cursor).unwrap();
        assert_eq!(metadata.first_text_value("Title").unwrap(), "Hi");
    }

    #[test]
    fn test_read_vec_caps_allocation_at_source_length() {
        let mut cursor = Cursor::new(vec![0xAAu8; 16]);
        let err = read_vec(&mut cursor, usize::MAX).unwrap_err();
        assert!(err.is_truncation());

        let mut cursor = Cursor::new(vec![0xAAu8; 16]);
        assert_eq!(read_vec(&mut cursor, 16).unwrap().len(), 16);
    }

    #[test]
    fn test_wma_yields_empty_metadata() {
        let mut data = vec![
            0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62,
            0xCE, 0x6C,
        ];
        data.resize(64, 0);
        let mut cursor = Cursor::new(data);
        let metadata = read_metadata(&mut cursor).unwrap();
        assert!(metadata.is_empty());
    }
}
