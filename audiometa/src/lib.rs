//! Audio metadata extraction from raw container bytes.
//!
//! `audiometa` reads tags and embedded cover art directly out of MP3
//! (ID3v2), FLAC, WAVE/RIFF, M4A (ISO-BMFF), and OGG files without
//! decoding any audio. Field names are normalized to one canonical
//! vocabulary across containers, so `Title` is `Title` whether it came
//! from a `TIT2` frame, a Vorbis comment, or an `ilst` entry.
//!
//! ```no_run
//! let metadata = audiometa::read_path("song.flac")?;
//! if let Some(title) = metadata.first_text_value("Title") {
//!     println!("title: {title}");
//! }
//! for art in metadata.images() {
//!     println!("cover: {} ({} bytes)", art.mime_type, art.data.len());
//! }
//! # Ok::<(), audiometa::Error>(())
//! ```

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tracing::debug;

pub use audiometa_core::error::{Error, Result};
pub use audiometa_core::fields;
pub use audiometa_core::format::Format;
pub use audiometa_core::metadata::{CoverArt, Metadata};

/// Library version, from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract metadata from an audio file on disk.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Metadata> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading audio metadata");
    let mut reader = BufReader::new(File::open(path)?);
    read(&mut reader)
}

/// Extract metadata from any seekable byte source.
///
/// The source is classified by its leading bytes; an
/// [`Error::UnrecognizedFormat`] means none of the supported container
/// signatures matched. Structural damage inside a recognized container is
/// not an error: whatever was extracted before the damage is returned.
pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Metadata> {
    audiometa_containers::read_metadata(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tiny_mp3() -> Vec<u8> {
        // one v2.3 TIT2 frame, UTF-8 payload
        let payload = [0x03, b'H', b'i', 0x00];
        let mut frame = b"TIT2".to_vec();
        frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        frame.extend_from_slice(&[0, 0]);
        frame.extend_from_slice(&payload);

        let len = frame.len() as u32;
        let mut file = b"ID3\x03\x00\x00".to_vec();
        file.extend_from_slice(&[
            ((len >> 21) & 0x7F) as u8,
            ((len >> 14) & 0x7F) as u8,
            ((len >> 7) & 0x7F) as u8,
            (len & 0x7F) as u8,
        ]);
        file.extend_from_slice(&frame);
        file
    }

    #[test]
    fn test_read_dispatches_by_signature() {
        let metadata = read(&mut Cursor::new(tiny_mp3())).unwrap();
        assert_eq!(metadata.first_text_value("Title").unwrap(), "Hi");
    }

    #[test]
    fn test_read_is_idempotent_on_rewound_source() {
        let mut cursor = Cursor::new(tiny_mp3());
        let first = read(&mut cursor).unwrap();
        let second = read(&mut cursor).unwrap();
        assert_eq!(first.field_count(), second.field_count());
        assert_eq!(
            first.first_text_value("Title"),
            second.first_text_value("Title")
        );
    }

    #[test]
    fn test_read_path_missing_file() {
        let result = read_path("/nonexistent/audiometa-test.mp3");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_read_path_roundtrip() {
        let path = std::env::temp_dir().join("audiometa-facade-test.mp3");
        std::fs::write(&path, tiny_mp3()).unwrap();
        let metadata = read_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(metadata.first_text_value("Title").unwrap(), "Hi");
    }

    #[test]
    fn test_version_is_populated() {
        assert!(!VERSION.is_empty());
    }
}
