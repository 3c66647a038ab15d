//! ID3v2 tag parsing.
//!
//! Handles standalone MP3 files (an ID3 block at the start of the file)
//! and is delegated to by the WAVE parser for embedded `id3 ` chunks. The
//! tag block layout is a 10-byte header, an optional extended header, and
//! a run of frames followed by zero padding.

use std::io::Read;

use audiometa_core::cursor::synchsafe_u32;
use audiometa_core::error::{Error, Result};
use audiometa_core::metadata::Metadata;
use audiometa_core::{fields, image, text};

/// Tag header and frame header are both 10 bytes.
const HEADER_SIZE: usize = 10;

/// ID3v2.3 extended header: 4-byte size, 2-byte flags, 4-byte padding
/// size. It carries nothing this parser consumes.
const EXTENDED_HEADER_SIZE: usize = 10;

/// Read metadata from a source leading with an ID3v2 tag block.
pub fn read_metadata<R: Read>(reader: &mut R) -> Result<Metadata> {
    let mut metadata = Metadata::new();
    crate::recover(|| read_tag(reader, &mut metadata))?;
    Ok(metadata)
}

/// Parse one complete ID3v2 tag block (header plus frames) starting at
/// the reader's current position.
///
/// Public so the WAVE parser can delegate an embedded `id3 ` chunk to the
/// same routine against the same underlying byte source.
pub fn read_tag<R: Read>(reader: &mut R, metadata: &mut Metadata) -> Result<()> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    if &header[..3] != b"ID3" {
        return Err(Error::malformed("missing ID3 tag marker"));
    }

    let version = header[3];
    let flags = header[5];
    let tag_len = synchsafe_u32([header[6], header[7], header[8], header[9]]) as u64;

    if flags & (1 << 6) != 0 {
        // extended header provides no semantic content; skip it whole
        let mut ext = [0u8; EXTENDED_HEADER_SIZE];
        reader.read_exact(&mut ext)?;
    }

    read_frames(reader, version, tag_len, metadata)
}

/// Iterate frames until the declared tag length is exhausted or the zero
/// padding sentinel is reached.
fn read_frames<R: Read>(
    reader: &mut R,
    version: u8,
    tag_len: u64,
    metadata: &mut Metadata,
) -> Result<()> {
    let mut consumed = 0u64;

    while consumed < tag_len {
        let mut frame_header = [0u8; HEADER_SIZE];
        reader.read_exact(&mut frame_header)?;
        consumed += HEADER_SIZE as u64;

        // a null frame ID means the padding has begun
        if frame_header[..4] == [0, 0, 0, 0] {
            break;
        }

        let size_bytes = [
            frame_header[4],
            frame_header[5],
            frame_header[6],
            frame_header[7],
        ];
        // only v2.4 stores frame sizes synchsafe
        let size = if version == 4 {
            synchsafe_u32(size_bytes)
        } else {
            u32::from_be_bytes(size_bytes)
        } as usize;
        let _frame_flags = u16::from_be_bytes([frame_header[8], frame_header[9]]);

        let payload = crate::read_vec(reader, size)?;
        consumed += size as u64;

        let frame_id = String::from_utf8_lossy(&frame_header[..4]).into_owned();
        if frame_id == "APIC" {
            metadata.add_image(image::carve(&payload));
        } else {
            let tag = fields::id3_frame_name(&frame_id).unwrap_or(&frame_id);
            metadata.add_text_field(tag, text::decode_id3_text(&payload));
        }
    }

    Ok(())
}
