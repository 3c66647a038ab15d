//! FLAC metadata block parsing.
//!
//! After the `fLaC` stream marker, metadata blocks carry a 4-byte header:
//! one flag/type byte (bit 7 marks the last block, low 7 bits are the
//! block type) and a 24-bit big-endian length. Only VORBIS_COMMENT (4)
//! and PICTURE (6) blocks contribute metadata; the rest are skipped.

use std::io::{Read, Seek, SeekFrom};

use audiometa_core::cursor::ByteCursor;
use audiometa_core::error::{Error, Result};
use audiometa_core::metadata::{CoverArt, Metadata};
use audiometa_core::text;
use tracing::trace;

use crate::vorbis;

const BLOCK_TYPE_VORBIS_COMMENT: u8 = 4;
const BLOCK_TYPE_PICTURE: u8 = 6;

/// Read metadata from a FLAC stream.
pub fn read_metadata<R: Read + Seek>(reader: &mut R) -> Result<Metadata> {
    let mut metadata = Metadata::new();
    crate::recover(|| read_blocks(reader, &mut metadata))?;
    Ok(metadata)
}

fn read_blocks<R: Read + Seek>(reader: &mut R, metadata: &mut Metadata) -> Result<()> {
    let mut marker = [0u8; 4];
    reader.read_exact(&mut marker)?;
    if &marker != b"fLaC" {
        return Err(Error::malformed("missing fLaC stream marker"));
    }

    loop {
        let mut header = [0u8; 4];
        reader.read_exact(&mut header)?;

        let last = header[0] & 0x80 != 0;
        let block_type = header[0] & 0x7F;
        let length = u32::from_be_bytes([0, header[1], header[2], header[3]]) as usize;
        trace!(block_type, length, last, "flac metadata block");

        match block_type {
            BLOCK_TYPE_VORBIS_COMMENT => {
                let block = crate::read_vec(reader, length)?;
                crate::recover(|| vorbis::parse_comments(&block, metadata))?;
            }
            BLOCK_TYPE_PICTURE => {
                let block = crate::read_vec(reader, length)?;
                crate::recover(|| {
                    let picture = parse_picture(&block)?;
                    metadata.add_image(picture);
                    Ok(())
                })?;
            }
            _ => {
                reader.seek(SeekFrom::Current(length as i64))?;
            }
        }

        if last {
            break;
        }
    }

    Ok(())
}

/// Decode a PICTURE block into cover art. The block declares its own MIME
/// type, which is trusted verbatim.
fn parse_picture(block: &[u8]) -> Result<CoverArt> {
    let mut cursor = ByteCursor::new(block);

    cursor.skip(4)?; // picture type
    let mime_len = cursor.read_u32_be()? as usize;
    let mime = text::decode_utf8(cursor.read_bytes(mime_len)?);
    let desc_len = cursor.read_u32_be()? as usize;
    cursor.skip(desc_len)?;
    cursor.skip(4 * 4)?; // width, height, depth, palette size
    let data_len = cursor.read_u32_be()? as usize;
    let data = cursor.read_bytes(data_len)?.to_vec();

    Ok(CoverArt::new(mime, data))
}
