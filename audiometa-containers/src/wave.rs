//! WAVE/RIFF parsing.
//!
//! The canonical 44-byte header (RIFF chunk, fmt chunk, data chunk
//! header) is consumed field by field, the audio payload is skipped, and
//! the trailing chunks are walked for `LIST/INFO` text entries and
//! embedded `id3 ` tags. RIFF chunks are word aligned; odd-sized chunks
//! carry one zero pad byte.

use std::io::{Read, Seek, SeekFrom};

use audiometa_core::cursor::ByteCursor;
use audiometa_core::error::{Error, Result};
use audiometa_core::metadata::Metadata;
use audiometa_core::{fields, text};
use byteorder::{LittleEndian, ReadBytesExt};
use tracing::trace;

use crate::id3;

const CANONICAL_HEADER_SIZE: usize = 44;

/// Read metadata from a WAVE file.
pub fn read_metadata<R: Read + Seek>(reader: &mut R) -> Result<Metadata> {
    let mut metadata = Metadata::new();
    crate::recover(|| read_chunks(reader, &mut metadata))?;
    Ok(metadata)
}

fn read_chunks<R: Read + Seek>(reader: &mut R, metadata: &mut Metadata) -> Result<()> {
    let data_size = read_header(reader)?;
    reader.seek(SeekFrom::Current(data_size as i64))?;
    skip_pad_byte(reader)?;

    loop {
        let mut fourcc = [0u8; 4];
        match reader.read_exact(&mut fourcc) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        }
        let size = reader.read_u32::<LittleEndian>()? as usize;
        trace!(fourcc = %String::from_utf8_lossy(&fourcc), size, "riff chunk");

        match &fourcc {
            b"LIST" => {
                let content = crate::read_vec(reader, size)?;
                if content.starts_with(b"INFO") {
                    crate::recover(|| parse_info_list(&content[4..], metadata))?;
                }
            }
            b"id3 " => {
                let start = reader.stream_position()?;
                crate::recover(|| id3::read_tag(reader, metadata))?;
                reader.seek(SeekFrom::Start(start + size as u64))?;
            }
            _ => {
                reader.seek(SeekFrom::Current(size as i64))?;
            }
        }
        skip_pad_byte(reader)?;
    }

    Ok(())
}

/// Consume the canonical header and return the declared audio data size.
fn read_header<R: Read>(reader: &mut R) -> Result<u32> {
    let mut header = [0u8; CANONICAL_HEADER_SIZE];
    reader.read_exact(&mut header)?;
    let mut cursor = ByteCursor::new(&header);

    if cursor.read_bytes(4)? != b"RIFF" {
        return Err(Error::malformed("missing RIFF marker"));
    }
    let _riff_size = cursor.read_u32_le()?;
    if cursor.read_bytes(4)? != b"WAVE" {
        return Err(Error::malformed("missing WAVE form type"));
    }
    if cursor.read_bytes(4)? != b"fmt " {
        return Err(Error::malformed("missing fmt chunk"));
    }
    let _fmt_size = cursor.read_u32_le()?;
    let _audio_format = cursor.read_u16_le()?;
    let _channels = cursor.read_u16_le()?;
    let _sample_rate = cursor.read_u32_le()?;
    let _byte_rate = cursor.read_u32_le()?;
    let _block_align = cursor.read_u16_le()?;
    let _bits_per_sample = cursor.read_u16_le()?;
    if cursor.read_bytes(4)? != b"data" {
        return Err(Error::malformed("missing data chunk"));
    }
    cursor.read_u32_le()
}

/// Parse the `INFO` entry triples inside a LIST chunk.
fn parse_info_list(data: &[u8], metadata: &mut Metadata) -> Result<()> {
    let mut cursor = ByteCursor::new(data);

    while !cursor.is_empty() {
        let id: [u8; 4] = cursor.read_array()?;
        let len = cursor.read_u32_le()? as usize;
        let payload = cursor.read_bytes(len)?;

        let raw = String::from_utf8_lossy(&id).into_owned();
        let tag = fields::riff_info_name(&raw).unwrap_or(&raw);
        let value = text::decode_utf8(payload);
        metadata.add_text_field(tag, value.trim_end_matches('\0').to_string());

        // entries are word aligned inside the list as well
        if len % 2 == 1 && matches!(cursor.peek_u8(), Ok(0)) {
            cursor.skip(1)?;
        }
    }

    Ok(())
}

/// Consume one zero pad byte if the next byte is zero. Chunk FourCCs
/// never start with a zero byte, so a non-zero peek is left in place.
fn skip_pad_byte<R: Read + Seek>(reader: &mut R) -> Result<()> {
    let mut byte = [0u8; 1];
    match reader.read_exact(&mut byte) {
        Ok(()) => {
            if byte[0] != 0 {
                reader.seek(SeekFrom::Current(-1))?;
            }
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(()),
        Err(err) => Err(err.into()),
    }
}
