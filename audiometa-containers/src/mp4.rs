//! ISO-BMFF (M4A) atom parsing.
//!
//! Tag data lives on the path `moov` > `udta` > `meta` > `ilst`. The
//! `moov` atom is read whole and walked with a cursor; every other
//! top-level atom is skipped in place.

use std::io::{Read, Seek, SeekFrom};

use audiometa_core::cursor::ByteCursor;
use audiometa_core::error::{Error, Result};
use audiometa_core::metadata::Metadata;
use audiometa_core::{fields, image, text};
use tracing::trace;

/// Atom header: 4-byte big-endian size covering the header itself, then
/// the FourCC.
const ATOM_HEADER_SIZE: usize = 8;

/// Fixed bytes of an `ilst` entry before its value data: entry size,
/// tag FourCC, value length, `data` marker, 8 reserved bytes.
const ENTRY_PREFIX_SIZE: usize = 16;

/// Read metadata from an M4A file.
pub fn read_metadata<R: Read + Seek>(reader: &mut R) -> Result<Metadata> {
    let mut metadata = Metadata::new();
    crate::recover(|| read_atoms(reader, &mut metadata))?;
    Ok(metadata)
}

fn read_atoms<R: Read + Seek>(reader: &mut R, metadata: &mut Metadata) -> Result<()> {
    loop {
        let mut header = [0u8; ATOM_HEADER_SIZE];
        match reader.read_exact(&mut header) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        }

        let size = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        let fourcc = [header[4], header[5], header[6], header[7]];
        trace!(fourcc = %String::from_utf8_lossy(&fourcc), size, "top-level atom");
        if size < ATOM_HEADER_SIZE {
            return Err(Error::malformed("atom size smaller than its header"));
        }
        let content_size = size - ATOM_HEADER_SIZE;

        if &fourcc == b"moov" {
            let content = crate::read_vec(reader, content_size)?;
            crate::recover(|| parse_moov(&content, metadata))?;
        } else {
            reader.seek(SeekFrom::Current(content_size as i64))?;
        }
    }

    Ok(())
}

/// Walk the children of `moov` looking for `udta`.
fn parse_moov(content: &[u8], metadata: &mut Metadata) -> Result<()> {
    let mut cursor = ByteCursor::new(content);

    while !cursor.is_empty() {
        let size = cursor.read_u32_be()? as usize;
        let fourcc: [u8; 4] = cursor.read_array()?;
        if size < ATOM_HEADER_SIZE {
            return Err(Error::malformed("atom size smaller than its header"));
        }
        let body = cursor.read_bytes(size - ATOM_HEADER_SIZE)?;

        if &fourcc == b"udta" {
            parse_udta(body, metadata)?;
        }
    }

    Ok(())
}

/// Walk `udta` children until `meta`, then its children until `ilst`.
fn parse_udta(content: &[u8], metadata: &mut Metadata) -> Result<()> {
    let mut cursor = ByteCursor::new(content);

    while !cursor.is_empty() {
        let size = cursor.read_u32_be()? as usize;
        let fourcc: [u8; 4] = cursor.read_array()?;
        if size < ATOM_HEADER_SIZE {
            return Err(Error::malformed("atom size smaller than its header"));
        }

        if &fourcc == b"meta" {
            // full atom: 1 version byte and 3 flag bytes before children
            if size < ATOM_HEADER_SIZE + 4 {
                return Err(Error::malformed("meta atom too small"));
            }
            cursor.skip(4)?;
            return parse_meta(cursor.read_bytes(size - ATOM_HEADER_SIZE - 4)?, metadata);
        }
        cursor.skip(size - ATOM_HEADER_SIZE)?;
    }

    Ok(())
}

fn parse_meta(content: &[u8], metadata: &mut Metadata) -> Result<()> {
    let mut cursor = ByteCursor::new(content);

    while !cursor.is_empty() {
        let size = cursor.read_u32_be()? as usize;
        let fourcc: [u8; 4] = cursor.read_array()?;
        if size < ATOM_HEADER_SIZE {
            return Err(Error::malformed("atom size smaller than its header"));
        }

        if &fourcc == b"ilst" {
            return parse_ilst(cursor.read_bytes(size - ATOM_HEADER_SIZE)?, metadata);
        }
        cursor.skip(size - ATOM_HEADER_SIZE)?;
    }

    Ok(())
}

/// Decode the `ilst` entries. Each entry declares its own size, so the
/// cursor is resynced to the entry boundary after every value.
fn parse_ilst(content: &[u8], metadata: &mut Metadata) -> Result<()> {
    let mut cursor = ByteCursor::new(content);

    while !cursor.is_empty() {
        let entry_start = cursor.position();
        let size = cursor.read_u32_be()? as usize;
        let tag: [u8; 4] = cursor.read_array()?;
        if size < ENTRY_PREFIX_SIZE {
            return Err(Error::malformed("ilst entry too small"));
        }

        let value_length = cursor.read_u32_be()? as usize;
        let marker: [u8; 4] = cursor.read_array()?;
        if &marker != b"data" || value_length < ENTRY_PREFIX_SIZE {
            trace!(tag = %text::decode_latin1(&tag), "skipping ilst entry without data atom");
            cursor.set_position(entry_start + size)?;
            continue;
        }
        cursor.skip(8)?; // type indicator and locale
        let value = cursor.read_bytes(value_length - ENTRY_PREFIX_SIZE)?;

        // tag FourCCs use 0xA9 prefixes outside ASCII
        let raw = text::decode_latin1(&tag);
        if &tag == b"covr" {
            metadata.add_image(image::carve(value));
        } else {
            let name = fields::m4a_tag_name(&raw).unwrap_or(&raw);
            metadata.add_text_field(name, text::decode_utf8(value));
        }

        cursor.set_position(entry_start + size)?;
    }

    Ok(())
}
