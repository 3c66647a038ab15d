//! OGG page parsing.
//!
//! Pages start with a 27-byte header (`OggS` capture pattern, version,
//! flags, granule position, serial, sequence, checksum, segment count)
//! followed by the segment table. Segments whose payload opens with a
//! `vorbis` header packet are handed to the comment parser.

use std::io::{Read, Seek, SeekFrom};

use audiometa_core::error::{Error, Result};
use audiometa_core::metadata::Metadata;
use tracing::trace;

use crate::vorbis;

const PAGE_HEADER_SIZE: usize = 27;

/// Header packet prefix: one packet type byte, then the `vorbis` marker.
const PACKET_MARKER_SIZE: usize = 7;

/// Read metadata from an OGG stream.
pub fn read_metadata<R: Read + Seek>(reader: &mut R) -> Result<Metadata> {
    let mut metadata = Metadata::new();
    crate::recover(|| read_pages(reader, &mut metadata))?;
    Ok(metadata)
}

fn read_pages<R: Read + Seek>(reader: &mut R, metadata: &mut Metadata) -> Result<()> {
    loop {
        let mut header = [0u8; PAGE_HEADER_SIZE];
        match reader.read_exact(&mut header) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        }
        if &header[..4] != b"OggS" {
            return Err(Error::malformed("missing OggS capture pattern"));
        }

        let segment_count = header[26] as usize;
        let mut segment_table = vec![0u8; segment_count];
        reader.read_exact(&mut segment_table)?;
        trace!(segment_count, "ogg page");

        for &segment_len in &segment_table {
            let segment_len = segment_len as usize;
            if segment_len <= PACKET_MARKER_SIZE {
                reader.seek(SeekFrom::Current(segment_len as i64))?;
                continue;
            }

            let mut marker = [0u8; PACKET_MARKER_SIZE];
            reader.read_exact(&mut marker)?;
            let rest = segment_len - PACKET_MARKER_SIZE;

            if &marker[1..] == b"vorbis" {
                let mut packet = vec![0u8; rest];
                reader.read_exact(&mut packet)?;
                // identification and setup headers fail the comment
                // structure checks and are dropped here
                crate::recover(|| vorbis::parse_comments(&packet, metadata))?;
            } else {
                reader.seek(SeekFrom::Current(rest as i64))?;
            }
        }
    }

    Ok(())
}
