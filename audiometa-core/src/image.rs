//! Embedded-image boundary detection.
//!
//! ID3 `APIC` frames and M4A `covr` values hand us one opaque blob mixing
//! a textual MIME hint, optional picture-type/description bytes, and the
//! raw image. No explicit length delimits the image region, so the true
//! boundaries are located by scanning for magic bytes and footers.

use crate::metadata::CoverArt;

/// MIME sub-type token for PNG. Some formats allow leaving off `image/`,
/// so only the sub-type is searched for.
const MIME_PNG: &[u8] = b"png";

/// MIME sub-type token for JPEG.
const MIME_JPEG: &[u8] = b"jpeg";

/// MIME sub-type token for WEBP.
const MIME_WEBP: &[u8] = b"webp";

/// 8-byte signature at the start of PNG image data.
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// 8-byte IEND sequence at the end of PNG image data.
const PNG_FOOTER: [u8; 8] = [0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82];

/// JPEG start-of-image marker prefix.
const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Carve the image payload out of a mixed metadata blob.
///
/// PNG regions end exactly at the IEND footer. JPEG and WEBP have no
/// terminator a byte scan can find, so their region runs to the end of the
/// blob. A blob with no recognizable signature comes back verbatim with an
/// empty sub-type.
pub fn carve(data: &[u8]) -> CoverArt {
    let mut subtype = "";
    let mut start = 0;
    let mut end = data.len();

    for idx in 0..data.len() {
        if matches_at(data, idx, MIME_PNG) {
            subtype = "png";
        } else if matches_at(data, idx, MIME_JPEG) {
            // skip 'jpeg', separator, picture type, separator
            start = idx + 7;
            subtype = "jpeg";
            break;
        } else if matches_at(data, idx, &JPEG_SOI) {
            // bare image data, no MIME preamble
            start = 0;
            subtype = "jpeg";
            break;
        } else if matches_at(data, idx, MIME_WEBP) {
            // skip 'webp', separator, picture type, separator
            start = idx + 7;
            subtype = "webp";
            break;
        }

        // PNG is the only sub-type with scannable start and end markers
        if subtype == "png" {
            if matches_at(data, idx, &PNG_MAGIC) {
                start = idx;
            }
            if matches_at(data, idx, &PNG_FOOTER) {
                end = idx + PNG_FOOTER.len();
                break;
            }
        }
    }

    let start = start.min(data.len());
    let end = end.max(start);
    CoverArt::new(format!("image/{subtype}"), data[start..end].to_vec())
}

/// Check whether `query` occurs in `data` at `index`.
fn matches_at(data: &[u8], index: usize, query: &[u8]) -> bool {
    data.get(index..index + query.len())
        .is_some_and(|window| window == query)
}
