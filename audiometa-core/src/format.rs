//! Container format classification.

use std::fmt;

use serde::Serialize;

/// Number of leading bytes the sniffer inspects. 32 bytes is sufficient
/// for every supported signature.
pub const SNIFF_LEN: usize = 32;

/// ASF header GUID identifying WMA files.
const ASF_GUID: [u8; 16] = [
    0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
];

/// Recognized container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum Format {
    /// MP3 file, or more precisely any file leading with an ID3 tag block.
    Mp3,
    /// RIFF/WAVE.
    Wav,
    /// FLAC stream.
    Flac,
    /// OGG container.
    Ogg,
    /// ISO-BMFF with an M4A brand.
    M4a,
    /// ISO-BMFF with an mp4 brand.
    Mp4,
    /// ISO-BMFF with a dash brand.
    Dash,
    /// Windows Media Audio (ASF).
    Wma,
    /// No recognized signature.
    Unknown,
}

impl Format {
    /// Classify a file from its leading header bytes.
    ///
    /// Pure function; a window shorter than a signature needs simply fails
    /// that match, so empty or garbage input degrades to `Unknown` rather
    /// than erroring.
    pub fn sniff(header: &[u8]) -> Format {
        if header.len() >= 3 && &header[..3] == b"ID3" {
            return Format::Mp3;
        }
        if header.len() >= 11 && &header[..4] == b"RIFF" && &header[8..11] == b"WAV" {
            return Format::Wav;
        }
        if header.len() >= 11 && &header[4..8] == b"ftyp" {
            if &header[8..11] == b"M4A" {
                return Format::M4a;
            }
            if header.len() >= 12 && &header[8..12] == b"dash" {
                return Format::Dash;
            }
            if &header[8..11] == b"mp4" {
                return Format::Mp4;
            }
            return Format::Unknown;
        }
        if header.len() >= 16 && header[..16] == ASF_GUID {
            return Format::Wma;
        }
        if header.len() >= 4 && &header[..4] == b"fLaC" {
            return Format::Flac;
        }
        if header.len() >= 4 && &header[..4] == b"OggS" {
            return Format::Ogg;
        }
        Format::Unknown
    }

    /// Get the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Mp3 => "mp3",
            Format::Wav => "wav",
            Format::Flac => "flac",
            Format::Ogg => "ogg",
            Format::M4a => "m4a",
            Format::Mp4 => "mp4",
            Format::Dash => "mp4",
            Format::Wma => "wma",
            Format::Unknown => "",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Mp3 => write!(f, "MP3"),
            Format::Wav => write!(f, "WAVE"),
            Format::Flac => write!(f, "FLAC"),
            Format::Ogg => write!(f, "OGG"),
            Format::M4a => write!(f, "M4A"),
            Format::Mp4 => write!(f, "MP4"),
            Format::Dash => write!(f, "DASH"),
            Format::Wma => write!(f, "WMA"),
            Format::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_id3() {
        let mut header = [0u8; 32];
        header[..3].copy_from_slice(b"ID3");
        assert_eq!(Format::sniff(&header), Format::Mp3);
    }

    #[test]
    fn test_sniff_wave() {
        let mut header = [0u8; 32];
        header[..4].copy_from_slice(b"RIFF");
        header[8..12].copy_from_slice(b"WAVE");
        assert_eq!(Format::sniff(&header), Format::Wav);
    }

    #[test]
    fn test_sniff_riff_without_wave_is_unknown() {
        let mut header = [0u8; 32];
        header[..4].copy_from_slice(b"RIFF");
        header[8..12].copy_from_slice(b"AVI ");
        assert_eq!(Format::sniff(&header), Format::Unknown);
    }

    #[test]
    fn test_sniff_ftyp_brands() {
        let mut header = [0u8; 32];
        header[4..8].copy_from_slice(b"ftyp");

        header[8..12].copy_from_slice(b"M4A ");
        assert_eq!(Format::sniff(&header), Format::M4a);

        header[8..12].copy_from_slice(b"dash");
        assert_eq!(Format::sniff(&header), Format::Dash);

        header[8..12].copy_from_slice(b"mp42");
        assert_eq!(Format::sniff(&header), Format::Mp4);

        header[8..12].copy_from_slice(b"qt  ");
        assert_eq!(Format::sniff(&header), Format::Unknown);
    }

    #[test]
    fn test_sniff_flac_ogg_wma() {
        let mut header = [0u8; 32];
        header[..4].copy_from_slice(b"fLaC");
        assert_eq!(Format::sniff(&header), Format::Flac);

        header[..4].copy_from_slice(b"OggS");
        assert_eq!(Format::sniff(&header), Format::Ogg);

        let mut wma = [0u8; 32];
        wma[..16].copy_from_slice(&super::ASF_GUID);
        assert_eq!(Format::sniff(&wma), Format::Wma);
    }

    #[test]
    fn test_sniff_degenerate_input() {
        assert_eq!(Format::sniff(&[]), Format::Unknown);
        assert_eq!(Format::sniff(&[0u8; 32]), Format::Unknown);
        assert_eq!(Format::sniff(b"ID"), Format::Unknown);
    }
}
