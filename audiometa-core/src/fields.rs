//! Canonical field catalog and native tag dictionaries.
//!
//! Every container format carries its own tag vocabulary; the functions
//! here normalize native identifiers onto one shared set of field names so
//! metadata from different file types matches. Unmapped identifiers pass
//! through under their raw name.

/// Name of the artist or lead performer.
pub const ARTIST_NAME: &str = "Artist";

/// Name of the artist as credited on the album.
pub const ALBUM_ARTIST_NAME: &str = "Album Artist";

/// Name of the album.
pub const ALBUM_NAME: &str = "Album";

/// Name of the individual piece.
pub const TITLE: &str = "Title";

/// Sub-title, opus number, performance location, etc.
pub const SUBTITLE: &str = "Subtitle";

/// Name of the original composer.
pub const COMPOSER: &str = "Composer";

/// Name of the orchestra conductor.
pub const CONDUCTOR: &str = "Conductor";

/// Name of the orchestra or backing musicians.
pub const ACCOMPANIMENT: &str = "Accompaniment";

/// Lyricist information.
pub const LYRICIST: &str = "Lyricist";

/// Content type or genre.
pub const GENRE: &str = "Genre";

/// Year of publication or recording. Should be a single integer.
pub const YEAR: &str = "Year";

/// Date of publication or recording.
pub const DATE: &str = "Date";

/// Disc number if multiple parts.
pub const DISC_NUMBER: &str = "Disc Number";

/// Track number or album position.
pub const TRACK_NUMBER: &str = "Track Number";

/// Copyright information.
pub const COPYRIGHT: &str = "Copyright";

/// Website containing copyright information.
pub const COPYRIGHT_WEBPAGE: &str = "Copyright Site";

/// International Standard Recording Code.
pub const ISRC: &str = "ISRC";

/// Software/Hardware settings used for encoding.
pub const ENCODING_INFO: &str = "Encoding Software/Hardware";

/// Publisher.
pub const PUBLISHER: &str = "Publisher";

/// Official artist webpage.
pub const ARTIST_WEBPAGE: &str = "Artist Site";

/// Official album webpage.
pub const ALBUM_WEBPAGE: &str = "Album Site";

/// Official audio webpage.
pub const FILE_WEBPAGE: &str = "File Site";

/// Official publisher webpage.
pub const PUBLISHER_WEBPAGE: &str = "Publisher Site";

/// Comment text.
pub const COMMENTS: &str = "Comments";

/// Map an ID3v2 frame identifier to its field name.
///
/// Frames with a canonical counterpart map onto the shared catalog;
/// informational frames without one map to the descriptive name from the
/// ID3v2.3 specification so their values still surface readably.
pub fn id3_frame_name(id: &str) -> Option<&'static str> {
    let name = match id {
        "AENC" => "Audio encryption",
        "APIC" => "Attached picture",
        "COMM" => COMMENTS,
        "COMR" => "Commercial frame",
        "ENCR" => "Encryption method registration",
        "EQUA" => "Equalization",
        "ETCO" => "Event timing codes",
        "GEOB" => "General encapsulated object",
        "GRID" => "Group identification registration",
        "IPLS" => "Involved people list",
        "LINK" => "Linked information",
        "MCDI" => "Music CD identifier",
        "MLLT" => "MPEG location lookup table",
        "OWNE" => "Ownership frame",
        "PRIV" => "Private frame",
        "PCNT" => "Play counter",
        "POPM" => "Popularimeter",
        "POSS" => "Position synchronisation frame",
        "RBUF" => "Recommended buffer size",
        "RVAD" => "Relative volume adjustment",
        "RVRB" => "Reverb",
        "SYLT" => "Synchronized lyric",
        "SYTC" => "Synchronized tempo codes",
        "TALB" => ALBUM_NAME,
        "TBPM" => "BPM",
        "TCOM" => COMPOSER,
        "TCON" => GENRE,
        "TCOP" => COPYRIGHT,
        "TDAT" => DATE,
        "TDLY" => "Playlist delay",
        "TENC" => "Encoded by",
        "TEXT" => LYRICIST,
        "TFLT" => "File type",
        "TIME" => "Time",
        "TIT1" => "Content group description",
        "TIT2" => TITLE,
        "TIT3" => SUBTITLE,
        "TKEY" => "Initial key",
        "TLAN" => "Language(s)",
        "TLEN" => "Length",
        "TMED" => "Media type",
        "TOAL" => "Original album",
        "TOFN" => "Original filename",
        "TOLY" => "Original lyricist(s)",
        "TOPE" => "Original artist(s)",
        "TORY" => "Original release year",
        "TOWN" => "File owner",
        "TPE1" => ARTIST_NAME,
        "TPE2" => ACCOMPANIMENT,
        "TPE3" => CONDUCTOR,
        "TPE4" => "Modified by",
        "TPOS" => "Part of a set",
        "TPUB" => PUBLISHER,
        "TRCK" => TRACK_NUMBER,
        "TRDA" => "Recording dates",
        "TRSN" => "Internet radio station name",
        "TRSO" => "Internet radio station owner",
        "TSIZ" => "Size",
        "TSRC" => ISRC,
        "TSSE" => ENCODING_INFO,
        "TYER" => YEAR,
        "TXXX" => "User defined text information frame",
        "UFID" => "Unique file identifier",
        "USER" => "Terms of use",
        "USLT" => "Unsychronized lyric",
        "WCOM" => "Commercial information",
        "WCOP" => COPYRIGHT_WEBPAGE,
        "WOAF" => FILE_WEBPAGE,
        "WOAR" => ARTIST_WEBPAGE,
        "WOAS" => "Official audio source webpage",
        "WORS" => "Official internet radio station homepage",
        "WPAY" => "Payment",
        "WPUB" => PUBLISHER_WEBPAGE,
        "WXXX" => "User defined URL link frame",
        _ => return None,
    };
    Some(name)
}

/// Map a Vorbis comment name (upper-cased) to its canonical field name.
///
/// There is no official standard set of Vorbis tags; these are the
/// commonly proposed names matched to the catalog.
pub fn vorbis_tag_name(tag: &str) -> Option<&'static str> {
    let name = match tag {
        "TITLE" => TITLE,
        "ALBUM" => ALBUM_NAME,
        "TRACKNUMBER" => TRACK_NUMBER,
        "ARTIST" => ARTIST_NAME,
        "COPYRIGHT" => COPYRIGHT,
        "GENRE" => GENRE,
        "DATE" => DATE,
        "ISRC" => ISRC,
        _ => return None,
    };
    Some(name)
}

/// Map an M4A `ilst` FourCC tag to its canonical field name.
///
/// Many of these begin with the copyright-symbol prefix byte `0xA9`, so
/// callers must decode the FourCC with a single-byte-safe encoding before
/// lookup.
pub fn m4a_tag_name(tag: &str) -> Option<&'static str> {
    let name = match tag {
        "\u{A9}ART" => ARTIST_NAME,
        "aART" => ALBUM_ARTIST_NAME,
        "\u{A9}alb" => ALBUM_NAME,
        "\u{A9}wrt" => COMPOSER,
        "\u{A9}nam" => TITLE,
        "trck" => TRACK_NUMBER,
        "disk" => DISC_NUMBER,
        "cprt" => COPYRIGHT,
        "\u{A9}too" => ENCODING_INFO,
        "\u{A9}day" => YEAR,
        "gnre" => GENRE,
        "\u{A9}gen" => GENRE,
        _ => return None,
    };
    Some(name)
}

/// Map a RIFF LIST-INFO FourCC to its canonical field name.
pub fn riff_info_name(tag: &str) -> Option<&'static str> {
    let name = match tag {
        "INAM" => TITLE,
        "IART" => ARTIST_NAME,
        "IPRD" => ALBUM_NAME,
        "ICRD" => DATE,
        "IGNR" | "GENR" => GENRE,
        "ICMT" => COMMENTS,
        "ICOP" => COPYRIGHT,
        "ITRK" | "IPRT" => TRACK_NUMBER,
        "ISFT" => ENCODING_INFO,
        "ISRC" => ISRC,
        _ => return None,
    };
    Some(name)
}
