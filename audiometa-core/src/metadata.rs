//! The extracted-metadata data model.

use serde::Serialize;

/// One embedded image carved out of an audio container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverArt {
    /// MIME type of the form `image/<subtype>`; the subtype is empty when
    /// the image format could not be determined.
    pub mime_type: String,
    /// Raw image bytes, exact byte-for-byte boundaries.
    pub data: Vec<u8>,
}

impl CoverArt {
    /// Create a new cover art entry.
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// The parse result for one audio file.
///
/// Text fields are an insertion-ordered multimap from canonical field name
/// to the values encountered, so two parses of the same bytes produce
/// identical field order, values, and image bytes. Exact-duplicate values
/// for a field are suppressed (WAVE files commonly carry the same text in
/// both the INFO block and an embedded ID3 block); distinct values for the
/// same field all accumulate, since some fields legitimately repeat.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    fields: Vec<(String, Vec<String>)>,
    images: Vec<CoverArt>,
}

impl Metadata {
    /// Create an empty metadata aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the `tag` field group, creating the group if
    /// needed. An exact duplicate of an existing value is dropped.
    pub fn add_text_field(&mut self, tag: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some((_, values)) = self.fields.iter_mut().find(|(name, _)| name == tag) {
            if !values.iter().any(|v| v == &value) {
                values.push(value);
            }
        } else {
            self.fields.push((tag.to_string(), vec![value]));
        }
    }

    /// Append `image` to the embedded-image list.
    pub fn add_image(&mut self, image: CoverArt) {
        self.images.push(image);
    }

    /// Get the values recorded for a field, in encounter order.
    pub fn text_values(&self, tag: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, values)| values.as_slice())
    }

    /// Get the first value recorded for a field.
    pub fn first_text_value(&self, tag: &str) -> Option<&str> {
        self.text_values(tag).and_then(|v| v.first()).map(String::as_str)
    }

    /// Iterate fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Get all embedded images in order of encounter.
    pub fn images(&self) -> &[CoverArt] {
        &self.images
    }

    /// Get the number of distinct text fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields or images were extracted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.images.is_empty()
    }
}
