//! # Audiometa Core
//!
//! Core types and utilities for the audiometa library.
//!
//! This crate provides the fundamental building blocks used by every
//! container parser:
//! - Error handling types
//! - Bounds-checked byte cursor with explicit endianness per read
//! - The `Metadata` / `CoverArt` data model
//! - The canonical field catalog and native tag dictionaries
//! - Text decoding for the character encodings tag payloads use
//! - Embedded-image boundary detection
//! - Container format classification

pub mod cursor;
pub mod error;
pub mod fields;
pub mod format;
pub mod image;
pub mod metadata;
pub mod text;

pub use cursor::ByteCursor;
pub use error::{Error, Result};
pub use format::Format;
pub use metadata::{CoverArt, Metadata};
