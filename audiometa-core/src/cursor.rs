//! Bounds-checked cursor over a byte slice.
//!
//! Every container parser walks format structures through this cursor.
//! Endianness is explicit per read, and each read either returns exactly
//! the requested bytes or reports an under-read, never silent zero-fill.

use crate::error::{Error, Result};

/// A seekable reader over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a new cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Get the current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to an absolute byte position.
    ///
    /// Positions past the end of the slice are rejected.
    pub fn set_position(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(Error::UnexpectedEnd);
        }
        self.pos = pos;
        Ok(())
    }

    /// Get the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Check if all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Advance past `n` bytes without interpreting them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(Error::UnexpectedEnd);
        }
        self.pos += n;
        Ok(())
    }

    /// Read exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::UnexpectedEnd);
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Read a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.data.get(self.pos).copied().ok_or(Error::UnexpectedEnd)
    }

    /// Read an unsigned 8-bit value.
    pub fn read_u8(&mut self) -> Result<u8> {
        let b = self.peek_u8()?;
        self.pos += 1;
        Ok(b)
    }

    /// Read an unsigned 16-bit little-endian value.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Read an unsigned 16-bit big-endian value.
    pub fn read_u16_be(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read an unsigned 24-bit big-endian value.
    pub fn read_u24_be(&mut self) -> Result<u32> {
        let b = self.read_array::<3>()?;
        Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
    }

    /// Read an unsigned 32-bit little-endian value.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read an unsigned 32-bit big-endian value.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Read an unsigned 64-bit big-endian value.
    pub fn read_u64_be(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }
}

/// Decode a 28-bit synchsafe integer from 4 bytes.
///
/// ID3v2.4 stores sizes with the high bit of every byte forced to zero so
/// tag data never emulates an MPEG sync pattern. The value reassembles
/// big-endian as `b0 << 21 | b1 << 14 | b2 << 7 | b3`.
pub fn synchsafe_u32(bytes: [u8; 4]) -> u32 {
    (u32::from(bytes[0] & 0x7F) << 21)
        | (u32::from(bytes[1] & 0x7F) << 14)
        | (u32::from(bytes[2] & 0x7F) << 7)
        | u32::from(bytes[3] & 0x7F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integers() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut cur = ByteCursor::new(&data);
        assert_eq!(cur.read_u8().unwrap(), 0x01);
        assert_eq!(cur.read_u16_be().unwrap(), 0x0203);
        assert_eq!(cur.read_u16_le().unwrap(), 0x0504);
        assert_eq!(cur.remaining(), 3);
        assert_eq!(cur.read_u24_be().unwrap(), 0x060708);
        assert!(cur.is_empty());
    }

    #[test]
    fn test_read_u32_both_orders() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(ByteCursor::new(&data).read_u32_be().unwrap(), 0xDEAD_BEEF);
        assert_eq!(ByteCursor::new(&data).read_u32_le().unwrap(), 0xEFBE_ADDE);
    }

    #[test]
    fn test_under_read_is_explicit() {
        let data = [0x01, 0x02];
        let mut cur = ByteCursor::new(&data);
        assert!(matches!(cur.read_u32_be(), Err(Error::UnexpectedEnd)));
        // failed read must not advance the cursor
        assert_eq!(cur.position(), 0);
        assert_eq!(cur.read_u16_be().unwrap(), 0x0102);
        assert!(matches!(cur.read_u8(), Err(Error::UnexpectedEnd)));
    }

    #[test]
    fn test_skip_and_seek() {
        let data = [0u8; 10];
        let mut cur = ByteCursor::new(&data);
        cur.skip(4).unwrap();
        assert_eq!(cur.position(), 4);
        cur.set_position(10).unwrap();
        assert!(cur.is_empty());
        assert!(cur.set_position(11).is_err());
        assert!(cur.skip(1).is_err());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let data = [0x42];
        let mut cur = ByteCursor::new(&data);
        assert_eq!(cur.peek_u8().unwrap(), 0x42);
        assert_eq!(cur.read_u8().unwrap(), 0x42);
        assert!(cur.peek_u8().is_err());
    }

    #[test]
    fn test_synchsafe() {
        // {0x00, 0x00, 0x02, 0x01} is 257 synchsafe but 513 plain
        assert_eq!(synchsafe_u32([0x00, 0x00, 0x02, 0x01]), 257);
        assert_eq!(u32::from_be_bytes([0x00, 0x00, 0x02, 0x01]), 513);
        // high bits are dropped, not folded in
        assert_eq!(synchsafe_u32([0xFF, 0xFF, 0xFF, 0xFF]), 0x0FFF_FFFF);
        assert_eq!(synchsafe_u32([0x00, 0x00, 0x00, 0x00]), 0);
    }
}
