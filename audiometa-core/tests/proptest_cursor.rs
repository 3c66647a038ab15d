//! Property-based tests for the byte cursor and synchsafe integers.

use proptest::prelude::*;
use audiometa_core::cursor::{synchsafe_u32, ByteCursor};

proptest! {
    /// Reads never hand back bytes past the end of the slice.
    #[test]
    fn cursor_never_over_reads(data in proptest::collection::vec(any::<u8>(), 0..64), n in 0usize..80) {
        let mut cur = ByteCursor::new(&data);
        match cur.read_bytes(n) {
            Ok(bytes) => {
                prop_assert_eq!(bytes.len(), n);
                prop_assert!(n <= data.len());
                prop_assert_eq!(cur.position(), n);
            }
            Err(_) => {
                prop_assert!(n > data.len());
                // a failed read must not move the cursor
                prop_assert_eq!(cur.position(), 0);
            }
        }
    }

    /// Position plus remaining always equals the slice length.
    #[test]
    fn cursor_position_arithmetic(data in proptest::collection::vec(any::<u8>(), 0..64), skips in proptest::collection::vec(0usize..16, 0..8)) {
        let mut cur = ByteCursor::new(&data);
        for n in skips {
            let _ = cur.skip(n);
            prop_assert_eq!(cur.position() + cur.remaining(), data.len());
        }
    }

    /// Multi-byte reads agree with the primitive byte-array decodings.
    #[test]
    fn cursor_endianness_consistency(bytes in proptest::array::uniform4(any::<u8>())) {
        let mut cur = ByteCursor::new(&bytes);
        prop_assert_eq!(cur.read_u32_be().unwrap(), u32::from_be_bytes(bytes));
        let mut cur = ByteCursor::new(&bytes);
        prop_assert_eq!(cur.read_u32_le().unwrap(), u32::from_le_bytes(bytes));
    }

    /// Every 28-bit value round-trips through the synchsafe encoding.
    #[test]
    fn synchsafe_roundtrip(value in 0u32..=0x0FFF_FFFF) {
        let encoded = [
            ((value >> 21) & 0x7F) as u8,
            ((value >> 14) & 0x7F) as u8,
            ((value >> 7) & 0x7F) as u8,
            (value & 0x7F) as u8,
        ];
        prop_assert_eq!(synchsafe_u32(encoded), value);
    }

    /// High bits never leak into the decoded value.
    #[test]
    fn synchsafe_ignores_high_bits(bytes in proptest::array::uniform4(any::<u8>())) {
        let masked = [bytes[0] & 0x7F, bytes[1] & 0x7F, bytes[2] & 0x7F, bytes[3] & 0x7F];
        prop_assert_eq!(synchsafe_u32(bytes), synchsafe_u32(masked));
        prop_assert!(synchsafe_u32(bytes) <= 0x0FFF_FFFF);
    }
}
