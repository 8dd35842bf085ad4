//! In-image layouts of `AFX_MSGMAP` and `AFX_MSGMAP_ENTRY`.
//!
//! ```text
//! AFX_MSGMAP          AFX_MSGMAP_ENTRY
//!   +0   pfnGetBaseMap  +0   nMessage  u32
//!   +W   lpEntries      +4   nCode     u32
//!                       +8   nID       u32
//!                       +12  nLastID   u32
//!                       +16  nSig      word
//!                       +16+W pfn      word
//! ```
//!
//! `W` is the image's pointer width.

use crate::image::{MemoryImage, PointerWidth};

/// Size of one `AFX_MSGMAP_ENTRY` record: 24 bytes on 32-bit, 32 on 64-bit.
#[inline]
pub const fn entry_size(width: PointerWidth) -> u64 {
    16 + 2 * width.bytes()
}

/// Size of the two-pointer `AFX_MSGMAP` header.
#[inline]
pub const fn header_size(width: PointerWidth) -> u64 {
    2 * width.bytes()
}

/// Raw message-map header as stored in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    pub get_map_fn: u64,
    pub first_entry: u64,
}

impl MapHeader {
    pub fn read(image: &dyn MemoryImage, addr: u64) -> Option<Self> {
        let width = image.pointer_width().bytes();
        Some(Self {
            get_map_fn: image.read_word(addr)?,
            first_entry: image.read_word(addr.checked_add(width)?)?,
        })
    }
}

/// Raw message-map entry as stored in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapEntry {
    pub message: u32,
    pub notify_code: u32,
    pub id_low: u32,
    pub id_high: u32,
    pub signature: u64,
    pub handler: u64,
}

impl MapEntry {
    pub fn read(image: &dyn MemoryImage, addr: u64) -> Option<Self> {
        let width = image.pointer_width().bytes();
        // The whole record must be mapped, not only the fields we look at.
        image.read_bytes(addr, entry_size(image.pointer_width()) as usize)?;

        Some(Self {
            message: image.read_u32(addr)?,
            notify_code: image.read_u32(addr + 4)?,
            id_low: image.read_u32(addr + 8)?,
            id_high: image.read_u32(addr + 12)?,
            signature: image.read_word(addr + 16)?,
            handler: image.read_word(addr + 16 + width)?,
        })
    }

    /// `AFX_MSG_END`: every field is zero.
    pub fn is_terminator(&self) -> bool {
        *self == Self::default()
    }

    /// A zero message with any other field set. Real tables never contain
    /// this, but misaligned reads often do.
    pub fn is_partially_zero(&self) -> bool {
        self.message == 0 && !self.is_terminator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{FlatImage, RegionKind};

    #[test]
    fn record_sizes() {
        assert_eq!(entry_size(PointerWidth::Bits32), 24);
        assert_eq!(entry_size(PointerWidth::Bits64), 32);
        assert_eq!(header_size(PointerWidth::Bits64), 16);
    }

    #[test]
    fn reads_64bit_entry() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x111u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&1001u32.to_le_bytes());
        bytes.extend_from_slice(&1003u32.to_le_bytes());
        bytes.extend_from_slice(&0x1_4000_3000u64.to_le_bytes());
        bytes.extend_from_slice(&0x1_4000_1010u64.to_le_bytes());
        let image =
            FlatImage::new(PointerWidth::Bits64).with_region(RegionKind::ReadOnlyData, 0x2000, bytes);

        let entry = MapEntry::read(&image, 0x2000).unwrap();
        assert_eq!(entry.message, 0x111);
        assert_eq!(entry.id_low, 1001);
        assert_eq!(entry.id_high, 1003);
        assert_eq!(entry.signature, 0x1_4000_3000);
        assert_eq!(entry.handler, 0x1_4000_1010);
        assert!(!entry.is_terminator());
        assert!(MapEntry::read(&image, 0x2004).is_none());
    }

    #[test]
    fn partial_zero_is_not_a_terminator() {
        let entry = MapEntry {
            handler: 0x401000,
            ..MapEntry::default()
        };
        assert!(!entry.is_terminator());
        assert!(entry.is_partially_zero());
        assert!(!MapEntry::default().is_partially_zero());
    }
}
