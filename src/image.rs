//! Address-space view of a scanned image.
//!
//! The scanner never owns the image it inspects. It reads through the
//! [`MemoryImage`] trait, which a PE file on disk ([`crate::binary::PeImage`])
//! or an in-memory set of regions ([`FlatImage`]) can back.

use std::fmt;

use crate::error::{Error, Result};

/// The three logical regions a message map may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Executable code (`.text`).
    Code,
    /// Read-only data (`.rdata`), where message maps live.
    ReadOnlyData,
    /// Writable data (`.data`).
    Data,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Code => "code",
            Self::ReadOnlyData => "read-only data",
            Self::Data => "writable data",
        })
    }
}

/// Half-open address range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressRange {
    pub start: u64,
    pub end: u64,
}

impl AddressRange {
    /// A region the image does not have.
    pub const UNSET: Self = Self { start: 0, end: 0 };

    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "range start after end");
        Self { start, end }
    }

    /// Empty ranges never match anything, so an unset region cannot
    /// accidentally validate a zero address.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn contains(&self, addr: u64) -> bool {
        !self.is_empty() && addr >= self.start && addr < self.end
    }

    /// Whether `[addr, addr + len)` lies entirely inside the range.
    #[inline]
    pub fn contains_span(&self, addr: u64, len: u64) -> bool {
        match addr.checked_add(len) {
            Some(end) => self.contains(addr) && end <= self.end,
            None => false,
        }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}-{:#X}", self.start, self.end)
    }
}

/// Pointer size of the image, fixed for a whole scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerWidth {
    Bits32,
    Bits64,
}

impl PointerWidth {
    #[inline]
    pub const fn bytes(self) -> u64 {
        match self {
            Self::Bits32 => 4,
            Self::Bits64 => 8,
        }
    }

    /// The disassembler's "no address" sentinel for this width.
    #[inline]
    pub const fn bad_address(self) -> u64 {
        match self {
            Self::Bits32 => u32::MAX as u64,
            Self::Bits64 => u64::MAX,
        }
    }
}

/// Byte-addressable access to a loaded image.
///
/// Multi-byte reads are little-endian. A read that touches unmapped or
/// non-file-backed memory yields `None`.
pub trait MemoryImage {
    fn pointer_width(&self) -> PointerWidth;

    /// Range of the given region, or [`AddressRange::UNSET`].
    fn region(&self, kind: RegionKind) -> AddressRange;

    fn read_bytes(&self, addr: u64, len: usize) -> Option<&[u8]>;

    fn read_u32(&self, addr: u64) -> Option<u32> {
        let bytes = self.read_bytes(addr, 4)?;
        Some(u32::from_le_bytes(bytes.try_into().ok()?))
    }

    fn read_u64(&self, addr: u64) -> Option<u64> {
        let bytes = self.read_bytes(addr, 8)?;
        Some(u64::from_le_bytes(bytes.try_into().ok()?))
    }

    /// Reads a pointer-sized value, zero-extended to `u64`.
    fn read_word(&self, addr: u64) -> Option<u64> {
        match self.pointer_width() {
            PointerWidth::Bits32 => self.read_u32(addr).map(u64::from),
            PointerWidth::Bits64 => self.read_u64(addr),
        }
    }
}

/// Region bounds and pointer width, resolved once per scan and shared by
/// every validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpace {
    pub code: AddressRange,
    pub rodata: AddressRange,
    pub data: AddressRange,
    pub width: PointerWidth,
}

impl AddressSpace {
    /// Captures the image's regions.
    ///
    /// Fails when the code or read-only data region is missing. The writable
    /// data region is optional; when unset, no address is ever inside it.
    pub fn resolve(image: &dyn MemoryImage) -> Result<Self> {
        let code = image.region(RegionKind::Code);
        if code.is_empty() {
            return Err(Error::DegenerateRegion(RegionKind::Code));
        }
        let rodata = image.region(RegionKind::ReadOnlyData);
        if rodata.is_empty() {
            return Err(Error::DegenerateRegion(RegionKind::ReadOnlyData));
        }

        Ok(Self {
            code,
            rodata,
            data: image.region(RegionKind::Data),
            width: image.pointer_width(),
        })
    }

    pub fn range(&self, kind: RegionKind) -> AddressRange {
        match kind {
            RegionKind::Code => self.code,
            RegionKind::ReadOnlyData => self.rodata,
            RegionKind::Data => self.data,
        }
    }

    #[inline]
    pub fn contains(&self, kind: RegionKind, addr: u64) -> bool {
        self.range(kind).contains(addr)
    }
}

#[derive(Debug, Clone)]
struct Segment {
    kind: RegionKind,
    base: u64,
    bytes: Vec<u8>,
}

impl Segment {
    fn range(&self) -> AddressRange {
        AddressRange::new(self.base, self.base.saturating_add(self.bytes.len() as u64))
    }
}

/// An image held entirely in memory, one byte buffer per region.
#[derive(Debug, Clone)]
pub struct FlatImage {
    width: PointerWidth,
    segments: Vec<Segment>,
}

impl FlatImage {
    pub fn new(width: PointerWidth) -> Self {
        Self {
            width,
            segments: Vec::new(),
        }
    }

    /// Adds (or replaces) the bytes backing `kind`, mapped at `base`.
    pub fn with_region(mut self, kind: RegionKind, base: u64, bytes: Vec<u8>) -> Self {
        self.segments.retain(|s| s.kind != kind);
        self.segments.push(Segment { kind, base, bytes });
        self
    }
}

impl MemoryImage for FlatImage {
    fn pointer_width(&self) -> PointerWidth {
        self.width
    }

    fn region(&self, kind: RegionKind) -> AddressRange {
        self.segments
            .iter()
            .find(|s| s.kind == kind)
            .map(Segment::range)
            .unwrap_or(AddressRange::UNSET)
    }

    fn read_bytes(&self, addr: u64, len: usize) -> Option<&[u8]> {
        let segment = self
            .segments
            .iter()
            .find(|s| s.range().contains_span(addr, len as u64))?;
        let start = (addr - segment.base) as usize;
        segment.bytes.get(start..start + len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_range_matches_nothing() {
        assert!(!AddressRange::UNSET.contains(0));
        assert!(!AddressRange::new(0x1000, 0x1000).contains(0x1000));
    }

    #[test]
    fn range_is_half_open() {
        let r = AddressRange::new(0x1000, 0x2000);
        assert!(r.contains(0x1000));
        assert!(r.contains(0x1FFF));
        assert!(!r.contains(0x2000));
        assert!(r.contains_span(0x1FF8, 8));
        assert!(!r.contains_span(0x1FFC, 8));
        assert!(!r.contains_span(u64::MAX - 2, 8));
    }

    #[test]
    fn resolve_requires_code_and_rodata() {
        let image = FlatImage::new(PointerWidth::Bits32)
            .with_region(RegionKind::ReadOnlyData, 0x2000, vec![0; 16]);
        assert!(matches!(
            AddressSpace::resolve(&image),
            Err(Error::DegenerateRegion(RegionKind::Code))
        ));

        let image = FlatImage::new(PointerWidth::Bits32)
            .with_region(RegionKind::Code, 0x1000, vec![0; 16]);
        assert!(matches!(
            AddressSpace::resolve(&image),
            Err(Error::DegenerateRegion(RegionKind::ReadOnlyData))
        ));
    }

    #[test]
    fn missing_data_region_is_tolerated() {
        let image = FlatImage::new(PointerWidth::Bits64)
            .with_region(RegionKind::Code, 0x1000, vec![0; 16])
            .with_region(RegionKind::ReadOnlyData, 0x2000, vec![0; 16]);
        let space = AddressSpace::resolve(&image).unwrap();
        assert!(space.data.is_empty());
        assert!(!space.contains(RegionKind::Data, 0));
        assert_eq!(space.width.bytes(), 8);
    }

    #[test]
    fn flat_image_reads_little_endian_words() {
        let image = FlatImage::new(PointerWidth::Bits32).with_region(
            RegionKind::ReadOnlyData,
            0x2000,
            vec![0x78, 0x56, 0x34, 0x12, 0xEF, 0xCD, 0xAB, 0x90],
        );
        assert_eq!(image.read_word(0x2000), Some(0x1234_5678));
        assert_eq!(image.read_u64(0x2000), Some(0x90AB_CDEF_1234_5678));
        assert_eq!(image.read_u32(0x2006), None);
        assert_eq!(image.read_u32(0x1000), None);
    }
}
