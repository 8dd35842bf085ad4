//! PE (Portable Executable) image backed by a file mapping.

use std::fs::File;

use anyhow::{Context, Result};
use memmap2::Mmap;

use super::{parse_layout, ImageLayout};
use crate::image::{AddressRange, MemoryImage, PointerWidth, RegionKind};

/// A PE file viewed through its section table.
///
/// Virtual addresses include the image base, as the file's own pointers do.
pub struct PeImage<D = Mmap> {
    data: D,
    layout: ImageLayout,
}

impl PeImage<Mmap> {
    /// Maps the given file and parses its headers.
    pub fn open(file: File) -> Result<Self> {
        let mmap = unsafe { Mmap::map(&file)? };
        Self::parse(mmap)
    }
}

impl<D: AsRef<[u8]>> PeImage<D> {
    pub fn parse(data: D) -> Result<Self> {
        let layout = parse_layout(data.as_ref())?;

        if layout.code.is_empty() {
            anyhow::bail!("No code section found in PE file");
        }
        if layout.rodata.is_empty() {
            anyhow::bail!("No .rdata section found in PE file");
        }

        Ok(Self { data, layout })
    }

    pub fn layout(&self) -> &ImageLayout {
        &self.layout
    }

    pub fn symbols(&self) -> &[(u64, String)] {
        &self.layout.symbols
    }

    /// File offset of a virtual address, for reporting.
    pub fn file_offset(&self, addr: u64) -> Result<u64> {
        self.layout
            .file_offset(addr, 1)
            .with_context(|| format!("Address {:#X} is not backed by file data", addr))
    }
}

impl<D: AsRef<[u8]>> MemoryImage for PeImage<D> {
    fn pointer_width(&self) -> PointerWidth {
        self.layout.width
    }

    fn region(&self, kind: RegionKind) -> AddressRange {
        self.layout.region(kind)
    }

    fn read_bytes(&self, addr: u64, len: usize) -> Option<&[u8]> {
        let offset = self.layout.file_offset(addr, len as u64)? as usize;
        self.data.as_ref().get(offset..offset.checked_add(len)?)
    }
}
