//! Binary format parsing.
//!
//! Turns a PE file into the section table, region bounds and symbol names
//! the scanner needs. Only PE images can carry MFC message maps; other
//! formats are rejected up front.

mod pe;

use anyhow::Result;
use object::{BinaryFormat, Object, ObjectSection, ObjectSymbol, SectionKind};
use tracing::debug;

use crate::image::{AddressRange, PointerWidth, RegionKind};

pub use pe::PeImage;

/// Information about a section in the binary.
#[derive(Debug, Clone)]
pub struct SectionInfo {
    pub name: String,
    pub kind: SectionKind,
    pub virtual_address: u64,
    /// Size once loaded.
    pub size: u64,
    pub file_offset: u64,
    /// Bytes actually present in the file; the rest of `size` is zero-fill.
    pub file_size: u64,
}

impl SectionInfo {
    /// Loaded address range, or `None` if it would wrap past `u64::MAX`.
    pub fn range(&self) -> Option<AddressRange> {
        let end = self.virtual_address.checked_add(self.size)?;
        Some(AddressRange::new(self.virtual_address, end))
    }

    /// Part of the section backed by file data.
    fn file_backed(&self) -> Option<AddressRange> {
        let end = self
            .virtual_address
            .checked_add(self.file_size.min(self.size))?;
        Some(AddressRange::new(self.virtual_address, end))
    }
}

/// Everything the loader extracts from the headers.
#[derive(Debug, Clone)]
pub struct ImageLayout {
    pub width: PointerWidth,
    pub sections: Vec<SectionInfo>,
    pub code: AddressRange,
    pub rodata: AddressRange,
    pub data: AddressRange,
    /// Exported and COFF symbol names with their addresses.
    pub symbols: Vec<(u64, String)>,
}

impl ImageLayout {
    pub fn region(&self, kind: RegionKind) -> AddressRange {
        match kind {
            RegionKind::Code => self.code,
            RegionKind::ReadOnlyData => self.rodata,
            RegionKind::Data => self.data,
        }
    }

    /// File offset of `[addr, addr + len)`, if wholly file-backed.
    pub fn file_offset(&self, addr: u64, len: u64) -> Option<u64> {
        self.sections
            .iter()
            .find(|s| s.file_backed().is_some_and(|r| r.contains_span(addr, len)))
            .map(|s| addr - s.virtual_address + s.file_offset)
    }
}

/// Parses the headers of a PE image.
pub fn parse_layout(data: &[u8]) -> Result<ImageLayout> {
    let obj = object::File::parse(data)?;

    match obj.format() {
        BinaryFormat::Pe => {}
        other => anyhow::bail!("Unsupported binary format: {:?}", other),
    }

    let sections = collect_pe_sections(&obj);
    let width = if obj.is_64() {
        PointerWidth::Bits64
    } else {
        PointerWidth::Bits32
    };

    Ok(ImageLayout {
        width,
        code: pick_region(&sections, ".text", SectionKind::Text),
        rodata: pick_region(&sections, ".rdata", SectionKind::ReadOnlyData),
        data: pick_region(&sections, ".data", SectionKind::Data),
        symbols: collect_symbols(&obj),
        sections,
    })
}

fn collect_pe_sections(obj: &object::File<'_>) -> Vec<SectionInfo> {
    obj.sections()
        .filter_map(|s| {
            let (file_offset, file_size) = s.file_range().unwrap_or((0, 0));
            Some(SectionInfo {
                name: s.name().ok()?.to_string(),
                kind: s.kind(),
                virtual_address: s.address(),
                size: s.size(),
                file_offset,
                file_size,
            })
        })
        .filter(|s| {
            let fits = s.range().is_some();
            if !fits {
                debug!(
                    "section {} at 0x{:X} wraps the address space, ignored",
                    s.name, s.virtual_address
                );
            }
            fits
        })
        .collect()
}

/// The conventionally named section, else the first one of `kind`.
fn pick_region(sections: &[SectionInfo], name: &str, kind: SectionKind) -> AddressRange {
    sections
        .iter()
        .find(|s| s.name == name)
        .or_else(|| sections.iter().find(|s| s.kind == kind))
        .and_then(SectionInfo::range)
        .unwrap_or(AddressRange::UNSET)
}

fn collect_symbols(obj: &object::File<'_>) -> Vec<(u64, String)> {
    let mut symbols: Vec<(u64, String)> = obj
        .symbols()
        .filter(|s| s.is_definition())
        .filter_map(|s| Some((s.address(), s.name().ok()?.to_string())))
        .filter(|(_, name)| !name.is_empty())
        .collect();

    if let Ok(exports) = obj.exports() {
        symbols.extend(
            exports
                .iter()
                .map(|e| (e.address(), String::from_utf8_lossy(e.name()).into_owned())),
        );
    }

    symbols
}
