//! Synthetic images for unit tests.

use crate::image::{FlatImage, PointerWidth, RegionKind};
use crate::layout::{entry_size, MapEntry};

pub const CODE: u64 = 0x40_1000;
pub const RODATA: u64 = 0x40_4000;
pub const DATA: u64 = 0x40_8000;

pub const CODE_SIZE: usize = 0x1000;
pub const DATA_SIZE: usize = 0x200;

/// Region placement shared by every fixture.
pub struct Layout {
    pub width: PointerWidth,
}

impl Layout {
    pub fn new(width: PointerWidth) -> Self {
        Self { width }
    }

    pub fn image(&self, rodata: Vec<u8>) -> FlatImage {
        FlatImage::new(self.width)
            .with_region(RegionKind::Code, CODE, vec![0xCC; CODE_SIZE])
            .with_region(RegionKind::ReadOnlyData, RODATA, rodata)
            .with_region(RegionKind::Data, DATA, vec![0; DATA_SIZE])
    }
}

pub fn entry_bytes(width: PointerWidth, entry: &MapEntry) -> Vec<u8> {
    let mut out = Vec::with_capacity(entry_size(width) as usize);
    out.extend_from_slice(&entry.message.to_le_bytes());
    out.extend_from_slice(&entry.notify_code.to_le_bytes());
    out.extend_from_slice(&entry.id_low.to_le_bytes());
    out.extend_from_slice(&entry.id_high.to_le_bytes());
    push_word(&mut out, width, entry.signature);
    push_word(&mut out, width, entry.handler);
    out
}

fn push_word(out: &mut Vec<u8>, width: PointerWidth, value: u64) {
    match width {
        PointerWidth::Bits32 => out.extend_from_slice(&(value as u32).to_le_bytes()),
        PointerWidth::Bits64 => out.extend_from_slice(&value.to_le_bytes()),
    }
}

/// A zero-filled read-only data region mapped at [`RODATA`].
pub struct Rodata {
    pub width: PointerWidth,
    pub bytes: Vec<u8>,
}

impl Rodata {
    pub fn new(width: PointerWidth, size: usize) -> Self {
        Self {
            width,
            bytes: vec![0; size],
        }
    }

    fn write(&mut self, addr: u64, data: &[u8]) {
        let off = (addr - RODATA) as usize;
        self.bytes[off..off + data.len()].copy_from_slice(data);
    }

    pub fn put_word(&mut self, addr: u64, value: u64) {
        let mut buf = Vec::new();
        push_word(&mut buf, self.width, value);
        self.write(addr, &buf);
    }

    pub fn put_entry(&mut self, addr: u64, entry: &MapEntry) {
        let bytes = entry_bytes(self.width, entry);
        self.write(addr, &bytes);
    }

    /// Writes a header at `header` and its entries at `entries_at`, followed
    /// by a zero terminator. Returns the terminator address.
    pub fn put_table(
        &mut self,
        header: u64,
        get_map_fn: u64,
        entries_at: u64,
        entries: &[MapEntry],
    ) -> u64 {
        self.put_word(header, get_map_fn);
        self.put_word(header + self.width.bytes(), entries_at);

        let size = entry_size(self.width);
        let mut addr = entries_at;
        for entry in entries {
            self.put_entry(addr, entry);
            addr += size;
        }
        self.put_entry(addr, &MapEntry::default());
        addr
    }

    pub fn into_image(self) -> FlatImage {
        Layout::new(self.width).image(self.bytes)
    }
}

/// `count` well-formed entries with distinct handlers in the code region.
pub fn sample_entries(count: usize) -> Vec<MapEntry> {
    (0..count)
        .map(|i| MapEntry {
            message: [0x111, 0x0F, 0x200, 0x4E][i % 4],
            notify_code: 0,
            id_low: 1000 + i as u32,
            id_high: 1000 + i as u32,
            signature: 12,
            handler: CODE + 0x10 * (i as u64 + 1),
        })
        .collect()
}
