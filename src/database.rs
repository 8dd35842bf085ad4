//! Annotation store standing in for a disassembler database.
//!
//! Recognition only reads names from it; materializing a map writes names,
//! comments, struct overlays and offset references back. Requests are
//! fire-and-forget: nothing is ever rolled back.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::BufRead;

use anyhow::Context;
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::{MemoryImage, PointerWidth, RegionKind};

/// Prefixes of the names a disassembler invents for unnamed locations.
const PLACEHOLDER_PREFIXES: &[&str] = &[
    "sub_", "off_", "unk_", "loc_", "byte_", "word_", "dword_", "qword_",
];

/// Whether `name` is an auto-generated placeholder for `addr`, such as
/// `sub_401000` or `off_4021A8`.
pub fn is_placeholder(name: &str, addr: u64) -> bool {
    PLACEHOLDER_PREFIXES.iter().any(|prefix| {
        name.strip_prefix(prefix)
            .and_then(|hex| u64::from_str_radix(hex, 16).ok())
            == Some(addr)
    })
}

/// Structure layouts the scanner overlays on the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructKind {
    MsgMap,
    MsgMapEntry,
}

impl fmt::Display for StructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MsgMap => "AFX_MSGMAP",
            Self::MsgMapEntry => "AFX_MSGMAP_ENTRY",
        })
    }
}

/// Handle to a function known to the database (its start address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FunctionId(pub u64);

/// Name and annotation capabilities of the host database.
pub trait Database {
    /// Current name bound to `addr`, explicit or placeholder.
    fn name_of(&self, addr: u64) -> Option<&str>;

    fn rename(&mut self, addr: u64, name: &str) -> Result<()>;

    /// Overlays a structure of `size` bytes at `addr`. Re-typing an existing
    /// overlay of the same kind is a no-op.
    fn type_as_struct(&mut self, addr: u64, kind: StructKind, size: u64) -> Result<()>;

    fn is_function_start(&self, addr: u64) -> bool;

    /// Returns the function starting at `addr`, creating it if needed.
    fn ensure_function(&mut self, addr: u64) -> Result<FunctionId>;

    fn set_function_comment(&mut self, func: FunctionId, text: &str) -> Result<()>;

    /// Marks the pointer-sized field at `addr` as an offset to `target`.
    fn record_offset(&mut self, addr: u64, width: PointerWidth, target: u64);
}

/// A structure overlay recorded in an [`AnnotationDb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructOverlay {
    pub kind: StructKind,
    pub size: u64,
}

/// An offset reference recorded in an [`AnnotationDb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetRef {
    pub width: PointerWidth,
    pub target: u64,
}

/// In-memory [`Database`].
#[derive(Debug, Default, Clone)]
pub struct AnnotationDb {
    names: BTreeMap<u64, String>,
    functions: BTreeSet<u64>,
    comments: BTreeMap<u64, String>,
    structs: BTreeMap<u64, StructOverlay>,
    offsets: BTreeMap<u64, OffsetRef>,
}

impl AnnotationDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `addr` unless the address already has one.
    pub fn add_name(&mut self, addr: u64, name: impl Into<String>) {
        self.names.entry(addr).or_insert_with(|| name.into());
    }

    pub fn add_function(&mut self, addr: u64) {
        self.functions.insert(addr);
    }

    /// Reads `ADDRESS NAME` lines, such as a symbol list exported from
    /// another tool. Returns the number of names added.
    pub fn import_names(&mut self, reader: impl BufRead) -> anyhow::Result<usize> {
        let mut added = 0;
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (addr, name) = line
                .split_once(char::is_whitespace)
                .with_context(|| format!("line {}: expected `ADDRESS NAME`", lineno + 1))?;
            let addr = parse_hex(addr)
                .with_context(|| format!("line {}: invalid address {addr:?}", lineno + 1))?;

            self.names.insert(addr, name.trim().to_string());
            added += 1;
        }
        Ok(added)
    }

    /// Gives unnamed locations the placeholder names a disassembler's
    /// auto-analysis would: each aligned word in read-only data that points
    /// into code makes its target a `sub_` function, and the word itself an
    /// `off_` location. Words pointing into read-only data are `off_` too.
    pub fn seed_placeholders(&mut self, image: &dyn MemoryImage) -> usize {
        let code = image.region(RegionKind::Code);
        let rodata = image.region(RegionKind::ReadOnlyData);
        let step = image.pointer_width().bytes();
        let before = self.names.len();

        let mut addr = rodata.start;
        while rodata.contains_span(addr, step) {
            if let Some(value) = image.read_word(addr) {
                if code.contains(value) {
                    self.functions.insert(value);
                    self.add_name(value, format!("sub_{value:X}"));
                    self.add_name(addr, format!("off_{addr:X}"));
                } else if rodata.contains(value) {
                    self.add_name(addr, format!("off_{addr:X}"));
                }
            }
            addr += step;
        }

        let seeded = self.names.len() - before;
        debug!("seeded {seeded} placeholder names");
        seeded
    }

    pub fn names(&self) -> impl Iterator<Item = (u64, &str)> {
        self.names.iter().map(|(&a, n)| (a, n.as_str()))
    }

    pub fn functions(&self) -> impl Iterator<Item = u64> + '_ {
        self.functions.iter().copied()
    }

    pub fn function_comment(&self, func: FunctionId) -> Option<&str> {
        self.comments.get(&func.0).map(String::as_str)
    }

    pub fn comments(&self) -> impl Iterator<Item = (u64, &str)> {
        self.comments.iter().map(|(&a, c)| (a, c.as_str()))
    }

    pub fn struct_at(&self, addr: u64) -> Option<StructOverlay> {
        self.structs.get(&addr).copied()
    }

    pub fn structs(&self) -> impl Iterator<Item = (u64, StructOverlay)> + '_ {
        self.structs.iter().map(|(&a, s)| (a, *s))
    }

    pub fn offset_at(&self, addr: u64) -> Option<OffsetRef> {
        self.offsets.get(&addr).copied()
    }

    pub fn offsets(&self) -> impl Iterator<Item = (u64, OffsetRef)> + '_ {
        self.offsets.iter().map(|(&a, o)| (a, *o))
    }

    /// An existing overlay other than `(addr, kind)` that intersects
    /// `[addr, addr + size)`.
    fn conflicting_overlay(&self, addr: u64, kind: StructKind, size: u64) -> Option<u64> {
        let end = addr.saturating_add(size);
        // Overlays never exceed an entry record, so anything starting more
        // than 64 bytes before `addr` cannot reach it.
        self.structs
            .range(addr.saturating_sub(64)..end)
            .find(|&(&start, overlay)| {
                let overlaps = start < end && start.saturating_add(overlay.size) > addr;
                let same = start == addr && overlay.kind == kind && overlay.size == size;
                overlaps && !same
            })
            .map(|(&start, _)| start)
    }
}

impl Database for AnnotationDb {
    fn name_of(&self, addr: u64) -> Option<&str> {
        self.names.get(&addr).map(String::as_str)
    }

    fn rename(&mut self, addr: u64, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::annotation(addr, "empty name"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(Error::annotation(addr, format!("invalid name {name:?}")));
        }
        self.names.insert(addr, name.to_string());
        Ok(())
    }

    fn type_as_struct(&mut self, addr: u64, kind: StructKind, size: u64) -> Result<()> {
        if let Some(start) = self.conflicting_overlay(addr, kind, size) {
            return Err(Error::annotation(
                addr,
                format!("{kind} overlaps existing structure at 0x{start:X}"),
            ));
        }
        self.structs.insert(addr, StructOverlay { kind, size });
        Ok(())
    }

    fn is_function_start(&self, addr: u64) -> bool {
        self.functions.contains(&addr)
    }

    fn ensure_function(&mut self, addr: u64) -> Result<FunctionId> {
        if addr == 0 {
            return Err(Error::annotation(addr, "cannot create a function at address 0"));
        }
        if self.functions.insert(addr) {
            self.add_name(addr, format!("sub_{addr:X}"));
        }
        Ok(FunctionId(addr))
    }

    fn set_function_comment(&mut self, func: FunctionId, text: &str) -> Result<()> {
        if !self.functions.contains(&func.0) {
            return Err(Error::annotation(func.0, "no function at this address"));
        }
        self.comments.insert(func.0, text.to_string());
        Ok(())
    }

    fn record_offset(&mut self, addr: u64, width: PointerWidth, target: u64) {
        self.offsets.insert(addr, OffsetRef { width, target });
    }
}

/// Parses a hexadecimal address, with or without a `0x` prefix.
pub fn parse_hex(s: &str) -> std::result::Result<u64, std::num::ParseIntError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(digits, 16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::FlatImage;

    #[test]
    fn placeholder_names() {
        assert!(is_placeholder("sub_401000", 0x401000));
        assert!(is_placeholder("off_4021A8", 0x4021A8));
        assert!(!is_placeholder("sub_401000", 0x401004));
        assert!(!is_placeholder("?GetThisMessageMap@CAboutDlg@@KGPBUAFX_MSGMAP@@XZ", 0x401000));
        assert!(!is_placeholder("sub_", 0));
    }

    #[test]
    fn struct_typing_is_idempotent_but_rejects_overlap() {
        let mut db = AnnotationDb::new();
        db.type_as_struct(0x2000, StructKind::MsgMapEntry, 24).unwrap();
        db.type_as_struct(0x2000, StructKind::MsgMapEntry, 24).unwrap();
        db.type_as_struct(0x2018, StructKind::MsgMapEntry, 24).unwrap();

        let err = db.type_as_struct(0x2008, StructKind::MsgMapEntry, 24).unwrap_err();
        assert!(matches!(err, Error::Annotation { addr: 0x2008, .. }));
        let err = db.type_as_struct(0x2000, StructKind::MsgMap, 8).unwrap_err();
        assert!(matches!(err, Error::Annotation { .. }));
    }

    #[test]
    fn ensure_function_assigns_placeholder_once() {
        let mut db = AnnotationDb::new();
        let f = db.ensure_function(0x401000).unwrap();
        assert_eq!(f, FunctionId(0x401000));
        assert_eq!(db.name_of(0x401000), Some("sub_401000"));

        db.rename(0x401000, "OnOK").unwrap();
        db.ensure_function(0x401000).unwrap();
        assert_eq!(db.name_of(0x401000), Some("OnOK"));
    }

    #[test]
    fn ensure_function_refuses_null_address() {
        let mut db = AnnotationDb::new();
        assert!(db.ensure_function(0).is_err());
        assert!(!db.is_function_start(0));
        assert_eq!(db.name_of(0), None);
    }

    #[test]
    fn rename_rejects_invalid_names() {
        let mut db = AnnotationDb::new();
        assert!(db.rename(0x1000, "").is_err());
        assert!(db.rename(0x1000, "On Paint").is_err());
        db.rename(0x1000, "OnPaint").unwrap();
        assert_eq!(db.name_of(0x1000), Some("OnPaint"));
    }

    #[test]
    fn comment_requires_function() {
        let mut db = AnnotationDb::new();
        assert!(db.set_function_comment(FunctionId(0x401000), "x").is_err());
        db.add_function(0x401000);
        db.set_function_comment(FunctionId(0x401000), "x").unwrap();
        assert_eq!(db.function_comment(FunctionId(0x401000)), Some("x"));
    }

    #[test]
    fn imports_name_lists() {
        let input = "# exported names\n0x401000 ?GetThisMessageMap@CMainFrame@@KGPBUAFX_MSGMAP@@XZ\n\n402000\tCMainFrame::messageMap\n";
        let mut db = AnnotationDb::new();
        assert_eq!(db.import_names(input.as_bytes()).unwrap(), 2);
        assert_eq!(
            db.name_of(0x401000),
            Some("?GetThisMessageMap@CMainFrame@@KGPBUAFX_MSGMAP@@XZ")
        );
        assert_eq!(db.name_of(0x402000), Some("CMainFrame::messageMap"));

        assert!(db.import_names("zz name\n".as_bytes()).is_err());
        assert!(db.import_names("401000\n".as_bytes()).is_err());
    }

    #[test]
    fn seeds_placeholders_from_pointers() {
        let mut rodata = Vec::new();
        rodata.extend_from_slice(&0x1010u32.to_le_bytes()); // -> code
        rodata.extend_from_slice(&0x2000u32.to_le_bytes()); // -> rodata
        rodata.extend_from_slice(&0x1234u32.to_le_bytes()); // nowhere
        let image = FlatImage::new(PointerWidth::Bits32)
            .with_region(RegionKind::Code, 0x1000, vec![0xCC; 0x100])
            .with_region(RegionKind::ReadOnlyData, 0x2000, rodata);

        let mut db = AnnotationDb::new();
        db.add_name(0x2000, "explicit");
        assert_eq!(db.seed_placeholders(&image), 2);
        assert_eq!(db.name_of(0x2000), Some("explicit"));
        assert_eq!(db.name_of(0x1010), Some("sub_1010"));
        assert!(db.is_function_start(0x1010));
        assert_eq!(db.name_of(0x2004), Some("off_2004"));
        assert_eq!(db.name_of(0x2008), None);
    }
}
