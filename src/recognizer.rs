//! Heuristic recognition of `AFX_MSGMAP` headers.
//!
//! Checks run cheapest first: region containment of the header fields, then
//! symbol names, and only when names are inconclusive a walk of the whole
//! entry chain.

use tracing::debug;

use crate::database::Database;
use crate::image::{AddressSpace, MemoryImage, RegionKind};
use crate::layout::{entry_size, MapEntry, MapHeader};
use crate::validator::{is_plausible, is_plausible_entry};

/// Leading characters of the MSVC-mangled `GetThisMessageMap` accessor that
/// `BEGIN_MESSAGE_MAP` emits.
pub const GET_THIS_MESSAGE_MAP: &str = "?GetThisMessageMap";

/// Confidence that an address holds a message-map header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Reject,
    /// Structurally plausible, but the header itself is unnamed.
    Weak,
    /// Confirmed by the accessor's name or by a complete entry chain.
    Strong,
}

impl Classification {
    pub fn is_match(self) -> bool {
        !matches!(self, Self::Reject)
    }
}

/// Classifies candidate headers within one resolved address space.
pub struct Recognizer<'a> {
    image: &'a dyn MemoryImage,
    space: &'a AddressSpace,
}

impl<'a> Recognizer<'a> {
    pub fn new(image: &'a dyn MemoryImage, space: &'a AddressSpace) -> Self {
        Self { image, space }
    }

    pub fn classify(&self, db: &dyn Database, addr: u64) -> Classification {
        let Some(header) = MapHeader::read(self.image, addr) else {
            return Classification::Reject;
        };
        if !is_plausible_entry(self.image, self.space, header.first_entry) {
            return Classification::Reject;
        }

        // Statically linked builds store the parent map here instead of the
        // accessor, so read-only data is accepted as well as code.
        if !self.space.contains(RegionKind::Code, header.get_map_fn)
            && !self.space.contains(RegionKind::ReadOnlyData, header.get_map_fn)
        {
            return Classification::Reject;
        }
        if !self.space.contains(RegionKind::ReadOnlyData, header.first_entry) {
            return Classification::Reject;
        }

        match MapEntry::read(self.image, header.first_entry) {
            Some(first) if !first.is_partially_zero() => {}
            _ => return Classification::Reject,
        }

        let accessor_name = db.name_of(header.get_map_fn);
        if db.name_of(addr).is_none() {
            return match accessor_name {
                Some(_) => Classification::Weak,
                None => Classification::Reject,
            };
        }

        if accessor_name.is_some_and(|name| name.starts_with(GET_THIS_MESSAGE_MAP)) {
            return Classification::Strong;
        }

        if self.chain_is_valid(header.first_entry) {
            Classification::Strong
        } else {
            Classification::Reject
        }
    }

    /// Walks entries from `first` to the terminator. Every entry must be
    /// plausible, point at code, and lie wholly inside read-only data.
    fn chain_is_valid(&self, first: u64) -> bool {
        let size = entry_size(self.space.width);
        let mut addr = first;

        loop {
            if !self.space.rodata.contains_span(addr, size) {
                debug!("entry chain from 0x{first:X} runs past read-only data at 0x{addr:X}");
                return false;
            }
            let Some(entry) = MapEntry::read(self.image, addr) else {
                return false;
            };
            if entry.is_terminator() {
                return true;
            }
            if !is_plausible(self.space, &entry)
                || !self.space.contains(RegionKind::Code, entry.handler)
            {
                return false;
            }
            addr += size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::AnnotationDb;
    use crate::image::PointerWidth;
    use crate::testutil::{sample_entries, Rodata, CODE, RODATA};

    const HEADER: u64 = RODATA + 0x100;
    const ENTRIES: u64 = RODATA + 0x200;
    const ACCESSOR: u64 = CODE + 0x800;

    fn table(width: PointerWidth, entries: usize) -> Rodata {
        let mut rodata = Rodata::new(width, 0x1000);
        rodata.put_table(HEADER, ACCESSOR, ENTRIES, &sample_entries(entries));
        rodata
    }

    fn classify(rodata: Rodata, db: &AnnotationDb, addr: u64) -> Classification {
        let image = rodata.into_image();
        let space = AddressSpace::resolve(&image).unwrap();
        Recognizer::new(&image, &space).classify(db, addr)
    }

    fn named_db() -> AnnotationDb {
        let mut db = AnnotationDb::new();
        db.add_name(HEADER, format!("off_{HEADER:X}"));
        db.add_name(ACCESSOR, format!("sub_{ACCESSOR:X}"));
        db
    }

    #[test]
    fn accessor_name_gives_strong_match() {
        let mut db = AnnotationDb::new();
        db.add_name(HEADER, "?messageMap@CAboutDlg@@1UAFX_MSGMAP@@B");
        db.add_name(ACCESSOR, "?GetThisMessageMap@CAboutDlg@@KGPBUAFX_MSGMAP@@XZ");
        for width in [PointerWidth::Bits32, PointerWidth::Bits64] {
            assert_eq!(classify(table(width, 3), &db, HEADER), Classification::Strong);
        }
    }

    #[test]
    fn complete_chain_gives_strong_match() {
        for width in [PointerWidth::Bits32, PointerWidth::Bits64] {
            assert_eq!(classify(table(width, 5), &named_db(), HEADER), Classification::Strong);
        }
    }

    #[test]
    fn empty_map_is_strong_when_named() {
        assert_eq!(
            classify(table(PointerWidth::Bits32, 0), &named_db(), HEADER),
            Classification::Strong
        );
    }

    #[test]
    fn unnamed_header_is_weak_only_with_named_accessor() {
        let mut db = AnnotationDb::new();
        assert_eq!(
            classify(table(PointerWidth::Bits32, 2), &db, HEADER),
            Classification::Reject
        );

        db.add_name(ACCESSOR, "sub_401800");
        assert_eq!(
            classify(table(PointerWidth::Bits32, 2), &db, HEADER),
            Classification::Weak
        );
    }

    #[test]
    fn implausible_first_entry_is_rejected() {
        let width = PointerWidth::Bits32;
        let mut entries = sample_entries(2);
        entries[0].id_high = 0x1_0000;
        let mut rodata = Rodata::new(width, 0x1000);
        rodata.put_table(HEADER, ACCESSOR, ENTRIES, &entries);
        assert_eq!(classify(rodata, &named_db(), HEADER), Classification::Reject);

        // first entry pointer outside every region
        let mut rodata = table(width, 2);
        rodata.put_word(HEADER + 4, 0x10);
        assert_eq!(classify(rodata, &named_db(), HEADER), Classification::Reject);
    }

    #[test]
    fn accessor_may_point_into_rodata_but_nowhere_else() {
        let width = PointerWidth::Bits64;
        let mut db = named_db();
        db.add_name(RODATA + 0x40, "parent");

        let mut rodata = table(width, 2);
        rodata.put_word(HEADER, RODATA + 0x40);
        assert_eq!(classify(rodata, &db, HEADER), Classification::Strong);

        let mut rodata = table(width, 2);
        rodata.put_word(HEADER, 0x1234);
        assert_eq!(classify(rodata, &db, HEADER), Classification::Reject);
    }

    #[test]
    fn partially_zero_first_entry_is_rejected() {
        let width = PointerWidth::Bits32;
        let mut entries = sample_entries(2);
        entries[0].message = 0;
        let mut rodata = Rodata::new(width, 0x1000);
        rodata.put_table(HEADER, ACCESSOR, ENTRIES, &entries);
        assert_eq!(classify(rodata, &named_db(), HEADER), Classification::Reject);
    }

    #[test]
    fn chain_with_handler_outside_code_is_rejected() {
        let width = PointerWidth::Bits32;
        let mut entries = sample_entries(4);
        entries[2].handler = RODATA + 0x10;
        let mut rodata = Rodata::new(width, 0x1000);
        rodata.put_table(HEADER, ACCESSOR, ENTRIES, &entries);
        assert_eq!(classify(rodata, &named_db(), HEADER), Classification::Reject);
    }

    #[test]
    fn chain_running_off_the_region_is_rejected() {
        let width = PointerWidth::Bits32;
        let size = entry_size(width);
        // Entries fill the region to its last byte with no terminator.
        let region_len = 0x300 + 3 * size as usize;
        let mut rodata = Rodata::new(width, region_len);
        rodata.put_word(HEADER, ACCESSOR);
        rodata.put_word(HEADER + 4, RODATA + 0x300);
        for (i, entry) in sample_entries(3).iter().enumerate() {
            rodata.put_entry(RODATA + 0x300 + i as u64 * size, entry);
        }
        assert_eq!(classify(rodata, &named_db(), HEADER), Classification::Reject);
    }

    #[test]
    fn zero_words_are_not_a_map() {
        let rodata = Rodata::new(PointerWidth::Bits32, 0x100);
        let mut db = AnnotationDb::new();
        db.add_name(RODATA, "off_404000");
        assert_eq!(classify(rodata, &db, RODATA), Classification::Reject);
    }
}
