//! Leaf plausibility check for a single `AFX_MSGMAP_ENTRY`.

use crate::image::{AddressSpace, MemoryImage, RegionKind};
use crate::layout::MapEntry;

/// Control and resource ids are 16-bit.
pub const MAX_CONTROL_ID: u32 = 0xFFFF;

/// Signatures at or below this value are point/size discriminators rather
/// than pointers into writable data.
pub const SMALL_SIGNATURE_MAX: u64 = 100;

/// Whether the record at `addr` could be a message-map entry.
///
/// Looks at this record only: neither the handler pointer nor the
/// following records are checked.
pub fn is_plausible_entry(image: &dyn MemoryImage, space: &AddressSpace, addr: u64) -> bool {
    if addr == space.width.bad_address() {
        return false;
    }
    match MapEntry::read(image, addr) {
        Some(entry) => is_plausible(space, &entry),
        None => false,
    }
}

/// Field checks shared with the chain walk, for an already decoded record.
pub(crate) fn is_plausible(space: &AddressSpace, entry: &MapEntry) -> bool {
    if entry.id_low > MAX_CONTROL_ID || entry.id_high > MAX_CONTROL_ID {
        return false;
    }
    entry.signature <= SMALL_SIGNATURE_MAX || space.contains(RegionKind::Data, entry.signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PointerWidth;
    use crate::testutil::{entry_bytes, Layout, CODE, DATA, RODATA};

    fn image_with(entry: MapEntry) -> (crate::image::FlatImage, AddressSpace) {
        let layout = Layout::new(PointerWidth::Bits32);
        let image = layout.image(entry_bytes(PointerWidth::Bits32, &entry));
        let space = AddressSpace::resolve(&image).unwrap();
        (image, space)
    }

    fn entry() -> MapEntry {
        MapEntry {
            message: 0x111,
            notify_code: 0,
            id_low: 1,
            id_high: 1,
            signature: 12,
            handler: CODE + 0x10,
        }
    }

    #[test]
    fn accepts_ordinary_entry() {
        let (image, space) = image_with(entry());
        assert!(is_plausible_entry(&image, &space, RODATA));
    }

    #[test]
    fn rejects_wide_ids() {
        for (lo, hi) in [(0x10000, 1), (1, 0x10000), (u32::MAX, u32::MAX)] {
            let (image, space) = image_with(MapEntry {
                id_low: lo,
                id_high: hi,
                ..entry()
            });
            assert!(!is_plausible_entry(&image, &space, RODATA), "{lo:#x} {hi:#x}");
        }

        let (image, space) = image_with(MapEntry {
            id_low: 0xFFFF,
            id_high: 0xFFFF,
            ..entry()
        });
        assert!(is_plausible_entry(&image, &space, RODATA));
    }

    #[test]
    fn large_signature_must_point_into_data() {
        let (image, space) = image_with(MapEntry {
            signature: DATA + 0x20,
            ..entry()
        });
        assert!(is_plausible_entry(&image, &space, RODATA));

        let (image, space) = image_with(MapEntry {
            signature: RODATA,
            ..entry()
        });
        assert!(!is_plausible_entry(&image, &space, RODATA));

        let (image, space) = image_with(MapEntry {
            signature: SMALL_SIGNATURE_MAX,
            ..entry()
        });
        assert!(is_plausible_entry(&image, &space, RODATA));
    }

    #[test]
    fn rejects_sentinel_and_unmapped_addresses() {
        let (image, space) = image_with(entry());
        assert!(!is_plausible_entry(&image, &space, u32::MAX as u64));
        assert!(!is_plausible_entry(&image, &space, 0));
        assert!(!is_plausible_entry(&image, &space, CODE - 0x100));
    }
}
