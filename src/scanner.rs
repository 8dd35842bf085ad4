//! Sweep of the read-only data region for message maps.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::database::{is_placeholder, Database};
use crate::error::Result;
use crate::image::{AddressSpace, MemoryImage};
use crate::layout::header_size;
use crate::recognizer::{Classification, Recognizer};
use crate::walker::Walker;

/// Hooks for reporting progress and requesting cancellation.
///
/// `is_cancelled` is polled once per header candidate.
pub trait ScanObserver {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn progress(&self, _message: &str) {}
}

/// Observer that never cancels and reports nothing.
pub struct NoProgress;

impl ScanObserver for NoProgress {}

impl ScanObserver for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// A message map found by the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundMap {
    pub index: usize,
    pub address: u64,
    /// Name of the header after annotation.
    pub name: String,
    pub entry_count: usize,
    pub confidence: Classification,
}

/// Outcome of a full region scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Maps in ascending address order.
    pub maps: Vec<FoundMap>,
    /// Maps whose header had no name, or only a placeholder, before the scan.
    pub newly_resolved: usize,
    pub cancelled: bool,
}

impl ScanReport {
    pub fn total(&self) -> usize {
        self.maps.len()
    }
}

/// Drives recognition across every pointer-aligned candidate in read-only data.
pub struct RegionScanner<'a> {
    image: &'a dyn MemoryImage,
    space: AddressSpace,
}

impl<'a> RegionScanner<'a> {
    /// Fails if the image lacks a code or read-only data region.
    pub fn new(image: &'a dyn MemoryImage) -> Result<Self> {
        let space = AddressSpace::resolve(image)?;
        Ok(Self { image, space })
    }

    pub fn space(&self) -> &AddressSpace {
        &self.space
    }

    pub fn scan_all(&self, db: &mut dyn Database, observer: &dyn ScanObserver) -> ScanReport {
        let recognizer = Recognizer::new(self.image, &self.space);
        let walker = Walker::new(self.image, &self.space);
        let step = self.space.width.bytes();
        let rodata = self.space.rodata;

        info!("Search for AFX_MSGMAP in {rodata}");

        let mut report = ScanReport::default();
        let mut addr = rodata.start;

        while rodata.contains_span(addr, header_size(self.space.width)) {
            if observer.is_cancelled() {
                info!("scan cancelled at 0x{addr:X}");
                report.cancelled = true;
                break;
            }

            let confidence = recognizer.classify(db, addr);
            if !confidence.is_match() {
                addr += step;
                continue;
            }

            let unresolved = db.name_of(addr).map_or(true, |name| is_placeholder(name, addr));
            let map = match walker.materialize(db, addr) {
                Ok(map) => map,
                Err(err) => {
                    debug!("candidate at 0x{addr:X} dropped: {err}");
                    addr += step;
                    continue;
                }
            };

            let message = format!("Find AFX_MSGMAP at 0x{addr:X}");
            info!("{message}");
            observer.progress(&message);

            if unresolved {
                report.newly_resolved += 1;
            }
            report.maps.push(FoundMap {
                index: report.maps.len(),
                address: addr,
                name: db.name_of(addr).unwrap_or_default().to_string(),
                entry_count: map.entry_count(),
                confidence,
            });

            addr += map.span() + step;
        }

        info!(
            "Search complete, total {}, new resolution {}",
            report.total(),
            report.newly_resolved
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::AnnotationDb;
    use crate::image::PointerWidth;
    use crate::layout::entry_size;
    use crate::testutil::{sample_entries, Layout, Rodata, CODE, RODATA};
    use std::cell::Cell;

    /// Two tables separated by a run of zero bytes, laid out the way MSVC
    /// emits them: entries first, header right after.
    fn two_tables(width: PointerWidth) -> (Rodata, u64, u64) {
        let size = entry_size(width);
        let mut rodata = Rodata::new(width, 0x800);

        let entries_a = RODATA + 0x40;
        let header_a = entries_a + 3 * size + size;
        rodata.put_table(header_a, CODE + 0x900, entries_a, &sample_entries(3));

        // 64 zero bytes of noise follow header A.
        let entries_b = header_a + 2 * width.bytes() + 64;
        let header_b = entries_b + 2 * size + size;
        rodata.put_table(header_b, CODE + 0x940, entries_b, &sample_entries(2));

        (rodata, header_a, header_b)
    }

    #[test]
    fn finds_both_tables_in_order() {
        for width in [PointerWidth::Bits32, PointerWidth::Bits64] {
            let (rodata, header_a, header_b) = two_tables(width);
            let image = rodata.into_image();
            let mut db = AnnotationDb::new();
            db.seed_placeholders(&image);

            let scanner = RegionScanner::new(&image).unwrap();
            let report = scanner.scan_all(&mut db, &NoProgress);

            let found: Vec<(u64, usize)> =
                report.maps.iter().map(|m| (m.address, m.entry_count)).collect();
            assert_eq!(found, vec![(header_a, 3), (header_b, 2)], "{width:?}");
            assert_eq!(report.newly_resolved, 2);
            assert_eq!(report.maps[1].index, 1);
            assert_eq!(report.maps[0].name, format!("msgEntries_{header_a:X}"));
            assert!(!report.cancelled);
        }
    }

    #[test]
    fn weak_matches_are_reported_and_skipped_over() {
        for width in [PointerWidth::Bits32, PointerWidth::Bits64] {
            let (rodata, header_a, header_b) = two_tables(width);
            let image = rodata.into_image();
            let mut db = AnnotationDb::new();
            // Only the accessors carry names; the headers stay unnamed.
            db.add_name(CODE + 0x900, "sub_401900");
            db.add_name(CODE + 0x940, "sub_401940");

            let report = RegionScanner::new(&image).unwrap().scan_all(&mut db, &NoProgress);

            let found: Vec<(u64, usize, Classification)> = report
                .maps
                .iter()
                .map(|m| (m.address, m.entry_count, m.confidence))
                .collect();
            assert_eq!(
                found,
                vec![
                    (header_a, 3, Classification::Weak),
                    (header_b, 2, Classification::Weak)
                ],
                "{width:?}"
            );
            assert_eq!(report.newly_resolved, 2);
            assert_eq!(report.maps[0].name, format!("msgEntries_{header_a:X}"));

            let handler = sample_entries(1)[0].handler;
            assert_eq!(db.name_of(handler), Some(format!("On_WM_COMMAND_{handler:X}_1000").as_str()));
        }
    }

    #[test]
    fn zero_region_yields_nothing() {
        let image = Layout::new(PointerWidth::Bits32).image(vec![0; 0x100]);
        let mut db = AnnotationDb::new();
        db.add_name(RODATA, "named_zero");
        let report = RegionScanner::new(&image).unwrap().scan_all(&mut db, &NoProgress);
        assert_eq!(report, ScanReport::default());
    }

    #[test]
    fn missing_rodata_fails_fast() {
        let image = crate::image::FlatImage::new(PointerWidth::Bits32).with_region(
            crate::image::RegionKind::Code,
            CODE,
            vec![0; 16],
        );
        assert!(RegionScanner::new(&image).is_err());
    }

    #[test]
    fn cancellation_stops_between_candidates() {
        struct CancelAfterFirst {
            found: Cell<usize>,
        }
        impl ScanObserver for CancelAfterFirst {
            fn is_cancelled(&self) -> bool {
                self.found.get() > 0
            }
            fn progress(&self, _message: &str) {
                self.found.set(self.found.get() + 1);
            }
        }

        let (rodata, header_a, _) = two_tables(PointerWidth::Bits32);
        let image = rodata.into_image();
        let mut db = AnnotationDb::new();
        db.seed_placeholders(&image);

        let observer = CancelAfterFirst { found: Cell::new(0) };
        let report = RegionScanner::new(&image).unwrap().scan_all(&mut db, &observer);
        assert!(report.cancelled);
        assert_eq!(report.maps.len(), 1);
        assert_eq!(report.maps[0].address, header_a);
    }

    #[test]
    fn atomic_flag_cancels_immediately() {
        let (rodata, _, _) = two_tables(PointerWidth::Bits64);
        let image = rodata.into_image();
        let mut db = AnnotationDb::new();
        let flag = AtomicBool::new(true);
        let report = RegionScanner::new(&image).unwrap().scan_all(&mut db, &flag);
        assert!(report.cancelled);
        assert!(report.maps.is_empty());
    }
}
