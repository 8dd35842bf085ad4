//! Message-map finder for PE images.

use std::fs::File;
use std::io::BufRead;

use anyhow::Result as AnyResult;
use memmap2::Mmap;
use tracing::{debug, info};

use crate::binary::PeImage;
use crate::database::AnnotationDb;
use crate::error::{Error, Result};
use crate::image::{AddressSpace, MemoryImage};
use crate::recognizer::{Classification, Recognizer};
use crate::scanner::{RegionScanner, ScanObserver, ScanReport};
use crate::walker::{MessageMap, Walker};

/// Finds and annotates message maps in one image, collecting the
/// annotations in an [`AnnotationDb`].
pub struct Finder<I = PeImage<Mmap>> {
    image: I,
    db: AnnotationDb,
}

impl Finder<PeImage<Mmap>> {
    /// Creates a finder for the given PE file, seeding the database with
    /// the file's own symbol names.
    pub fn new(file: File) -> AnyResult<Self> {
        let image = PeImage::open(file)?;
        let mut db = AnnotationDb::new();
        for (addr, name) in image.symbols() {
            db.add_name(*addr, name.clone());
        }
        debug!("{} symbols from the image", image.symbols().len());

        Ok(Self { image, db })
    }
}

impl<I: MemoryImage> Finder<I> {
    pub fn with_database(image: I, db: AnnotationDb) -> Self {
        Self { image, db }
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn database(&self) -> &AnnotationDb {
        &self.db
    }

    /// Adds the placeholder names auto-analysis would have produced.
    pub fn seed_placeholders(&mut self) -> usize {
        self.db.seed_placeholders(&self.image)
    }

    /// Loads an `ADDRESS NAME` list into the database.
    pub fn import_names(&mut self, reader: impl BufRead) -> AnyResult<usize> {
        let count = self.db.import_names(reader)?;
        info!("Imported {count} names");
        Ok(count)
    }

    /// Scans all of read-only data.
    pub fn scan(&mut self, observer: &dyn ScanObserver) -> Result<ScanReport> {
        let scanner = RegionScanner::new(&self.image)?;
        Ok(scanner.scan_all(&mut self.db, observer))
    }

    /// Classifies the header at `addr` and, if it is a message map,
    /// annotates it.
    ///
    /// A header whose entry chain leaves read-only data is rejected like any
    /// other non-map, leaving the database untouched.
    pub fn make(&mut self, addr: u64) -> Result<(Classification, MessageMap)> {
        let space = AddressSpace::resolve(&self.image)?;

        let confidence = Recognizer::new(&self.image, &space).classify(&self.db, addr);
        if !confidence.is_match() {
            return Err(Error::NotAMessageMap(addr));
        }

        let map = match Walker::new(&self.image, &space).materialize(&mut self.db, addr) {
            Err(Error::BoundaryOverrun { addr: end }) => {
                debug!("chain of 0x{addr:X} runs past read-only data at 0x{end:X}");
                return Err(Error::NotAMessageMap(addr));
            }
            other => other?,
        };
        Ok((confidence, map))
    }
}
