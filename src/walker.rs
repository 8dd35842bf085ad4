//! Decoding and annotating a recognized message map.

use tracing::{debug, warn};

use crate::database::{is_placeholder, Database, StructKind};
use crate::error::{Error, Result};
use crate::image::{AddressSpace, MemoryImage, PointerWidth};
use crate::layout::{entry_size, header_size, MapEntry, MapHeader};
use crate::messages::message_name;

/// One entry of a decoded map and where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedEntry {
    pub address: u64,
    pub entry: MapEntry,
}

/// A message map decoded from the image, entries in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageMap {
    pub address: u64,
    pub header: MapHeader,
    pub entries: Vec<LocatedEntry>,
    /// Address of the all-zero `AFX_MSG_END` record.
    pub terminator: u64,
    pub width: PointerWidth,
}

impl MessageMap {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Bytes covered by the entries plus the terminator.
    pub fn span(&self) -> u64 {
        self.terminator - self.header.first_entry + entry_size(self.width)
    }
}

/// Walks entry chains and annotates them through a [`Database`].
pub struct Walker<'a> {
    image: &'a dyn MemoryImage,
    space: &'a AddressSpace,
}

impl<'a> Walker<'a> {
    pub fn new(image: &'a dyn MemoryImage, space: &'a AddressSpace) -> Self {
        Self { image, space }
    }

    /// Reads the map at `addr` without touching the database.
    ///
    /// Fails with [`Error::BoundaryOverrun`] if the chain leaves read-only
    /// data before reaching its terminator.
    pub fn decode(&self, addr: u64) -> Result<MessageMap> {
        let header = MapHeader::read(self.image, addr).ok_or(Error::NotAMessageMap(addr))?;
        let size = entry_size(self.space.width);

        let mut entries = Vec::new();
        let mut cursor = header.first_entry;
        loop {
            if !self.space.rodata.contains_span(cursor, size) {
                return Err(Error::BoundaryOverrun { addr: cursor });
            }
            let entry =
                MapEntry::read(self.image, cursor).ok_or(Error::BoundaryOverrun { addr: cursor })?;
            if entry.is_terminator() {
                break;
            }
            entries.push(LocatedEntry {
                address: cursor,
                entry,
            });
            cursor += size;
        }

        Ok(MessageMap {
            address: addr,
            header,
            entries,
            terminator: cursor,
            width: self.space.width,
        })
    }

    /// Decodes the map at `addr` and records its annotations.
    ///
    /// A failed annotation skips the rest of that entry's annotations and
    /// the walk goes on. Nothing is written if decoding fails.
    pub fn materialize(&self, db: &mut dyn Database, addr: u64) -> Result<MessageMap> {
        let map = self.decode(addr)?;
        let width = map.width;
        let size = entry_size(width);

        db.record_offset(addr, width, map.header.get_map_fn);
        db.record_offset(addr + width.bytes(), width, map.header.first_entry);
        if let Err(err) = db.type_as_struct(addr, StructKind::MsgMap, header_size(width)) {
            warn!("{err}");
        }

        if needs_name(db, addr) {
            if let Err(err) = db.rename(addr, &format!("msgEntries_{addr:X}")) {
                warn!("{err}");
            }
        }

        for located in &map.entries {
            if let Err(err) = annotate_entry(db, located, size) {
                warn!("Create AFX_MSGMAP_ENTRY failed at 0x{:X}: {err}", located.address);
            }
        }

        if let Err(err) = db.type_as_struct(map.terminator, StructKind::MsgMapEntry, size) {
            warn!("{err}");
        }

        debug!(
            "materialized map at 0x{addr:X}: {} entries, terminator 0x{:X}",
            map.entry_count(),
            map.terminator
        );
        Ok(map)
    }
}

fn needs_name(db: &dyn Database, addr: u64) -> bool {
    db.name_of(addr).map_or(true, |name| is_placeholder(name, addr))
}

fn annotate_entry(db: &mut dyn Database, located: &LocatedEntry, size: u64) -> Result<()> {
    let entry = &located.entry;
    db.type_as_struct(located.address, StructKind::MsgMapEntry, size)?;

    let name = message_name(entry.message);
    let func = db.ensure_function(entry.handler)?;
    db.set_function_comment(func, &handler_comment(&name, entry))?;

    if needs_name(db, entry.handler) {
        db.rename(entry.handler, &handler_name(&name, entry))?;
    }
    Ok(())
}

/// Function comment describing what dispatches to a handler.
pub fn handler_comment(name: &str, entry: &MapEntry) -> String {
    let ids = if entry.id_low == entry.id_high {
        entry.id_low.to_string()
    } else {
        format!("{} to {}", entry.id_low, entry.id_high)
    };
    format!(
        "MSG function: {name}\n    nMessage: 0x{:X}\n       nCode: {}\n         nID: {ids}",
        entry.message, entry.notify_code
    )
}

/// Descriptive symbol for a handler, e.g. `On_WM_COMMAND_401A30_1001`.
pub fn handler_name(name: &str, entry: &MapEntry) -> String {
    let func = entry.handler;
    match (entry.id_low, entry.id_high) {
        (0, 0) => format!("On_{name}_{func:X}"),
        (lo, hi) if lo == hi => format!("On_{name}_{func:X}_{lo}"),
        (lo, hi) => format!("On_{name}_{func:X}_{lo}_to_{hi}"),
    }
}
