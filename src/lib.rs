//! MFC message-map finder library.
//!
//! This library locates `AFX_MSGMAP` tables in the read-only data of a Windows
//! binary without symbols, decodes their entries, and derives names for the
//! message handlers they point to.

pub mod binary;
pub mod database;
pub mod error;
pub mod finder;
pub mod image;
pub mod layout;
pub mod messages;
pub mod recognizer;
pub mod scanner;
pub mod validator;
pub mod walker;

#[cfg(test)]
mod testutil;

pub use database::{AnnotationDb, Database};
pub use error::{Error, Result};
pub use finder::Finder;
pub use image::{AddressRange, AddressSpace, FlatImage, MemoryImage, PointerWidth, RegionKind};
pub use recognizer::Classification;
pub use scanner::{FoundMap, RegionScanner, ScanObserver, ScanReport};
pub use walker::MessageMap;
