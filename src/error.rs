//! Error types for msgmap-scanner.

use thiserror::Error;

use crate::image::RegionKind;

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while recognizing or annotating message maps.
///
/// A rejected candidate is not an error; it is [`Classification::Reject`].
///
/// [`Classification::Reject`]: crate::recognizer::Classification::Reject
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} region not found or empty")]
    DegenerateRegion(RegionKind),

    #[error("entry chain leaves the read-only data region at 0x{addr:X}")]
    BoundaryOverrun { addr: u64 },

    #[error("annotation failed at 0x{addr:X}: {reason}")]
    Annotation { addr: u64, reason: String },

    #[error("0x{0:X} is not a message map")]
    NotAMessageMap(u64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn annotation(addr: u64, reason: impl Into<String>) -> Self {
        Self::Annotation {
            addr,
            reason: reason.into(),
        }
    }
}
