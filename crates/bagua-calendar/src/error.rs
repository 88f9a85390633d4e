//! Calendar error types

use thiserror::Error;

/// Errors raised when inbound data falls outside the calendrical domain
///
/// Every variant carries the rejected value so the caller can report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Input does not name a heavenly stem
    #[error("unknown heavenly stem: {0:?}")]
    UnknownStem(String),

    /// Stem rank outside the 1..=10 cycle
    #[error("stem rank {0} out of range (expected 1..=10)")]
    RankOutOfRange(u8),

    /// Input does not name one of the five elements
    #[error("unknown element: {0:?}")]
    UnknownElement(String),

    /// Input does not name a recognized lunar phase
    #[error("unknown lunar phase: {0:?}")]
    UnknownPhase(String),

    /// Octant index outside 0..=7
    #[error("octant {0} out of range (expected 0..=7)")]
    OctantOutOfRange(u8),
}
