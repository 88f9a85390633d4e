//! Bagua Domain Layer
//!
//! Symbol tables and relationship rules for the eight trigrams (八卦), the
//! sixty-four hexagrams (卦) and the ten heavenly stems (天干). Everything
//! here is a constant or a pure function over the enumerations supplied by
//! `bagua-calendar`; nothing is constructed or mutated at runtime, so every
//! exposed item is safe to share across threads without coordination.
//!
//! ## Key Concepts
//!
//! - **Trigram / Hexagram**: immutable symbol records; identity is the name
//! - **Arrangements**: the Pre-Heaven (先天) and Post-Heaven (后天) orders of
//!   the eight trigrams, plus the twelve sovereign hexagrams (十二辟卦) and
//!   the full King Wen table
//! - **StemRelations**: the positional relations among the ten stems -
//!   affinity (合化), combining (合) and clashing (沖)
//! - **Phase mapping**: which trigram and sovereign hexagram a lunar phase
//!   points at, absent for the two gibbous octants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hexagram;
pub mod phase;
pub mod relations;
pub mod trigram;

// Re-exports for convenience
pub use hexagram::{Hexagram, HEXAGRAMS, SHIER_PIGUA};
pub use phase::{hexagram_for_phase, trigram_for_phase};
pub use relations::StemRelations;
pub use trigram::{Polarity, Trigram, HOUTIAN_BAGUA, XIANTIAN_BAGUA};
