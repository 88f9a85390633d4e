//! Bagua Calendar Collaborator
//!
//! Calendrical enumerations consumed by the symbol layer: the ten heavenly
//! stems (天干), the five elements (五行), and two lunar-phase
//! classifications (a coarse eight-octant one and the finer traditional
//! Chinese one). This crate only names the values and validates inbound
//! data; computing a stem or phase from a date belongs to a real calendar,
//! not here.
//!
//! ## Key Concepts
//!
//! - **Tiangan**: the ten stems, ranked 1..=10 on a cycle
//! - **Wuxing**: the five elements
//! - **MoonPhase / ChineseMoonPhase**: the two phase domains; the fine one
//!   folds onto the coarse one via `From`
//! - **CalendarError**: every parse boundary rejects unknown input with an
//!   explicit error, never a silent default

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod moon_phase;
pub mod tiangan;
pub mod wuxing;

// Re-exports for convenience
pub use error::CalendarError;
pub use moon_phase::{ChineseMoonPhase, MoonPhase};
pub use tiangan::Tiangan;
pub use wuxing::Wuxing;
