//! Phase-to-symbol mapper
//!
//! Two independent lookups from a lunar phase to a trigram and to a
//! sovereign hexagram. Both leave the two gibbous octants without a symbol;
//! both accept any phase domain that folds into the eight octants, so the
//! finer [`ChineseMoonPhase`](bagua_calendar::ChineseMoonPhase) dispatches
//! through its `From` conversion and an external phase source participates
//! by providing one.

use bagua_calendar::MoonPhase;

use crate::hexagram::{self, Hexagram};
use crate::trigram::{self, Trigram};

/// Get the trigram associated with a lunar phase, if any
pub fn trigram_for_phase(phase: impl Into<MoonPhase>) -> Option<Trigram> {
    match phase.into() {
        MoonPhase::New => Some(trigram::KUN),
        MoonPhase::WaxingCrescent => Some(trigram::ZHEN),
        MoonPhase::FirstQuarter => Some(trigram::DUI),
        MoonPhase::WaxingGibbous => None,
        MoonPhase::Full => Some(trigram::QIAN),
        MoonPhase::WaningGibbous => None,
        MoonPhase::LastQuarter => Some(trigram::XUN),
        MoonPhase::WaningCrescent => Some(trigram::GEN),
    }
}

/// Get the sovereign hexagram associated with a lunar phase, if any
///
/// Absent for exactly the phases [`trigram_for_phase`] leaves absent.
pub fn hexagram_for_phase(phase: impl Into<MoonPhase>) -> Option<Hexagram> {
    match phase.into() {
        MoonPhase::New => Some(hexagram::KUN),
        MoonPhase::WaxingCrescent => Some(hexagram::LIN),
        MoonPhase::FirstQuarter => Some(hexagram::DA_ZHUANG),
        MoonPhase::WaxingGibbous => None,
        MoonPhase::Full => Some(hexagram::QIAN),
        MoonPhase::WaningGibbous => None,
        MoonPhase::LastQuarter => Some(hexagram::DUN),
        MoonPhase::WaningCrescent => Some(hexagram::GUAN),
    }
}
