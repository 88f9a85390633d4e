//! Moon phase module - the two lunar-phase classifications
//!
//! `MoonPhase` is the coarse eight-octant classification used by most phase
//! sources. `ChineseMoonPhase` is the finer traditional classification; it
//! folds onto the octants via `From`, with both 朔 (first of the month) and
//! 晦 (last of the month) landing on the new-moon octant.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Coarse lunar-phase classification, one value per octant of the lunation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    /// Dark moon, start of the cycle
    New,

    /// Thin waxing sliver
    WaxingCrescent,

    /// Half lit, waxing
    FirstQuarter,

    /// More than half lit, waxing
    WaxingGibbous,

    /// Fully lit
    Full,

    /// More than half lit, waning
    WaningGibbous,

    /// Half lit, waning
    LastQuarter,

    /// Thin waning sliver
    WaningCrescent,
}

impl MoonPhase {
    /// All eight phases in cycle order
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Get the phase's 0-based octant index
    pub fn octant(self) -> u8 {
        self as u8
    }

    /// Get the phase at a given octant index (inverse of
    /// [`octant`](Self::octant))
    ///
    /// # Errors
    /// Returns [`CalendarError::OctantOutOfRange`] for indices outside 0..=7
    pub fn from_octant(octant: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(octant as usize)
            .copied()
            .ok_or(CalendarError::OctantOutOfRange(octant))
    }

    /// Get the phase name
    pub fn as_str(self) -> &'static str {
        match self {
            MoonPhase::New => "new",
            MoonPhase::WaxingCrescent => "waxing-crescent",
            MoonPhase::FirstQuarter => "first-quarter",
            MoonPhase::WaxingGibbous => "waxing-gibbous",
            MoonPhase::Full => "full",
            MoonPhase::WaningGibbous => "waning-gibbous",
            MoonPhase::LastQuarter => "last-quarter",
            MoonPhase::WaningCrescent => "waning-crescent",
        }
    }

    /// Parse a phase from its name (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(MoonPhase::New),
            "waxing-crescent" => Some(MoonPhase::WaxingCrescent),
            "first-quarter" => Some(MoonPhase::FirstQuarter),
            "waxing-gibbous" => Some(MoonPhase::WaxingGibbous),
            "full" => Some(MoonPhase::Full),
            "waning-gibbous" => Some(MoonPhase::WaningGibbous),
            "last-quarter" => Some(MoonPhase::LastQuarter),
            "waning-crescent" => Some(MoonPhase::WaningCrescent),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MoonPhase {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CalendarError::UnknownPhase(s.to_string()))
    }
}

/// Fine lunar-phase classification from the traditional Chinese calendar
///
/// Nine values instead of eight: the new-moon octant splits into 朔 (the
/// first day of the lunar month) and 晦 (the last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseMoonPhase {
    /// 朔, first day of the lunar month
    Shuo,

    /// 蛾眉月, waxing crescent
    Emeiyue,

    /// 上弦月, first quarter
    Shangxianyue,

    /// 漸盈凸月, waxing gibbous
    Jianyingtuyue,

    /// 望, full moon
    Wang,

    /// 漸虧凸月, waning gibbous
    Jiankuituyue,

    /// 下弦月, last quarter
    Xiaxianyue,

    /// 殘月, waning crescent
    Canyue,

    /// 晦, last day of the lunar month
    Hui,
}

impl ChineseMoonPhase {
    /// All nine phases in month order
    pub const ALL: [ChineseMoonPhase; 9] = [
        ChineseMoonPhase::Shuo,
        ChineseMoonPhase::Emeiyue,
        ChineseMoonPhase::Shangxianyue,
        ChineseMoonPhase::Jianyingtuyue,
        ChineseMoonPhase::Wang,
        ChineseMoonPhase::Jiankuituyue,
        ChineseMoonPhase::Xiaxianyue,
        ChineseMoonPhase::Canyue,
        ChineseMoonPhase::Hui,
    ];

    /// Get the phase's Chinese name
    pub fn glyph(self) -> &'static str {
        match self {
            ChineseMoonPhase::Shuo => "朔",
            ChineseMoonPhase::Emeiyue => "蛾眉月",
            ChineseMoonPhase::Shangxianyue => "上弦月",
            ChineseMoonPhase::Jianyingtuyue => "漸盈凸月",
            ChineseMoonPhase::Wang => "望",
            ChineseMoonPhase::Jiankuituyue => "漸虧凸月",
            ChineseMoonPhase::Xiaxianyue => "下弦月",
            ChineseMoonPhase::Canyue => "殘月",
            ChineseMoonPhase::Hui => "晦",
        }
    }

    /// Get the phase's pinyin name
    pub fn as_str(self) -> &'static str {
        match self {
            ChineseMoonPhase::Shuo => "shuo",
            ChineseMoonPhase::Emeiyue => "emeiyue",
            ChineseMoonPhase::Shangxianyue => "shangxianyue",
            ChineseMoonPhase::Jianyingtuyue => "jianyingtuyue",
            ChineseMoonPhase::Wang => "wang",
            ChineseMoonPhase::Jiankuituyue => "jiankuituyue",
            ChineseMoonPhase::Xiaxianyue => "xiaxianyue",
            ChineseMoonPhase::Canyue => "canyue",
            ChineseMoonPhase::Hui => "hui",
        }
    }

    /// Parse a phase from its pinyin or Chinese name (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shuo" | "朔" => Some(ChineseMoonPhase::Shuo),
            "emeiyue" | "蛾眉月" => Some(ChineseMoonPhase::Emeiyue),
            "shangxianyue" | "上弦月" => Some(ChineseMoonPhase::Shangxianyue),
            "jianyingtuyue" | "漸盈凸月" => Some(ChineseMoonPhase::Jianyingtuyue),
            "wang" | "望" => Some(ChineseMoonPhase::Wang),
            "jiankuituyue" | "漸虧凸月" => Some(ChineseMoonPhase::Jiankuituyue),
            "xiaxianyue" | "下弦月" => Some(ChineseMoonPhase::Xiaxianyue),
            "canyue" | "殘月" => Some(ChineseMoonPhase::Canyue),
            "hui" | "晦" => Some(ChineseMoonPhase::Hui),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChineseMoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl std::str::FromStr for ChineseMoonPhase {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CalendarError::UnknownPhase(s.to_string()))
    }
}

impl From<ChineseMoonPhase> for MoonPhase {
    fn from(phase: ChineseMoonPhase) -> Self {
        match phase {
            ChineseMoonPhase::Shuo | ChineseMoonPhase::Hui => MoonPhase::New,
            ChineseMoonPhase::Emeiyue => MoonPhase::WaxingCrescent,
            ChineseMoonPhase::Shangxianyue => MoonPhase::FirstQuarter,
            ChineseMoonPhase::Jianyingtuyue => MoonPhase::WaxingGibbous,
            ChineseMoonPhase::Wang => MoonPhase::Full,
            ChineseMoonPhase::Jiankuituyue => MoonPhase::WaningGibbous,
            ChineseMoonPhase::Xiaxianyue => MoonPhase::LastQuarter,
            ChineseMoonPhase::Canyue => MoonPhase::WaningCrescent,
        }
    }
}
