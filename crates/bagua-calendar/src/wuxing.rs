//! Wuxing module - the five elements (五行)

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// One of the five elements (五行), in generating-cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wuxing {
    /// 木, wood
    Mu,

    /// 火, fire
    Huo,

    /// 土, earth
    Tu,

    /// 金, metal
    Jin,

    /// 水, water
    Shui,
}

impl Wuxing {
    /// All five elements in generating-cycle order
    pub const ALL: [Wuxing; 5] = [
        Wuxing::Mu,
        Wuxing::Huo,
        Wuxing::Tu,
        Wuxing::Jin,
        Wuxing::Shui,
    ];

    /// Get the element's glyph
    pub fn glyph(self) -> char {
        match self {
            Wuxing::Mu => '木',
            Wuxing::Huo => '火',
            Wuxing::Tu => '土',
            Wuxing::Jin => '金',
            Wuxing::Shui => '水',
        }
    }

    /// Get the element's pinyin name
    pub fn as_str(self) -> &'static str {
        match self {
            Wuxing::Mu => "mu",
            Wuxing::Huo => "huo",
            Wuxing::Tu => "tu",
            Wuxing::Jin => "jin",
            Wuxing::Shui => "shui",
        }
    }

    /// Parse an element from its pinyin name or glyph (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mu" | "木" => Some(Wuxing::Mu),
            "huo" | "火" => Some(Wuxing::Huo),
            "tu" | "土" => Some(Wuxing::Tu),
            "jin" | "金" => Some(Wuxing::Jin),
            "shui" | "水" => Some(Wuxing::Shui),
            _ => None,
        }
    }
}

impl std::fmt::Display for Wuxing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl std::str::FromStr for Wuxing {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CalendarError::UnknownElement(s.to_string()))
    }
}
