//! Tiangan module - the ten heavenly stems (天干)

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A heavenly stem (天干), one of the ten cyclic labels of the sexagenary
/// calendar
///
/// Variants are in canonical order. Each stem has a 1-based rank on the
/// cycle; the rank wraps at 10 and drives the positional pairing relations
/// defined by downstream layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tiangan {
    /// 甲, rank 1
    Jia = 1,

    /// 乙, rank 2
    Yi,

    /// 丙, rank 3
    Bing,

    /// 丁, rank 4
    Ding,

    /// 戊, rank 5
    Wu,

    /// 己, rank 6
    Ji,

    /// 庚, rank 7
    Geng,

    /// 辛, rank 8
    Xin,

    /// 壬, rank 9
    Ren,

    /// 癸, rank 10
    Gui,
}

impl Tiangan {
    /// All ten stems in canonical cycle order
    pub const ALL: [Tiangan; 10] = [
        Tiangan::Jia,
        Tiangan::Yi,
        Tiangan::Bing,
        Tiangan::Ding,
        Tiangan::Wu,
        Tiangan::Ji,
        Tiangan::Geng,
        Tiangan::Xin,
        Tiangan::Ren,
        Tiangan::Gui,
    ];

    /// Get the stem's 1-based position on the cycle
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Get the stem at a given rank (inverse of [`rank`](Self::rank))
    ///
    /// # Errors
    /// Returns [`CalendarError::RankOutOfRange`] for ranks outside 1..=10
    pub fn from_rank(rank: u8) -> Result<Self, CalendarError> {
        match rank {
            1..=10 => Ok(Self::ALL[(rank - 1) as usize]),
            _ => Err(CalendarError::RankOutOfRange(rank)),
        }
    }

    /// Get the stem's glyph
    pub fn glyph(self) -> char {
        match self {
            Tiangan::Jia => '甲',
            Tiangan::Yi => '乙',
            Tiangan::Bing => '丙',
            Tiangan::Ding => '丁',
            Tiangan::Wu => '戊',
            Tiangan::Ji => '己',
            Tiangan::Geng => '庚',
            Tiangan::Xin => '辛',
            Tiangan::Ren => '壬',
            Tiangan::Gui => '癸',
        }
    }

    /// Get the stem's pinyin name
    pub fn as_str(self) -> &'static str {
        match self {
            Tiangan::Jia => "jia",
            Tiangan::Yi => "yi",
            Tiangan::Bing => "bing",
            Tiangan::Ding => "ding",
            Tiangan::Wu => "wu",
            Tiangan::Ji => "ji",
            Tiangan::Geng => "geng",
            Tiangan::Xin => "xin",
            Tiangan::Ren => "ren",
            Tiangan::Gui => "gui",
        }
    }

    /// Parse a stem from its pinyin name or glyph (internal use)
    ///
    /// "kui" is accepted as a legacy spelling of 癸.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jia" | "甲" => Some(Tiangan::Jia),
            "yi" | "乙" => Some(Tiangan::Yi),
            "bing" | "丙" => Some(Tiangan::Bing),
            "ding" | "丁" => Some(Tiangan::Ding),
            "wu" | "戊" => Some(Tiangan::Wu),
            "ji" | "己" => Some(Tiangan::Ji),
            "geng" | "庚" => Some(Tiangan::Geng),
            "xin" | "辛" => Some(Tiangan::Xin),
            "ren" | "壬" => Some(Tiangan::Ren),
            "gui" | "kui" | "癸" => Some(Tiangan::Gui),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tiangan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl std::str::FromStr for Tiangan {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CalendarError::UnknownStem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_round_trip() {
        for stem in Tiangan::ALL {
            assert_eq!(Tiangan::from_rank(stem.rank()), Ok(stem));
        }
    }

    #[test]
    fn test_ranks_cover_cycle() {
        let ranks: Vec<u8> = Tiangan::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_from_rank_rejects_out_of_range() {
        assert_eq!(Tiangan::from_rank(0), Err(CalendarError::RankOutOfRange(0)));
        assert_eq!(
            Tiangan::from_rank(11),
            Err(CalendarError::RankOutOfRange(11))
        );
    }

    #[test]
    fn test_parse_name_and_glyph() {
        assert_eq!(Tiangan::parse("jia"), Some(Tiangan::Jia));
        assert_eq!(Tiangan::parse("甲"), Some(Tiangan::Jia));
        assert_eq!(Tiangan::parse("GENG"), Some(Tiangan::Geng));
        assert_eq!(Tiangan::parse("kui"), Some(Tiangan::Gui));
        assert_eq!(Tiangan::parse("zi"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_input() {
        let err = "not-a-stem".parse::<Tiangan>().unwrap_err();
        assert_eq!(err, CalendarError::UnknownStem("not-a-stem".to_string()));
    }

    #[test]
    fn test_display_uses_glyph() {
        assert_eq!(Tiangan::Gui.to_string(), "癸");
    }
}
