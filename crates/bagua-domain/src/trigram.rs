//! Trigram records and the two canonical arrangements

use std::fmt;

use serde::Serialize;

/// Yang/yin classification of a trigram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    /// Active principle: 乾, 巽, 震, 離
    Yang,

    /// Passive principle: 坤, 艮, 坎, 兌
    Yin,
}

/// One of the eight trigrams (八卦)
///
/// A trigram pairs its Unicode symbol with its Chinese name and the natural
/// image (象) it stands for. The eight instances are fixed constants in this
/// module; identity is the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Trigram {
    symbol: char,
    name: &'static str,
    image: &'static str,
}

impl Trigram {
    const fn new(symbol: char, name: &'static str, image: &'static str) -> Self {
        Self {
            symbol,
            name,
            image,
        }
    }

    /// Get the Unicode symbol, ☰ through ☷
    pub const fn symbol(self) -> char {
        self.symbol
    }

    /// Get the Chinese name
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Get the natural image (象) the trigram stands for
    pub const fn image(self) -> &'static str {
        self.image
    }

    /// Get the yang/yin classification
    ///
    /// The four yang trigrams are 乾, 巽, 震 and 離; the other four are yin.
    pub fn polarity(self) -> Polarity {
        match self.name {
            "乾" | "巽" | "震" | "離" => Polarity::Yang,
            _ => Polarity::Yin,
        }
    }

    /// Check whether this is one of the four yang trigrams
    pub fn is_yang(self) -> bool {
        self.polarity() == Polarity::Yang
    }

    /// Check whether this is one of the four yin trigrams
    pub fn is_yin(self) -> bool {
        self.polarity() == Polarity::Yin
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.symbol, self.name, self.image)
    }
}

/// ☰ 乾, heaven
pub const QIAN: Trigram = Trigram::new('☰', "乾", "天");

/// ☴ 巽, wind
pub const XUN: Trigram = Trigram::new('☴', "巽", "风");

/// ☵ 坎, water
pub const KAN: Trigram = Trigram::new('☵', "坎", "水");

/// ☶ 艮, mountain
pub const GEN: Trigram = Trigram::new('☶', "艮", "山");

/// ☷ 坤, earth
pub const KUN: Trigram = Trigram::new('☷', "坤", "地");

/// ☳ 震, thunder
pub const ZHEN: Trigram = Trigram::new('☳', "震", "雷");

/// ☲ 離, fire
pub const LI: Trigram = Trigram::new('☲', "離", "火");

/// ☱ 兌, lake
pub const DUI: Trigram = Trigram::new('☱', "兌", "澤");

/// The Pre-Heaven (先天) arrangement, the primordial order used in Taoist
/// cosmology
pub const XIANTIAN_BAGUA: [Trigram; 8] = [QIAN, XUN, KAN, GEN, KUN, ZHEN, LI, DUI];

/// The Post-Heaven (后天) arrangement, the applied order used in human
/// affairs
pub const HOUTIAN_BAGUA: [Trigram; 8] = [LI, KUN, DUI, QIAN, KAN, GEN, ZHEN, XUN];
