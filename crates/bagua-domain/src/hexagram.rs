//! Hexagram records: the King Wen table and the sovereign subset

use std::fmt;

use serde::Serialize;

/// One of the 64 hexagrams (卦) of the I Ching
///
/// A hexagram pairs its Unicode symbol with its Chinese name. The 64
/// instances live in [`HEXAGRAMS`]; identity is the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hexagram {
    symbol: char,
    name: &'static str,
}

impl Hexagram {
    const fn new(symbol: char, name: &'static str) -> Self {
        Self { symbol, name }
    }

    /// Get the Unicode symbol, ䷀ through ䷿
    pub const fn symbol(self) -> char {
        self.symbol
    }

    /// Get the Chinese name
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Look a hexagram up by its Chinese name
    pub fn by_name(name: &str) -> Option<Hexagram> {
        HEXAGRAMS.into_iter().find(|h| h.name == name)
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.name)
    }
}

// The twelve sovereign hexagrams (十二辟卦). The cycle array and the King
// Wen table below reuse these same constants.

/// ䷊ 泰
pub const TAI: Hexagram = Hexagram::new('䷊', "泰");

/// ䷡ 大壯
pub const DA_ZHUANG: Hexagram = Hexagram::new('䷡', "大壯");

/// ䷪ 夬
pub const GUAI: Hexagram = Hexagram::new('䷪', "夬");

/// ䷀ 乾
pub const QIAN: Hexagram = Hexagram::new('䷀', "乾");

/// ䷫ 姤
pub const GOU: Hexagram = Hexagram::new('䷫', "姤");

/// ䷠ 遯
pub const DUN: Hexagram = Hexagram::new('䷠', "遯");

/// ䷋ 否
pub const PI: Hexagram = Hexagram::new('䷋', "否");

/// ䷓ 觀
pub const GUAN: Hexagram = Hexagram::new('䷓', "觀");

/// ䷖ 剝
pub const BO: Hexagram = Hexagram::new('䷖', "剝");

/// ䷁ 坤
pub const KUN: Hexagram = Hexagram::new('䷁', "坤");

/// ䷗ 復
pub const FU: Hexagram = Hexagram::new('䷗', "復");

/// ䷒ 臨
pub const LIN: Hexagram = Hexagram::new('䷒', "臨");

/// The twelve sovereign hexagrams (十二辟卦) in the waxing-to-waning cycle
/// starting at 泰
pub const SHIER_PIGUA: [Hexagram; 12] = [
    TAI, DA_ZHUANG, GUAI, QIAN, GOU, DUN, PI, GUAN, BO, KUN, FU, LIN,
];

/// All 64 hexagrams in the traditional King Wen order
pub const HEXAGRAMS: [Hexagram; 64] = [
    QIAN,
    KUN,
    Hexagram::new('䷂', "屯"),
    Hexagram::new('䷃', "蒙"),
    Hexagram::new('䷄', "需"),
    Hexagram::new('䷅', "訟"),
    Hexagram::new('䷆', "師"),
    Hexagram::new('䷇', "比"),
    Hexagram::new('䷈', "小畜"),
    Hexagram::new('䷉', "履"),
    TAI,
    PI,
    Hexagram::new('䷌', "同人"),
    Hexagram::new('䷍', "大有"),
    Hexagram::new('䷎', "謙"),
    Hexagram::new('䷏', "豫"),
    Hexagram::new('䷐', "隨"),
    Hexagram::new('䷑', "蠱"),
    LIN,
    GUAN,
    Hexagram::new('䷔', "噬嗑"),
    Hexagram::new('䷕', "賁"),
    BO,
    FU,
    Hexagram::new('䷘', "無妄"),
    Hexagram::new('䷙', "大畜"),
    Hexagram::new('䷚', "頤"),
    Hexagram::new('䷛', "大過"),
    Hexagram::new('䷜', "坎"),
    Hexagram::new('䷝', "離"),
    Hexagram::new('䷞', "咸"),
    Hexagram::new('䷟', "恆"),
    DUN,
    DA_ZHUANG,
    Hexagram::new('䷢', "晉"),
    Hexagram::new('䷣', "明夷"),
    Hexagram::new('䷤', "家人"),
    Hexagram::new('䷥', "睽"),
    Hexagram::new('䷦', "蹇"),
    Hexagram::new('䷧', "解"),
    Hexagram::new('䷨', "損"),
    Hexagram::new('䷩', "益"),
    GUAI,
    GOU,
    Hexagram::new('䷬', "萃"),
    Hexagram::new('䷭', "升"),
    Hexagram::new('䷮', "困"),
    Hexagram::new('䷯', "井"),
    Hexagram::new('䷰', "革"),
    Hexagram::new('䷱', "鼎"),
    Hexagram::new('䷲', "震"),
    Hexagram::new('䷳', "艮"),
    Hexagram::new('䷴', "漸"),
    Hexagram::new('䷵', "歸妹"),
    Hexagram::new('䷶', "豐"),
    Hexagram::new('䷷', "旅"),
    Hexagram::new('䷸', "巽"),
    Hexagram::new('䷹', "兌"),
    Hexagram::new('䷺', "渙"),
    Hexagram::new('䷻', "節"),
    Hexagram::new('䷼', "中孚"),
    Hexagram::new('䷽', "小過"),
    Hexagram::new('䷾', "既濟"),
    Hexagram::new('䷿', "未濟"),
];
