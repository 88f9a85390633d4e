//! Stem relationship engine - 合化 affinity, 合 combining, 沖 clashing
//!
//! The ten stems sit on a cycle of ranks 1..=10 and both pairing relations
//! are positional, not semantic. Combining joins ranks five apart; clashing
//! joins ranks six apart, which leaves the two earth stems (ranks 5 and 6)
//! without a clash partner.

use bagua_calendar::{Tiangan, Wuxing};

/// Relational facts about a heavenly stem
///
/// Implemented for [`Tiangan`]: the calendar layer names the stems, this
/// trait knows how they relate.
pub trait StemRelations {
    /// Get the 合化 element, the element the stem's combining pair
    /// transforms into
    ///
    /// A fixed lookup. Each element covers exactly two stems, and a stem
    /// always shares its affinity with its combining partner.
    fn affinity(self) -> Wuxing;

    /// Get the 合 partner
    ///
    /// Every stem has exactly one, never itself, and the relation is an
    /// involution: the partner's partner is the original stem.
    fn combining_partner(self) -> Tiangan;

    /// Get the 沖 partner, or `None` for the two earth stems 戊 and 己
    fn clashing_partner(self) -> Option<Tiangan>;
}

impl StemRelations for Tiangan {
    // 甲己合化土, 乙庚合化金, 丙辛合化水, 丁壬合化木, 戊癸合化火
    fn affinity(self) -> Wuxing {
        match self {
            Tiangan::Jia | Tiangan::Ji => Wuxing::Tu,
            Tiangan::Yi | Tiangan::Geng => Wuxing::Jin,
            Tiangan::Bing | Tiangan::Xin => Wuxing::Shui,
            Tiangan::Ding | Tiangan::Ren => Wuxing::Mu,
            Tiangan::Wu | Tiangan::Gui => Wuxing::Huo,
        }
    }

    fn combining_partner(self) -> Tiangan {
        let rank = self.rank();
        let partner = if rank <= 5 { rank + 5 } else { rank - 5 };
        Tiangan::ALL[(partner - 1) as usize]
    }

    fn clashing_partner(self) -> Option<Tiangan> {
        let partner = match self.rank() {
            rank @ 1..=4 => rank + 6,
            rank @ 7..=10 => rank - 6,
            _ => return None,
        };
        Some(Tiangan::ALL[(partner - 1) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example_jia() {
        assert_eq!(Tiangan::Jia.affinity(), Wuxing::Tu);
        assert_eq!(Tiangan::Jia.combining_partner(), Tiangan::Ji);
        assert_eq!(Tiangan::Jia.clashing_partner(), Some(Tiangan::Geng));
    }

    #[test]
    fn test_affinity_table() {
        let pairs = [
            (Tiangan::Jia, Wuxing::Tu),
            (Tiangan::Yi, Wuxing::Jin),
            (Tiangan::Bing, Wuxing::Shui),
            (Tiangan::Ding, Wuxing::Mu),
            (Tiangan::Wu, Wuxing::Huo),
            (Tiangan::Ji, Wuxing::Tu),
            (Tiangan::Geng, Wuxing::Jin),
            (Tiangan::Xin, Wuxing::Shui),
            (Tiangan::Ren, Wuxing::Mu),
            (Tiangan::Gui, Wuxing::Huo),
        ];
        for (stem, element) in pairs {
            assert_eq!(stem.affinity(), element, "{stem}");
        }
    }

    #[test]
    fn test_affinity_partitions_into_five_pairs() {
        for element in Wuxing::ALL {
            let covered = Tiangan::ALL
                .iter()
                .filter(|s| s.affinity() == element)
                .count();
            assert_eq!(covered, 2, "{element}");
        }
    }

    #[test]
    fn test_combining_pairs() {
        let pairs = [
            (Tiangan::Jia, Tiangan::Ji),
            (Tiangan::Yi, Tiangan::Geng),
            (Tiangan::Bing, Tiangan::Xin),
            (Tiangan::Ding, Tiangan::Ren),
            (Tiangan::Wu, Tiangan::Gui),
        ];
        for (a, b) in pairs {
            assert_eq!(a.combining_partner(), b);
            assert_eq!(b.combining_partner(), a);
        }
    }

    #[test]
    fn test_combining_has_no_fixed_points() {
        for stem in Tiangan::ALL {
            assert_ne!(stem.combining_partner(), stem);
        }
    }

    #[test]
    fn test_combining_partners_share_affinity() {
        for stem in Tiangan::ALL {
            assert_eq!(stem.affinity(), stem.combining_partner().affinity());
        }
    }

    #[test]
    fn test_clashing_pairs() {
        let pairs = [
            (Tiangan::Jia, Tiangan::Geng),
            (Tiangan::Yi, Tiangan::Xin),
            (Tiangan::Bing, Tiangan::Ren),
            (Tiangan::Ding, Tiangan::Gui),
        ];
        for (a, b) in pairs {
            assert_eq!(a.clashing_partner(), Some(b));
            assert_eq!(b.clashing_partner(), Some(a));
        }
    }

    #[test]
    fn test_earth_stems_clash_with_nothing() {
        assert_eq!(Tiangan::Wu.clashing_partner(), None);
        assert_eq!(Tiangan::Ji.clashing_partner(), None);
    }
}
