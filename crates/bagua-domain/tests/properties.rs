//! Integration tests for the Bagua domain layer
//!
//! Exercises the public surface the way a caller would: relationship
//! queries over the calendar crate's stems, phase dispatch from both phase
//! domains, and the structural guarantees of the symbol tables.

use std::collections::{HashMap, HashSet};

use bagua_calendar::{ChineseMoonPhase, MoonPhase, Tiangan, Wuxing};
use bagua_domain::{
    hexagram_for_phase, trigram_for_phase, Polarity, StemRelations, HEXAGRAMS, HOUTIAN_BAGUA,
    SHIER_PIGUA, XIANTIAN_BAGUA,
};

#[test]
fn combining_forms_five_disjoint_pairs() {
    let mut pairs = HashSet::new();
    for stem in Tiangan::ALL {
        let partner = stem.combining_partner();
        assert_ne!(partner, stem);
        assert_eq!(partner.combining_partner(), stem);

        let key = if stem.rank() < partner.rank() {
            (stem, partner)
        } else {
            (partner, stem)
        };
        pairs.insert(key);
    }
    assert_eq!(pairs.len(), 5);
}

#[test]
fn clashing_connects_exactly_the_outer_ranks() {
    for stem in Tiangan::ALL {
        match stem.rank() {
            5 | 6 => assert_eq!(stem.clashing_partner(), None, "{stem}"),
            rank => {
                let partner = stem.clashing_partner().unwrap();
                assert_eq!(partner.clashing_partner(), Some(stem), "{stem}");
                let low = rank.min(partner.rank());
                let high = rank.max(partner.rank());
                assert_eq!(high - low, 6, "{stem}");
            }
        }
    }
}

#[test]
fn affinity_covers_each_element_twice() {
    let mut coverage: HashMap<Wuxing, usize> = HashMap::new();
    for stem in Tiangan::ALL {
        *coverage.entry(stem.affinity()).or_default() += 1;
    }
    assert_eq!(coverage.len(), 5);
    assert!(coverage.values().all(|&n| n == 2));
}

#[test]
fn phase_mappings_correspond_one_to_one() {
    // The two lookups are absent for the same two octants, and where
    // present each trigram pairs with one fixed hexagram.
    let correspondence = [
        ("坤", "坤"),
        ("震", "臨"),
        ("兌", "大壯"),
        ("乾", "乾"),
        ("巽", "遯"),
        ("艮", "觀"),
    ];

    let mut absent = 0;
    for phase in MoonPhase::ALL {
        match (trigram_for_phase(phase), hexagram_for_phase(phase)) {
            (Some(trigram), Some(hexagram)) => {
                assert!(
                    correspondence.contains(&(trigram.name(), hexagram.name())),
                    "{phase} pairs {trigram} with {hexagram}"
                );
            }
            (None, None) => absent += 1,
            (trigram, hexagram) => {
                panic!("{phase} disagrees on absence: {trigram:?} vs {hexagram:?}")
            }
        }
    }
    assert_eq!(absent, 2);
}

#[test]
fn both_phase_domains_reach_the_same_symbols() {
    for fine in ChineseMoonPhase::ALL {
        let coarse = MoonPhase::from(fine);
        assert_eq!(trigram_for_phase(fine), trigram_for_phase(coarse));
        assert_eq!(hexagram_for_phase(fine), hexagram_for_phase(coarse));
    }
}

#[test]
fn arrangements_hold_all_eight_trigrams_once() {
    for arrangement in [&XIANTIAN_BAGUA, &HOUTIAN_BAGUA] {
        let names: HashSet<&str> = arrangement.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), 8);
    }

    let yang = XIANTIAN_BAGUA
        .iter()
        .filter(|t| t.polarity() == Polarity::Yang)
        .count();
    assert_eq!(yang, 4);
}

#[test]
fn sovereign_cycle_references_the_full_table() {
    let table: HashSet<&str> = HEXAGRAMS.iter().map(|h| h.name()).collect();
    assert_eq!(table.len(), 64);
    for hexagram in SHIER_PIGUA {
        assert!(table.contains(hexagram.name()));
    }
}

#[test]
fn worked_example_from_the_tradition() {
    // 甲: affinity 土, combines with 己, clashes with 庚
    let jia: Tiangan = "甲".parse().unwrap();
    assert_eq!(jia.affinity(), Wuxing::Tu);
    assert_eq!(jia.combining_partner(), Tiangan::Ji);
    assert_eq!(jia.clashing_partner(), Some(Tiangan::Geng));
}

#[test]
fn unknown_phase_input_is_rejected_before_mapping() {
    // Raw external values enter through the calendar parse boundary and
    // fail there; nothing maps silently to absence.
    let err = "super-blood-wolf-moon".parse::<MoonPhase>().unwrap_err();
    assert!(err.to_string().contains("super-blood-wolf-moon"));

    assert!(MoonPhase::from_octant(9).is_err());
    assert!(Tiangan::from_rank(0).is_err());
}

#[test]
fn symbols_serialize() {
    let trigram = trigram_for_phase(MoonPhase::Full).unwrap();
    let json = serde_json::to_value(trigram).unwrap();
    assert_eq!(json["name"], "乾");
    assert_eq!(json["image"], "天");

    let hexagram = hexagram_for_phase(MoonPhase::Full).unwrap();
    let json = serde_json::to_value(hexagram).unwrap();
    assert_eq!(json["symbol"], "䷀");
}
