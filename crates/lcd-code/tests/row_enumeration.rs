use std::collections::BTreeSet;

use lcd_code::{RowEnumerator, RowFilter, Vector};
use lcd_core::Base;
use proptest::prelude::*;

fn legal(v: Vector, len: usize, base: Base, filter: RowFilter) -> bool {
    let digits = v.digits(len);
    let alphabet_ok = match (base, filter) {
        (Base::Binary, _) | (_, RowFilter::BinaryDigits) => digits.iter().all(|&d| d <= 1),
        _ => true,
    };
    let leading_ok = match filter {
        RowFilter::Normalized => digits.iter().find(|&&d| d != 0) == Some(&1),
        _ => true,
    };
    v.fits(len) && alphabet_ok && leading_ok
}

fn brute_force(len: usize, base: Base, filter: RowFilter) -> Vec<Vector> {
    (0..(1u64 << (2 * len)))
        .map(Vector::from_raw)
        .filter(|&v| legal(v, len, base, filter))
        .collect()
}

const FILTERS: [RowFilter; 3] = [RowFilter::All, RowFilter::Normalized, RowFilter::BinaryDigits];

#[test]
fn exhaustive_pass_matches_brute_force() {
    for base in [Base::Binary, Base::Quaternary] {
        for filter in FILTERS {
            for len in 1..=5 {
                let emitted: Vec<_> = RowEnumerator::new(len, base, filter).collect();
                assert_eq!(emitted, brute_force(len, base, filter), "{base} {filter:?} {len}");
            }
        }
    }
}

#[test]
fn emits_each_candidate_once_in_ascending_order() {
    let emitted: Vec<_> = RowEnumerator::new(4, Base::Quaternary, RowFilter::All).collect();
    assert_eq!(emitted.len(), 256);
    let unique: BTreeSet<_> = emitted.iter().copied().collect();
    assert_eq!(unique.len(), emitted.len());
    assert!(emitted.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn normalized_count_is_projective() {
    // (4^n - 1) / 3 one-dimensional subspaces.
    let count = RowEnumerator::new(5, Base::Quaternary, RowFilter::Normalized).count();
    assert_eq!(count, (1024 - 1) / 3);
}

#[test]
fn cursor_tracks_last_emitted() {
    let mut rows = RowEnumerator::new(2, Base::Quaternary, RowFilter::All);
    assert_eq!(rows.cursor(), None);
    rows.next();
    let second = rows.next().unwrap();
    assert_eq!(rows.cursor(), Some(second));
}

#[test]
fn full_width_enumerator_ends_cleanly() {
    let last = Vector::from_raw(u64::MAX - 1);
    let mut rows = RowEnumerator::new(32, Base::Quaternary, RowFilter::All).resume_after(last);
    assert_eq!(rows.next(), Some(Vector::from_raw(u64::MAX)));
    assert_eq!(rows.next(), None);
    assert_eq!(rows.next(), None);
}

proptest! {
    #[test]
    fn resuming_from_any_cursor_neither_skips_nor_repeats(
        len in 1usize..=5,
        base_is_binary in any::<bool>(),
        filter_idx in 0usize..3,
        split in any::<prop::sample::Index>(),
    ) {
        let base = if base_is_binary { Base::Binary } else { Base::Quaternary };
        let filter = FILTERS[filter_idx];
        let full: Vec<_> = RowEnumerator::new(len, base, filter).collect();
        prop_assume!(!full.is_empty());
        let at = split.index(full.len());
        let resumed: Vec<_> = RowEnumerator::new(len, base, filter)
            .resume_after(full[at])
            .collect();
        prop_assert_eq!(&resumed[..], &full[at + 1..]);
    }

    #[test]
    fn resuming_after_illegal_vectors_yields_next_legal(
        len in 1usize..=5,
        raw in any::<u64>(),
        filter_idx in 0usize..3,
    ) {
        let filter = FILTERS[filter_idx];
        let cursor = Vector::from_raw(raw & lcd_code::field::length_mask(len));
        let expected: Vec<_> = brute_force(len, Base::Quaternary, filter)
            .into_iter()
            .filter(|&v| v > cursor)
            .collect();
        let resumed: Vec<_> = RowEnumerator::new(len, Base::Quaternary, filter)
            .resume_after(cursor)
            .collect();
        prop_assert_eq!(resumed, expected);
    }
}
