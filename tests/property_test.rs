//! Property-based tests for Gray sequences and grid resolution
//!
//! Uses proptest to generate random truth tables and implicant lists

use kmap::{bit_string, gray_sequence, solve, AxisSplit, CellValue, Implicant, Input};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn test_gray_is_cyclic_permutation(bits in 0u32..=12) {
        let seq = gray_sequence(bits).unwrap();
        prop_assert_eq!(seq.len(), 1usize << bits);

        let distinct: BTreeSet<u32> = seq.iter().copied().collect();
        prop_assert_eq!(distinct.len(), seq.len());
        prop_assert!(seq.iter().all(|v| *v < 1 << bits));

        if seq.len() > 1 {
            for i in 0..seq.len() {
                let next = seq[(i + 1) % seq.len()];
                prop_assert_eq!((seq[i] ^ next).count_ones(), 1);
            }
        }
    }

    #[test]
    fn test_split_covers_all_variables(n in 2u32..=6) {
        let split = AxisSplit::new(n).unwrap();
        prop_assert_eq!(split.row_vars + split.col_vars, n);
        prop_assert_eq!(split.rows() * split.cols(), 1usize << n);
    }

    #[test]
    fn test_bit_string_is_binary(n in 2u32..=6, seed in any::<u32>()) {
        let m = seed % (1 << n);
        let s = bit_string(m, n);
        prop_assert_eq!(s.len(), n as usize);
        prop_assert_eq!(u32::from_str_radix(&s, 2).unwrap(), m);
    }

    #[test]
    fn test_every_minterm_appears_once(input in any_input()) {
        let grid = solve(&input).unwrap();
        let mut seen: Vec<u32> = grid.cells().map(|c| c.minterm_index).collect();
        seen.sort_unstable();
        let expected: Vec<u32> = (0..1u32 << input.num_inputs).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn test_classification(input in any_input()) {
        let grid = solve(&input).unwrap();
        for cell in grid.cells() {
            let m = cell.minterm_index;
            let expected = if input.on_set.contains(&m) {
                CellValue::On
            } else if input.dont_care_set.contains(&m) {
                CellValue::DontCare
            } else {
                CellValue::Off
            };
            prop_assert_eq!(cell.value, expected);
        }
    }

    #[test]
    fn test_covering_indexes_are_exact(input in any_input()) {
        let grid = solve(&input).unwrap();
        for cell in grid.cells() {
            let expected: Vec<usize> = input
                .implicants
                .iter()
                .enumerate()
                .filter(|(_, imp)| imp.covered.contains(&cell.minterm_index))
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(cell.primary_implicant, expected.first().copied());
            prop_assert_eq!(&cell.covering_implicant_indexes, &expected);
        }
    }
}

/// Random valid input: disjoint on/dc sets and implicants over the domain
fn any_input() -> impl Strategy<Value = Input> {
    (2u32..=6).prop_flat_map(|n| {
        let limit = 1u32 << n;
        let values = prop::collection::vec(0u8..3, limit as usize);
        let implicants = prop::collection::vec(
            (
                prop::collection::vec(prop_oneof![Just('0'), Just('1'), Just('-')], n as usize),
                prop::collection::vec(0..limit, 0..8),
            ),
            0..6,
        );
        (Just(n), values, implicants).prop_map(|(n, values, implicants)| {
            let mut input = Input::new(n, [], []);
            for (m, v) in values.iter().enumerate() {
                match v {
                    1 => {
                        input.on_set.insert(m as u32);
                    }
                    2 => {
                        input.dont_care_set.insert(m as u32);
                    }
                    _ => {}
                }
            }
            input.implicants = implicants
                .into_iter()
                .map(|(chars, covered)| Implicant::new(chars.into_iter().collect::<String>(), covered))
                .collect();
            input
        })
    })
}
