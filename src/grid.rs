//! Grid cell resolution
//!
//! Combines the row and column Gray sequences into the full grid. The
//! minterm of a cell is `(row_gray << col_vars) | col_gray`, which maps
//! the grid one-to-one onto `[0, 2^n)`.

use crate::axis::AxisSplit;
use crate::gray::gray_position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Classification of one minterm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CellValue {
    On,
    Off,
    DontCare,
}

impl CellValue {
    /// Classify a minterm; the on-set wins over the don't-care set
    pub fn classify(minterm: u32, on_set: &BTreeSet<u32>, dont_care_set: &BTreeSet<u32>) -> Self {
        if on_set.contains(&minterm) {
            CellValue::On
        } else if dont_care_set.contains(&minterm) {
            CellValue::DontCare
        } else {
            CellValue::Off
        }
    }

    /// Symbol printed in a truth table cell
    pub fn symbol(self) -> char {
        match self {
            CellValue::On => '1',
            CellValue::Off => '0',
            CellValue::DontCare => 'X',
        }
    }
}

/// One cell of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub row_gray: u32,
    pub col_gray: u32,
    pub minterm_index: u32,
    /// Binary minterm index, most significant variable first
    pub bit_string: String,
    pub value: CellValue,
    /// Indexes into the input implicant list, ascending
    pub covering_implicant_indexes: Vec<usize>,
    /// First covering implicant, drives the highlight
    pub primary_implicant: Option<usize>,
    /// Palette slot of the primary implicant
    pub color_index: Option<usize>,
    /// Highlight color of the primary implicant
    pub color: Option<String>,
}

/// One grid row in Gray order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub gray_value: u32,
    pub cells: Vec<GridCell>,
}

/// Binary representation of `minterm`, zero padded to `width`, MSB first
pub fn bit_string(minterm: u32, width: u32) -> String {
    format!("{:0width$b}", minterm, width = width as usize)
}

/// Minterm index of the cell at (`row_gray`, `col_gray`)
pub fn minterm_index(row_gray: u32, col_gray: u32, col_vars: u32) -> u32 {
    (row_gray << col_vars) | col_gray
}

/// Build every cell of the grid, rows in Gray order then columns in Gray
/// order. Cells come back without any implicant coverage.
pub fn resolve_cells(
    split: AxisSplit,
    row_sequence: &[u32],
    col_sequence: &[u32],
    on_set: &BTreeSet<u32>,
    dont_care_set: &BTreeSet<u32>,
) -> Vec<GridRow> {
    let width = split.num_inputs();

    row_sequence
        .iter()
        .map(|&row_gray| GridRow {
            gray_value: row_gray,
            cells: col_sequence
                .iter()
                .map(|&col_gray| {
                    let minterm = minterm_index(row_gray, col_gray, split.col_vars);
                    GridCell {
                        row_gray,
                        col_gray,
                        minterm_index: minterm,
                        bit_string: bit_string(minterm, width),
                        value: CellValue::classify(minterm, on_set, dont_care_set),
                        covering_implicant_indexes: Vec::new(),
                        primary_implicant: None,
                        color_index: None,
                        color: None,
                    }
                })
                .collect(),
        })
        .collect()
}

/// Grid position (row, column) of `minterm`
pub fn locate(minterm: u32, split: AxisSplit) -> (usize, usize) {
    let col_mask = (1u32 << split.col_vars) - 1;
    (
        gray_position(minterm >> split.col_vars),
        gray_position(minterm & col_mask),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gray::gray_sequence;

    fn build(n: u32, on: &[u32], dc: &[u32]) -> (AxisSplit, Vec<GridRow>) {
        let split = AxisSplit::new(n).unwrap();
        let rows = gray_sequence(split.row_vars).unwrap();
        let cols = gray_sequence(split.col_vars).unwrap();
        let on: BTreeSet<u32> = on.iter().copied().collect();
        let dc: BTreeSet<u32> = dc.iter().copied().collect();
        (split, resolve_cells(split, &rows, &cols, &on, &dc))
    }

    #[test]
    fn test_bit_string() {
        assert_eq!(bit_string(5, 4), "0101");
        assert_eq!(bit_string(0, 2), "00");
        assert_eq!(bit_string(63, 6), "111111");
    }

    #[test]
    fn test_two_variable_layout() {
        let (_, rows) = build(2, &[0, 3], &[]);
        let minterms: Vec<Vec<u32>> = rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.minterm_index).collect())
            .collect();
        assert_eq!(minterms, vec![vec![0, 1], vec![2, 3]]);

        let values: Vec<CellValue> = rows.iter().flat_map(|r| r.cells.iter().map(|c| c.value)).collect();
        assert_eq!(
            values,
            vec![CellValue::On, CellValue::Off, CellValue::Off, CellValue::On]
        );
    }

    #[test]
    fn test_four_variable_gray_order() {
        let (_, rows) = build(4, &[], &[]);
        let row_grays: Vec<u32> = rows.iter().map(|r| r.gray_value).collect();
        assert_eq!(row_grays, vec![0, 1, 3, 2]);
        let first_row: Vec<u32> = rows[0].cells.iter().map(|c| c.minterm_index).collect();
        assert_eq!(first_row, vec![0, 1, 3, 2]);
        let third_row: Vec<u32> = rows[2].cells.iter().map(|c| c.minterm_index).collect();
        assert_eq!(third_row, vec![12, 13, 15, 14]);
    }

    #[test]
    fn test_on_set_wins_over_dont_care() {
        let on: BTreeSet<u32> = [1].into_iter().collect();
        let dc: BTreeSet<u32> = [1, 2].into_iter().collect();
        assert_eq!(CellValue::classify(1, &on, &dc), CellValue::On);
        assert_eq!(CellValue::classify(2, &on, &dc), CellValue::DontCare);
        assert_eq!(CellValue::classify(3, &on, &dc), CellValue::Off);
    }

    #[test]
    fn test_locate_matches_layout() {
        for n in 2..=6 {
            let (split, rows) = build(n, &[], &[]);
            for (r, row) in rows.iter().enumerate() {
                for (c, cell) in row.cells.iter().enumerate() {
                    assert_eq!(locate(cell.minterm_index, split), (r, c));
                }
            }
        }
    }
}
