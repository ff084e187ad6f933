//! Implicant overlay
//!
//! Decides which implicants cover each cell and which one of them is the
//! cell's primary highlight. The primary is the first covering implicant
//! in input order; its color is its list position modulo the palette size.
//! All covering implicants are kept on the cell for secondary display.

use crate::grid::GridRow;
use crate::implicant::Implicant;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-implicant membership sets for O(1) cover lookups
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    covers: Vec<HashSet<u32>>,
}

impl Overlay {
    pub fn new(implicants: &[Implicant]) -> Self {
        Overlay {
            covers: implicants
                .iter()
                .map(|imp| imp.covered.iter().copied().collect())
                .collect(),
        }
    }

    /// Number of implicants
    pub fn len(&self) -> usize {
        self.covers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }

    /// Indexes of the implicants covering `minterm`, ascending
    pub fn covering(&self, minterm: u32) -> Vec<usize> {
        self.covers
            .iter()
            .enumerate()
            .filter(|(_, set)| set.contains(&minterm))
            .map(|(i, _)| i)
            .collect()
    }

    /// First implicant covering `minterm`
    pub fn primary(&self, minterm: u32) -> Option<usize> {
        self.covers.iter().position(|set| set.contains(&minterm))
    }

    /// Fill in coverage, primary implicant and highlight color of every cell
    pub fn apply(&self, rows: &mut [GridRow], palette: &[String]) {
        for cell in rows.iter_mut().flat_map(|r| r.cells.iter_mut()) {
            cell.covering_implicant_indexes = self.covering(cell.minterm_index);
            cell.primary_implicant = self.primary(cell.minterm_index);
            cell.color_index = cell.primary_implicant.map(|i| color_index(i, palette.len()));
            cell.color = cell.color_index.and_then(|slot| palette.get(slot).cloned());
        }
    }
}

/// Palette slot for the implicant at `index`; the palette wraps around
pub fn color_index(index: usize, palette_len: usize) -> usize {
    index % palette_len.max(1)
}

/// Legend line for one implicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub index: usize,
    pub pattern: String,
    /// Product term, e.g. `AB'`
    pub term: String,
    pub color_index: usize,
    pub color: String,
    /// Cells covered by this implicant
    pub cells: usize,
    /// Cells where this implicant is the primary highlight
    pub primary_cells: usize,
}
