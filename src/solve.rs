//! One solve: input record in, render-ready grid out
//!
//! ```text
//! Input ──► validate ──► AxisSplit ──► Gray sequences
//!                                        │
//!                                        ▼
//!                      resolve_cells ──► Overlay::apply ──► Grid
//! ```

use crate::axis::AxisSplit;
use crate::config::Config;
use crate::error::Result;
use crate::grid::{locate, resolve_cells, GridCell, GridRow};
use crate::gray::gray_sequence;
use crate::input::Input;
use crate::overlay::{color_index, LegendEntry, Overlay};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The resolved grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub row_vars: u32,
    pub col_vars: u32,
    /// Row axis variable names, most significant first
    pub row_variables: Vec<char>,
    /// Column axis variable names, most significant first
    pub col_variables: Vec<char>,
    pub rows: Vec<GridRow>,
    pub legend: Vec<LegendEntry>,
}

impl Grid {
    /// Axis split of this grid
    pub fn split(&self) -> AxisSplit {
        AxisSplit {
            row_vars: self.row_vars,
            col_vars: self.col_vars,
        }
    }

    /// Total variable count
    pub fn num_inputs(&self) -> u32 {
        self.row_vars + self.col_vars
    }

    /// All cells, rows in Gray order then columns in Gray order
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Cell holding `minterm`
    pub fn cell(&self, minterm: u32) -> Option<&GridCell> {
        if minterm >= self.split().minterm_limit() {
            return None;
        }
        let (row, col) = locate(minterm, self.split());
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }
}

/// Solve with the default configuration
pub fn solve(input: &Input) -> Result<Grid> {
    Solver::new(Config::default()).solve(input)
}

/// Grid builder carrying a configuration
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: Config,
}

impl Solver {
    pub fn new(config: Config) -> Self {
        Solver { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate `input` and build its grid
    pub fn solve(&self, input: &Input) -> Result<Grid> {
        self.config.check()?;
        input.validate(&self.config.validation)?;

        let split = AxisSplit::new(input.num_inputs)?;
        let row_sequence = gray_sequence(split.row_vars)?;
        let col_sequence = gray_sequence(split.col_vars)?;
        tracing::debug!(
            num_inputs = input.num_inputs,
            rows = split.rows(),
            cols = split.cols(),
            implicants = input.implicants.len(),
            "resolving grid"
        );

        let mut rows = resolve_cells(
            split,
            &row_sequence,
            &col_sequence,
            &input.on_set,
            &input.dont_care_set,
        );

        let overlay = Overlay::new(&input.implicants);
        overlay.apply(&mut rows, &self.config.palette);

        let legend = self.legend(input, &rows)?;

        Ok(Grid {
            row_vars: split.row_vars,
            col_vars: split.col_vars,
            row_variables: split.row_names().to_vec(),
            col_variables: split.col_names().to_vec(),
            rows,
            legend,
        })
    }

    fn legend(&self, input: &Input, rows: &[GridRow]) -> Result<Vec<LegendEntry>> {
        let cells: Vec<&GridCell> = rows.iter().flat_map(|r| r.cells.iter()).collect();

        input
            .implicants
            .iter()
            .enumerate()
            .map(|(index, implicant)| -> Result<LegendEntry> {
                let cube = implicant.cube(index, input.num_inputs)?;
                let slot = color_index(index, self.config.palette.len());
                let covered = cells
                    .iter()
                    .filter(|c| c.covering_implicant_indexes.contains(&index))
                    .count();
                let primary = cells
                    .iter()
                    .filter(|c| c.primary_implicant == Some(index))
                    .count();
                tracing::trace!(index, term = %cube.term(), covered, primary, "legend entry");

                Ok(LegendEntry {
                    index,
                    pattern: implicant.pattern.clone(),
                    term: cube.term(),
                    color_index: slot,
                    color: self.config.color(slot).to_string(),
                    cells: covered,
                    primary_cells: primary,
                })
            })
            .collect()
    }
}
