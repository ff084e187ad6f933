//! Split of the input variables between the row and column axes

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest supported variable count
pub const MIN_VARIABLES: u32 = 2;

/// Largest supported variable count
pub const MAX_VARIABLES: u32 = 6;

/// Variable names, most significant bit first
pub const VARIABLE_NAMES: [char; MAX_VARIABLES as usize] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Row/column bit widths of a grid
///
/// Rows take `floor(n / 2)` variables (the high bits of a minterm index),
/// columns take the rest. An odd count therefore gives a wider-than-tall
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AxisSplit {
    pub row_vars: u32,
    pub col_vars: u32,
}

impl AxisSplit {
    /// Partition `num_inputs` variables between the two axes
    pub fn new(num_inputs: u32) -> Result<Self> {
        check_variable_count(num_inputs)?;
        let row_vars = num_inputs / 2;
        Ok(AxisSplit {
            row_vars,
            col_vars: num_inputs - row_vars,
        })
    }

    /// Total variable count
    pub fn num_inputs(&self) -> u32 {
        self.row_vars + self.col_vars
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        1 << self.row_vars
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        1 << self.col_vars
    }

    /// Exclusive upper bound of the minterm domain
    pub fn minterm_limit(&self) -> u32 {
        1 << self.num_inputs()
    }

    /// Names of the row variables
    pub fn row_names(&self) -> &'static [char] {
        &VARIABLE_NAMES[..self.row_vars as usize]
    }

    /// Names of the column variables
    pub fn col_names(&self) -> &'static [char] {
        &VARIABLE_NAMES[self.row_vars as usize..self.num_inputs() as usize]
    }
}

/// Reject variable counts outside the supported range
pub fn check_variable_count(num_inputs: u32) -> Result<()> {
    if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&num_inputs) {
        return Err(Error::Range(format!(
            "number of inputs must be between {} and {}, got {}",
            MIN_VARIABLES, MAX_VARIABLES, num_inputs
        )));
    }
    Ok(())
}
