//! Implicants and their pattern cubes
//!
//! An implicant arrives from the external solver as a fixed-width pattern
//! over `0`, `1` and `-` together with the minterms it covers. The pattern
//! is parsed into a [`Cube`] for product-term rendering and, in strict
//! mode, to cross-check the covered list.

use crate::axis::VARIABLE_NAMES;
use crate::error::StructuralError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a single variable in a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeValue {
    /// Variable must be false (complemented)
    Zero,
    /// Variable must be true (uncomplemented)
    One,
    /// Variable can be either
    DontCare,
}

impl CubeValue {
    /// Parse a pattern character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(CubeValue::Zero),
            '1' => Some(CubeValue::One),
            '-' => Some(CubeValue::DontCare),
            _ => None,
        }
    }

    /// Convert to character representation
    pub fn to_char(self) -> char {
        match self {
            CubeValue::Zero => '0',
            CubeValue::One => '1',
            CubeValue::DontCare => '-',
        }
    }

    /// Check if this value is a literal (not don't care)
    pub fn is_literal(self) -> bool {
        matches!(self, CubeValue::Zero | CubeValue::One)
    }

    /// Check whether a single bit satisfies this value
    pub fn accepts(self, bit: bool) -> bool {
        match self {
            CubeValue::Zero => !bit,
            CubeValue::One => bit,
            CubeValue::DontCare => true,
        }
    }
}

/// One selected implicant as supplied by the solver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Implicant {
    /// Fixed-width pattern, most significant variable first
    pub pattern: String,
    /// Covered minterm indexes, in any order
    #[serde(default)]
    pub covered: Vec<u32>,
}

impl Implicant {
    pub fn new(pattern: impl Into<String>, covered: Vec<u32>) -> Self {
        Implicant {
            pattern: pattern.into(),
            covered,
        }
    }

    /// Parse the pattern for an implicant at position `index` in its list
    pub fn cube(&self, index: usize, num_inputs: u32) -> Result<Cube, StructuralError> {
        Cube::parse(&self.pattern, num_inputs, index)
    }
}

/// A product term: one value per variable, most significant first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    values: Vec<CubeValue>,
}

impl Cube {
    /// Parse a pattern of exactly `num_inputs` characters.
    ///
    /// `implicant` only labels the error.
    pub fn parse(
        pattern: &str,
        num_inputs: u32,
        implicant: usize,
    ) -> Result<Self, StructuralError> {
        let got = pattern.chars().count();
        if got != num_inputs as usize {
            return Err(StructuralError::PatternLength {
                implicant,
                pattern: pattern.to_string(),
                expected: num_inputs as usize,
                got,
            });
        }

        let values = pattern
            .chars()
            .map(|ch| {
                CubeValue::from_char(ch).ok_or_else(|| StructuralError::PatternChar {
                    implicant,
                    pattern: pattern.to_string(),
                    ch,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cube { values })
    }

    /// Get all values
    pub fn values(&self) -> &[CubeValue] {
        &self.values
    }

    /// Count the number of literals (non-don't-care values)
    pub fn literal_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_literal()).count()
    }

    /// Check whether the cube evaluates true on `minterm`
    pub fn contains(&self, minterm: u32) -> bool {
        let width = self.values.len();
        self.values.iter().enumerate().all(|(i, v)| {
            let bit = (minterm >> (width - 1 - i)) & 1 == 1;
            v.accepts(bit)
        })
    }

    /// All minterms the cube evaluates true on, ascending
    pub fn minterms(&self) -> Vec<u32> {
        let limit = 1u32 << self.values.len();
        (0..limit).filter(|m| self.contains(*m)).collect()
    }

    /// Product term using the fixed variable names, e.g. `AC'`.
    ///
    /// A cube without literals is the constant `1`.
    pub fn term(&self) -> String {
        if self.literal_count() == 0 {
            return "1".to_string();
        }
        let mut term = String::new();
        for (value, name) in self.values.iter().zip(VARIABLE_NAMES.iter()) {
            match value {
                CubeValue::One => term.push(*name),
                CubeValue::Zero => {
                    term.push(*name);
                    term.push('\'');
                }
                CubeValue::DontCare => {}
            }
        }
        term
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self.values.iter().map(|v| v.to_char()).collect();
        write!(f, "{}", pattern)
    }
}
