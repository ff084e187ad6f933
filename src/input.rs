//! Input record and its validation
//!
//! An [`Input`] is everything one solve needs: the variable count, the
//! on-set, the don't-care set and the implicants selected by the external
//! solver. It can be read from YAML or JSON, or assembled from a solver
//! request/response pair.

use crate::axis::check_variable_count;
use crate::config::ValidationConfig;
use crate::error::{Error, Result, StructuralError};
use crate::implicant::Implicant;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One solve request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Number of input variables (2 to 6)
    pub num_inputs: u32,
    /// Minterms where the function is 1
    #[serde(default)]
    pub on_set: BTreeSet<u32>,
    /// Minterms where the function is unconstrained
    #[serde(default)]
    pub dont_care_set: BTreeSet<u32>,
    /// Covering implicants in display order
    #[serde(default)]
    pub implicants: Vec<Implicant>,
}

impl Input {
    /// Create an input without implicants
    pub fn new(
        num_inputs: u32,
        on_set: impl IntoIterator<Item = u32>,
        dont_care_set: impl IntoIterator<Item = u32>,
    ) -> Self {
        Input {
            num_inputs,
            on_set: on_set.into_iter().collect(),
            dont_care_set: dont_care_set.into_iter().collect(),
            implicants: Vec::new(),
        }
    }

    /// Attach implicants
    pub fn with_implicants(mut self, implicants: Vec<Implicant>) -> Self {
        self.implicants = implicants;
        self
    }

    /// Parse input from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse input from either format, JSON when it starts with `{`
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim_start().starts_with('{') {
            Self::from_json(content)
        } else {
            Self::from_yaml(content)
        }
    }

    /// Build an input from a solver round trip
    pub fn from_solver(request: &SolverRequest, response: SolverResponse) -> Result<Self> {
        match response {
            SolverResponse::Solved(solution) => {
                tracing::debug!(
                    expression = %solution.expression,
                    implicants = solution.selected_implicants.len(),
                    "accepted solver response"
                );
                Ok(Input {
                    num_inputs: request.num_inputs,
                    on_set: request.minterms.iter().copied().collect(),
                    dont_care_set: request.dont_cares.iter().copied().collect(),
                    implicants: solution
                        .selected_implicants
                        .into_iter()
                        .map(|s| Implicant::new(s.bits, s.covered))
                        .collect(),
                })
            }
            SolverResponse::Failed { error } => Err(Error::Solver(error)),
        }
    }

    /// Exclusive upper bound of the minterm domain
    pub fn minterm_limit(&self) -> u32 {
        1 << self.num_inputs
    }

    /// Check the input against the structural contract.
    ///
    /// The variable count is checked first; nothing else is inspected when
    /// it is out of range.
    pub fn validate(&self, rules: &ValidationConfig) -> Result<()> {
        check_variable_count(self.num_inputs)?;
        let limit = self.minterm_limit();

        for (set, minterms) in [("on-set", &self.on_set), ("don't-care", &self.dont_care_set)] {
            if let Some(&minterm) = minterms.iter().find(|m| **m >= limit) {
                return Err(StructuralError::MintermOutOfRange { set, minterm, limit }.into());
            }
        }

        if rules.check_disjoint {
            if let Some(&minterm) = self.on_set.intersection(&self.dont_care_set).next() {
                return Err(StructuralError::OverlappingSets(minterm).into());
            }
        }

        for (index, implicant) in self.implicants.iter().enumerate() {
            let cube = implicant.cube(index, self.num_inputs)?;

            if let Some(&minterm) = implicant.covered.iter().find(|m| **m >= limit) {
                return Err(StructuralError::CoveredOutOfRange {
                    implicant: index,
                    minterm,
                    limit,
                }
                .into());
            }

            if rules.strict_patterns {
                let covered: BTreeSet<u32> = implicant.covered.iter().copied().collect();
                let expected: BTreeSet<u32> = cube.minterms().into_iter().collect();
                if covered != expected {
                    return Err(StructuralError::PatternMismatch {
                        implicant: index,
                        pattern: implicant.pattern.clone(),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

/// Request sent to the external minimizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolverRequest {
    pub num_inputs: u32,
    #[serde(default)]
    pub minterms: Vec<u32>,
    #[serde(default)]
    pub dont_cares: Vec<u32>,
}

/// Implicant as reported by the external minimizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectedImplicant {
    pub bits: String,
    #[serde(default)]
    pub covered: Vec<u32>,
}

/// Successful minimizer answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolverSolution {
    pub expression: String,
    #[serde(default)]
    pub latex: String,
    #[serde(default)]
    pub selected_implicants: Vec<SelectedImplicant>,
}

/// Minimizer answer: a solution or an error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SolverResponse {
    Solved(SolverSolution),
    Failed { error: String },
}
