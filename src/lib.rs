// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # kmap: Karnaugh map grid model
//!
//! Turns a truth-table description of a boolean function into a
//! Gray-code-ordered grid ready for drawing.
//!
//! ## Core Concept
//!
//! A solve takes four things: the number of variables (2 to 6), the
//! on-set, the don't-care set, and the implicants picked by an external
//! minimizer. It returns a [`Grid`] in which:
//!
//! - rows and columns follow reflected binary Gray code, so neighbouring
//!   cells differ in exactly one variable
//! - every minterm appears in exactly one cell
//! - each cell is classified as on, off or don't-care
//! - each cell lists the implicants covering it, and the first of them
//!   is its primary highlight
//!
//! The minimizer itself is not part of this crate. Its output is trusted
//! as long as it is structurally sound; malformed input is rejected with
//! a [`StructuralError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use kmap::{solve, CellValue, Implicant, Input};
//!
//! let input = Input::new(2, [0, 3], []).with_implicants(vec![
//!     Implicant::new("00", vec![0]),
//!     Implicant::new("11", vec![3]),
//! ]);
//!
//! let grid = solve(&input)?;
//! let m3 = grid.cell(3).unwrap();
//! assert_eq!(m3.value, CellValue::On);
//! assert_eq!(m3.covering_implicant_indexes, vec![1]);
//! # Ok::<(), kmap::Error>(())
//! ```
//!
//! ## Layout
//!
//! ```text
//!          C D
//!  A B     00  01  11  10
//!  00      m0  m1  m3  m2
//!  01      m4  m5  m7  m6
//!  11      m12 m13 m15 m14
//!  10      m8  m9  m11 m10
//! ```
//!
//! Rows carry the high `floor(n / 2)` bits of the minterm index, columns
//! the rest.

pub mod axis;
pub mod config;
pub mod error;
pub mod gray;
pub mod grid;
pub mod implicant;
pub mod input;
pub mod overlay;
pub mod render;
pub mod sequence;
pub mod solve;
pub mod templates;

// Re-exports
pub use axis::{AxisSplit, MAX_VARIABLES, MIN_VARIABLES, VARIABLE_NAMES};
pub use config::{Config, ValidationConfig};
pub use error::{Error, Result, StructuralError};
pub use gray::{gray_decode, gray_encode, gray_sequence};
pub use grid::{bit_string, minterm_index, CellValue, GridCell, GridRow};
pub use implicant::{Cube, CubeValue, Implicant};
pub use input::{Input, SelectedImplicant, SolverRequest, SolverResponse, SolverSolution};
pub use overlay::{LegendEntry, Overlay};
pub use render::{render, render_text, Format};
pub use sequence::{RequestId, RequestSequencer};
pub use solve::{solve, Grid, Solver};
pub use templates::render_html;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
