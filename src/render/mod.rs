//! Grid rendering
//!
//! The same resolved grid can be written as aligned text for terminals,
//! as an HTML table (through the embedded template) or as JSON for a
//! front end that draws the map itself.

mod text;

pub use text::render_text;

use crate::error::{Error, Result};
use crate::solve::Grid;
use crate::templates::render_html;
use std::str::FromStr;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "html" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            other => Err(Error::Other(format!("Unknown format: {}", other))),
        }
    }
}

/// Render a grid in the requested format
pub fn render(grid: &Grid, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(grid)),
        Format::Html => render_html(grid),
        Format::Json => Ok(serde_json::to_string_pretty(grid)?),
    }
}
