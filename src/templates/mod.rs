//! Template-based HTML rendering
//!
//! Uses MiniJinja with the grid template embedded in the binary.

pub mod filters;

use minijinja::{context, Environment, Value};
use std::sync::OnceLock;

use crate::error::Result;
use crate::solve::Grid;

/// Name of the embedded grid template; the `.html` suffix turns on escaping
pub const GRID_TEMPLATE: &str = "grid.html";

mod embedded {
    pub const GRID: &str = include_str!("../../templates/grid.html.jinja");
}

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

/// Initialize the template engine with embedded templates
fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();

    filters::register_filters(&mut env);

    env.add_template(GRID_TEMPLATE, embedded::GRID)
        .expect("Failed to load grid template");

    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// Render a grid as an HTML table followed by its legend
pub fn render_html(grid: &Grid) -> Result<String> {
    let template = engine().get_template(GRID_TEMPLATE)?;
    let html = template.render(context! {
        grid => Value::from_serialize(grid),
    })?;
    Ok(html)
}
