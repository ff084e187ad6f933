//! Custom MiniJinja filters for grid rendering

use crate::grid::bit_string;
use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("bits", bits);
    env.add_filter("symbol", symbol);
}

/// Axis label: Gray value as a zero padded bit string
fn bits(value: u32, width: u32) -> String {
    if width == 0 {
        return String::new();
    }
    bit_string(value, width)
}

/// Truth table symbol for a serialized cell value
fn symbol(value: &str) -> String {
    match value {
        "on" => "1",
        "off" => "0",
        "dontCare" => "X",
        other => other,
    }
    .to_string()
}
