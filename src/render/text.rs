//! Plain text grid
//!
//! ```text
//! AB\CD  00       01  11  10
//! 00     1(0)     0   0   0
//! ```

use crate::grid::{bit_string, GridCell};
use crate::solve::Grid;

fn cell_text(cell: &GridCell) -> String {
    let mut text = cell.value.symbol().to_string();
    if !cell.covering_implicant_indexes.is_empty() {
        let ids: Vec<String> = cell
            .covering_implicant_indexes
            .iter()
            .map(|i| i.to_string())
            .collect();
        text.push_str(&format!("({})", ids.join(",")));
    }
    text
}

/// Render the grid and its legend as aligned text
pub fn render_text(grid: &Grid) -> String {
    let corner = format!(
        "{}\\{}",
        grid.row_variables.iter().collect::<String>(),
        grid.col_variables.iter().collect::<String>()
    );

    let col_labels: Vec<String> = grid.rows.first().map_or(Vec::new(), |row| {
        row.cells
            .iter()
            .map(|c| bit_string(c.col_gray, grid.col_vars))
            .collect()
    });
    let body: Vec<(String, Vec<String>)> = grid
        .rows
        .iter()
        .map(|r| {
            (
                bit_string(r.gray_value, grid.row_vars),
                r.cells.iter().map(cell_text).collect(),
            )
        })
        .collect();

    let label_width = body
        .iter()
        .map(|(label, _)| label.len())
        .chain(std::iter::once(corner.len()))
        .max()
        .unwrap_or(0);
    let cell_width = body
        .iter()
        .flat_map(|(_, cells)| cells.iter().map(|c| c.len()))
        .chain(col_labels.iter().map(|l| l.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<w$}", corner, w = label_width));
    for label in &col_labels {
        out.push_str(&format!("  {:<w$}", label, w = cell_width));
    }
    out.push('\n');

    for (label, cells) in &body {
        out.push_str(&format!("{:<w$}", label, w = label_width));
        for cell in cells {
            out.push_str(&format!("  {:<w$}", cell, w = cell_width));
        }
        out.push('\n');
    }

    if !grid.legend.is_empty() {
        out.push_str("\nImplicants:\n");
        for entry in &grid.legend {
            out.push_str(&format!(
                "  [{}] {:<8} {:<12} {}  {} cell(s)\n",
                entry.index, entry.color, entry.term, entry.pattern, entry.cells
            ));
        }
    }

    // Trailing spaces come from left-aligned padding in the last column
    out.lines()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implicant::Implicant;
    use crate::input::Input;
    use crate::solve::solve;

    #[test]
    fn test_two_variable_text() {
        let grid = solve(&Input::new(2, [0, 3], [1])).unwrap();
        let text = render_text(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["A\\B  0  1", "0    1  X", "1    0  1"]);
    }

    #[test]
    fn test_covering_and_legend() {
        let input = Input::new(2, [2, 3], [])
            .with_implicants(vec![Implicant::new("1-", vec![2, 3])]);
        let text = render_text(&solve(&input).unwrap());
        assert!(text.contains("1(0)"));
        assert!(text.contains("Implicants:"));
        assert!(text.contains("[0] red"));
        assert!(text.contains("2 cell(s)"));
    }

    #[test]
    fn test_grid_without_rows() {
        let grid = Grid {
            row_vars: 1,
            col_vars: 1,
            row_variables: vec!['A'],
            col_variables: vec!['B'],
            rows: vec![],
            legend: vec![],
        };
        assert_eq!(render_text(&grid), "A\\B");
    }
}
