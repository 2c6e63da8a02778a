//! Named grid areas (`grid-template-areas`).
//!
//! Spec: §7.3 Named Areas
//! <https://www.w3.org/TR/css-grid-2/#grid-template-areas-property>

use std::collections::HashMap;

use crate::placement::GridArea;

/// Parsed `grid-template-areas`: the implied explicit grid size and each named
/// rectangle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateAreas {
    pub rows: usize,
    pub columns: usize,
    areas: HashMap<String, GridArea>,
}

impl TemplateAreas {
    /// Parse one string per row, cells separated by white space. A cell of one or more
    /// `.` characters is unnamed.
    ///
    /// # Errors
    /// Returns an error when rows have different cell counts or a name does not form a
    /// single filled rectangle.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, String> {
        let grid: Vec<Vec<&str>> = rows
            .iter()
            .map(|row| row.as_ref().split_whitespace().collect())
            .collect();
        let columns = grid.first().map_or(0, Vec::len);
        if let Some((index, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != columns) {
            return Err(format!(
                "row {index} has {} cells, expected {columns}",
                row.len()
            ));
        }
        let mut areas: HashMap<String, GridArea> = HashMap::new();
        for (row_idx, row) in grid.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                if cell.chars().all(|character| character == '.') {
                    continue;
                }
                let line_row = row_idx + 1;
                let line_col = col_idx + 1;
                areas
                    .entry((*cell).to_owned())
                    .and_modify(|area| {
                        area.row_start = area.row_start.min(line_row);
                        area.row_end = area.row_end.max(line_row + 1);
                        area.col_start = area.col_start.min(line_col);
                        area.col_end = area.col_end.max(line_col + 1);
                    })
                    .or_insert_with(|| GridArea::new(line_row, line_row + 1, line_col, line_col + 1));
            }
        }
        for (name, area) in &areas {
            let filled = (area.row_start..area.row_end).all(|line_row| {
                (area.col_start..area.col_end).all(|line_col| {
                    grid.get(line_row - 1)
                        .and_then(|row| row.get(line_col - 1))
                        .is_some_and(|cell| cell == name)
                })
            });
            if !filled {
                return Err(format!("area '{name}' is not a rectangle"));
            }
        }
        Ok(Self {
            rows: grid.len(),
            columns,
            areas,
        })
    }

    /// Area with the given name, as 1-based lines.
    pub fn get(&self, name: &str) -> Option<GridArea> {
        self.areas.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if named rectangles are not resolved to their lines.
    #[test]
    fn parses_named_rectangles() {
        let areas = TemplateAreas::parse(&["header header", "side main", ". main"])
            .unwrap_or_default();
        assert_eq!(areas.rows, 3);
        assert_eq!(areas.columns, 2);
        assert_eq!(areas.get("header"), Some(GridArea::new(1, 2, 1, 3)));
        assert_eq!(areas.get("main"), Some(GridArea::new(2, 4, 2, 3)));
        assert_eq!(areas.get("side"), Some(GridArea::new(2, 3, 1, 2)));
        assert_eq!(areas.get("footer"), None);
    }

    /// # Panics
    /// Panics if ragged rows or L-shaped areas are accepted.
    #[test]
    fn rejects_malformed_templates() {
        assert!(TemplateAreas::parse(&["a a", "b"]).is_err());
        assert!(TemplateAreas::parse(&["a a", "a b"]).is_err());
    }
}
