use std::fmt;

/// Widest a single cell may render; longer values get an ellipsis.
const MAX_CELL_WIDTH: usize = 60;

/// Fixed-width plain-text table for list commands. Column widths follow the
/// longest cell, separator and gutter included, so output lines up in any
/// monospace terminal without cursor tricks.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(|cell| clip(cell.into())).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|header| header.chars().count())
            .collect();
        for row in &self.rows {
            for (cell, width) in row.iter().zip(widths.iter_mut()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn clip(cell: String) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell;
    }
    let mut clipped: String = cell.chars().take(MAX_CELL_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i == last {
            // No trailing padding on the final column.
            writeln!(f, "{cell}")?;
        } else {
            let pad = width - cell.chars().count();
            write!(f, "{cell}{:pad$}  ", "")?;
        }
    }
    Ok(())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_line(f, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(f, &rule, &widths)?;
        for row in &self.rows {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let mut table = Table::new(["id", "title"]);
        table.row(["7", "short"]);
        table.row(["1234", "a longer title"]);
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "id    title");
        assert_eq!(lines[1], "----  --------------");
        assert_eq!(lines[2], "7     short");
        assert_eq!(lines[3], "1234  a longer title");
    }

    #[test]
    fn short_rows_are_padded_with_blanks() {
        let mut table = Table::new(["a", "b", "c"]);
        table.row(["1"]);
        assert_eq!(table.len(), 1);
        let rendered = table.to_string();
        assert!(rendered.lines().count() == 3);
    }

    #[test]
    fn long_cells_are_clipped_with_ellipsis() {
        let mut table = Table::new(["title"]);
        table.row(["x".repeat(200)]);
        let rendered = table.to_string();
        let last = rendered.lines().last().unwrap();
        assert_eq!(last.chars().count(), MAX_CELL_WIDTH);
        assert!(last.ends_with('…'));
    }
}
