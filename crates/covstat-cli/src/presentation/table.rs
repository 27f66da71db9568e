use super::color::{Color, Painter};
use super::formatters::text::{clip, pad_end};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub width: usize,
    pub color: Color,
}

impl Column {
    pub fn new(header: impl Into<String>, width: usize, color: Color) -> Self {
        Self {
            header: header.into(),
            width,
            color,
        }
    }
}

/// Fixed-width table emitted line by line with no separators between cells.
///
/// Cells are clipped to `width - 1` characters so adjacent columns always
/// keep at least one space between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn header_line(&self, painter: &dyn Painter) -> String {
        self.columns
            .iter()
            .map(|column| painter.paint(&pad_end(&column.header, column.width), column.color))
            .collect()
    }

    /// `None` when the number of cells does not match the number of columns
    pub fn row_line<S: AsRef<str>>(&self, cells: &[S], painter: &dyn Painter) -> Option<String> {
        if cells.len() != self.columns.len() {
            return None;
        }

        let line = cells
            .iter()
            .zip(&self.columns)
            .map(|(cell, column)| {
                let clipped = clip(cell.as_ref(), column.width.saturating_sub(1));
                painter.paint(&pad_end(&clipped, column.width), column.color)
            })
            .collect();

        Some(line)
    }

    pub fn print_headers(&self, out: &mut dyn Write, painter: &dyn Painter) -> io::Result<()> {
        writeln!(out, "{}", self.header_line(painter))
    }

    /// Writes nothing for a row whose cell count mismatches the columns
    pub fn print_row<S: AsRef<str>>(
        &self,
        out: &mut dyn Write,
        painter: &dyn Painter,
        cells: &[S],
    ) -> io::Result<()> {
        match self.row_line(cells, painter) {
            Some(line) => writeln!(out, "{}", line),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::color::{AnsiPainter, PlainPainter};

    fn table() -> Table {
        Table::new(vec![
            Column::new("TERRITORY", 10, Color::Default),
            Column::new("CASES", 8, Color::Yellow),
        ])
    }

    #[test]
    fn test_header_line_pads_without_separator() {
        assert_eq!(table().header_line(&PlainPainter), "TERRITORY CASES   ");
    }

    #[test]
    fn test_long_cell_is_clipped_with_ellipsis() {
        let table = Table::new(vec![Column::new("NAME", 10, Color::Default)]);
        let line = table.row_line(&["HELLOWORLD123"], &PlainPainter).unwrap();

        assert_eq!(line, "HELLOW... ");
        assert_eq!(line.chars().count(), 10);
    }

    #[test]
    fn test_cell_at_limit_is_not_clipped() {
        let table = Table::new(vec![Column::new("NAME", 10, Color::Default)]);
        assert_eq!(
            table.row_line(&["ABCDEFGHI"], &PlainPainter).unwrap(),
            "ABCDEFGHI "
        );
        assert_eq!(
            table.row_line(&["ABCDEFGHIJ"], &PlainPainter).unwrap(),
            "ABCDEF... "
        );
    }

    #[test]
    fn test_row_with_wrong_cell_count_is_dropped() {
        let table = Table::new(vec![
            Column::new("A", 4, Color::Default),
            Column::new("B", 4, Color::Default),
            Column::new("C", 4, Color::Default),
            Column::new("D", 4, Color::Default),
        ]);
        assert_eq!(table.row_line(&["1", "2", "3"], &PlainPainter), None);

        let mut out = Vec::new();
        table
            .print_row(&mut out, &PlainPainter, &["1", "2", "3"])
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_row_emits_one_line() {
        let mut out = Vec::new();
        table()
            .print_row(&mut out, &PlainPainter, &["Peru".to_string(), "12".to_string()])
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Peru      12      \n");
    }

    #[test]
    fn test_each_cell_is_painted_in_its_column_color() {
        let line = table().row_line(&["Peru", "12"], &AnsiPainter).unwrap();
        assert!(line.starts_with("Peru      "));
        assert!(line.contains(&AnsiPainter.paint("12      ", Color::Yellow)));
    }
}
