//! Table accumulation between `%` and `/%` lines.

use crate::error::{Error, Result, TableStateKind};
use crate::model::{Alignment, Table, TableCell};

use super::inline::{apply_emphasis, cell_breaks};

/// Opening table token.
pub const TABLE_OPEN: &str = "%";
/// Closing table token.
pub const TABLE_CLOSE: &str = "/%";
/// Cell separator within a row.
pub const CELL_SEPARATOR: char = '|';
/// Alignment marker: leading for left, trailing for right.
pub const ALIGN_MARKER: char = ':';
/// Cell content that merges the cell into its left neighbour.
pub const MERGE_LEFT: &str = "<";
/// Cell content that merges the cell into the cell above.
pub const MERGE_UP: &str = "^";

const NAME_ATTRIBUTE: &str = "name";
const NAME_JOINER: char = '_';

/// Builds one table at a time and numbers them.
#[derive(Debug)]
pub struct TableBuilder {
    current: Option<Table>,
    next_id: u32,
}

impl TableBuilder {
    /// Create a builder with no open table.
    pub fn new() -> Self {
        Self {
            current: None,
            next_id: 1,
        }
    }

    /// Check if a table is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Open a new table from its attribute line.
    ///
    /// Attributes are space separated `key:value` pairs; the `%` tokens are
    /// ignored. In `name`, `_` stands for a space.
    pub fn open(&mut self, line: &str, line_no: usize) -> Result<()> {
        if self.is_open() {
            return Err(Error::TableState {
                line: line_no,
                kind: TableStateKind::AlreadyOpen,
            });
        }

        let mut table = Table::new(self.next_id);
        for attribute in line.replace(TABLE_OPEN, "").split_whitespace() {
            let (key, value) = split_attribute(attribute).ok_or_else(|| {
                Error::MalformedTableAttribute {
                    line: line_no,
                    attribute: attribute.to_string(),
                }
            })?;
            if key == NAME_ATTRIBUTE {
                table.name = Some(value.replace(NAME_JOINER, " "));
            } else {
                table.attributes.insert(key.to_string(), value.to_string());
            }
        }

        log::debug!("Opened table {} ({:?})", table.id, table.name);
        self.next_id += 1;
        self.current = Some(table);
        Ok(())
    }

    /// Add a raw row line to the open table.
    pub fn add_row(&mut self, line: &str, line_no: usize) -> Result<()> {
        let table = self.current.as_mut().ok_or(Error::TableState {
            line: line_no,
            kind: TableStateKind::NotOpen,
        })?;
        table.add_row(line.split(CELL_SEPARATOR).map(parse_cell).collect());
        Ok(())
    }

    /// Close the open table, resolving merge markers.
    pub fn close(&mut self, line_no: usize) -> Result<Table> {
        let mut table = self.current.take().ok_or(Error::TableState {
            line: line_no,
            kind: TableStateKind::NotOpen,
        })?;
        let before = table.cell_count();
        merge_spans(&mut table)?;
        log::debug!(
            "Closed table {}: {} rows, {} cells merged away",
            table.id,
            table.row_count(),
            before - table.cell_count()
        );
        Ok(table)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn split_attribute(attribute: &str) -> Option<(&str, &str)> {
    let mut pieces = attribute.split(ALIGN_MARKER);
    match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(key), Some(value), None) => Some((key, value)),
        _ => None,
    }
}

/// Parse one raw cell.
pub fn parse_cell(raw: &str) -> TableCell {
    let mut text = raw.trim();
    let mut alignment = Alignment::Center;
    if let Some(rest) = text.strip_prefix(ALIGN_MARKER) {
        alignment = Alignment::Left;
        text = rest;
    } else if let Some(rest) = text.strip_suffix(ALIGN_MARKER) {
        alignment = Alignment::Right;
        text = rest;
    }

    TableCell::new(cell_breaks(&apply_emphasis(text.trim()))).align(alignment)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeMarker {
    Left,
    Up,
}

impl MergeMarker {
    fn of(cell: &TableCell) -> Option<Self> {
        match cell.content.as_str() {
            MERGE_LEFT => Some(MergeMarker::Left),
            MERGE_UP => Some(MergeMarker::Up),
            _ => None,
        }
    }
}

/// Resolve merge markers in place.
///
/// Rows are visited from last to first and cells within a row from last to
/// first. A removal therefore only shifts cells that were already visited,
/// and an up-merge always targets the previous row before that row's own
/// markers are resolved, at the same raw column index.
pub fn merge_spans(table: &mut Table) -> Result<()> {
    for y in (0..table.rows.len()).rev() {
        for x in (0..table.rows[y].len()).rev() {
            let Some(marker) = MergeMarker::of(&table.rows[y][x]) else {
                continue;
            };
            let dangling = Error::DanglingMerge {
                table: table.id,
                row: y,
                column: x,
            };
            match marker {
                MergeMarker::Left => {
                    if x == 0 {
                        return Err(dangling);
                    }
                    let cell = table.rows[y].remove(x);
                    table.rows[y][x - 1].colspan += cell.colspan;
                }
                MergeMarker::Up => {
                    if y == 0 || table.rows[y - 1].len() <= x {
                        return Err(dangling);
                    }
                    let cell = table.rows[y].remove(x);
                    table.rows[y - 1][x].rowspan += cell.rowspan;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(table: &Table) -> Vec<Vec<&str>> {
        table
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.content.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_open_parses_attributes() {
        let mut builder = TableBuilder::new();
        builder
            .open("% name:Πίνακας_Υλικού widths:30,70 %", 4)
            .unwrap();
        let table = builder.close(5).unwrap();

        assert_eq!(table.id, 1);
        assert_eq!(table.name.as_deref(), Some("Πίνακας Υλικού"));
        assert_eq!(table.attribute("widths"), Some("30,70"));
        assert!(table.attribute("name").is_none());
    }

    #[test]
    fn test_ids_increase() {
        let mut builder = TableBuilder::new();
        builder.open("%", 1).unwrap();
        let first = builder.close(2).unwrap();
        builder.open("%", 3).unwrap();
        let second = builder.close(4).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.name.is_none());
    }

    #[test]
    fn test_malformed_attribute() {
        let mut builder = TableBuilder::new();
        let err = builder.open("% border", 9).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedTableAttribute { line: 9, ref attribute } if attribute == "border"
        ));
        assert!(!builder.is_open());
    }

    #[test]
    fn test_state_errors() {
        let mut builder = TableBuilder::new();
        assert!(matches!(
            builder.add_row("a | b", 2),
            Err(Error::TableState {
                kind: TableStateKind::NotOpen,
                ..
            })
        ));
        assert!(matches!(
            builder.close(3),
            Err(Error::TableState {
                kind: TableStateKind::NotOpen,
                ..
            })
        ));

        builder.open("%", 4).unwrap();
        assert!(matches!(
            builder.open("%", 5),
            Err(Error::TableState {
                kind: TableStateKind::AlreadyOpen,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_cell_alignment() {
        let left = parse_cell(" :Όνομα ");
        assert_eq!(left.alignment, Alignment::Left);
        assert_eq!(left.content, "Όνομα");

        let right = parse_cell(" 12,50 : ");
        assert_eq!(right.alignment, Alignment::Right);
        assert_eq!(right.content, "12,50");

        let center = parse_cell("*Σύνολο*");
        assert_eq!(center.alignment, Alignment::Center);
        assert_eq!(center.content, "<b>Σύνολο</b>");

        assert_eq!(parse_cell("   ").content, "");
    }

    #[test]
    fn test_parse_cell_breaks() {
        let cell = parse_cell("Α;Β");
        assert_eq!(cell.content, "Α<br>Β");
    }

    #[test]
    fn test_merge_two_by_two() {
        let mut builder = TableBuilder::new();
        builder.open("%", 1).unwrap();
        builder.add_row("a | <", 2).unwrap();
        builder.add_row("^ | d", 3).unwrap();
        let table = builder.close(4).unwrap();

        assert_eq!(table.cell_count(), 2);
        assert_eq!(contents(&table), vec![vec!["a"], vec!["d"]]);
        assert_eq!(table.rows[0][0].colspan, 2);
        assert_eq!(table.rows[0][0].rowspan, 2);
        assert_eq!(table.rows[1][0].colspan, 1);
    }

    #[test]
    fn test_merge_chains_left() {
        let mut builder = TableBuilder::new();
        builder.open("%", 1).unwrap();
        builder.add_row("Τίτλος | < | <", 2).unwrap();
        builder.add_row("a | b | c", 3).unwrap();
        let table = builder.close(4).unwrap();

        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[0][0].colspan, 3);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_merge_chains_up() {
        let mut builder = TableBuilder::new();
        builder.open("%", 1).unwrap();
        builder.add_row("a | b", 2).unwrap();
        builder.add_row("^ | c", 3).unwrap();
        builder.add_row("^ | d", 4).unwrap();
        let table = builder.close(5).unwrap();

        assert_eq!(table.rows[0][0].rowspan, 3);
        assert_eq!(contents(&table), vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn test_dangling_merges() {
        let mut table = Table::new(7);
        table.add_row(vec![TableCell::new("<"), TableCell::new("b")]);
        assert!(matches!(
            merge_spans(&mut table),
            Err(Error::DanglingMerge {
                table: 7,
                row: 0,
                column: 0
            })
        ));

        let mut table = Table::new(8);
        table.add_row(vec![TableCell::new("a")]);
        table.add_row(vec![TableCell::new("b"), TableCell::new("^")]);
        assert!(matches!(
            merge_spans(&mut table),
            Err(Error::DanglingMerge { row: 1, column: 1, .. })
        ));
    }
}
