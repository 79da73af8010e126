//! In-memory model of the leave form: tables of rows of text cells,
//! persisted as JSON. The real word-processor container format is outside
//! this crate's remit; only the table grid matters here.

mod populate;

pub use populate::{output_file_name, populate, PopulateOutcome};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::config::ensure_dir;
use crate::errors::LeaveError;
use crate::record::CellRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
}

impl Cell {
    fn guide(text: &str) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub tables: Vec<Table>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, LeaveError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), LeaveError> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Appends a value on a new line below whatever the cell already
    /// holds, so the template's guide text stays visible above it.
    pub fn append(&mut self, cell: CellRef, value: &str) -> Result<(), LeaveError> {
        let target = self
            .tables
            .get_mut(cell.table)
            .and_then(|table| table.rows.get_mut(cell.row))
            .and_then(|row| row.get_mut(cell.col))
            .ok_or(LeaveError::MissingCell {
                table: cell.table,
                row: cell.row,
                col: cell.col,
            })?;
        target.text = format!("{}\n{}", target.text, value);
        Ok(())
    }

    /// The template shipped with the tool, mirroring the fixed layout of
    /// the office leave form.
    pub fn bundled_template() -> Self {
        Self {
            tables: vec![
                Table {
                    rows: vec![vec![
                        Cell::guide("Name"),
                        Cell::guide("Department"),
                        Cell::guide("Date of request"),
                    ]],
                },
                Table {
                    rows: vec![
                        vec![Cell::guide("Leave type"), Cell::guide("Mark one")],
                        vec![Cell::guide("Annual leave"), Cell::guide("")],
                        vec![Cell::guide("Time off in lieu"), Cell::guide("")],
                    ],
                },
                Table {
                    rows: vec![
                        vec![
                            Cell::guide("Leave details"),
                            Cell::guide(""),
                            Cell::guide(""),
                            Cell::guide(""),
                        ],
                        vec![
                            Cell::guide("For office use"),
                            Cell::guide("Approved by"),
                            Cell::guide("Approval date"),
                            Cell::guide("Notes"),
                        ],
                        vec![
                            Cell::guide("First day"),
                            Cell::guide("Last day"),
                            Cell::guide("Working days"),
                            Cell::guide("Days remaining"),
                        ],
                        vec![
                            Cell::guide("First day of leave"),
                            Cell::guide("Last day of leave"),
                            Cell::guide("Working days taken"),
                            Cell::guide("Balance after leave"),
                        ],
                    ],
                },
                Table {
                    rows: vec![vec![Cell::guide("Reason for leave")]],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn append_accumulates_below_guide_text() {
        let mut doc = Document::bundled_template();
        doc.append(CellRef::new(0, 0, 0), "Samwise Gamgee").unwrap();
        doc.append(CellRef::new(0, 0, 0), "Samwise Gamgee").unwrap();
        assert_eq!(
            doc.tables[0].rows[0][0].text,
            "Name\nSamwise Gamgee\nSamwise Gamgee"
        );
    }

    #[test]
    fn append_outside_the_grid_fails() {
        let mut doc = Document::bundled_template();
        let err = doc.append(CellRef::new(7, 0, 0), "x").unwrap_err();
        assert!(matches!(err, LeaveError::MissingCell { table: 7, .. }));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("template.docx");

        let mut doc = Document::bundled_template();
        doc.append(CellRef::new(3, 0, 0), "Holiday").unwrap();
        doc.save(&path).unwrap();

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.tables[3].rows[0][0].text, "Reason for leave\nHoliday");
    }

    #[test]
    fn loading_a_missing_template_fails() {
        let dir = tempdir().unwrap();
        let err = Document::load(&dir.path().join("nope.docx")).unwrap_err();
        assert!(matches!(err, LeaveError::Io(_)));
    }
}
