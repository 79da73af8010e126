use chrono::NaiveDate;
use std::fmt;

use crate::errors::LeaveError;

/// Target cell of a field inside the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub table: usize,
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(table: usize, row: usize, col: usize) -> Self {
        Self { table, row, col }
    }
}

/// Value carried by a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Date(date) => write!(f, "{}", format_date(*date)),
        }
    }
}

/// Dates go into the form as `DD/MM/YYYY`, the ISO segments reversed.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub value: FieldValue,
    pub cell: CellRef,
}

impl Field {
    pub fn new(name: &'static str, value: FieldValue, cell: CellRef) -> Self {
        Self { name, value, cell }
    }
}

/// One run's worth of form fields, each mapped to a distinct cell.
#[derive(Debug, Clone)]
pub struct LeaveRecord {
    fields: Vec<Field>,
}

impl LeaveRecord {
    /// Builds the record, rejecting any two fields that target the same
    /// cell or share a name.
    pub fn new(fields: Vec<Field>) -> Result<Self, LeaveError> {
        for (i, field) in fields.iter().enumerate() {
            for other in &fields[..i] {
                if other.cell == field.cell {
                    return Err(LeaveError::InvalidInput(format!(
                        "fields `{}` and `{}` target the same cell",
                        other.name, field.name
                    )));
                }
                if other.name == field.name {
                    return Err(LeaveError::InvalidInput(format!(
                        "duplicate field `{}`",
                        field.name
                    )));
                }
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Rendered value of a field, as it will appear in the document.
    pub fn display_value(&self, name: &str) -> Option<String> {
        self.get(name).map(|field| field.value.to_string())
    }

    /// The balance to persist after a successful save.
    pub fn resulting_balance(&self) -> Option<i64> {
        match self.get("balance")?.value {
            FieldValue::Integer(n) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_reverses_iso_segments() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_date(date), "04/03/2024");
    }

    #[test]
    fn format_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let formatted = format_date(date);
        let parsed = NaiveDate::parse_from_str(&formatted, "%d/%m/%Y").unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn overlapping_cells_are_rejected() {
        let fields = vec![
            Field::new("a", FieldValue::Integer(1), CellRef::new(0, 0, 0)),
            Field::new("b", FieldValue::Integer(2), CellRef::new(0, 0, 0)),
        ];
        assert!(LeaveRecord::new(fields).is_err());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let fields = vec![
            Field::new("a", FieldValue::Integer(1), CellRef::new(0, 0, 0)),
            Field::new("a", FieldValue::Integer(2), CellRef::new(0, 0, 1)),
        ];
        assert!(LeaveRecord::new(fields).is_err());
    }
}
