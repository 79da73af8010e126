//! The leave record: every semantic field of the form paired with the
//! template cell it lands in.

mod builder;
mod fields;

pub use builder::{build, LeaveRequest};
pub use fields::{format_date, CellRef, Field, FieldValue, LeaveRecord};
