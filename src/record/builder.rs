use chrono::{Duration, Local, NaiveDate};

use crate::cli::collector::Collect;
use crate::config::Config;
use crate::errors::LeaveError;
use crate::record::fields::{CellRef, Field, FieldValue, LeaveRecord};

// Cell coordinates are the template's fixed layout contract.
const NAME_CELL: CellRef = CellRef::new(0, 0, 0);
const DEPARTMENT_CELL: CellRef = CellRef::new(0, 0, 1);
const TODAY_CELL: CellRef = CellRef::new(0, 0, 2);
const STANDARD_TYPE_CELL: CellRef = CellRef::new(1, 1, 1);
const TOIL_TYPE_CELL: CellRef = CellRef::new(1, 2, 1);
const START_CELL: CellRef = CellRef::new(2, 3, 0);
const END_CELL: CellRef = CellRef::new(2, 3, 1);
const DURATION_CELL: CellRef = CellRef::new(2, 3, 2);
const BALANCE_CELL: CellRef = CellRef::new(2, 3, 3);
const REASON_CELL: CellRef = CellRef::new(3, 0, 0);

const TYPE_MARKER: &str = "X";
const DEFAULT_REASON: &str = "Holiday";

/// Per-run inputs, usually lifted straight from the CLI flags. Absent
/// values are collected interactively.
#[derive(Debug, Default, Clone)]
pub struct LeaveRequest {
    pub start_date: Option<String>,
    pub duration: Option<i64>,
    pub end_date: Option<String>,
    pub reason: Option<String>,
    pub toil: bool,
}

/// Resolves missing inputs via the collector and assembles the full
/// field-to-cell record.
pub fn build(
    config: &Config,
    request: &LeaveRequest,
    collector: &mut dyn Collect,
) -> Result<LeaveRecord, LeaveError> {
    let today = Local::now().date_naive();

    let start_input = match &request.start_date {
        Some(given) => given.clone(),
        None => collector.collect("Start date (YYYY-MM-DD)", &today.to_string())?,
    };
    let start_date = parse_date(&start_input)?;

    let duration = resolve_duration(request, start_date, collector)?;
    let end_date = start_date + Duration::days(duration);

    let reason = match &request.reason {
        Some(given) => given.clone(),
        None => collector.collect("reason for leave", DEFAULT_REASON)?,
    };

    // TOIL is recorded like any other leave but never debits the balance.
    let balance = if request.toil {
        config.remaining_days_leave
    } else {
        config.remaining_days_leave - duration
    };
    let type_cell = if request.toil {
        TOIL_TYPE_CELL
    } else {
        STANDARD_TYPE_CELL
    };

    tracing::info!(
        start = %start_date,
        days = duration,
        toil = request.toil,
        "assembled leave record"
    );

    LeaveRecord::new(vec![
        Field::new("name", FieldValue::Text(config.name.clone()), NAME_CELL),
        Field::new(
            "department",
            FieldValue::Text(config.department.clone()),
            DEPARTMENT_CELL,
        ),
        Field::new("today", FieldValue::Date(today), TODAY_CELL),
        Field::new("type", FieldValue::Text(TYPE_MARKER.into()), type_cell),
        Field::new("start_date", FieldValue::Date(start_date), START_CELL),
        Field::new("end_date", FieldValue::Date(end_date), END_CELL),
        Field::new("duration", FieldValue::Integer(duration), DURATION_CELL),
        Field::new("balance", FieldValue::Integer(balance), BALANCE_CELL),
        Field::new("reason", FieldValue::Text(reason), REASON_CELL),
    ])
}

fn parse_date(input: &str) -> Result<NaiveDate, LeaveError> {
    input
        .trim()
        .parse::<NaiveDate>()
        .map_err(|err| LeaveError::invalid_date(input, err))
}

/// Day count from whichever of duration/end date was supplied; prompts
/// for one when neither was.
fn resolve_duration(
    request: &LeaveRequest,
    start_date: NaiveDate,
    collector: &mut dyn Collect,
) -> Result<i64, LeaveError> {
    let duration = match (request.duration, &request.end_date) {
        (None, None) => {
            let input = collector.collect("number of days", "1")?;
            input
                .trim()
                .parse::<i64>()
                .map_err(|err| LeaveError::invalid_number(input.clone(), err))?
        }
        (Some(days), None) => days,
        (None, Some(end)) => {
            let end_date = parse_date(end)?;
            (end_date - start_date).num_days()
        }
        (Some(days), Some(end)) => {
            let end_date = parse_date(end)?;
            if start_date + Duration::days(days) != end_date {
                return Err(LeaveError::InvalidInput(format!(
                    "end date {end_date} disagrees with a duration of {days} days"
                )));
            }
            days
        }
    };
    if duration < 0 {
        return Err(LeaveError::InvalidInput(format!(
            "leave cannot end before it starts ({duration} days)"
        )));
    }
    Ok(duration)
}
