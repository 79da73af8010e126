use std::{path::Path, process};

use clap::Parser;

use leaveform::{
    cli::{args::Args, collector::ConsoleCollector, output},
    config::ConfigStore,
    document::{self, Document},
    errors::LeaveError,
    record::{self, LeaveRequest},
};

const OUT_DIR: &str = "forms";

fn main() {
    leaveform::init();

    match run(Args::parse()) {
        Ok(()) => {}
        Err(LeaveError::Aborted) => {
            output::info("Aborted.");
            process::exit(130);
        }
        Err(err) => {
            output::error(err);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<(), LeaveError> {
    let store = match args.config {
        Some(path) => ConfigStore::at_path(path),
        None => ConfigStore::new()?,
    };
    let mut collector = ConsoleCollector::new();

    let config = store.load_or_init(&mut collector, args.init)?;

    let request = LeaveRequest {
        start_date: args.start_date,
        duration: args.duration,
        end_date: args.end_date,
        reason: args.reason,
        toil: args.toil,
    };
    let record = record::build(&config, &request, &mut collector)?;

    let template = match &args.template {
        Some(path) => Document::load(path)?,
        None => Document::bundled_template(),
    };
    let outcome = document::populate(&record, template, Path::new(OUT_DIR), &store)?;

    output::success(format!("Saved {}", outcome.path.display()));
    output::info(format!(
        "You have {} days holiday remaining.",
        outcome.config.remaining_days_leave
    ));
    Ok(())
}
