use std::path::PathBuf;

use clap::Parser;

/// Populates the leave of absence form from the command line.
///
/// Flags left out are collected interactively.
#[derive(Debug, Parser)]
#[command(name = "leaveform", version, about)]
pub struct Args {
    /// Forces reinitialisation of the config file.
    #[arg(short, long)]
    pub init: bool,

    /// Start date in YYYY-MM-DD format.
    #[arg(short, long = "start_date")]
    pub start_date: Option<String>,

    /// End date in YYYY-MM-DD format.
    #[arg(short, long = "end_date")]
    pub end_date: Option<String>,

    /// Duration in days.
    #[arg(short, long)]
    pub duration: Option<i64>,

    /// Reason for leave.
    #[arg(short, long)]
    pub reason: Option<String>,

    /// Time off in lieu: the leave balance is left untouched.
    #[arg(short, long)]
    pub toil: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Template file to populate instead of the bundled one.
    #[arg(long)]
    pub template: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_flags() {
        let args = Args::parse_from([
            "leaveform",
            "--init",
            "--start_date",
            "2024-03-04",
            "--duration",
            "5",
            "--reason",
            "Holiday",
            "--toil",
        ]);
        assert!(args.init);
        assert_eq!(args.start_date.as_deref(), Some("2024-03-04"));
        assert_eq!(args.duration, Some(5));
        assert_eq!(args.reason.as_deref(), Some("Holiday"));
        assert!(args.toil);
        assert!(args.end_date.is_none());
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::parse_from(["leaveform"]);
        assert!(!args.init);
        assert!(!args.toil);
        assert!(args.start_date.is_none());
        assert!(args.duration.is_none());
    }
}
