// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ref_alloc::{MAXIMUM_NUMBER_OF_OFFICIALS, RegistryLimits, ScheduleRegistry, WEEKS_IN_A_SEASON};
use ref_alloc_api::{
    AllocationCount, LoadReport, ScheduleReport, allocation_summary, fixtures_report,
    load_officials, officials_report, officials_table, schedule_requests, snapshot_json,
};
use std::path::PathBuf;
use tracing::info;

/// Referee allocation batch runner
///
/// Loads the officials file, schedules any requested fixtures and writes the
/// updated officials file and the fixtures report.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Officials file to load, one record per line
    #[arg(short, long, default_value = "RefereesIn.txt")]
    officials: PathBuf,

    /// Fixture requests to schedule, one `week venue level` line each
    #[arg(short, long)]
    fixtures: Option<PathBuf>,

    /// Where to write the updated officials file
    #[arg(long, default_value = "RefereesOut.txt")]
    officials_out: PathBuf,

    /// Where to write the fixtures report
    #[arg(long, default_value = "MatchAllocs.txt")]
    fixtures_out: PathBuf,

    /// Where to write a JSON snapshot of the registry
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Maximum number of officials the registry accepts
    #[arg(long, default_value_t = MAXIMUM_NUMBER_OF_OFFICIALS)]
    max_officials: usize,

    /// Number of weeks in the season
    #[arg(long, default_value_t = WEEKS_IN_A_SEASON)]
    weeks: u8,

    /// Print the officials table and allocation chart to stdout
    #[arg(long)]
    table: bool,
}

impl Args {
    /// Registry limits selected on the command line.
    const fn limits(&self) -> RegistryLimits {
        RegistryLimits::new(self.max_officials, self.weeks)
    }
}

/// The registry after a batch run, with what was loaded and scheduled.
#[derive(Debug)]
struct Batch {
    registry: ScheduleRegistry,
    load: LoadReport,
    schedule: Option<ScheduleReport>,
}

/// Loads officials and schedules the requested fixtures into a fresh registry.
fn run_batch(officials_input: &str, requests_input: Option<&str>, limits: RegistryLimits) -> Batch {
    let mut registry: ScheduleRegistry = ScheduleRegistry::with_limits(limits);
    let load: LoadReport = load_officials(officials_input, &mut registry);
    let schedule: Option<ScheduleReport> =
        requests_input.map(|input| schedule_requests(input, &mut registry));

    Batch {
        registry,
        load,
        schedule,
    }
}

/// Renders assignment counts as a horizontal bar chart.
fn allocation_chart(summary: &[AllocationCount]) -> String {
    let mut chart: String = String::new();
    for count in summary {
        let bar: String = "#".repeat(usize::try_from(count.assignments).unwrap_or(usize::MAX));
        chart.push_str(&format!("{:<6}{:>3} {bar}\n", count.id, count.assignments));
    }
    chart
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Loading officials from {}", args.officials.display());
    let officials_input: String = std::fs::read_to_string(&args.officials)?;
    let requests_input: Option<String> = args
        .fixtures
        .as_ref()
        .map(std::fs::read_to_string)
        .transpose()?;

    let batch: Batch = run_batch(&officials_input, requests_input.as_deref(), args.limits());
    info!(
        loaded = batch.load.loaded.len(),
        rejected = batch.load.failures.len(),
        scheduled = batch.schedule.as_ref().map_or(0, |s| s.scheduled.len()),
        "Batch complete"
    );

    std::fs::write(&args.officials_out, officials_report(&batch.registry))?;
    info!("Wrote officials to {}", args.officials_out.display());
    std::fs::write(&args.fixtures_out, fixtures_report(&batch.registry))?;
    info!("Wrote fixtures to {}", args.fixtures_out.display());

    if let Some(path) = &args.snapshot {
        std::fs::write(path, snapshot_json(&batch.registry)?)?;
        info!("Wrote snapshot to {}", path.display());
    }

    if args.table {
        print!("{}", officials_table(&batch.registry));
        println!();
        print!("{}", allocation_chart(&allocation_summary(&batch.registry)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    const OFFICIALS: &str = "\
JS1 John Smith NJB2 3 North YNN
JS2 Jane Smith NJB1 1 North YYN
MK1 Mary King IJB3 0 Central YYY
";

    #[test]
    fn test_args_defaults() {
        let args: Args = Args::try_parse_from(["ref-alloc"]).unwrap();

        assert_eq!(args.officials, PathBuf::from("RefereesIn.txt"));
        assert_eq!(args.officials_out, PathBuf::from("RefereesOut.txt"));
        assert_eq!(args.fixtures_out, PathBuf::from("MatchAllocs.txt"));
        assert!(args.fixtures.is_none());
        assert!(args.snapshot.is_none());
        assert_eq!(args.limits(), RegistryLimits::default());
    }

    #[test]
    fn test_args_limit_overrides() {
        let args: Args = Args::try_parse_from([
            "ref-alloc",
            "--officials",
            "in.txt",
            "--fixtures",
            "requests.txt",
            "--max-officials",
            "20",
            "--weeks",
            "30",
        ])
        .unwrap();

        assert_eq!(args.fixtures, Some(PathBuf::from("requests.txt")));
        assert_eq!(args.limits(), RegistryLimits::new(20, 30));
    }

    #[test]
    fn test_run_batch_without_requests() {
        let batch: Batch = run_batch(OFFICIALS, None, RegistryLimits::default());

        assert_eq!(batch.load.loaded.len(), 3);
        assert!(batch.schedule.is_none());
        assert_eq!(officials_report(&batch.registry), OFFICIALS);
    }

    #[test]
    fn test_run_batch_schedules_requests() {
        let batch: Batch = run_batch(
            OFFICIALS,
            Some("1 North Junior\n53 North Junior\n"),
            RegistryLimits::default(),
        );

        let schedule: ScheduleReport = batch.schedule.unwrap();
        assert_eq!(schedule.scheduled.len(), 1);
        assert_eq!(schedule.failures.len(), 1);
        assert_eq!(schedule.failures[0].line, 2);
        assert_eq!(
            officials_report(&batch.registry),
            "\
JS1 John Smith NJB2 4 North YNN
JS2 Jane Smith NJB1 2 North YYN
MK1 Mary King IJB3 0 Central YYY
"
        );
    }

    #[test]
    fn test_run_batch_respects_short_season() {
        let batch: Batch = run_batch(
            OFFICIALS,
            Some("10 North Junior\n"),
            RegistryLimits::new(12, 8),
        );

        assert!(batch.registry.fixtures().is_empty());
        assert_eq!(batch.schedule.unwrap().failures.len(), 1);
    }

    #[test]
    fn test_allocation_chart() {
        let summary: Vec<AllocationCount> = vec![
            AllocationCount {
                id: String::from("JS1"),
                assignments: 3,
            },
            AllocationCount {
                id: String::from("MK1"),
                assignments: 0,
            },
        ];

        assert_eq!(allocation_chart(&summary), "JS1     3 ###\nMK1     0 \n");
    }
}
