use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, error, info, warn};
use timetable_core::demo::DEMO_CATALOG;
use timetable_core::{Catalog, CpSatEngine, ModelOptions, ScheduleError, SolverConfig, diagnose_infeasibility, schedule};

/// Builds a weekly timetable and assigns teachers to it. The schedule is printed as JSON.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Catalog JSON file. The built-in demo catalog is used when omitted.
    catalog: Option<PathBuf>,

    /// Write the schedule here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Wall-clock limit for the solver, in seconds.
    #[arg(long, default_value_t = 60.0)]
    time_limit: f64,

    #[arg(long, default_value_t = 8)]
    workers: i32,

    #[arg(long, default_value_t = 42)]
    seed: i32,

    /// Let the solver log its search.
    #[arg(long)]
    log_search: bool,

    /// No group attends more than this many consecutive slots.
    #[arg(long, default_value_t = 3)]
    max_consecutive: usize,

    /// Drop the consecutive-slot limit altogether.
    #[arg(long, conflicts_with = "max_consecutive")]
    no_consecutive_limit: bool,

    /// On infeasibility, re-solve with constraint families disabled to find the culprit.
    #[arg(long)]
    diagnose: bool,

    #[arg(long, short)]
    verbose: bool,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing catalog {}", path.display()))
        }
        None => {
            info!("No catalog given, using the demo catalog");
            Ok(DEMO_CATALOG.clone())
        }
    }
}

fn run(args: Args) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_ref())?;
    let options = ModelOptions {
        max_consecutive_slots: (!args.no_consecutive_limit).then_some(args.max_consecutive),
        ..ModelOptions::default()
    };
    let engine = CpSatEngine::new(SolverConfig {
        time_limit_secs: args.time_limit,
        num_workers: args.workers,
        random_seed: args.seed,
        log_search_progress: args.log_search,
    });

    let solved = match schedule(&catalog, options, &engine) {
        Ok(solved) => solved,
        Err(err @ ScheduleError::NoFeasibleSchedule(_)) => {
            if args.diagnose {
                for attempt in diagnose_infeasibility(&catalog, options, &engine)? {
                    warn!("{:?} => {}", attempt.toggles, attempt.status);
                }
            }
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    let json = serde_json::to_string_pretty(&solved)?;
    match args.output {
        Some(path) => std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    configure_logging(args.verbose);
    if let Err(e) = run(args) {
        error!("Execution failed, error: {e:#}");
        std::process::exit(1);
    }
}
