//! CLI probe for the salary normalizer.
//!
//! # Responsibility
//! - Convert one typed amount from the command line and print both views.
//! - Optionally persist/read the preferred unit in a SQLite file.
//! - Optionally write core events to rolling logs under `--log-dir`.
//!
//! Usage: `jobcoach_cli [--db <path>] [--log-dir <abs dir>] <unit|-> <amount>`

use jobcoach_core::db::open_db;
use jobcoach_core::{
    core_version, default_log_level, init_logging, parse_input_detailed, to_display_string,
    SalaryUnit, SqlitePreferenceStore, UnitPreferenceStore,
};
use std::process::ExitCode;

const USAGE: &str = "usage: jobcoach_cli [--db <path>] [--log-dir <abs dir>] <ANNUAL_GROSS_SALARY|MONTHLY_NET_SALARY|HOURLY_NET_SALARY|-> <amount>";

#[derive(Debug)]
struct Args {
    db_path: Option<String>,
    log_dir: Option<String>,
    unit: Option<SalaryUnit>,
    amount: String,
}

fn main() -> ExitCode {
    let raw_args = std::env::args().skip(1).collect::<Vec<_>>();
    if raw_args.is_empty() {
        println!("jobcoach_core version={}", core_version());
        return ExitCode::SUCCESS;
    }

    let outcome = parse_args(raw_args).and_then(|args| {
        start_logging(args.log_dir.as_deref())?;
        run(args)
    });
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(raw_args: Vec<String>) -> Result<Args, String> {
    let mut db_path = None;
    let mut log_dir = None;
    let mut positional = Vec::new();
    let mut iter = raw_args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--db" {
            db_path = Some(iter.next().ok_or("--db expects a path")?);
        } else if arg == "--log-dir" {
            log_dir = Some(iter.next().ok_or("--log-dir expects a directory")?);
        } else {
            positional.push(arg);
        }
    }

    let [unit, amount]: [String; 2] = positional.try_into().map_err(|_| USAGE.to_string())?;
    let unit = if unit == "-" {
        None
    } else {
        Some(unit.parse::<SalaryUnit>().map_err(|err| err.to_string())?)
    };

    Ok(Args {
        db_path,
        log_dir,
        unit,
        amount,
    })
}

fn start_logging(log_dir: Option<&str>) -> Result<(), String> {
    match log_dir {
        Some(dir) => init_logging(default_log_level(), dir)
            .map_err(|err| format!("failed to start logging: {err}")),
        None => Ok(()),
    }
}

fn run(args: Args) -> Result<(), String> {
    let unit = match args.db_path.as_deref() {
        Some(path) => {
            let conn = open_db(path).map_err(|err| format!("failed to open `{path}`: {err}"))?;
            let store = SqlitePreferenceStore::new(&conn);
            match args.unit {
                Some(unit) => {
                    store
                        .set_preferred_unit(unit)
                        .map_err(|err| format!("failed to save preference: {err}"))?;
                    unit
                }
                None => store
                    .preferred_unit()
                    .map_err(|err| format!("failed to read preference: {err}"))?
                    .unwrap_or_default(),
            }
        }
        None => args.unit.unwrap_or_default(),
    };

    let parsed = parse_input_detailed(&args.amount, unit);
    println!("unit={unit}");
    println!("canonical={}", parsed.canonical);
    println!("display={}", to_display_string(Some(parsed.canonical), unit));
    if parsed.was_cleaned {
        println!("cleaned=true");
    }
    Ok(())
}
