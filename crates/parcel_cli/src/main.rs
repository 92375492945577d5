//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `parcel_core` end to end against a real SQLite database.
//! - Keep output as deterministic `key=value` lines for quick sanity checks.
//!
//! Usage: `parcel_cli [DB_PATH] [LOG_DIR]`. Without a path an in-memory
//! database is used; without an absolute `LOG_DIR` file logging stays off.

use parcel_core::db::{open_db, open_db_in_memory};
use parcel_core::{ParcelService, RepoError, SqliteParcelRepository};
use std::error::Error;
use std::process::ExitCode;

const DEMO_CLIENT: i64 = 1000;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let db_path = args.next();
    let log_dir = args.next();

    match run(db_path, log_dir.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: Option<String>, log_dir: Option<&str>) -> Result<(), Box<dyn Error>> {
    println!("parcel_core version={}", parcel_core::core_version());
    if let Some(dir) = log_dir {
        start_logging(dir);
    }

    let conn = match db_path {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn)?);

    let parcel = service.register(DEMO_CLIENT, "Pskov, Voennaya 15")?;
    println!(
        "registered number={} client={} status={} created_at={}",
        parcel.number, parcel.client, parcel.status, parcel.created_at
    );

    service.change_address(parcel.number, "Saratov, Vesennyaya 28")?;
    println!("address_changed number={}", parcel.number);

    while let Some(status) = service.next_status(parcel.number)? {
        println!("status_changed number={} status={status}", parcel.number);
    }

    // Delivered parcels can no longer be deleted.
    match service.delete(parcel.number) {
        Err(RepoError::PreconditionFailed(number)) => {
            println!("delete_rejected number={number}");
        }
        Err(err) => return Err(err.into()),
        Ok(()) => println!("deleted number={}", parcel.number),
    }

    for stored in service.parcels_of(DEMO_CLIENT)? {
        println!(
            "client_parcel number={} status={} address={}",
            stored.number, stored.status, stored.address
        );
    }

    Ok(())
}

/// Starts core file logging; a failure is reported but does not stop the run.
fn start_logging(log_dir: &str) -> bool {
    match parcel_core::init_logging(parcel_core::default_log_level(), log_dir) {
        Ok(()) => {
            println!("logging=ok log_dir={log_dir}");
            true
        }
        Err(err) => {
            println!("logging=error error={err}");
            false
        }
    }
}
