//! Terminal front-end for the taskpad to-do list.

mod command;
mod session;
mod terminal;

use clap::Parser;
use log::error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use taskpad_core::{default_log_level, init_logging, MemoryKvStore, SqliteKvStore};

const DEFAULT_DB_FILE: &str = "taskpad.sqlite3";

/// Keep a to-do list in a local SQLite file
#[derive(Parser)]
#[command(name = "taskpad", version = taskpad_core::core_version())]
struct Cli {
    /// Database file holding the task list
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    /// Keep tasks in memory only; nothing survives the session
    #[arg(long)]
    memory: bool,

    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("taskpad: {err}");
            return ExitCode::FAILURE;
        }
    }

    let stdin = io::stdin();
    let result = if cli.memory {
        session::run_session(MemoryKvStore::new(), stdin.lock(), io::stdout())
    } else {
        match SqliteKvStore::open(&cli.db) {
            Ok(kv) => session::run_session(kv, stdin.lock(), io::stdout()),
            Err(err) => {
                eprintln!("taskpad: cannot open `{}`: {err}", cli.db.display());
                return ExitCode::FAILURE;
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_end module=cli status=error error={err}");
            eprintln!("taskpad: {err}");
            ExitCode::FAILURE
        }
    }
}
