//! kmap CLI - Command-line interface
//!
//! Commands:
//!   solve    - Build the Karnaugh map grid for an input file
//!   gray     - Print a Gray code sequence
//!   schema   - Print JSON schemas

mod cli;

use cli::*;
use kmap::{Result, VERSION};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    setup_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result: Result<()> = match args[1].as_str() {
        "solve" => cmd_solve(&args[2..]),
        "gray" => cmd_gray(&args[2..]),
        "schema" => cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("kmap {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr; `KMAP_LOG` (or `RUST_LOG`) sets the filter, default `warn`
fn setup_logging() {
    let filter = EnvFilter::try_from_env("KMAP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Tracing subscriber already set");
    }
}

fn print_usage() {
    println!(
        r#"
kmap - Karnaugh map grid model

USAGE:
    kmap <COMMAND> [OPTIONS]

COMMANDS:
    solve <input.yaml|json>          Build the grid for an input file
    gray <bits>                      Print the Gray sequence for a bit width
    schema [name]                    Print JSON schema (input, grid, config,
                                     solver-request, solver-response)
    version                          Print version

OPTIONS:
    --format <text|html|json>        Output format (default: text)
    --json, --html                   Shorthands for --format
    --output <file>                  Output file (default: stdout)
    --config <file>                  Config file (default: ./.kmap.yaml)

ENVIRONMENT:
    KMAP_LOG                         Log filter, e.g. "kmap=debug"

EXAMPLES:
    kmap solve majority.yaml
    kmap solve majority.yaml --html --output majority.html
    kmap gray 3
"#
    );
}
