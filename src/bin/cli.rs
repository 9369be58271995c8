//! Roster CLI
//!
//! Command-line interface over a Roster data file.

use clap::{Parser, Subcommand};
use roster::{Config, Record, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster CLI
#[derive(Parser, Debug)]
#[command(name = "roster-cli")]
#[command(about = "CLI for the Roster employee store")]
#[command(version)]
struct Args {
    /// Data file (one employee per line)
    #[arg(short, long, default_value = "./roster_data/employees.jsonl")]
    data_file: String,

    /// Skip fsync after saving
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List employees in id order
    List,

    /// List department names
    Departments,

    /// Print the salary budget of a department
    Budget {
        /// Department name
        department: String,
    },

    /// List the managers with the highest factor
    TopManagers,

    /// Add an employee from a JSON line
    Add {
        /// e.g. {"kind":"Employee","id":1,"basic_salary":1000,"department":"IT"}
        line: String,
    },

    /// Remove an employee by id
    Remove {
        /// Employee id
        id: u64,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,roster=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> roster::Result<()> {
    let config = Config::builder()
        .data_file(&args.data_file)
        .sync_on_save(!args.no_sync)
        .build();

    let store = Store::with_config(config)?;

    if store.config().data_file.exists() {
        let restored = store.restore()?;
        tracing::debug!("Loaded {} employees from {}", restored, args.data_file);
    }

    match args.command {
        Commands::List => {
            for record in store.iter() {
                println!(
                    "{:>8}  {:<14} {:<16} {:>10}",
                    record.id(),
                    record.kind(),
                    record.department(),
                    record.compute_salary()
                );
            }
        }
        Commands::Departments => {
            for department in store.departments() {
                println!("{}", department);
            }
        }
        Commands::Budget { department } => {
            println!("{}", store.department_budget(&department));
        }
        Commands::TopManagers => {
            for manager in store.managers_with_most_factor() {
                println!("{}", manager.to_line()?);
            }
        }
        Commands::Add { line } => {
            let record = store.registry().parse(&line)?;
            let id = record.id();
            store.add(record)?;
            store.save()?;
            tracing::info!("Added employee {}", id);
        }
        Commands::Remove { id } => {
            let removed = store.remove(id)?;
            store.save()?;
            println!("{}", removed.to_line()?);
        }
    }

    Ok(())
}
