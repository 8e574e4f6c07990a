use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "payrange-cmd")]
#[command(about = "Command-line utility for exercising payrange containers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a container from random payroll data and hammer it from
    /// concurrent worker threads
    Demo {
        /// Number of records in the generated dataset
        #[arg(long, default_value_t = 32000)]
        records: usize,

        /// Lowest generated net-pay value
        #[arg(long, default_value_t = 1000)]
        min_value: i64,

        /// Highest generated net-pay value (exclusive)
        #[arg(long, default_value_t = 1_000_000)]
        max_value: i64,

        /// Number of concurrent worker threads
        #[arg(short, long, default_value_t = 15)]
        workers: usize,

        /// Queries issued by each worker
        #[arg(short, long, default_value_t = 100)]
        iterations: usize,
    },

    /// Run one batch of queries against both storage strategies and compare
    Bench {
        /// Number of records in the generated dataset
        #[arg(long, default_value_t = 32000)]
        records: usize,

        /// Number of queries in the batch
        #[arg(short, long, default_value_t = 1000)]
        queries: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            records,
            min_value,
            max_value,
            workers,
            iterations,
        } => commands::demo::run(records, min_value, max_value, workers, iterations),
        Commands::Bench { records, queries } => commands::bench::run(records, queries),
    }
}
