use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, bail};
use antstack::solver::{self, Arrangement};
use antstack::{Scanner, Task, Writer, generator, testing};
use clap::{Parser, Subcommand};
use log::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "antstack")]
#[command(about = "Ant Stack contest solutions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve contest input and print one `Case #n` line per test case
    Solve {
        /// Solver to run: large or small
        solver: String,
        /// Keep the input order of the ants instead of picking any subset in any order
        #[arg(long)]
        ordered: bool,
        /// Read the input from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the lightest possible stack for a weight limit
    Generate {
        #[arg(long, default_value_t = solver::large::WEIGHT_LIMIT)]
        max_weight: u64,
        /// Also print every weight, top to bottom
        #[arg(long)]
        list: bool,
    },
    /// Run the fixtures under the data directory against a solver
    Verify {
        /// Solver to run: large or small
        solver: String,
        #[arg(long, default_value = "data")]
        data: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // logs go to stderr, filtered by the RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let begin = Instant::now();

    match cli.command {
        Commands::Solve {
            solver: name,
            ordered,
            input,
        } => {
            let task = find_task(&name)?;
            let arrangement = if ordered {
                Arrangement::LineOrder
            } else {
                Arrangement::Subset
            };

            let mut scanner = match &input {
                Some(path) => Scanner::new(BufReader::new(
                    File::open(path).with_context(|| format!("could not open {}", path.display()))?,
                )),
                None => Scanner::new(io::stdin().lock()),
            };
            let mut writer = Writer::new();

            task(&mut scanner, &mut writer, arrangement)
                .with_context(|| format!("solver `{name}` failed on the input"))?;
            writer.write_to(&mut io::stdout().lock())?;
        }
        Commands::Generate { max_weight, list } => {
            let stack = generator::lightest_stack(max_weight);
            let total: u128 = stack.iter().map(|&w| u128::from(w)).sum();
            println!("{} ants, total weight {}", stack.len(), total);
            if list {
                for weight in &stack {
                    println!("{weight}");
                }
            }
        }
        Commands::Verify { solver: name, data } => {
            let task = find_task(&name)?;
            let category = solver::tasks().name();
            let (passed, failed) = testing::run_all_tests(&data, category, task);
            if passed + failed == 0 {
                bail!("no test cases found under {}", data.join(category).display());
            }
            if failed > 0 {
                bail!("{failed} test case(s) failed for solver `{name}`");
            }
        }
    }

    info!("Done in {:.3} seconds.", begin.elapsed().as_secs_f64());
    Ok(())
}

fn find_task(name: &str) -> anyhow::Result<Task> {
    let tasks = solver::tasks();
    tasks
        .get(name)
        .with_context(|| format!("unknown solver `{name}`, expected one of {:?}", tasks.names()))
}
