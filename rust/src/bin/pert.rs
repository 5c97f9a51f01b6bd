//! Command-line PERT analysis.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pert_rust::{
    parse_project, pert_with_config, GraphListing, PertConfig, PertError, Report,
    NOT_A_DAG_MESSAGE, SAMPLE_PROJECT,
};

/// Command-line arguments for `pert`.
#[derive(Debug, Parser)]
#[command(
    name = "pert",
    version,
    about = "Critical path (PERT) analysis of a task dependency graph.",
    long_about = None
)]
struct Args {
    /// Project file: `n m`, then `m` edges `u v w` (1-based), then `n` durations.
    ///
    /// If omitted, a built-in 10-task sample is analysed.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Diagnostic output on stderr: 0=silent, 1=summary, 2=passes, 3=debug.
    #[arg(short, long, default_value_t = 0)]
    verbosity: u8,

    /// Treat missing durations as zero instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Print the parsed graph before the results.
    #[arg(long)]
    print_graph: bool,

    /// Also print one critical path.
    #[arg(long)]
    show_path: bool,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("pert error: {err:?}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading project file at {:?}", path))?,
        None => SAMPLE_PROJECT.to_string(),
    };
    let project = parse_project(&text).context("parsing project")?;

    if args.print_graph {
        print!("{}", GraphListing::new(&project.graph));
    }

    let mut config = PertConfig::default().with_verbosity(args.verbosity);
    if args.lenient {
        config = config.lenient();
    }

    let schedule = match pert_with_config(&project.graph, &project.durations, &config) {
        Ok(schedule) => schedule,
        Err(PertError::NotADag { .. }) => {
            println!("{NOT_A_DAG_MESSAGE}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    print!("{}", Report::new(&schedule));
    if args.show_path {
        let path: Vec<String> = schedule
            .critical_path()
            .iter()
            .map(|v| (v + 1).to_string())
            .collect();
        println!("Critical path: {}", path.join(" -> "));
    }
    Ok(())
}
