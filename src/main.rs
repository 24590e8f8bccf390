use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use kira_ampcompare::input::load_request;
use kira_ampcompare::logging;
use kira_ampcompare::pipeline::stage4_report::{Stage4Input, write_reports};
use kira_ampcompare::pipeline::{EvaluateOptions, evaluate_with};
use kira_ampcompare::store::jsonl::JsonlStore;
use kira_ampcompare::store::{ExperimentStore, StoredExperiment};

#[derive(Debug, Parser)]
#[command(
    name = "kira-ampcompare",
    version,
    about = "Compare diagnostic accuracy of nucleic-acid amplification techniques"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an experiment request and write reports
    Run(RunArgs),
    /// List stored experiments, newest first
    List(StoreArgs),
    /// Print a stored experiment as JSON
    Show(IdArgs),
    /// Remove a stored experiment
    Delete(IdArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Experiment request JSON
    #[arg(long)]
    input: PathBuf,

    /// Output directory for result.json, techniques.tsv and report.txt
    #[arg(long)]
    out: PathBuf,

    /// Compute techniques on parallel worker threads
    #[arg(long)]
    parallel: bool,

    /// Append the result to this history file
    #[arg(long)]
    store: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct StoreArgs {
    /// History file written by `run --store`
    #[arg(long)]
    store: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct IdArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Experiment id
    id: String,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Run(args) => run_experiment(&args),
        Command::List(args) => list_experiments(&args.store),
        Command::Show(args) => show_experiment(&args.store.store, &args.id),
        Command::Delete(args) => delete_experiment(&args.store.store, &args.id),
    }
}

fn run_experiment(args: &RunArgs) -> Result<(), String> {
    let request = load_request(&args.input).map_err(|e| e.to_string())?;
    info!(
        experiment = %request.experiment_name,
        techniques = request.techniques.len(),
        input = %args.input.display(),
        "experiment request loaded"
    );

    let options = EvaluateOptions {
        parallel: args.parallel,
    };
    let result = evaluate_with(
        &request.experiment_name,
        &request.description,
        &request.techniques,
        options,
    )
    .map_err(|e| e.to_string())?;

    let stage4 = Stage4Input {
        result: &result,
        techniques: &request.techniques,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&stage4, &args.out).map_err(|e| e.to_string())?;

    if let Some(path) = &args.store {
        let store = JsonlStore::open(path);
        let stored = store
            .insert(StoredExperiment::new(result))
            .map_err(|e| e.to_string())?;
        info!(id = %stored.id, store = %store.path().display(), "experiment recorded");
        println!("{}", stored.id);
    }
    Ok(())
}

fn list_experiments(path: &Path) -> Result<(), String> {
    let records = JsonlStore::open(path).list().map_err(|e| e.to_string())?;
    if records.is_empty() {
        warn!(store = %path.display(), "no stored experiments");
        return Ok(());
    }
    for record in records {
        println!("{}", format_listing(&record));
    }
    Ok(())
}

fn show_experiment(path: &Path, id: &str) -> Result<(), String> {
    let record = JsonlStore::open(path).get(id).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn delete_experiment(path: &Path, id: &str) -> Result<(), String> {
    JsonlStore::open(path).delete(id).map_err(|e| e.to_string())?;
    info!(id = %id, "experiment deleted");
    Ok(())
}

fn format_listing(record: &StoredExperiment) -> String {
    format!(
        "{}\t{}\t{}\t{} techniques\tbest accuracy: {}",
        record.id,
        record.created_at.to_rfc3339(),
        record.result.experiment_name,
        record.result.comparison_summary.techniques_count,
        record.result.comparison_summary.best_accuracy
    )
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
