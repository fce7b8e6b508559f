use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use rollover::logging::init_logging;
use rollover::{OptionsBuilder, RenameRequest, RolloverError, Selection};

#[derive(Parser, Debug)]
#[command(name = "rollover", version, about = "Copy a folder of files into another folder with rolled-over years or a suffix")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the planned renames without copying anything
    Preview(RenameArgs),
    /// Copy the renamed files into the output folder
    Apply(RenameArgs),
    /// Interactive terminal interface (default)
    Tui {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Args, Debug)]
struct RenameArgs {
    /// Folder holding the original files
    #[arg(short, long)]
    input: PathBuf,

    /// Folder the renamed copies are written to
    #[arg(short, long)]
    output: PathBuf,

    /// Replace (or append) the year with this text
    #[arg(short, long)]
    year: Option<String>,

    /// Append this text before the file extension
    #[arg(short, long, allow_hyphen_values = true)]
    suffix: Option<String>,

    /// Leave this file out (repeatable)
    #[arg(short, long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Print the mapping as JSON (preview only)
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Preview(args)) => preview(args),
        Some(Command::Apply(args)) => apply(args),
        Some(Command::Tui { input, output }) => run_tui(input, output),
        None => run_tui(None, None),
    }
}

fn run_tui(input: Option<String>, output: Option<String>) -> Result<()> {
    rollover::tui::run_tui(input, output).context("Terminal interface failed")
}

fn build_request(args: &RenameArgs) -> Result<RenameRequest> {
    let options = OptionsBuilder::new()
        .year(args.year.clone())
        .suffix(args.suffix.clone())
        .build()?;

    let mut selection = Selection::from_directory(&args.input)?;
    for name in &args.exclude {
        selection.set(name, false);
    }

    let request = RenameRequest::new(
        Some(args.input.clone()),
        Some(args.output.clone()),
        selection,
        options,
    );
    if let Some(warning) = request.same_folder_warning() {
        println!("⚠ {}", warning);
    }
    Ok(request)
}

fn preview(args: RenameArgs) -> Result<()> {
    let request = build_request(&args)?;
    let mapping = request.preview()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&mapping)?);
        return Ok(());
    }

    for entry in mapping.iter() {
        println!("{} -> {}", entry.original, entry.proposed);
    }

    let skipped = request.selection.selected_count() - mapping.len();
    println!("===================");
    if mapping.is_empty() {
        println!("ℹ Nothing to rename!");
    } else {
        println!("{} file(s) prepared for rename", mapping.len());
    }
    if skipped > 0 {
        println!("ℹ {} file(s) skipped (target exists or already claimed)", skipped);
    }
    Ok(())
}

fn apply(args: RenameArgs) -> Result<()> {
    let request = build_request(&args)?;

    match request.execute() {
        Ok(outcome) => {
            for entry in outcome.mapping.iter() {
                println!("{} -> {}", entry.original, entry.proposed);
            }
            println!("✓ {}", outcome.status_message());
            Ok(())
        }
        Err(e @ RolloverError::NothingToRename) => Err(e.into()),
        Err(e) => Err(e).context("Rename failed"),
    }
}
