use checklist::shell::Shell;
use checklist::{ChecklistItem, ChecklistStore, Config, Dashboard, jsonl};
use clap::{Parser, Subcommand};
use eyre::{Context, Result, eyre};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Checklist - manage checklists with repeatable items from an interactive shell")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/checklist/checklist.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSONL file of items to load as an extra checklist (repeatable)
    #[arg(short, long)]
    seed: Vec<PathBuf>,

    /// Start without the sample checklists
    #[arg(long)]
    no_samples: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin (default)
    Shell,

    /// Execute commands from a script file
    Run { script: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Setup tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level(cli.verbose, &config.log_level))
        .init();

    let dashboard = build_dashboard(&config, &cli)?;
    info!(checklists = dashboard.len(), "Dashboard ready");

    let stdout = io::stdout();
    let mut shell = Shell::new(config, dashboard, stdout.lock());

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell.run_interactive(io::stdin().lock())?,
        Commands::Run { script } => {
            let file = File::open(&script).with_context(|| format!("Failed to open script {}", script.display()))?;
            shell.run_script(BufReader::new(file))?;
        }
    }

    Ok(())
}

fn log_level(verbose: u8, configured: &str) -> Level {
    match verbose {
        0 => configured.parse().unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_dashboard(config: &Config, cli: &Cli) -> Result<Dashboard> {
    let mut dashboard = if config.samples && !cli.no_samples {
        Dashboard::with_samples()?
    } else {
        Dashboard::new()
    };

    for path in &cli.seed {
        load_seed(&mut dashboard, path)?;
    }

    Ok(dashboard)
}

/// Load a JSONL file as a checklist named after the file stem
fn load_seed(dashboard: &mut Dashboard, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(eyre!("Seed file not found: {}", path.display()));
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| eyre!("Invalid seed filename: {:?}", path))?;

    let items: Vec<ChecklistItem> = jsonl::read_jsonl_latest(path)?;
    let store = ChecklistStore::from_items(items).with_context(|| format!("Invalid seed file {}", path.display()))?;

    dashboard.insert(stem, &title_from_stem(stem), store)?;
    info!(checklist = stem, "Loaded seed checklist");
    Ok(())
}

/// `weekly-groceries` -> `Weekly Groceries`
fn title_from_stem(stem: &str) -> String {
    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
