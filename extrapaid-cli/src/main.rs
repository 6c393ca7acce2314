use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use extrapaid_core::classify_and_summarize;
use extrapaid_ingest::{extract_text, parse_statement, Bank};
use extrapaid_report::{analyze_text, export_csv, export_json, AnalyzeError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "extrapaid",
    version,
    about = "See how much extra (fees, interest, GST, markup) a credit-card statement cost you"
)]
struct Cli {
    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct StatementArgs {
    /// Statement PDF, or a .txt file of already-extracted text
    file: PathBuf,

    /// Issuing bank: SBI, Axis Bank, Kotak, IDFC FIRST (default: config, else generic)
    #[arg(long, short)]
    bank: Option<Bank>,

    /// Ignore the configured default bank and use the generic parser
    #[arg(long, conflicts_with = "bank")]
    generic: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize purchases vs extra charges for one statement
    Analyze {
        #[command(flatten)]
        statement: StatementArgs,

        /// Write Summary/Extra_Breakdown/Transactions sheets (default dir from config)
        #[arg(long, num_args = 0..=1, value_name = "DIR")]
        export: Option<Option<PathBuf>>,

        /// Also print the transaction table
        #[arg(long)]
        show_transactions: bool,
    },

    /// Print the parsed transaction table without summarizing
    Parse {
        #[command(flatten)]
        statement: StatementArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List supported banks
    Banks,

    /// Manage ~/.extrapaid/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Analyze {
            statement,
            export,
            show_transactions,
        } => analyze(statement, export, show_transactions)?,

        Command::Parse { statement, json } => parse(statement, json)?,

        Command::Banks => {
            for bank in Bank::ALL {
                println!("{:<12} {}", bank.slug(), bank.display_name());
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "extrapaid=debug" } else { "extrapaid=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn analyze(args: StatementArgs, export: Option<Option<PathBuf>>, show_transactions: bool) -> Result<()> {
    let cfg = config::load_config()?;
    let bank = resolve_bank(&args, &cfg);
    debug!(bank = ?bank, "resolved bank");
    let text = read_statement_text(&args.file)?;

    let analysis = match analyze_text(&text, bank, &cfg.parse_options()) {
        Ok(a) => a,
        Err(AnalyzeError::NoTransactions) => bail!(
            "Could not detect transactions in {}. Please ensure it's a digital statement for the selected bank.",
            args.file.display()
        ),
        Err(e) => return Err(e).with_context(|| format!("analyzing {}", args.file.display())),
    };

    render::print_analysis(&analysis, show_transactions);

    if let Some(dir) = export {
        let dir = dir.unwrap_or_else(|| cfg.export.dir.clone());
        let paths = export_csv(&analysis.summary, &dir)?;
        println!("\nWrote:");
        println!("- {}", paths.summary.display());
        println!("- {}", paths.breakdown.display());
        println!("- {}", paths.transactions.display());
        if cfg.export.json {
            let json_path = dir.join("summary.json");
            export_json(&analysis, &json_path)?;
            println!("- {}", json_path.display());
        }
    }

    Ok(())
}

fn parse(args: StatementArgs, json: bool) -> Result<()> {
    let cfg = config::load_config()?;
    let bank = resolve_bank(&args, &cfg);
    let text = read_statement_text(&args.file)?;

    let outcome = parse_statement(&text, bank, &cfg.parse_options())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.transactions)?);
        return Ok(());
    }

    println!(
        "Parsed {} transactions from {} ({} parser{})\n",
        outcome.transactions.len(),
        args.file.display(),
        outcome.parser,
        if outcome.used_fallback { ", fallback" } else { "" }
    );
    let classified = classify_and_summarize(outcome.transactions).transactions;
    render::print_transactions(&classified);
    Ok(())
}

fn resolve_bank(args: &StatementArgs, cfg: &config::Config) -> Option<Bank> {
    if args.generic {
        return None;
    }
    args.bank.or(cfg.parse.default_bank)
}

/// `.txt` files are taken as already-extracted text; anything else as a PDF.
fn read_statement_text(path: &Path) -> Result<String> {
    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    debug!(path = %path.display(), is_text, "reading statement");

    if is_text {
        return fs::read_to_string(path).with_context(|| format!("read {}", path.display()));
    }

    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    extract_text(&bytes).with_context(|| format!("extract text from {}", path.display()))
}
