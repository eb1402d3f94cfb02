use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use optline_core::Options;
use optline_parser::output::{OutputFormat, format_command_line};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Table => Self::Table,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "optline")]
#[command(about = "Parse argument lists against declarative option definitions")]
struct Cli {
    /// Log parser decisions to stderr (overridden by RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse arguments given after `--` and print the result.
    Parse(ParseArgs),
    /// Validate an options declaration file.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Options declaration (YAML, or JSON with a .json extension).
    #[arg(long)]
    config: PathBuf,
    /// Treat everything from the first non-option on as positional.
    #[arg(long)]
    stop_at_non_option: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Arguments to parse.
    #[arg(last = true)]
    arguments: Vec<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Options declaration (YAML, or JSON with a .json extension).
    #[arg(long)]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Check(args) => run_check(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("optline_parser=trace,optline=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_options(path: &Path) -> Result<Options, String> {
    Options::load(path).map_err(|err| format!("Failed to load '{}': {err}", path.display()))
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let options = load_options(&args.config)?;
    debug!(
        config = %args.config.display(),
        options = options.len(),
        groups = options.group_count(),
        "loaded options"
    );

    let cmd = optline_parser::Parser::new()
        .parse_with(&options, args.arguments.as_slice(), args.stop_at_non_option)
        .map_err(|err| err.to_string())?;

    let raw = format_command_line(&cmd, args.format.into())?;
    print!("{raw}");
    if !raw.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let options = load_options(&args.config)?;
    let required = options.required_options().len();
    println!(
        "Validated '{}': {} option(s), {} group(s), {} requirement(s).",
        args.config.display(),
        options.len(),
        options.group_count(),
        required
    );
    Ok(())
}
