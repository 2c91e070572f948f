mod config;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use smdi_generate::{GenerateOptions, GenerationEngine, GenerationError};
use smdi_merge::{MergeEngine, MergeError, MergeOptions};
use thiserror::Error;

use config::{ConfigError, SmdiConfig, load_config};
use logging::{LogFormat, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("merge error: {0}")]
    Merge(#[from] MergeError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "smdi", version, about = "Synthetic materials dataset generator")]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    /// Enable debug logging.
    #[arg(long, short, default_value_t = false, global = true)]
    verbose: bool,
    /// Config file (defaults to ./smdi.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the five source tables.
    Generate(GenerateArgs),
    /// Join the four per-material tables into one combined table.
    Merge(MergeArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Rows per per-material table [default: 90].
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    rows: Option<u64>,
    /// Seed for the random generator [default: 42].
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,
    /// Output directory [default: data].
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MergeArgs {
    /// Directory holding the generated tables [default: data].
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Combined output file [default: data/smdi_combined.csv].
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose).map_err(CliError::Logging)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(args, &config),
        Command::Merge(args) => run_merge(args, &config),
    }
}

fn run_generate(args: GenerateArgs, config: &SmdiConfig) -> Result<(), CliError> {
    let options = resolve_generate_options(args, config)?;
    tracing::info!(event = "options_resolved", rows = options.rows, seed = options.seed);

    let result = GenerationEngine::new(options).run()?;
    let out_dir = std::fs::canonicalize(&result.out_dir)?;
    println!(
        "Wrote {} files to: {}",
        result.report.tables.len(),
        out_dir.display()
    );
    Ok(())
}

fn run_merge(args: MergeArgs, config: &SmdiConfig) -> Result<(), CliError> {
    let options = resolve_merge_options(args, config);
    let result = MergeEngine::new(options).run()?;
    println!("Combined dataset created: {}", result.output.display());
    Ok(())
}

/// Flags win over the config file, which wins over built-in defaults.
fn resolve_generate_options(
    args: GenerateArgs,
    config: &SmdiConfig,
) -> Result<GenerateOptions, CliError> {
    let defaults = GenerateOptions::default();
    let section = &config.generate;

    let rows = match args.rows.or(section.rows) {
        Some(0) => {
            return Err(CliError::InvalidConfig(
                "rows must be a positive integer".to_string(),
            ));
        }
        Some(rows) => usize::try_from(rows)
            .map_err(|_| CliError::InvalidConfig(format!("rows {rows} is too large")))?,
        None => defaults.rows,
    };
    // Negative seeds keep their bit pattern.
    let seed = args
        .seed
        .or(section.seed)
        .map(|seed| seed as u64)
        .unwrap_or(defaults.seed);
    let out_dir = args
        .out
        .or_else(|| section.out_dir.clone())
        .unwrap_or(defaults.out_dir);

    Ok(GenerateOptions {
        rows,
        seed,
        out_dir,
    })
}

fn resolve_merge_options(args: MergeArgs, config: &SmdiConfig) -> MergeOptions {
    let defaults = MergeOptions::default();
    let section = &config.merge;
    MergeOptions {
        data_dir: args
            .data_dir
            .or_else(|| section.data_dir.clone())
            .unwrap_or(defaults.data_dir),
        output: args
            .out
            .or_else(|| section.output.clone())
            .unwrap_or(defaults.output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::parse_config;

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let cli = Cli::try_parse_from(argv).expect("parse args");
        match cli.command {
            Command::Generate(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn generate_defaults_match_documented_values() {
        let options =
            resolve_generate_options(generate_args(&["smdi", "generate"]), &SmdiConfig::default())
                .expect("resolve");
        assert_eq!(options.rows, 90);
        assert_eq!(options.seed, 42);
        assert_eq!(options.out_dir, PathBuf::from("data"));
    }

    #[test]
    fn flags_override_config_file() {
        let config = parse_config("[generate]\nrows = 10\nseed = 7\nout_dir = \"cfg\"\n")
            .expect("parse config");

        let from_config = resolve_generate_options(generate_args(&["smdi", "generate"]), &config)
            .expect("resolve");
        assert_eq!((from_config.rows, from_config.seed), (10, 7));
        assert_eq!(from_config.out_dir, PathBuf::from("cfg"));

        let args = generate_args(&["smdi", "generate", "--rows", "5", "--seed", "-1", "--out", "x"]);
        let from_flags = resolve_generate_options(args, &config).expect("resolve");
        assert_eq!(from_flags.rows, 5);
        assert_eq!(from_flags.seed, u64::MAX);
        assert_eq!(from_flags.out_dir, PathBuf::from("x"));
    }

    #[test]
    fn non_positive_or_non_integer_rows_are_usage_errors() {
        assert!(Cli::try_parse_from(["smdi", "generate", "--rows", "0"]).is_err());
        assert!(Cli::try_parse_from(["smdi", "generate", "--rows", "-4"]).is_err());
        assert!(Cli::try_parse_from(["smdi", "generate", "--seed", "1.5"]).is_err());
    }

    #[test]
    fn zero_rows_in_config_is_rejected() {
        let config = parse_config("[generate]\nrows = 0\n").expect("parse config");
        let err = resolve_generate_options(generate_args(&["smdi", "generate"]), &config)
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn merge_without_arguments_uses_fixed_paths() {
        let cli = Cli::try_parse_from(["smdi", "merge"]).expect("parse args");
        let Command::Merge(args) = cli.command else {
            panic!("expected merge command");
        };
        let options = resolve_merge_options(args, &SmdiConfig::default());
        assert_eq!(options.data_dir, PathBuf::from("data"));
        assert_eq!(options.output, PathBuf::from("data/smdi_combined.csv"));
    }
}
