use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use costcodes_core::{CompanySource, ExtractMode, Extractor, ExtractorConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod formatter;

#[derive(Parser)]
#[command(name = "costcodes")]
#[command(about = "Collect cost codes from company spreadsheets into one JSON summary", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Extraction mode (overrides the config file)
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Directory that company files are resolved against
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Company file as NAME=PATH; replaces the configured company list
    #[arg(long = "file", value_name = "NAME=PATH", value_parser = parse_company)]
    files: Vec<CompanySource>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Drop free-text cells that are neither codes nor descriptions
    #[arg(long)]
    strict: bool,

    /// Show debug diagnostics
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Show only warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Bare codes only
    Plain,
    /// Codes with descriptions
    Described,
}

impl From<Mode> for ExtractMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Plain => ExtractMode::Plain,
            Mode::Described => ExtractMode::Described,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON object keyed by company
    Json,
    /// Human-readable colored listing
    Human,
    /// JavaScript constant for the web app
    Js,
}

fn parse_company(value: &str) -> std::result::Result<CompanySource, String> {
    match value.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok(CompanySource::new(name.trim(), path.trim()))
        }
        _ => Err(format!("expected NAME=PATH, got '{}'", value)),
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the document; diagnostics go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        ExtractorConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("costcodes.toml");
        if default_config_path.exists() {
            ExtractorConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            ExtractorConfig::default()
        }
    };

    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if let Some(dir) = &cli.dir {
        config.base_dir = Some(dir.clone());
    }
    if !cli.files.is_empty() {
        config.companies = cli.files.clone();
    }
    if cli.strict {
        config.keep_standalone_text = false;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = load_config(&cli)?;
    config.validate().context("Invalid configuration")?;

    let extractor = Extractor::with_config(config);
    let results = extractor.run();

    let summary = results.summary();
    info!(
        companies = summary.companies.len(),
        total = summary.total,
        "Extraction complete"
    );

    let rendered = match cli.format {
        OutputFormat::Json => formatter::render_json(&results)?,
        OutputFormat::Human => formatter::render_human(&results)?,
        OutputFormat::Js => formatter::render_js(&results)?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_company() {
        let company = parse_company("JLC=/tmp/JLC Cost Codes.xlsx").unwrap();
        assert_eq!(company.name, "JLC");
        assert_eq!(company.file, PathBuf::from("/tmp/JLC Cost Codes.xlsx"));

        assert!(parse_company("JLC").is_err());
        assert!(parse_company("=file.xlsx").is_err());
        assert!(parse_company("JLC=").is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "costcodes",
            "--mode",
            "plain",
            "--dir",
            "/data",
            "--file",
            "ACME=acme.xlsx",
            "--strict",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.mode, ExtractMode::Plain);
        assert_eq!(config.base_dir, Some(PathBuf::from("/data")));
        assert_eq!(config.companies, vec![CompanySource::new("ACME", "acme.xlsx")]);
        assert!(!config.keep_standalone_text);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
