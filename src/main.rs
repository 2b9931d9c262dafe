//! sbom-finder: catalog, compare and summarize SBOMs across schema dialects.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_finder::{
    cli::{self, exit_codes},
    config::{self, AppConfig, Validatable},
    ingest::IngestMetadata,
    model::CatalogFilter,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-finder")]
#[command(version)]
#[command(about = "Catalog, diff and summarize SBOMs across CycloneDX, SPDX and Syft", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Differences found (diff with --fail-on-change)
    3  Error occurred

EXAMPLES:
    # Import a directory of SBOMs into the catalog
    sbom-finder import ./dataset

    # Structural diff of two cataloged SBOMs
    sbom-finder diff firefox_124_sbom.json firefox_125_sbom.json

    # Term similarity as JSON
    sbom-finder compare-terms a.json b.json -o json

    # License and supplier statistics for Windows desktop apps
    sbom-finder stats --os windows --binary-type desktop")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Document directory (repeatable, searched in order; overrides config)
    #[arg(long = "sbom-dir", global = true, env = "SBOM_FINDER_DIR")]
    sbom_dirs: Vec<PathBuf>,

    /// Catalog file (overrides config)
    #[arg(long, global = true, env = "SBOM_FINDER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (default: stdout)
    #[arg(short = 'O', long, global = true)]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Catalog record filters (case-insensitive substring, AND-combined)
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Filter by category
    #[arg(long)]
    category: Option<String>,

    /// Filter by operating system
    #[arg(long)]
    os: Option<String>,

    /// Filter by supplier
    #[arg(long)]
    supplier: Option<String>,

    /// Filter by manufacturer
    #[arg(long)]
    manufacturer: Option<String>,

    /// Filter by binary type
    #[arg(long)]
    binary_type: Option<String>,
}

impl From<&FilterArgs> for CatalogFilter {
    fn from(args: &FilterArgs) -> Self {
        Self {
            category: args.category.clone(),
            operating_system: args.os.clone(),
            supplier: args.supplier.clone(),
            manufacturer: args.manufacturer.clone(),
            binary_type: args.binary_type.clone(),
        }
    }
}

/// Arguments for the `upload` subcommand
#[derive(Args, Debug)]
struct UploadArgs {
    /// SBOM file to ingest (stored under its file name)
    path: PathBuf,

    /// Application name
    #[arg(long)]
    app_name: Option<String>,

    /// Application category
    #[arg(long)]
    category: Option<String>,

    /// Operating system
    #[arg(long)]
    os: Option<String>,

    /// Binary type (desktop, mobile, service, ...)
    #[arg(long)]
    binary_type: Option<String>,

    /// Supplier name
    #[arg(long)]
    supplier: Option<String>,

    /// Manufacturer name
    #[arg(long)]
    manufacturer: Option<String>,

    /// Application version
    #[arg(long)]
    app_version: Option<String>,

    /// Cost
    #[arg(long)]
    cost: Option<f64>,

    /// Free-form description
    #[arg(long)]
    description: Option<String>,

    /// Do not infer OS and binary type from the file name
    #[arg(long)]
    no_filename_inference: bool,
}

impl UploadArgs {
    fn metadata(&self) -> IngestMetadata {
        IngestMetadata {
            app_name: self.app_name.clone(),
            category: self.category.clone(),
            operating_system: self.os.clone(),
            binary_type: self.binary_type.clone(),
            supplier: self.supplier.clone(),
            manufacturer: self.manufacturer.clone(),
            version: self.app_version.clone(),
            cost: self.cost,
            description: self.description.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List cataloged SBOMs
    List(FilterArgs),

    /// Show a stored SBOM with its catalog record
    Show {
        /// Cataloged filename
        filename: String,
    },

    /// Structural diff of two stored SBOMs
    Diff {
        /// First filename
        first: String,
        /// Second filename
        second: String,
        /// Exit with code 1 if the component sets differ
        #[arg(long)]
        fail_on_change: bool,
    },

    /// Term-based similarity of two stored SBOMs
    CompareTerms {
        /// First filename
        first: String,
        /// Second filename
        second: String,
    },

    /// Corpus statistics, optionally filtered
    Stats(FilterArgs),

    /// Search one SBOM's components for a keyword
    Search {
        /// Cataloged filename
        filename: String,
        /// Case-insensitive keyword
        keyword: String,
    },

    /// Ingest one SBOM file
    Upload(UploadArgs),

    /// Import every *.json file of one or more directories
    Import {
        /// Directories to import
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-finder.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

/// Effective configuration: discovered file layered under CLI flags.
fn effective_config(cli: &Cli, fail_on_change: bool) -> Result<AppConfig> {
    let mut overrides = AppConfig::builder()
        .output_format(cli.output.unwrap_or_default())
        .output_file(cli.output_file.clone())
        .no_color(cli.no_color)
        .fail_on_change(fail_on_change)
        .build();
    if !cli.sbom_dirs.is_empty() {
        overrides.storage.document_dirs.clone_from(&cli.sbom_dirs);
    }
    if let Some(ref catalog) = cli.catalog {
        overrides.storage.catalog_path.clone_from(catalog);
    }

    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::List(ref filter) => {
            let config = effective_config(&cli, false)?;
            cli::run_list(&config, &CatalogFilter::from(filter))?;
        }
        Commands::Show { ref filename } => {
            let config = effective_config(&cli, false)?;
            cli::run_show(&config, filename)?;
        }
        Commands::Diff {
            ref first,
            ref second,
            fail_on_change,
        } => {
            let config = effective_config(&cli, fail_on_change)?;
            return cli::run_diff(&config, first, second);
        }
        Commands::CompareTerms {
            ref first,
            ref second,
        } => {
            let config = effective_config(&cli, false)?;
            cli::run_compare_terms(&config, first, second)?;
        }
        Commands::Stats(ref filter) => {
            let config = effective_config(&cli, false)?;
            cli::run_stats(&config, &CatalogFilter::from(filter))?;
        }
        Commands::Search {
            ref filename,
            ref keyword,
        } => {
            let config = effective_config(&cli, false)?;
            cli::run_search(&config, filename, keyword)?;
        }
        Commands::Upload(ref args) => {
            let mut config = effective_config(&cli, false)?;
            if args.no_filename_inference {
                config.ingest.infer_from_filename = false;
            }
            cli::run_upload(&config, &args.path, args.metadata())?;
        }
        Commands::Import { ref dirs } => {
            let config = effective_config(&cli, false)?;
            cli::run_import(&config, dirs)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-finder", &mut io::stdout());
        }

        Commands::ConfigSchema { ref file } => {
            let schema = config::generate_json_schema();
            match file {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
        }

        Commands::Config { ref action } => run_config(&cli, action)?,
    }
    Ok(exit_codes::SUCCESS)
}

fn run_config(cli: &Cli, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir().ok().map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("sbom-finder").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in &[
                ".sbom-finder.yaml",
                ".sbom-finder.yml",
                "sbom-finder.yaml",
                "sbom-finder.yml",
            ] {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".sbom-finder.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}
