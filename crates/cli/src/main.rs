//! Tipbook CLI
//!
//! Loads a tip catalog (JSON, Markdown, or a directory of either) and writes
//! it out as plain text, Markdown or JSON. Logs go to stderr so stdout only
//! ever carries rendered output.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tipbook_core::config::{PartialConfig, TipbookConfig, CONFIG_FILE};
use tipbook_core::render::{render_all_with, render_one_with};
use tipbook_core::{io, loader, seed, CatalogError, CatalogStore, RenderFormat, TipEntry};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Clone)]
#[command(author, version, about = "tipbook - Render numbered tip catalogs")]
struct Args {
    /// Config file to use instead of .tipbook/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Render the whole catalog
    Render {
        /// Catalog file or directory (defaults to the configured source)
        source: Option<PathBuf>,
        /// Output format: plain, markdown or json
        #[arg(short, long)]
        format: Option<String>,
        /// Document title placed before the first tip
        #[arg(long)]
        title: Option<String>,
        /// Language tag for Markdown code fences
        #[arg(long = "lang")]
        code_language: Option<String>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a single tip
    Show {
        /// Ordinal of the tip
        ordinal: u32,
        /// Catalog file or directory (defaults to the configured source)
        source: Option<PathBuf>,
        /// Output format: plain, markdown or json
        #[arg(short, long)]
        format: Option<String>,
    },
    /// List ordinals and titles
    List {
        /// Catalog file or directory (defaults to the configured source)
        source: Option<PathBuf>,
    },
    /// Load and validate a catalog without rendering it
    Check {
        /// Catalog file or directory (defaults to the configured source)
        source: Option<PathBuf>,
    },
    /// Print the JSON Schema for catalog input files
    Schema,
    /// Create .tipbook/config.json and a starter catalog
    Init,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => TipbookConfig::load_from(path)?,
        None => TipbookConfig::load()?,
    };

    match args.command {
        CliCommand::Render {
            source,
            format,
            title,
            code_language,
            output,
        } => {
            config.merge(PartialConfig {
                source,
                default_format: parse_format(format.as_deref())?,
                title,
                code_language,
                include: None,
            });
            let store = load_store(&config)?;
            let text = render_all_with(&store, config.default_format, &config.render_options())?;
            emit(&text, output.as_deref())
        }
        CliCommand::Show {
            ordinal,
            source,
            format,
        } => {
            config.merge(PartialConfig {
                source,
                default_format: parse_format(format.as_deref())?,
                ..PartialConfig::default()
            });
            let store = load_store(&config)?;
            match store.get(ordinal) {
                Ok(entry) => {
                    let text =
                        render_one_with(entry, config.default_format, &config.render_options())?;
                    emit(&text, None)
                }
                Err(err @ CatalogError::NotFound(_)) => {
                    eprintln!("Available tips:");
                    for entry in store.all() {
                        eprintln!("  {}", entry.heading());
                    }
                    Err(err.into())
                }
                Err(err) => Err(err.into()),
            }
        }
        CliCommand::List { source } => {
            config.merge(PartialConfig {
                source,
                ..PartialConfig::default()
            });
            let store = load_store(&config)?;
            let listing: String = store
                .all()
                .iter()
                .map(|entry| format!("{}\n", entry.heading()))
                .collect();
            emit(&listing, None)
        }
        CliCommand::Check { source } => {
            config.merge(PartialConfig {
                source,
                ..PartialConfig::default()
            });
            let store = load_store(&config)?;
            println!(
                "✓ {}: {} tips, ordinals {}",
                config.source.display(),
                store.len(),
                describe_ordinals(&store)
            );
            Ok(())
        }
        CliCommand::Schema => {
            let schema = schemars::schema_for!(Vec<TipEntry>);
            let text = serde_json::to_string_pretty(&schema).context("Failed to encode schema")?;
            emit(&format!("{}\n", text), None)
        }
        CliCommand::Init => {
            let config_path = config_path(args.config.as_deref())?;
            let project_dir = std::env::current_dir().context("Failed to read current directory")?;
            let report = seed::seed_defaults(&config_path, &project_dir)?;

            if !report.config_written && !report.catalog_written {
                println!("Nothing to do: config and catalog already exist");
            } else {
                if report.config_written {
                    println!("✓ Wrote {}", config_path.display());
                }
                if report.catalog_written {
                    println!("✓ Wrote {}", project_dir.join(&config.source).display());
                }
            }
            Ok(())
        }
    }
}

/// The `--config` file when given, otherwise `config.json` in the runtime dir
fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(io::ensure_runtime_dir()?.join(CONFIG_FILE)),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_format(name: Option<&str>) -> Result<Option<RenderFormat>> {
    name.map(|n| n.parse::<RenderFormat>())
        .transpose()
        .map_err(Into::into)
}

fn load_store(config: &TipbookConfig) -> Result<CatalogStore> {
    let entries = loader::load_path(&config.source, &config.loader_config())?;
    let store = CatalogStore::load(entries)
        .with_context(|| format!("Invalid catalog in {:?}", config.source))?;
    Ok(store)
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            io::write_file(path, text)?;
            tracing::info!(path = %path.display(), bytes = text.len(), "Wrote output");
            Ok(())
        }
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

fn describe_ordinals(store: &CatalogStore) -> String {
    let ordinals: Vec<u32> = store.ordinals().collect();
    match (ordinals.first(), ordinals.last()) {
        (Some(first), Some(last)) if first == last => first.to_string(),
        (Some(first), Some(last)) => format!("{}-{}", first, last),
        _ => "none".to_string(),
    }
}
