//! Command-line interface for txsigner type registration.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use txsigner_core::config::env_vars;
use txsigner_core::{
    Codec, ExtensionLoader, NullKeyFilter, PluginsConfig, find_unregistered_types,
    read_messages,
};

/// txsigner - Register extension message types for offline signing.
#[derive(Parser, Debug)]
#[command(name = "txsigner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the type URLs in a transaction the builtin codec cannot resolve.
    Scan {
        /// Transaction JSON file.
        #[arg(required = true)]
        tx: PathBuf,
    },
    /// Load extensions for every unresolved type URL in a transaction.
    Register {
        /// Transaction JSON file.
        #[arg(required = true)]
        tx: PathBuf,
        /// Directory containing extension modules (defaults to $TXSIGNER_PLUGINS_DIR).
        #[arg(long)]
        plugins_dir: Option<PathBuf>,
    },
    /// List candidate extension modules.
    Extensions {
        /// Directory containing extension modules (defaults to $TXSIGNER_PLUGINS_DIR).
        #[arg(long)]
        plugins_dir: Option<PathBuf>,
    },
    /// Drop null `tip` fields from a JSON document.
    FilterNulls {
        /// JSON document to filter.
        #[arg(required = true)]
        file: PathBuf,
        /// Rewrite the file instead of printing to stdout.
        #[arg(long)]
        in_place: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    match args.command {
        Command::Scan { tx } => run_scan(&tx),
        Command::Register { tx, plugins_dir } => run_register(&tx, plugins_dir),
        Command::Extensions { plugins_dir } => list_extensions(plugins_dir),
        Command::FilterNulls { file, in_place } => filter_nulls(&file, in_place),
    }
}

fn init_logging(verbose: bool) {
    let json_logging = std::env::var(env_vars::LOG_JSON)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);

    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "txsigner={}",
            log_level.as_str().to_lowercase()
        ))
        .add_directive(tracing::Level::WARN.into())
    });

    // stdout carries command output
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run_scan(tx: &Path) -> Result<()> {
    let messages =
        read_messages(tx).with_context(|| format!("Failed to read {}", tx.display()))?;
    let codec = Codec::with_builtin_types();

    for type_url in find_unregistered_types(&codec, &messages) {
        println!("{}", type_url);
    }
    Ok(())
}

fn run_register(tx: &Path, plugins_dir: Option<PathBuf>) -> Result<()> {
    let plugins = PluginsConfig::resolve(plugins_dir)?;
    let messages =
        read_messages(tx).with_context(|| format!("Failed to read {}", tx.display()))?;

    tracing::debug!(
        "Scanning {} message(s), plugins dir {}",
        messages.len(),
        plugins.plugins_dir.display()
    );
    let mut codec = Codec::with_builtin_types();
    let mut loader = ExtensionLoader::new();
    let registered = loader
        .ensure_registered(&mut codec, &plugins.plugins_dir, &messages)
        .context("Type registration failed")?;

    if registered.is_empty() {
        println!("All types already registered");
        return Ok(());
    }

    println!("Registered types");
    println!("================\n");
    for type_url in &registered {
        println!("  {}", type_url);
    }

    println!();
    for extension in loader.loaded().filter(|ext| !ext.packages.is_empty()) {
        println!("{}", extension.path.display());
        println!("  Loaded:   {}", extension.loaded_at.to_rfc3339());
        for package in &extension.packages {
            println!("  Package:  {}", package);
        }
    }
    Ok(())
}

fn list_extensions(plugins_dir: Option<PathBuf>) -> Result<()> {
    let plugins = PluginsConfig::resolve(plugins_dir)?;
    let candidates = ExtensionLoader::new().discover(&plugins.plugins_dir)?;
    tracing::debug!("Discovered {} candidate module(s)", candidates.len());

    println!("Extension modules in {}", plugins.plugins_dir.display());
    println!();
    for path in &candidates {
        println!("  {}", path.display());
    }
    println!("\nTotal: {} module(s)", candidates.len());
    Ok(())
}

fn filter_nulls(file: &Path, in_place: bool) -> Result<()> {
    let filter = NullKeyFilter::default();

    if in_place {
        filter
            .filter_file(file)
            .with_context(|| format!("Failed to filter {}", file.display()))?;
        return Ok(());
    }

    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&filter.filter_bytes(&bytes))?;
    stdout.flush()?;
    Ok(())
}
