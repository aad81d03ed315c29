//! Regen CLI - structured data for the farm website.
//!
//! Provides commands for:
//! - `breadcrumbs`: Print the breadcrumb trail for a path
//! - `schema`: Print JSON-LD for a page
//! - `organization`: Print the site-wide Organization JSON-LD

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbsArgs, OrganizationArgs, SchemaArgs};
use output::Output;

/// Regen - breadcrumbs and schema.org markup for site pages.
#[derive(Parser)]
#[command(name = "regen", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the breadcrumb trail for a page path.
    Breadcrumbs(BreadcrumbsArgs),
    /// Print JSON-LD structured data for a page.
    Schema(SchemaArgs),
    /// Print the site-wide Organization JSON-LD.
    Organization(OrganizationArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Breadcrumbs(args) => args.execute(&mut stdout),
        Commands::Schema(args) => args.execute(&mut stdout),
        Commands::Organization(args) => args.execute(&mut stdout),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
