mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{backup::BackupSubcommand, owner::OwnerSubcommand, product::ProductSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "workshop",
    about = "Capture workshop and interview sessions into a single aggregated store",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .workshop/ or .git/)
    #[arg(long, global = true, env = "WORKSHOP_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a workshop project in the current directory
    Init {
        /// Project name (default: directory name)
        #[arg(long)]
        project: Option<String>,
    },

    /// Manage product records
    Product {
        #[command(subcommand)]
        subcommand: ProductSubcommand,
    },

    /// Manage business owner records
    Owner {
        #[command(subcommand)]
        subcommand: OwnerSubcommand,
    },

    /// Import new products from the catalog CSV
    Import,

    /// Export all products as CSV
    Export {
        /// Destination file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Back up or restore the aggregated store
    Backup {
        #[command(subcommand)]
        subcommand: BackupSubcommand,
    },

    /// Launch the web UI
    Ui {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Ui { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init { project } => cmd::init::run(&root, project.as_deref()),
        Commands::Product { subcommand } => cmd::product::run(&root, subcommand, cli.json),
        Commands::Owner { subcommand } => cmd::owner::run(&root, subcommand, cli.json),
        Commands::Import => cmd::import::run(&root, cli.json),
        Commands::Export { output } => cmd::export::run(&root, output.as_ref()),
        Commands::Backup { subcommand } => cmd::backup::run(&root, subcommand),
        Commands::Ui { port, no_open } => cmd::ui::run(&root, port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
