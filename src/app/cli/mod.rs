//! CLI Adapter.

mod logging;
mod reference;
mod workspace;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{AppError, ReferenceOverrides};

#[derive(Parser)]
#[command(name = "calws")]
#[command(version)]
#[command(
    about = "Provision staged JWST calibration workspaces and launch the pipeline",
    long_about = None
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct RootArgs {
    /// Workspace root (defaults to the parent of the current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ReferenceArgs {
    /// CRDS cache directory (defaults to <root>/CRDS/)
    #[arg(long)]
    crds_path: Option<PathBuf>,
    /// CRDS server URL
    #[arg(long)]
    server_url: Option<String>,
}

impl From<ReferenceArgs> for ReferenceOverrides {
    fn from(args: ReferenceArgs) -> Self {
        ReferenceOverrides { crds_path: args.crds_path, server_url: args.server_url }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing stage directories under <root>/data/
    #[clap(visible_alias = "i")]
    Init {
        #[command(flatten)]
        root: RootArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report which stage directories exist (exit 1 if any are missing)
    #[clap(visible_alias = "st")]
    Status {
        #[command(flatten)]
        root: RootArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the stage directory paths without creating anything
    #[clap(visible_alias = "p")]
    Paths {
        #[command(flatten)]
        root: RootArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print shell exports for the CRDS settings
    Env {
        #[command(flatten)]
        root: RootArgs,
        #[command(flatten)]
        reference: ReferenceArgs,
    },
    /// Provision the workspace, then run a program with the CRDS settings in its environment
    #[clap(visible_alias = "x")]
    Exec {
        #[command(flatten)]
        root: RootArgs,
        #[command(flatten)]
        reference: ReferenceArgs,
        /// Program and arguments, e.g. `calws exec -- strun calwebb_spec2 asn.json`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { root, json } => workspace::run_init(root.root, json).map(|_| 0),
        Commands::Status { root, json } => workspace::run_status(root.root, json),
        Commands::Paths { root, json } => workspace::run_paths(root.root, json).map(|_| 0),
        Commands::Env { root, reference } => {
            reference::run_env(root.root, reference.into()).map(|_| 0)
        }
        Commands::Exec { root, reference, command } => {
            reference::run_exec(root.root, reference.into(), command)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
