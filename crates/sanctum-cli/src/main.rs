//! CLI frontend for the Sanctum exploration engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sanctum",
    about = "Sanctum — a graph-based exploration session engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new graph directory with starter definition documents
    Init {
        /// Name of the graph directory to create
        name: String,
    },

    /// Load and validate the graph definition documents
    Check {
        /// Directory containing graph.json and rules.json
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Display an ASCII listing of the graph's edges
    Map {
        /// Focus on a single node's outgoing edges
        #[arg(short, long)]
        focus: Option<String>,

        /// Directory containing graph.json and rules.json
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List nodes in the graph
    Nodes {
        /// Filter by kind (room or faction)
        kind: Option<String>,

        /// Directory containing graph.json and rules.json
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Walk the graph interactively
    Explore {
        /// Session id to walk under
        #[arg(short, long, default_value = "walk")]
        session: String,

        /// Node to enter immediately
        #[arg(long)]
        start: Option<String>,

        /// Override the per-entry intensity ceiling
        #[arg(long)]
        max_intensity: Option<f64>,

        /// Disable the respawn gate for this walk
        #[arg(long)]
        no_respawn: bool,

        /// Directory containing graph.json and rules.json
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&name),
        Commands::Check { dir } => commands::check::run(&dir),
        Commands::Map { focus, dir } => commands::map::run(&dir, focus.as_deref()),
        Commands::Nodes { kind, dir } => commands::nodes::run(&dir, kind.as_deref()),
        Commands::Explore {
            session,
            start,
            max_intensity,
            no_respawn,
            dir,
        } => commands::explore::run(
            &dir,
            &session,
            start.as_deref(),
            max_intensity,
            no_respawn,
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
