//! CLI frontend for the NPC generator.

mod commands;
mod shell;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "npcgen",
    about = "Build tabletop NPCs from career levels",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options that select the rules used for aggregation.
#[derive(Args)]
struct RulesArgs {
    /// JSON rules file (baseline, per_level, characteristics)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Override the characteristic baseline
    #[arg(long)]
    baseline: Option<i32>,

    /// Override the per-level increment
    #[arg(long)]
    per_level: Option<i32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an NPC from a list of careers and print it
    Build {
        /// NPC name
        #[arg(short, long)]
        name: String,

        /// NPC race
        #[arg(short, long, default_value = "")]
        race: String,

        /// Careers to apply, as `name` or `name:level`
        #[arg(required = true)]
        careers: Vec<String>,

        /// Career data file (JSON)
        #[arg(short, long)]
        data: PathBuf,

        /// Print the NPC as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        rules: RulesArgs,
    },

    /// List the careers in a data file
    Careers {
        /// Career data file (JSON)
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Build an NPC interactively with undo
    Shell {
        /// Career data file (JSON)
        #[arg(short, long)]
        data: PathBuf,

        #[command(flatten)]
        rules: RulesArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            name,
            race,
            careers,
            data,
            json,
            rules,
        } => commands::load_rules(&rules)
            .and_then(|rules| commands::build::run(&data, rules, &name, &race, &careers, json)),
        Commands::Careers { data } => commands::careers::run(&data),
        Commands::Shell { data, rules } => {
            commands::load_rules(&rules).and_then(|rules| commands::shell::run(&data, rules))
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
