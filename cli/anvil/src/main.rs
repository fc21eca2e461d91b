//! Anvil CLI — module build-configuration tooling.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anvil", version, about = "Module build configuration toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter module descriptor
    Init {
        /// Module name
        name: String,
    },
    /// Validate a module descriptor
    Validate {
        /// Path to a .module.toml file
        descriptor: PathBuf,
    },
    /// Print a parsed module descriptor
    Describe {
        /// Path to a .module.toml file
        descriptor: PathBuf,
        /// Output format (default: human-readable, "toml" for canonical TOML)
        #[arg(long)]
        format: Option<String>,
    },
    /// Evaluate descriptors against a target platform and engine tree
    Configure {
        /// Path to a .module.toml file (omit with --all)
        descriptor: Option<PathBuf>,
        /// Target platform (e.g. win64, linux, mac)
        #[arg(long)]
        target: String,
        /// Engine root directory; shared-library paths resolve against it
        #[arg(long)]
        engine_root: PathBuf,
        /// Module directory (default: the descriptor's parent)
        #[arg(long)]
        module_dir: Option<PathBuf>,
        /// Evaluate every .module.toml in this directory
        #[arg(long)]
        all: Option<PathBuf>,
        /// Print the resolved configuration as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect the supported platform set
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },
    /// Check tool and working-tree status
    Doctor {
        /// Engine root to sanity-check
        #[arg(long)]
        engine_root: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum TargetAction {
    /// List supported platforms
    List,
    /// Show details of a platform
    Describe {
        /// Platform name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Validate { descriptor } => commands::validate::run(&descriptor),

        Commands::Describe { descriptor, format } => {
            commands::describe::run(&descriptor, format.as_deref())
        }

        Commands::Configure {
            descriptor,
            target,
            engine_root,
            module_dir,
            all,
            json,
        } => match (descriptor, all) {
            (Some(descriptor), None) => commands::configure::run(
                &descriptor,
                &target,
                &engine_root,
                module_dir.as_deref(),
                json,
            ),
            (None, Some(dir)) => commands::configure::run_all(&dir, &target, &engine_root, json),
            (Some(_), Some(_)) => {
                anyhow::bail!("pass either a descriptor path or --all <dir>, not both")
            }
            (None, None) => anyhow::bail!("specify a descriptor path or --all <dir>"),
        },

        Commands::Target { action } => match action {
            TargetAction::List => commands::target::list(),
            TargetAction::Describe { name } => commands::target::describe(&name),
        },

        Commands::Doctor { engine_root } => {
            let cwd = std::env::current_dir()?;
            commands::doctor::run(&cwd, engine_root.as_deref())
        }
    }
}
