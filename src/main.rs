use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workbench_navigator::commands::*;
use workbench_navigator::core::{
    error::{Result, WorkbenchError},
    print_error,
};

#[derive(Parser)]
#[command(name = "workbench-navigator")]
#[command(about = "Change tree and message search for the coding assistant workbench")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show changed files as a collapsible directory tree
    Tree {
        /// Only show one section ("changes" or "staged")
        #[arg(long)]
        section: Option<String>,
        /// Print the raw rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Collapse or expand a directory, or a whole section when no path is given
    Collapse {
        /// Section the directory belongs to ("changes" or "staged")
        section: String,
        /// Directory path relative to the repository root
        path: Option<String>,
    },
    /// Search thread messages
    Search {
        /// Text to search for (at least two characters)
        query: String,
        /// Workspace to search in
        #[arg(short, long)]
        workspace: Option<String>,
        /// Thread file to search instead of the configured one
        #[arg(long)]
        threads: Option<PathBuf>,
        /// Open the thread of result N
        #[arg(long, value_name = "N")]
        select: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Tree { section, json } => execute_tree(section, json),
        Commands::Collapse { section, path } => execute_collapse(section, path),
        Commands::Search {
            query,
            workspace,
            threads,
            select,
        } => execute_search(SearchArgs {
            query,
            workspace,
            threads,
            select,
        }),
    };

    if let Err(e) = result {
        if let WorkbenchError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
