use anyhow::Context;
use clap::{Parser, Subcommand};
use git_menu::commands::*;
use git_menu::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-menu")]
#[command(about = "The git menu of a text editor, on the command line")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Window title to decorate (defaults to the file name)
    #[arg(long, global = true)]
    title: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the file's git status and the decorated title
    Status { file: PathBuf },
    /// List the revisions that touched the file
    History {
        file: PathBuf,
        /// Print the revisions as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the branches other than the current one
    Branches { file: PathBuf },
    /// Compare the file with a revision
    CompareRevision {
        file: PathBuf,
        revision: String,
        /// Compare the revision with the one before it instead
        #[arg(long)]
        previous: bool,
    },
    /// Compare the file's content at two revisions
    CompareRevisions {
        file: PathBuf,
        older: String,
        newer: String,
    },
    /// Compare the file with its version on another branch
    CompareBranch { file: PathBuf, branch: String },
    /// Compare the file with any other file
    CompareFile { file: PathBuf, other: PathBuf },
    /// Stage the file
    Stage { file: PathBuf },
    /// Unstage the file, keeping its changes
    Unstage { file: PathBuf },
    /// Discard working changes to the file
    Checkout { file: PathBuf },
    /// Pull the work tree containing the file
    Pull { file: PathBuf },
    /// Start git gui for the file's work tree
    OpenGui { file: PathBuf },
    /// Start gitg for the file's work tree
    OpenGitg { file: PathBuf },
    /// Open the file's work tree in the file manager
    OpenDir { file: PathBuf },
    /// Show the configuration, or write the defaults with --init
    Config {
        #[arg(long)]
        init: bool,
    },
}

fn run(command: Commands, title: Option<String>) -> Result<()> {
    match command {
        Commands::Status { file } => execute_status(&file, title),
        Commands::History { file, json } => execute_history(&file, title, json),
        Commands::Branches { file } => execute_branches(&file, title),
        Commands::CompareRevision {
            file,
            revision,
            previous,
        } => execute_compare_revision(&file, title, &revision, previous),
        Commands::CompareRevisions { file, older, newer } => {
            execute_compare_revisions(&file, title, &older, &newer)
        }
        Commands::CompareBranch { file, branch } => execute_compare_branch(&file, title, &branch),
        Commands::CompareFile { file, other } => execute_compare_file(&file, title, &other),
        Commands::Stage { file } => execute_stage(&file, title),
        Commands::Unstage { file } => execute_unstage(&file, title),
        Commands::Checkout { file } => execute_checkout(&file, title),
        Commands::Pull { file } => execute_pull(&file, title),
        Commands::OpenGui { file } => execute_open_gui(&file, title),
        Commands::OpenGitg { file } => execute_open_gitg(&file, title),
        Commands::OpenDir { file } => execute_open_dir(&file, title),
        Commands::Config { init } => execute_config(init),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::try_init().context("Failed to initialize logging")?;

    if let Err(e) = run(cli.command, cli.title) {
        // Precondition failures were already shown as a notice
        if !e.is_precondition() {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
