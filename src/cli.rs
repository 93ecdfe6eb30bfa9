//! Command-line interface for morpion.

use clap::{Parser, Subcommand};

/// Morpion - join five solitaire in the terminal
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Join five solitaire in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Nickname recorded with the score
        #[arg(short, long)]
        nickname: Option<String>,

        /// Saved game to resume; created when missing, rewritten after every play
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,

        /// Path to the configuration file
        #[arg(short, long, default_value = "morpion.toml")]
        config: std::path::PathBuf,
    },

    /// Show the score table
    Scores {
        /// Path to the configuration file
        #[arg(short, long, default_value = "morpion.toml")]
        config: std::path::PathBuf,
    },
}
