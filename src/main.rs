//! Morpion - join five solitaire for the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use morpion::{Cli, Command, GameConfig, GameSession, HighscoreStore, SavedGame};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            nickname,
            file,
            config,
        } => run_play(nickname, file, config),
        Command::Scores { config } => run_scores(config),
    }
}

/// Play a game in the terminal
#[instrument(skip_all, fields(config = %config.display()))]
fn run_play(
    nickname: Option<String>,
    file: Option<std::path::PathBuf>,
    config: std::path::PathBuf,
) -> Result<()> {
    // Log to a file so tracing output does not tear the alternate screen.
    let log_file = std::fs::File::create("morpion.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting morpion");

    let config = GameConfig::load(&config)?;
    let scoring = *config.scoring();

    let mut session = match &file {
        Some(path) if path.exists() => {
            let saved = SavedGame::from_file(path)?;
            info!(segments = saved.segments().len(), "Resuming saved game");
            saved.restore(scoring)?
        }
        _ => GameSession::new(scoring),
    };

    let nickname = nickname
        .or_else(|| session.nickname().map(str::to_string))
        .unwrap_or_else(|| config.nickname().clone());
    session.set_nickname(nickname);
    if let Some(path) = file {
        session.set_save_path(path);
    }

    let store = HighscoreStore::new(config.highscores());
    let summary = morpion::run_game(&mut session, &store)?;

    println!(
        "Played {} lines for {} points.",
        summary.lines(),
        summary.score()
    );
    if let Some(rank) = summary.rank() {
        println!("New highscore! Rank {} on the table.", rank);
    }
    Ok(())
}

/// Show the score table
#[instrument(skip_all, fields(config = %config.display()))]
fn run_scores(config: std::path::PathBuf) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GameConfig::load(&config)?;
    let store = HighscoreStore::new(config.highscores());
    let table = store.load()?;

    if table.is_empty() {
        println!("No scores recorded yet.");
        return Ok(());
    }

    println!("Top scores:");
    for (rank, entry) in table.entries().iter().enumerate() {
        println!(
            "{:>2}. {:<16} {:>6}  {}",
            rank + 1,
            entry.nickname(),
            entry.score(),
            entry.recorded_at().format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}
