//! Application state and logic for a game run.

use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument, warn};

use crate::game::{GameSession, Point, Segment};
use crate::highscore::HighscoreEntry;
use crate::store::{HighscoreStore, SavedGame};

use super::input::PlayerAction;

/// Which part of the run the player is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Normal play.
    Playing,
    /// Asked to confirm leaving the game.
    ConfirmQuit,
    /// No legal play remains.
    GameOver,
}

/// Tone of the message bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Neutral guidance.
    Info,
    /// An accepted play.
    Success,
    /// A rejected action.
    Error,
}

/// A line for the message bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    kind: MessageKind,
    text: String,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Info, text: text.into() }
    }

    fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }

    /// Tone of the message.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Text shown in the bar.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Whether the loop keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep handling input.
    Continue,
    /// Leave the game.
    Exit,
}

/// What a finished run reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct GameSummary {
    /// Final score.
    score: u32,
    /// Segments played.
    lines: usize,
    /// Rank earned on the score table, when the score qualified.
    rank: Option<usize>,
}

/// Controller for one interactive game.
///
/// Owns the session for the duration of the run and turns decoded
/// player actions into engine calls, messages and score submissions.
pub struct App<'a> {
    session: &'a mut GameSession,
    store: &'a HighscoreStore,
    phase: Phase,
    message: Message,
    rank: Option<usize>,
    score_submitted: bool,
}

impl<'a> App<'a> {
    /// Creates the controller, entering the game-over phase right away
    /// when the session has no play left.
    pub fn new(session: &'a mut GameSession, store: &'a HighscoreStore) -> Self {
        let mut app = Self {
            session,
            store,
            phase: Phase::Playing,
            message: Message::info(
                "Arrows or wasd move, space selects, h cycles help, u takes back, q leaves",
            ),
            rank: None,
            score_submitted: false,
        };
        if app.session.is_finished() {
            // A finished save was loaded; its score was already ranked.
            app.phase = Phase::GameOver;
            app.score_submitted = true;
            app.message = Message::info(format!(
                "No play remains! Final score {}. Press q to leave.",
                app.session.score()
            ));
        }
        app
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &*self.session
    }

    /// The current message bar content.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Totals for the caller once the run is over.
    pub fn summary(&self) -> GameSummary {
        GameSummary::new(self.session.score(), self.session.segments().len(), self.rank)
    }

    /// Applies one player action.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn handle_action(&mut self, action: PlayerAction) -> Flow {
        debug!(?action, "Handling action");
        match self.phase {
            Phase::Playing => self.handle_playing(action),
            Phase::ConfirmQuit => self.handle_confirm_quit(action),
            Phase::GameOver => self.handle_game_over(action),
        }
    }

    fn handle_playing(&mut self, action: PlayerAction) -> Flow {
        match action {
            PlayerAction::Left => self.move_cursor(-1, 0),
            PlayerAction::Right => self.move_cursor(1, 0),
            PlayerAction::Up => self.move_cursor(0, 1),
            PlayerAction::Down => self.move_cursor(0, -1),
            PlayerAction::Confirm => self.confirm(),
            PlayerAction::ToggleHelp => {
                let mode = self.session.toggle_mode();
                self.message = Message::info(format!("Display mode: {}", mode.label()));
            }
            PlayerAction::Cancel => {
                if self.session.select().is_some() {
                    self.session.clear_select();
                    self.message = Message::info("Selection cleared");
                } else {
                    self.enter_confirm_quit();
                }
            }
            PlayerAction::Undo => self.undo(),
            PlayerAction::Quit => self.enter_confirm_quit(),
            PlayerAction::Yes => {}
        }
        Flow::Continue
    }

    fn handle_confirm_quit(&mut self, action: PlayerAction) -> Flow {
        if action == PlayerAction::Yes {
            self.submit_score();
            return Flow::Exit;
        }
        self.phase = Phase::Playing;
        self.message = Message::info("Back to the game");
        Flow::Continue
    }

    fn handle_game_over(&mut self, action: PlayerAction) -> Flow {
        match action {
            PlayerAction::Quit | PlayerAction::Confirm | PlayerAction::Cancel | PlayerAction::Yes => {
                Flow::Exit
            }
            _ => Flow::Continue,
        }
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let cursor = self.session.cursor();
        self.session.set_cursor(cursor.offset(dx, dy));
    }

    fn confirm(&mut self) {
        let cursor = self.session.cursor();
        match self.session.select() {
            None => {
                self.session.set_select(cursor);
                self.message = Message::info(format!("Selected {}, now pick the other end", cursor));
            }
            Some(select) if select == cursor => {
                self.session.clear_select();
                self.message = Message::info("Selection cleared");
            }
            Some(select) => self.play_between(select, cursor),
        }
    }

    fn play_between(&mut self, from: Point, to: Point) {
        let Some(segment) = Segment::between(from, to) else {
            self.message =
                Message::error(format!("No straight six-point segment joins {} and {}", from, to));
            return;
        };
        match self.session.play(segment) {
            Ok(outcome) => {
                self.session.clear_select();
                self.message = Message::success(if *outcome.full_line() {
                    format!("Full line! +{} points", outcome.points())
                } else {
                    format!("+{} points", outcome.points())
                });
                self.autosave();
                if self.session.is_finished() {
                    self.enter_game_over();
                }
            }
            Err(err) => {
                // Keep the selection so the player can aim again.
                self.message = Message::error(err.to_string());
            }
        }
    }

    fn undo(&mut self) {
        match self.session.undo() {
            Some(segment) => {
                self.message = Message::info(format!("Took back {}", segment));
                self.autosave();
            }
            None => self.message = Message::error("Nothing to undo"),
        }
    }

    fn enter_confirm_quit(&mut self) {
        self.phase = Phase::ConfirmQuit;
        self.message = Message::info("Leave the game? y confirms, any other key stays");
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.submit_score();
        let score = self.session.score();
        self.message = match self.rank {
            Some(rank) => Message::success(format!(
                "No play remains! Score {} takes rank {} on the table. Press q to leave.",
                score, rank
            )),
            None => Message::info(format!(
                "No play remains! Final score {}. Press q to leave.",
                score
            )),
        };
    }

    /// Ranks the score into the stored table, once per run.
    fn submit_score(&mut self) {
        if self.score_submitted || self.session.score() == 0 {
            return;
        }
        self.score_submitted = true;
        let entry =
            HighscoreEntry::new(self.session.score(), self.session.nickname().unwrap_or("anonymous"));
        match self.store.load() {
            Ok(mut table) => {
                self.rank = table.submit(entry);
                if let Err(err) = self.store.store(&table) {
                    warn!(%err, "Could not write scores");
                }
            }
            Err(err) => warn!(%err, "Could not read scores"),
        }
    }

    /// Rewrites the save file after a change, when a path is set.
    fn autosave(&mut self) {
        let Some(path) = self.session.save_path() else {
            return;
        };
        let save = SavedGame::capture(self.session);
        if let Err(err) = save.write_to(path) {
            warn!(%err, "Could not write saved game");
            self.message = Message::error(format!("Could not save: {}", err));
        }
    }
}
