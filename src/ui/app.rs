use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai;
use crate::config::{GameMode, Settings};
use crate::game::{GameOutcome, GameState, Player};
use crate::persist::Store;
use crate::stats::Stats;

pub struct App<S: Store> {
    game: GameState,
    settings: Settings,
    stats: Stats,
    store: S,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    stats_recorded: bool,
}

impl<S: Store> App<S> {
    /// Build the app, pulling settings and statistics out of the store.
    /// Load failures are swallowed; the game must stay playable with
    /// defaults even if persistence never works.
    pub fn new(store: S) -> Self {
        let settings = store.load_settings().ok().flatten().unwrap_or_default();
        let stats = store.load_stats().ok().flatten().unwrap_or_default();

        let mut game = GameState::new();
        game.start();

        App {
            game,
            settings,
            stats,
            store,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            stats_recorded: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                let _ = self.store.save_settings(&self.settings);
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('u') => {
                self.undo();
            }
            KeyCode::Char('r') => {
                self.game.start();
                self.selected_column = 3;
                self.stats_recorded = false;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('m') => {
                self.settings.game_mode = self.settings.game_mode.toggle();
                let _ = self.store.save_settings(&self.settings);
                self.message = Some(format!("Mode: {}", self.settings.game_mode.name()));
            }
            KeyCode::Char('a') => {
                self.settings.ai_difficulty = self.settings.ai_difficulty.next();
                let _ = self.store.save_settings(&self.settings);
                self.message = Some(format!("AI: {}", self.settings.ai_difficulty.name()));
            }
            _ => {}
        }
    }

    /// Drop a piece in the selected column, then let the AI reply in pve.
    fn drop_piece(&mut self) {
        if self.game.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if !self.game.place(self.selected_column) {
            self.message = Some("Column is full!".to_string());
            return;
        }

        self.after_placement();

        if !self.game.is_terminal()
            && self.settings.game_mode == GameMode::Pve
            && self.game.current_player() == Player::Yellow
        {
            self.ai_reply();
        }
    }

    /// Compute and play Yellow's move with the configured strategy.
    fn ai_reply(&mut self) {
        let mut strategy = ai::strategy_for(self.settings.ai_difficulty);
        if let Some(col) = self.game.ai_move(strategy.as_mut()) {
            self.game.place(col);
            self.after_placement();
        }
    }

    /// Record statistics the moment a game finishes. Save failures are
    /// dropped; the in-memory counters still update.
    fn after_placement(&mut self) {
        let Some(outcome) = self.game.outcome() else {
            return;
        };
        if !self.stats_recorded {
            self.stats
                .record_game(outcome, self.game.move_count(), self.game.elapsed());
            self.stats_recorded = true;
            let _ = self.store.save_stats(&self.stats);
        }

        self.message = Some(match outcome {
            GameOutcome::Winner(player) => format!("{} wins!", player.name()),
            GameOutcome::Draw => "It's a draw!".to_string(),
        });
    }

    fn undo(&mut self) {
        if !self.game.undo() {
            self.message = Some("Nothing to undo!".to_string());
            return;
        }
        // In pve the AI replied on top of the human move; take that back too
        // so it is the human's turn again.
        if self.settings.game_mode == GameMode::Pve
            && self.game.current_player() == Player::Yellow
        {
            self.game.undo();
        }
        self.message = Some("Move undone!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            &self.settings,
            &self.stats,
            &self.message,
        );
    }

    #[cfg(test)]
    pub(crate) fn game(&self) -> &GameState {
        &self.game
    }

    #[cfg(test)]
    pub(crate) fn stats(&self) -> &Stats {
        &self.stats
    }
}
