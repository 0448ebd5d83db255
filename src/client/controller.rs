//! One player's session: the current game plus a cached match history.

use tracing::{debug, info, warn};

use super::results::{ResultsApi, SaveOutcome, save_and_refresh};
use crate::{dto::results::GameResultSummary, game::GameState};

/// Drives games and keeps the locally cached history in sync with the backend.
///
/// Store failures never interrupt play: they are logged and the previous
/// history stays visible.
pub struct MatchController<A> {
    api: A,
    game: GameState,
    history: Vec<GameResultSummary>,
}

impl<A: ResultsApi> MatchController<A> {
    /// New session with an empty board and no history loaded yet.
    pub fn new(api: A) -> Self {
        Self {
            api,
            game: GameState::reset(),
            history: Vec::new(),
        }
    }

    /// Current game snapshot.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cached results, newest first.
    pub fn history(&self) -> &[GameResultSummary] {
        &self.history
    }

    /// Reload the history, keeping the cached copy on failure.
    ///
    /// Returns whether the cache was updated.
    pub async fn refresh_history(&mut self) -> bool {
        match self.api.list_results().await {
            Ok(results) => {
                debug!(count = results.len(), "history refreshed");
                self.history = results;
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch game history");
                false
            }
        }
    }

    /// Play the current player's mark at `index`; invalid moves are ignored.
    pub fn play(&mut self, index: usize) -> &GameState {
        self.game = self.game.apply_move(index);
        &self.game
    }

    /// Start a new game.
    ///
    /// A finished game is saved exactly once before the board is cleared; the
    /// board is cleared whether or not the save succeeds. Returns the save
    /// workflow outcome when one ran.
    pub async fn reset(&mut self) -> Option<SaveOutcome> {
        let outcome = match self.game.winner_label() {
            Some(label) => Some(self.record(label).await),
            None => None,
        };
        self.game = GameState::reset();
        outcome
    }

    async fn record(&mut self, label: &str) -> SaveOutcome {
        let outcome = save_and_refresh(&self.api, label.to_string()).await;

        match &outcome.saved {
            Ok(saved) => info!(id = %saved.id, winner = %saved.winner, "game result saved"),
            Err(err) => warn!(error = %err, winner = label, "failed to save game result"),
        }

        match &outcome.refreshed {
            Some(Ok(results)) => self.history = results.clone(),
            Some(Err(err)) => warn!(error = %err, "saved result but failed to reload history"),
            None => {}
        }

        outcome
    }
}
