//! Game session orchestration at the presentation boundary.
//!
//! [`GameSession`] mediates between the UI and the [`GameState`] core: it
//! applies taps, schedules the delayed computer reply as a cancellable
//! task, and publishes change events the UI re-renders from.

use crate::game::{GameSnapshot, GameState, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Pacing delay before the computer replies.
///
/// Exists only so a human observer can perceive the move sequencing;
/// correctness never depends on it.
pub const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(500);

/// Messages published to the UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A move was applied.
    MoveMade {
        /// The player who moved.
        mover: Player,
        /// The position that was marked.
        position: Position,
    },
    /// State changed; the UI should re-render from the snapshot.
    StateChanged(GameSnapshot),
    /// Game ended.
    GameOver {
        /// The winner, or `None` for a draw.
        winner: Option<Player>,
    },
}

/// A single-player game session.
///
/// State is only ever mutated from the tap handler and the one pending
/// deferred task; a generation counter invalidates deferred moves that
/// were scheduled before a reset.
pub struct GameSession {
    state: Arc<Mutex<GameState>>,
    rng: Arc<Mutex<StdRng>>,
    generation: Arc<AtomicU64>,
    delay: Duration,
    events: mpsc::UnboundedSender<GameEvent>,
    pending: Option<JoinHandle<()>>,
}

impl GameSession {
    /// Creates a new session publishing events on the given channel.
    #[instrument(skip(events))]
    pub fn new(events: mpsc::UnboundedSender<GameEvent>) -> Self {
        info!("creating game session");
        Self {
            state: Arc::new(Mutex::new(GameState::new())),
            rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
            generation: Arc::new(AtomicU64::new(0)),
            delay: COMPUTER_MOVE_DELAY,
            events,
            pending: None,
        }
    }

    /// Overrides the computer's pacing delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Seeds the computer opponent for deterministic play.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    /// Returns the current published state.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.lock().unwrap().snapshot()
    }

    /// Handles the human tapping a cell.
    ///
    /// Invalid taps (occupied square, out of turn, game over) are logged
    /// and ignored. A successful move schedules the computer's reply
    /// after the pacing delay.
    #[instrument(skip(self))]
    pub fn handle_tap(&mut self, pos: Position) {
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            if let Err(reason) = state.apply_human_move(pos) {
                debug!(%reason, "tap ignored");
                return;
            }
            info!("human moved");
            let _ = self.events.send(GameEvent::MoveMade {
                mover: Player::Human,
                position: pos,
            });
            if !state.is_active() {
                let _ = self.events.send(GameEvent::GameOver {
                    winner: state.status().winner(),
                });
            }
            state.snapshot()
        };

        let schedule = snapshot.active;
        let _ = self.events.send(GameEvent::StateChanged(snapshot));
        if schedule {
            self.schedule_computer_move();
        }
    }

    /// Resets the session to a fresh game.
    ///
    /// Any pending deferred computer move is invalidated: the generation
    /// bump makes a task that already slept past the bump discard itself
    /// at fire time.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.reset();
            state.snapshot()
        };
        info!("session reset");
        let _ = self.events.send(GameEvent::StateChanged(snapshot));
    }

    /// Schedules the computer's reply after the pacing delay.
    fn schedule_computer_move(&mut self) {
        let scheduled_at = self.generation.load(Ordering::SeqCst);
        let generation = Arc::clone(&self.generation);
        let state = Arc::clone(&self.state);
        let rng = Arc::clone(&self.rng);
        let events = self.events.clone();
        let delay = self.delay;

        debug!(delay_ms = delay.as_millis() as u64, "scheduling computer move");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = state.lock().unwrap();
            // The generation check and the state machine's own turn guard
            // together keep a stale task from touching a reset board.
            if generation.load(Ordering::SeqCst) != scheduled_at {
                debug!("stale deferred move discarded");
                return;
            }

            let mut rng = rng.lock().unwrap();
            match state.apply_computer_move(&mut *rng) {
                Ok(position) => {
                    info!(position = %position, "computer moved");
                    let _ = events.send(GameEvent::MoveMade {
                        mover: Player::Computer,
                        position,
                    });
                    if !state.is_active() {
                        let _ = events.send(GameEvent::GameOver {
                            winner: state.status().winner(),
                        });
                    }
                    let _ = events.send(GameEvent::StateChanged(state.snapshot()));
                }
                Err(reason) => debug!(%reason, "deferred move rejected"),
            }
        }));
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("delay", &self.delay)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
