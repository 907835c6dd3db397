//! Game state and core simulation types
//!
//! One `GameState` holds everything a session needs. Start and restart
//! replace the whole record at once, so collaborators never see a partial reset.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::physics::Player;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for the start command
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Session ended; ticks are ignored until start/restart
    GameOver,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalCause {
    /// Player fell past the floor
    Floor,
    /// Player rose past the top edge
    Ceiling,
    /// No jump within the inactivity timeout
    Inactivity,
    /// Player box overlapped the obstacle box
    Collision,
}

/// Notable things that happened during a tick or command, for hosts to consume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { session: u64 },
    Restarted { session: u64 },
    Jumped,
    Scored { score: u64 },
    GameOver { cause: TerminalCause, score: u64 },
}

/// Read-only view a renderer needs to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player_y: f32,
    pub obstacle_x: f32,
    pub obstacle_y: f32,
    pub score: u64,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values, fixed for the lifetime of the state
    pub tuning: Tuning,
    /// Seed of the spawn RNG
    pub seed: u64,
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    pub obstacle: Obstacle,
    /// Obstacles passed this session
    pub score: u64,
    /// Generation counter, bumped on every start/restart
    pub session: u64,
    /// Engine clock (ms); only ever moves forward
    pub time_ms: f64,
    /// Engine time of the last jump or session start
    pub last_input_ms: f64,
    /// Ticks simulated in the current session
    pub session_ticks: u64,
    /// What ended the last session, if it has ended
    pub last_cause: Option<TerminalCause>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given tuning and spawn seed
    ///
    /// Panics if `tuning` is invalid: a broken configuration is a programming
    /// error, not a game event.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        if let Err(e) = tuning.validate() {
            panic!("invalid tuning: {e}");
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacle = Obstacle::spawn(&tuning, &mut rng);

        Self {
            tuning,
            seed,
            rng,
            phase: GamePhase::NotStarted,
            player: Player::at(tuning.start_y()),
            obstacle,
            score: 0,
            session: 0,
            time_ms: 0.0,
            last_input_ms: 0.0,
            session_ticks: 0,
            last_cause: None,
            events: Vec::new(),
        }
    }

    /// Begin a session from NotStarted or GameOver
    ///
    /// Returns `false` (and changes nothing) if a session is already running.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Running {
            log::debug!("start ignored: session {} already running", self.session);
            return false;
        }
        self.reset(GamePhase::Running);
        log::info!("Session {} started", self.session);
        self.events.push(GameEvent::Started {
            session: self.session,
        });
        true
    }

    /// Reset everything and return to the start screen
    pub fn restart(&mut self) {
        self.reset(GamePhase::NotStarted);
        log::info!("Session {} reset to start screen", self.session);
        self.events.push(GameEvent::Restarted {
            session: self.session,
        });
    }

    /// Apply an upward impulse; ignored unless running
    pub fn jump(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.player.jump(self.tuning.jump_force);
        self.last_input_ms = self.time_ms;
        self.events.push(GameEvent::Jumped);
        true
    }

    fn reset(&mut self, phase: GamePhase) {
        self.session = self.session.wrapping_add(1);
        self.phase = phase;
        self.player = Player::at(self.tuning.start_y());
        self.obstacle = Obstacle::spawn(&self.tuning, &mut self.rng);
        self.score = 0;
        self.last_input_ms = self.time_ms;
        self.session_ticks = 0;
        self.last_cause = None;
    }

    /// Move to GameOver, recording why
    pub(crate) fn end_session(&mut self, cause: TerminalCause) {
        debug_assert_eq!(self.phase, GamePhase::Running);
        self.phase = GamePhase::GameOver;
        self.last_cause = Some(cause);
        log::info!(
            "Session {} over ({:?}) with score {} after {} ticks",
            self.session,
            cause,
            self.score,
            self.session_ticks
        );
        self.events.push(GameEvent::GameOver {
            cause,
            score: self.score,
        });
    }

    /// Count a completed traversal and send the obstacle round again
    ///
    /// The phase is read now, not when the traversal began: a traversal that
    /// finishes after the session ended never scores.
    pub(crate) fn complete_traversal(&mut self, carry_ms: f32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.score += 1;
        self.obstacle.respawn(&self.tuning, &mut self.rng, carry_ms);
        log::debug!("Scored {} (obstacle y={:.1})", self.score, self.obstacle.y);
        self.events.push(GameEvent::Scored { score: self.score });
        true
    }

    /// Milliseconds since the last jump (or session start)
    pub fn idle_ms(&self) -> f64 {
        self.time_ms - self.last_input_ms
    }

    /// Observable state at the last tick
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player_y: self.player.y,
            obstacle_x: self.obstacle.x,
            obstacle_y: self.obstacle.y,
            score: self.score,
        }
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_on_start_screen() {
        let state = GameState::new(Tuning::default(), 7);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.y, 400.0);
        assert_eq!(state.obstacle.x, 360.0);
    }

    #[test]
    #[should_panic(expected = "invalid tuning")]
    fn test_invalid_tuning_panics() {
        let tuning = Tuning {
            tick_interval_ms: -5.0,
            ..Default::default()
        };
        let _ = GameState::new(tuning, 1);
    }

    #[test]
    fn test_start_resets_numeric_state() {
        let mut state = GameState::new(Tuning::default(), 42);
        assert!(state.start());
        state.player.y = 12.0;
        state.player.vel_y = 9.0;
        state.score = 5;
        state.obstacle.x = -3.0;
        state.time_ms = 1234.0;
        state.end_session(TerminalCause::Collision);

        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player, Player::at(400.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacle.x, 360.0);
        assert_eq!(state.obstacle.elapsed_ms, 0.0);
        assert_eq!(state.last_input_ms, 1234.0);
        assert_eq!(state.last_cause, None);
    }

    #[test]
    fn test_double_start_is_idempotent() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.start();
        let once = state.snapshot();
        let session = state.session;

        assert!(!state.start());
        assert_eq!(state.snapshot(), once);
        assert_eq!(state.session, session);
    }

    #[test]
    fn test_restart_returns_to_start_screen() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.start();
        state.score = 9;
        state.end_session(TerminalCause::Floor);
        let old_session = state.session;

        state.restart();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert!(state.session > old_session);
    }

    #[test]
    fn test_jump_ignored_unless_running() {
        let mut state = GameState::new(Tuning::default(), 3);
        assert!(!state.jump());
        assert_eq!(state.player.vel_y, 0.0);

        state.start();
        assert!(state.jump());
        assert_eq!(state.player.vel_y, -20.0);

        state.end_session(TerminalCause::Inactivity);
        state.player.vel_y = 4.0;
        assert!(!state.jump());
        assert_eq!(state.player.vel_y, 4.0);
    }

    #[test]
    fn test_traversal_after_game_over_does_not_score() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.start();
        assert!(state.complete_traversal(0.0));
        assert_eq!(state.score, 1);

        state.end_session(TerminalCause::Collision);
        assert!(!state.complete_traversal(0.0));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_events_drain() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.start();
        state.jump();
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::Started { session: 1 }, GameEvent::Jumped]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let state = GameState::new(Tuning::default(), 3);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"playerY\":400.0"));
        assert!(json.contains("\"phase\":\"NotStarted\""));
    }
}
