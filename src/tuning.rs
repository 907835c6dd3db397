//! Game tuning
//!
//! Every option only changes difficulty and feel, never control flow.
//! Loaded from a JSON file with camelCase keys; missing keys take defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning values or an unreadable tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        value: f32,
        min: f32,
    },
    #[error("{field} ({size}) must be smaller than the screen height ({screen_height})")]
    TallerThanScreen {
        field: &'static str,
        size: f32,
        screen_height: f32,
    },
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable game balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    pub player_size: f32,
    pub obstacle_size: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub obstacle_traversal_duration_ms: f32,
    pub inactivity_timeout_ms: f32,
    pub tick_interval_ms: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            obstacle_size: OBSTACLE_SIZE,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            obstacle_traversal_duration_ms: OBSTACLE_TRAVERSAL_MS,
            inactivity_timeout_ms: INACTIVITY_TIMEOUT_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
        }
    }
}

impl Tuning {
    /// Lowest allowed player y (top-left corner touching the floor)
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.player_size
    }

    /// Fixed horizontal position of the player (quarter of the screen)
    #[inline]
    pub fn player_x(&self) -> f32 {
        self.screen_width / 4.0
    }

    /// Exclusive upper bound for a spawned obstacle's y
    #[inline]
    pub fn spawn_y_max(&self) -> f32 {
        self.screen_height - self.obstacle_size
    }

    /// Mid-screen start height for the player
    #[inline]
    pub fn start_y(&self) -> f32 {
        self.screen_height / 2.0
    }

    /// Tick interval as a `Duration`
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_micros((self.tick_interval_ms * 1000.0).round() as u64)
    }

    /// Check the values describe a playable configuration
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("playerSize", self.player_size),
            ("obstacleSize", self.obstacle_size),
            ("gravity", self.gravity),
            ("jumpForce", self.jump_force),
            ("obstacleTraversalDurationMs", self.obstacle_traversal_duration_ms),
            ("inactivityTimeoutMs", self.inactivity_timeout_ms),
            ("tickIntervalMs", self.tick_interval_ms),
            ("screenWidth", self.screen_width),
            ("screenHeight", self.screen_height),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { field, value });
            }
        }

        let positive = [
            ("playerSize", self.player_size),
            ("obstacleSize", self.obstacle_size),
            ("obstacleTraversalDurationMs", self.obstacle_traversal_duration_ms),
            ("inactivityTimeoutMs", self.inactivity_timeout_ms),
            ("tickIntervalMs", self.tick_interval_ms),
            ("screenWidth", self.screen_width),
            ("screenHeight", self.screen_height),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(TuningError::TooSmall {
                field: "tickIntervalMs",
                value: self.tick_interval_ms,
                min: MIN_TICK_INTERVAL_MS,
            });
        }

        for (field, size) in [
            ("playerSize", self.player_size),
            ("obstacleSize", self.obstacle_size),
        ] {
            if size >= self.screen_height {
                return Err(TuningError::TallerThanScreen {
                    field,
                    size,
                    screen_height: self.screen_height,
                });
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and validate a tuning file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from disk, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.floor_y(), 750.0);
        assert_eq!(tuning.player_x(), 90.0);
        assert_eq!(tuning.spawn_y_max(), 740.0);
        assert_eq!(tuning.start_y(), 400.0);
        assert_eq!(tuning.tick_duration(), std::time::Duration::from_millis(50));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 2.5, "screenWidth": 480 }"#).unwrap();
        assert_eq!(tuning.gravity, 2.5);
        assert_eq!(tuning.screen_width, 480.0);
        assert_eq!(tuning.jump_force, JUMP_FORCE);
        assert_eq!(tuning.inactivity_timeout_ms, INACTIVITY_TIMEOUT_MS);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let err = Tuning::from_json(r#"{ "obstacleTraversalDurationMs": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NonPositive {
                field: "obstacleTraversalDurationMs",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_obstacle_taller_than_screen() {
        let tuning = Tuning {
            obstacle_size: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::TallerThanScreen {
                field: "obstacleSize",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_sub_microsecond_tick() {
        let tuning = Tuning {
            tick_interval_ms: 0.0004,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::TooSmall {
                field: "tickIntervalMs",
                ..
            })
        ));

        let smallest = Tuning {
            tick_interval_ms: MIN_TICK_INTERVAL_MS,
            ..Default::default()
        };
        assert!(smallest.validate().is_ok());
        assert_eq!(smallest.tick_duration(), std::time::Duration::from_micros(1));
    }

    #[test]
    fn test_rejects_non_finite() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonFinite { field: "gravity", .. })
        ));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load("/definitely/not/here/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }
}
