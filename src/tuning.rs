//! Data-driven enemy balance
//!
//! Every tunable has a default matching `consts`, so a tuning file only needs
//! the values it changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::PlayField;

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    /// JSON could not be parsed
    #[error("Failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside the range the simulation can handle
    #[error("Invalid tuning value '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaserTuning {
    pub speed: f32,
    pub health: i32,
    pub size: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
    pub trail_length: usize,
    pub trail_interval_ms: u64,
}

impl Default for ChaserTuning {
    fn default() -> Self {
        Self {
            speed: CHASER_SPEED,
            health: CHASER_HEALTH,
            size: CHASER_SIZE,
            max_speed: CHASER_MAX_SPEED,
            acceleration: CHASER_ACCELERATION,
            friction: CHASER_FRICTION,
            trail_length: TRAIL_LENGTH,
            trail_interval_ms: TRAIL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterTuning {
    pub speed: f32,
    pub health: i32,
    pub size: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
    pub engage_radius: f32,
    pub engage_delay_ms: u64,
    pub cooldown_ms: u64,
    pub spread_deg: i32,
    pub projectile_speed: f32,
}

impl Default for ShooterTuning {
    fn default() -> Self {
        Self {
            speed: SHOOTER_SPEED,
            health: SHOOTER_HEALTH,
            size: SHOOTER_SIZE,
            max_speed: SHOOTER_MAX_SPEED,
            acceleration: SHOOTER_ACCELERATION,
            friction: SHOOTER_FRICTION,
            engage_radius: ENGAGE_RADIUS,
            engage_delay_ms: ENGAGE_DELAY_MS,
            cooldown_ms: SHOOTER_COOLDOWN_MS,
            spread_deg: SHOOTER_SPREAD_DEG,
            projectile_speed: PROJECTILE_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreaderTuning {
    pub speed: f32,
    pub health: i32,
    pub size: f32,
    pub radius: f32,
    pub cooldown_ms: u64,
    pub projectile_speed: f32,
}

impl Default for SpreaderTuning {
    fn default() -> Self {
        Self {
            speed: SPREADER_SPEED,
            health: SPREADER_HEALTH,
            size: SPREADER_SIZE,
            radius: SPREADER_RADIUS,
            cooldown_ms: SPREADER_COOLDOWN_MS,
            projectile_speed: PROJECTILE_SPEED,
        }
    }
}

/// All enemy tunables plus the stage they play on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: PlayField,
    pub chaser: ChaserTuning,
    pub shooter: ShooterTuning,
    pub spreader: SpreaderTuning,
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break steering or bounds math
    pub fn validate(&self) -> Result<(), TuningError> {
        check_friction("chaser.friction", self.chaser.friction)?;
        check_friction("shooter.friction", self.shooter.friction)?;
        check_positive("chaser.max_speed", self.chaser.max_speed)?;
        check_positive("shooter.max_speed", self.shooter.max_speed)?;
        check_positive("field.width", self.field.width)?;
        check_positive("field.height", self.field.height)?;

        if self.chaser.trail_length == 0 {
            return Err(TuningError::Invalid {
                field: "chaser.trail_length",
                reason: "must hold at least one sample".to_string(),
            });
        }
        if self.shooter.spread_deg < 0 {
            return Err(TuningError::Invalid {
                field: "shooter.spread_deg",
                reason: format!("must not be negative, got {}", self.shooter.spread_deg),
            });
        }
        Ok(())
    }
}

fn check_friction(field: &'static str, value: f32) -> Result<(), TuningError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("must be within [0, 1], got {}", value),
        })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("must be positive, got {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "chaser": { "max_speed": 9.0 } }"#).unwrap();
        assert_eq!(tuning.chaser.max_speed, 9.0);
        assert_eq!(tuning.chaser.acceleration, CHASER_ACCELERATION);
        assert_eq!(tuning.shooter, ShooterTuning::default());
        assert_eq!(tuning.field, PlayField::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut tuning = Tuning::default();
        tuning.spreader.cooldown_ms = 250;
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_bad_friction() {
        let err = Tuning::from_json(r#"{ "shooter": { "friction": 1.5 } }"#).unwrap_err();
        match err {
            TuningError::Invalid { field, .. } => assert_eq!(field, "shooter.friction"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_empty_trail() {
        let err = Tuning::from_json(r#"{ "chaser": { "trail_length": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("chaser.trail_length"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
