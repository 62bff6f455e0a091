//! World configuration
//!
//! Loaded from JSON the same way content bundles are: camelCase keys, every
//! field optional, validated after parsing. Only the speed can change after
//! construction.

use serde::{Deserialize, Serialize};

use crate::core::{SandboxError, SandboxResult};

use super::patterns::PatternKind;

pub const DEFAULT_ROWS: u32 = 75;
pub const DEFAULT_COLS: u32 = 100;
pub const DEFAULT_BUILD_COOLDOWN: u32 = 16;
pub const PLACED_BUILD_COOLDOWN: u32 = 1;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
/// Delay added per speed step below `MAX_SPEED`
pub const DELAY_STEP_MS: u32 = 100;

/// What a builder does after its first stamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuilderMode {
    /// Stamp once, then stay dormant for the rest of the run.
    #[default]
    SingleShot,
    /// Re-arm with `default_build_cooldown` after every stamp.
    Repeating,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SandboxConfig {
    pub rows: u32,
    pub cols: u32,
    /// Cooldown a repeating builder re-arms with after stamping
    pub default_build_cooldown: u32,
    /// Cooldown given to a builder painted by the user
    pub placed_build_cooldown: u32,
    pub builder_mode: BuilderMode,
    pub pattern: PatternKind,
    /// 1 (slowest) ..= 10 (no delay)
    pub speed: u8,
    /// Seed for `randomize`
    pub seed: u32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            default_build_cooldown: DEFAULT_BUILD_COOLDOWN,
            placed_build_cooldown: PLACED_BUILD_COOLDOWN,
            builder_mode: BuilderMode::SingleShot,
            pattern: PatternKind::MiniRocket,
            speed: MAX_SPEED,
            seed: 12345,
        }
    }
}

impl SandboxConfig {
    pub fn with_size(rows: u32, cols: u32) -> Self {
        Self { rows, cols, ..Self::default() }
    }

    pub fn from_json(json: &str) -> SandboxResult<Self> {
        let config: SandboxConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SandboxResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SandboxError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.rows, self.cols
            )));
        }
        if (self.rows as u64) * (self.cols as u64) > u32::MAX as u64 {
            return Err(SandboxError::InvalidConfig(format!(
                "grid {}x{} is too large",
                self.rows, self.cols
            )));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(SandboxError::InvalidConfig(format!(
                "speed must be in {}..={}, got {}",
                MIN_SPEED, MAX_SPEED, self.speed
            )));
        }
        Ok(())
    }
}

/// Inter-tick delay for a speed step: 10 -> 0ms, 9 -> 100ms, ... 1 -> 900ms.
#[inline]
pub fn delay_for_speed(speed: u8) -> u32 {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    (MAX_SPEED - speed) as u32 * DELAY_STEP_MS
}
