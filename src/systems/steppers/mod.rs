//! Steppers - the two tick algorithms
//!
//! Each stepper owns one whole-grid pass: seed scratch, walk the cells in its
//! own order, write results into scratch. Committing is left to the caller so
//! counters and rendering always see a finished tick.
//!
//! Life and gravity never run in the same tick; `StepperRegistry` dispatches
//! on the active kind.

mod life;
mod gravity;

pub use gravity::GravityStepper;
pub use life::LifeStepper;

use serde::{Deserialize, Serialize};

use crate::domain::{BuilderMode, PatternKind, SandboxConfig};
use crate::grid::Grid;

/// Which way blocked water tries to spread.
///
/// A single bias shared by every water cell: a flip made by one cell is seen
/// by every cell processed after it, in the same pass and in later ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowDirection {
    /// Toward column 0
    #[default]
    Left,
    /// Toward the last column
    Right,
}

impl FlowDirection {
    #[inline]
    pub fn col_delta(self) -> i32 {
        match self {
            FlowDirection::Left => -1,
            FlowDirection::Right => 1,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            FlowDirection::Left => FlowDirection::Right,
            FlowDirection::Right => FlowDirection::Left,
        }
    }
}

/// Builder settings the life stepper needs from the config
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuilderRules {
    pub default_cooldown: u32,
    pub mode: BuilderMode,
    pub pattern: PatternKind,
}

impl From<&SandboxConfig> for BuilderRules {
    fn from(config: &SandboxConfig) -> Self {
        Self {
            default_cooldown: config.default_build_cooldown,
            mode: config.builder_mode,
            pattern: config.pattern,
        }
    }
}

/// Everything a stepper may touch during one pass
pub struct StepContext<'a> {
    pub grid: &'a mut Grid,
    pub rules: &'a BuilderRules,
    pub flow: &'a mut FlowDirection,
}

/// What happened during one pass (for stats and logs)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    /// Builder stamps performed
    pub stamps: u32,
    /// Particles (or voyagers) that changed position
    pub moves: u32,
    /// Water flow reversals
    pub flips: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Life,
    Gravity,
}

/// Stepper trait - one implementation per simulation mode
pub trait Stepper {
    fn step(&self, ctx: &mut StepContext) -> StepReport;
}

/// Stepper registry - dispatch by mode
pub struct StepperRegistry {
    life: LifeStepper,
    gravity: GravityStepper,
}

impl StepperRegistry {
    pub fn new() -> Self {
        Self {
            life: LifeStepper::new(),
            gravity: GravityStepper::new(),
        }
    }

    pub fn step(&self, kind: StepKind, ctx: &mut StepContext) -> StepReport {
        match kind {
            StepKind::Life => self.life.step(ctx),
            StepKind::Gravity => self.gravity.step(ctx),
        }
    }
}

impl Default for StepperRegistry {
    fn default() -> Self {
        Self::new()
    }
}
