//! Tick scheduling
//!
//! The host owns the clock and calls `frame(now_ms)` from its animation loop;
//! that call is the only suspension point. A tick is due when a mode is
//! running and `delay_ms` has passed since the previous one. Stopping only
//! flips the mode, so the check at the next boundary cancels the run and no
//! tick is ever cut short.
//!
//! Every start and stop bumps the run token. A host driving its own
//! `setTimeout` loop keeps the token from `start_*` and bails out once
//! `is_active(token)` turns false.

use serde::Serialize;

use crate::domain::config::{delay_for_speed, MAX_SPEED, MIN_SPEED};
use crate::systems::steppers::StepKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum SimMode {
    #[default]
    Idle = 0,
    LifeRunning = 1,
    GravityRunning = 2,
}

impl SimMode {
    #[inline]
    pub fn step_kind(self) -> Option<StepKind> {
        match self {
            SimMode::Idle => None,
            SimMode::LifeRunning => Some(StepKind::Life),
            SimMode::GravityRunning => Some(StepKind::Gravity),
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            SimMode::Idle => "idle",
            SimMode::LifeRunning => "life",
            SimMode::GravityRunning => "gravity",
        }
    }
}

/// Identifies one started run; stale after the next start or stop
pub type RunToken = u32;

pub(crate) struct TickScheduler {
    mode: SimMode,
    speed: u8,
    delay_ms: u32,
    last_tick_ms: Option<f64>,
    token: RunToken,
}

impl TickScheduler {
    pub(crate) fn new(speed: u8) -> Self {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        Self {
            mode: SimMode::Idle,
            speed,
            delay_ms: delay_for_speed(speed),
            last_tick_ms: None,
            token: 0,
        }
    }

    #[inline]
    pub(crate) fn mode(&self) -> SimMode { self.mode }

    #[inline]
    pub(crate) fn speed(&self) -> u8 { self.speed }

    #[inline]
    pub(crate) fn delay_ms(&self) -> u32 { self.delay_ms }

    #[inline]
    pub(crate) fn token(&self) -> RunToken { self.token }

    /// Enter `mode`. The first tick is due immediately.
    pub(crate) fn start(&mut self, mode: SimMode) -> RunToken {
        self.mode = mode;
        self.last_tick_ms = None;
        self.token = self.token.wrapping_add(1);
        self.token
    }

    /// Back to Idle; returns the mode that was running
    pub(crate) fn stop(&mut self) -> SimMode {
        let previous = self.mode;
        self.mode = SimMode::Idle;
        self.last_tick_ms = None;
        self.token = self.token.wrapping_add(1);
        previous
    }

    #[inline]
    pub(crate) fn is_active(&self, token: RunToken) -> bool {
        self.mode != SimMode::Idle && token == self.token
    }

    /// Which stepper to run now, if any
    pub(crate) fn poll(&self, now_ms: f64) -> Option<StepKind> {
        let kind = self.mode.step_kind()?;
        let due = match self.last_tick_ms {
            None => true,
            // A clock that jumped backwards counts as due
            Some(last) => now_ms < last || now_ms - last >= self.delay_ms as f64,
        };
        due.then_some(kind)
    }

    #[inline]
    pub(crate) fn mark_ticked(&mut self, now_ms: f64) {
        self.last_tick_ms = Some(now_ms);
    }

    /// Returns false when already at the limit
    pub(crate) fn set_speed(&mut self, speed: u8) -> bool {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) || speed == self.speed {
            return false;
        }
        self.speed = speed;
        self.delay_ms = delay_for_speed(speed);
        true
    }
}
