use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::domain::CellState;
use crate::systems::steppers::{FlowDirection, StepReport};

use super::SimMode;

/// Population counters shown next to the board.
///
/// `alive` counts every living kind (alive, voyager, builder); trappers are
/// reported on their own. `generation` advances only on life ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    pub generation: u64,
    pub alive: u32,
    pub trappers: u32,
}

impl Counters {
    #[inline]
    pub(crate) fn reset_population(&mut self) {
        self.alive = 0;
        self.trappers = 0;
    }

    #[inline]
    pub(crate) fn tally(&mut self, state: CellState) {
        if state.is_alive_type() {
            self.alive += 1;
        } else if state == CellState::Trapper {
            self.trappers += 1;
        }
    }
}

/// Snapshot of the engine after the last tick or edit
#[wasm_bindgen]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStats {
    pub(super) tick: u64,
    pub(super) generation: u64,
    pub(super) alive: u32,
    pub(super) trappers: u32,
    #[serde(serialize_with = "serialize_mode")]
    pub(super) mode: SimMode,
    pub(super) speed: u8,
    pub(super) delay_ms: u32,
    pub(super) flow: FlowDirection,
    pub(super) last_tick_ms: f64,
    pub(super) last_report: StepReport,
}

fn serialize_mode<S: serde::Serializer>(mode: &SimMode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(mode.label())
}

#[wasm_bindgen]
impl EngineStats {
    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.tick }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn alive(&self) -> u32 { self.alive }
    #[wasm_bindgen(getter)]
    pub fn trappers(&self) -> u32 { self.trappers }
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> u8 { self.mode.as_u8() }
    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> u8 { self.speed }
    #[wasm_bindgen(getter)]
    pub fn delay_ms(&self) -> u32 { self.delay_ms }
    #[wasm_bindgen(getter)]
    pub fn last_tick_ms(&self) -> f64 { self.last_tick_ms }
    #[wasm_bindgen(getter)]
    pub fn stamps(&self) -> u32 { self.last_report.stamps }
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 { self.last_report.moves }
    #[wasm_bindgen(getter)]
    pub fn flips(&self) -> u32 { self.last_report.flips }
}

impl EngineStats {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_splits_living_kinds_from_trappers() {
        let mut counters = Counters::default();
        for state in CellState::ALL {
            counters.tally(state);
        }
        assert_eq!(counters.alive, 3);
        assert_eq!(counters.trappers, 1);

        counters.generation = 4;
        counters.reset_population();
        assert_eq!(counters, Counters { generation: 4, alive: 0, trappers: 0 });
    }

    #[test]
    fn stats_serialize_with_readable_mode() {
        let stats = EngineStats {
            tick: 3,
            generation: 2,
            alive: 5,
            trappers: 1,
            mode: SimMode::GravityRunning,
            speed: 10,
            delay_ms: 0,
            flow: FlowDirection::Right,
            last_tick_ms: 0.5,
            last_report: StepReport { stamps: 0, moves: 2, flips: 1 },
        };
        let json: serde_json::Value = serde_json::from_str(&stats.to_json()).unwrap();
        assert_eq!(json["mode"], "gravity");
        assert_eq!(json["flow"], "right");
        assert_eq!(json["delayMs"], 0);
        assert_eq!(json["lastReport"]["flips"], 1);
    }
}
