use wasm_bindgen::prelude::*;

use crate::core::SandboxError;
use crate::domain::CellState;
use crate::systems::steppers::FlowDirection;

use super::render::{FrameView, RenderSink};
use super::stats::EngineStats;
use super::SandboxCore;

/// Calls `callback(generation, alive, trappers)` after every frame
struct JsRenderSink {
    callback: js_sys::Function,
}

impl RenderSink for JsRenderSink {
    fn present(&mut self, frame: &FrameView<'_>) {
        let result = self.callback.call3(
            &JsValue::NULL,
            &JsValue::from_f64(frame.counters.generation as f64),
            &JsValue::from(frame.counters.alive),
            &JsValue::from(frame.counters.trappers),
        );
        if let Err(err) = result {
            console_warn!("render callback threw: {:?}", err);
        }
    }
}

fn to_js_error(err: SandboxError) -> JsValue {
    console_warn!("world rejected: {}", err);
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: SandboxCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> Result<World, JsValue> {
        let core = SandboxCore::new(rows, cols).map_err(to_js_error)?;
        Ok(Self { core })
    }

    /// Create a world from a JSON config (camelCase keys, all optional)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<World, JsValue> {
        let core = SandboxCore::from_json(json).map_err(to_js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn alive_count(&self) -> u32 { self.core.alive_count() }

    #[wasm_bindgen(getter)]
    pub fn trapper_count(&self) -> u32 { self.core.trapper_count() }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 { self.core.tick_count() }

    /// 0 idle, 1 life running, 2 gravity running
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> u8 { self.core.mode().as_u8() }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> u8 { self.core.speed() }

    #[wasm_bindgen(getter)]
    pub fn delay_ms(&self) -> u32 { self.core.delay_ms() }

    /// State byte at (row, col); undefined when out of bounds
    pub fn get_cell(&self, row: i32, col: i32) -> Option<u8> {
        self.core.get_cell(row as i64, col as i64).ok().map(CellState::as_u8)
    }

    /// Builder countdown at (row, col); undefined for non-builders and
    /// dormant builders
    pub fn get_cooldown(&self, row: i32, col: i32) -> Option<u32> {
        self.core.cell(row as i64, col as i64).ok().and_then(|cell| cell.cooldown)
    }

    /// Paint `state` at (row, col), or erase if it is already there.
    /// False for out-of-bounds coordinates or an unknown state byte.
    pub fn toggle_cell(&mut self, row: i32, col: i32, state: u8) -> bool {
        let Some(desired) = CellState::from_u8(state) else {
            console_warn!("toggle_cell: unknown state {}", state);
            return false;
        };
        match self.core.toggle_cell(row as i64, col as i64, desired) {
            Ok(_) => true,
            Err(err) => {
                console_warn!("toggle_cell: {}", err);
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Clear and scatter cells; returns how many were placed
    pub fn randomize(&mut self, max: u32) -> u32 {
        self.core.randomize(max) as u32
    }

    /// Advance one life generation (stops any running mode)
    pub fn step_once(&mut self) {
        self.core.step_once();
    }

    pub fn start_life(&mut self) -> u32 {
        self.core.start_life()
    }

    pub fn stop_life(&mut self) -> bool {
        self.core.stop_life()
    }

    pub fn start_gravity(&mut self) -> u32 {
        self.core.start_gravity()
    }

    pub fn stop_gravity(&mut self) -> bool {
        self.core.stop_gravity()
    }

    pub fn stop(&mut self) -> bool {
        self.core.stop()
    }

    pub fn is_run_active(&self, token: u32) -> bool {
        self.core.is_run_active(token)
    }

    /// Call from requestAnimationFrame with `performance.now()`; true when a
    /// tick ran
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.core.frame(now_ms)
    }

    pub fn increase_speed(&mut self) -> bool {
        self.core.increase_speed()
    }

    pub fn decrease_speed(&mut self) -> bool {
        self.core.decrease_speed()
    }

    pub fn set_render_callback(&mut self, callback: js_sys::Function) {
        self.core.set_render_sink(Box::new(JsRenderSink { callback }));
    }

    pub fn clear_render_callback(&mut self) {
        self.core.clear_render_sink();
    }

    /// Get pointer to state bytes (for JS rendering)
    pub fn states_ptr(&self) -> *const u8 {
        self.core.states_ptr()
    }

    pub fn states_len(&self) -> usize {
        self.core.states().len()
    }

    /// Get pointer to ABGR colours (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors().len()
    }

    pub fn get_stats(&self) -> EngineStats {
        self.core.stats()
    }

    pub fn stats_json(&self) -> String {
        self.core.stats().to_json()
    }

    /// "left" or "right"
    pub fn flow_direction(&self) -> String {
        match self.core.flow() {
            FlowDirection::Left => "left".to_string(),
            FlowDirection::Right => "right".to_string(),
        }
    }
}

impl World {
    /// Native access for tests and embedding hosts
    pub fn core(&self) -> &SandboxCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SandboxCore {
        &mut self.core
    }
}
