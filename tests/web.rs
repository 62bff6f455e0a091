#![cfg(target_arch = "wasm32")]

use lifesand_engine::{state_alive, state_trapper, World};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_from_config_and_blinker() {
    let mut world = World::from_config(r#"{"rows": 5, "cols": 5, "speed": 8}"#).expect("valid config");
    assert_eq!(world.rows(), 5);
    assert_eq!(world.delay_ms(), 200);

    for col in 1..4 {
        assert!(world.toggle_cell(2, col, state_alive()));
    }
    world.step_once();
    for row in 1..4 {
        assert_eq!(world.get_cell(row, 2), Some(state_alive()));
    }
    assert_eq!(world.alive_count(), 3);
}

#[wasm_bindgen_test]
fn bad_config_is_reported_to_js() {
    let err = World::from_config(r#"{"rows": 0}"#).err().expect("rejected");
    assert!(err.as_string().unwrap_or_default().contains("non-empty"));
    assert!(World::from_config("nope").is_err());
}

#[wasm_bindgen_test]
fn render_callback_receives_counters() {
    let mut world = World::new(4, 4).expect("valid size");
    let seen = js_sys::Array::new();
    let sink = seen.clone();
    let callback = wasm_bindgen::closure::Closure::<dyn FnMut(JsValue, JsValue, JsValue)>::new(
        move |generation: JsValue, alive: JsValue, trappers: JsValue| {
            sink.push(&js_sys::Array::of3(&generation, &alive, &trappers));
        },
    );
    world.set_render_callback(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());
    world.toggle_cell(0, 0, state_trapper());

    // Registration frame plus the edit.
    assert_eq!(seen.length(), 2);
    let last = js_sys::Array::from(&seen.get(1));
    assert_eq!(last.get(2).as_f64(), Some(1.0));
    callback.forget();
}
