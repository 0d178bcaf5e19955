#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use letra_arena::{
    competition_status, competition_window_status, init_logging, lock_state, pointer_down,
    pointer_move, pointer_up, reset_session, session_state, start_level, submit_path,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn js_rows(lines: &[&str]) -> JsValue {
    let rows = Array::new();
    for line in lines {
        let row = Array::new();
        for letter in line.chars() {
            row.push(&JsValue::from_str(&letter.to_string()));
        }
        rows.push(&row);
    }
    rows.into()
}

fn js_words(words: &[&str]) -> JsValue {
    words
        .iter()
        .map(|w| JsValue::from_str(w))
        .collect::<Array>()
        .into()
}

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).expect("property must exist")
}

#[wasm_bindgen_test]
fn drag_finds_word_once() {
    start_level(js_rows(&["cat", "xyz", "qrs"]), js_words(&["cat"])).unwrap();

    pointer_down(0, 0).unwrap();
    pointer_move(0, 1).unwrap();
    pointer_move(0, 2).unwrap();
    let found = pointer_up().unwrap();

    assert_eq!(get(&found, "word").as_string().as_deref(), Some("CAT"));
    assert_eq!(get(&found, "points").as_f64(), Some(10.0));

    pointer_down(0, 0).unwrap();
    pointer_move(0, 1).unwrap();
    pointer_move(0, 2).unwrap();
    assert!(pointer_up().unwrap().is_undefined());

    let state = session_state().unwrap();
    assert_eq!(get(&state, "total_points").as_f64(), Some(10.0));
    assert_eq!(get(&state, "is_level_complete").as_bool(), Some(true));
    assert_eq!(get(&lock_state().unwrap(), "is_locked").as_bool(), Some(false));

    reset_session().unwrap();
    assert_eq!(get(&session_state().unwrap(), "total_points").as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn bent_path_is_ignored() {
    start_level(js_rows(&["cxt", "xax", "xxx"]), js_words(&["cat"])).unwrap();

    let path = Array::new();
    for (row, col) in [(0u8, 0u8), (1, 1), (0, 2)] {
        let cell = js_sys::Object::new();
        Reflect::set(&cell, &"row".into(), &JsValue::from(row)).unwrap();
        Reflect::set(&cell, &"col".into(), &JsValue::from(col)).unwrap();
        path.push(&cell);
    }

    assert!(submit_path(path.into()).unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn malformed_board_is_an_error() {
    assert!(start_level(js_rows(&["ab", "c"]), js_words(&["abc"])).is_err());
}

#[wasm_bindgen_test]
fn competition_status_reports_active_window() {
    let report = competition_status("weekly", 1_791_991_800_000.0).unwrap();

    assert_eq!(get(&report, "status").as_string().as_deref(), Some("active"));
    assert!(competition_status("monthly", 0.0).is_err());
    assert!(competition_status("weekly", 1.0e300).is_err());
}

#[wasm_bindgen_test]
fn scheduled_window_reports_upcoming_and_finished() {
    let upcoming = competition_window_status(2_000.0, 3_000.0, 1_000.0).unwrap();
    assert_eq!(get(&upcoming, "status").as_string().as_deref(), Some("upcoming"));

    let finished = competition_window_status(2_000.0, 3_000.0, 3_000.0).unwrap();
    assert_eq!(get(&finished, "status").as_string().as_deref(), Some("finished"));

    assert!(competition_window_status(3_000.0, 2_000.0, 0.0).is_err());
    assert!(competition_window_status(0.0, f64::INFINITY, 0.0).is_err());
}

#[wasm_bindgen_test]
fn init_logging_can_be_called_twice() {
    init_logging();
    init_logging();
}
