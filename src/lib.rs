use std::cell::RefCell;

use once_cell::sync::OnceCell;
use wasm_bindgen::prelude::*;

pub mod board;
pub mod clock;
pub mod competition;
pub mod game;
pub mod level;
pub mod lock;
pub mod path;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod types;
pub mod word_list;

use competition::{CompetitionKind, CompetitionWindow, MAX_TIMESTAMP_MS, current_competition};
use level::Level;
use types::Position;

thread_local! {
    static LEVEL: RefCell<Option<Level>> = const { RefCell::new(None) };
}

static LOGGING: OnceCell<()> = OnceCell::new();

fn with_level<R>(f: impl FnOnce(&mut Level) -> R) -> Result<R, JsValue> {
    LEVEL.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let level = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("no level started; call start_level() first"))?;
        Ok(f(level))
    })
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| JsValue::from_str(&format!("invalid {what}: {err}")))
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Installs the console logger and panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
    });
}

/// Starts a level from a 2D array of letters and a word list.
/// Returns the fresh session state.
#[wasm_bindgen]
pub fn start_level(rows: JsValue, words: JsValue) -> Result<JsValue, JsValue> {
    let rows: Vec<Vec<String>> = from_js(rows, "board")?;
    let words: Vec<String> = from_js(words, "word list")?;
    let level = Level::from_payload(rows, words).map_err(|err| JsValue::from_str(&err))?;
    let state = level.session_state();

    LEVEL.with(|cell| {
        *cell.borrow_mut() = Some(level);
    });
    to_js(&state)
}

#[wasm_bindgen]
pub fn pointer_down(row: u8, col: u8) -> Result<(), JsValue> {
    with_level(|level| level.pointer_down(row, col))
}

#[wasm_bindgen]
pub fn pointer_move(row: u8, col: u8) -> Result<(), JsValue> {
    with_level(|level| level.pointer_move(row, col))
}

/// Ends the gesture. Returns the found word, or `undefined`.
#[wasm_bindgen]
pub fn pointer_up() -> Result<JsValue, JsValue> {
    let found = with_level(|level| level.pointer_up())?;
    to_js(&found)
}

/// Scores an explicit list of `{ row, col }` cells (keyboard selection).
#[wasm_bindgen]
pub fn submit_path(positions: JsValue) -> Result<JsValue, JsValue> {
    let path: Vec<Position> = from_js(positions, "path")?;
    let found = with_level(|level| level.submit_path(path))?;
    to_js(&found)
}

#[wasm_bindgen]
pub fn current_selection() -> Result<JsValue, JsValue> {
    let selection = with_level(|level| level.selection())?;
    to_js(&selection)
}

#[wasm_bindgen]
pub fn session_state() -> Result<JsValue, JsValue> {
    let state = with_level(|level| level.session_state())?;
    to_js(&state)
}

#[wasm_bindgen]
pub fn lock_state() -> Result<JsValue, JsValue> {
    let snapshot = with_level(|level| level.lock_snapshot())?;
    to_js(&snapshot)
}

#[wasm_bindgen]
pub fn reset_session() -> Result<(), JsValue> {
    with_level(|level| level.reset_session())
}

/// Reports the current `"daily"` or `"weekly"` competition at `now_ms`
/// (Unix milliseconds, e.g. `Date.now()`).
#[wasm_bindgen]
pub fn competition_status(kind: &str, now_ms: f64) -> Result<JsValue, JsValue> {
    let now_ms = timestamp_ms(now_ms, "now_ms")?;
    let kind = CompetitionKind::parse(kind).map_err(|err| JsValue::from_str(&err))?;
    let report = current_competition(kind, now_ms).map_err(|err| JsValue::from_str(&err))?;
    to_js(&report)
}

/// Reports where `now_ms` falls in a scheduled competition
/// (upcoming, active or finished).
#[wasm_bindgen]
pub fn competition_window_status(
    starts_at_ms: f64,
    ends_at_ms: f64,
    now_ms: f64,
) -> Result<JsValue, JsValue> {
    let window = CompetitionWindow::new(
        timestamp_ms(starts_at_ms, "starts_at_ms")?,
        timestamp_ms(ends_at_ms, "ends_at_ms")?,
    )
    .map_err(|err| JsValue::from_str(&err))?;
    let report = window
        .report(timestamp_ms(now_ms, "now_ms")?)
        .map_err(|err| JsValue::from_str(&err))?;
    to_js(&report)
}

fn timestamp_ms(value: f64, name: &str) -> Result<i64, JsValue> {
    if !value.is_finite() || value.abs() > MAX_TIMESTAMP_MS as f64 {
        return Err(JsValue::from_str(&format!(
            "{name} must be a finite timestamp within the JS Date range"
        )));
    }
    Ok(value as i64)
}
