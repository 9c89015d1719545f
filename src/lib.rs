use wasm_bindgen::prelude::*;

pub mod color;
pub mod config;
pub mod container;
pub mod engine;
pub mod error;
pub mod layout;
pub mod session;
pub mod types;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::layout::{Layout, Point};
use crate::session::Session;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Routes `log` output to the browser console. `level` is a `log::Level` name.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    let level: log::Level = level.parse().unwrap_or(log::Level::Info);
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(level).map_err(|e| JsValue::from_str(&e.to_string()))?;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = level;
    Ok(())
}

/// Game session handle for the browser host.
#[wasm_bindgen]
pub struct WasmGame {
    session: Session,
    layout: Layout,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config` is a `GameConfig`-shaped object, or `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsValue> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js(ConfigError::Decode(e.to_string())))?
        };
        let session = Session::new(config).map_err(to_js)?;
        Ok(WasmGame {
            session,
            layout: Layout::default(),
        })
    }

    /// Replaces the hit-test layout with a `Layout`-shaped object.
    pub fn set_layout(&mut self, layout: JsValue) -> Result<(), JsValue> {
        self.layout = serde_wasm_bindgen::from_value(layout)
            .map_err(|e| to_js(ConfigError::Decode(e.to_string())))?;
        Ok(())
    }

    /// Handles a pointer press at screen coordinates.
    pub fn click(&mut self, x: i32, y: i32) -> String {
        self.session
            .click_at(Point::new(x, y), &self.layout)
            .as_str()
            .to_string()
    }

    /// Handles a click already resolved to a container; negative means a miss.
    pub fn click_index(&mut self, index: i32) -> String {
        let hit = usize::try_from(index).ok();
        self.session.click(hit).as_str().to_string()
    }

    /// Current `GameState`. Drains pending redraws.
    pub fn state(&mut self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn entropy(&self) -> u32 {
        self.session.engine().entropy()
    }

    pub fn games_played(&self) -> u32 {
        self.session.games_played()
    }

    pub fn score_text(&self) -> String {
        self.session.score_text()
    }
}

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
