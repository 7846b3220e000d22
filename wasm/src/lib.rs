use horsefight_core::{
    key_command, Action, AttackKind, Facing, FightConfig, FightSession, FightState, Fighter,
    FighterId, KeyCommand, Status,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Install panic hook so WASM panics show in browser console instead of silently freezing.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// JSON-serializable fighter for the renderer
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFighter {
    id: FighterId,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    facing: Facing,
    health: i32,
    is_blocking: bool,
    attack_type: Option<AttackKind>,
    attack_timer: f64,
    attack_cooldown: f64,
    attack_hit: bool,
    stunned: f64,
}

/// JSON-serializable arena
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsArena {
    width: f64,
    height: f64,
    ground: f64,
}

/// JSON-serializable full fight state for JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsState {
    arena: JsArena,
    seed: u32,
    time: f64,
    status: Status,
    winner: Option<FighterId>,
    player: JsFighter,
    cpu: JsFighter,
}

fn fighter_to_js(f: &Fighter) -> JsFighter {
    JsFighter {
        id: f.id,
        x: f.x,
        y: f.y,
        vx: f.vx,
        vy: f.vy,
        facing: f.facing,
        health: f.health,
        is_blocking: f.is_blocking,
        attack_type: f.attack,
        attack_timer: f.attack_timer,
        attack_cooldown: f.attack_cooldown,
        attack_hit: f.attack_hit,
        stunned: f.stunned,
    }
}

fn state_to_js(s: &FightState) -> JsState {
    JsState {
        arena: JsArena {
            width: s.arena.width,
            height: s.arena.height,
            ground: s.arena.ground,
        },
        seed: s.seed,
        time: s.time,
        status: s.status,
        winner: s.winner,
        player: fighter_to_js(&s.player),
        cpu: fighter_to_js(&s.cpu),
    }
}

#[wasm_bindgen]
pub struct WasmFight {
    session: FightSession,
}

impl Default for WasmFight {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmFight {
    /// Create the stock match (720x360, seed 1337), waiting in READY.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmFight {
        WasmFight {
            session: FightSession::default(),
        }
    }

    /// Create a match with a custom seed, e.g. for a "rematch with new CPU" button.
    pub fn with_seed(seed: u32) -> Result<WasmFight, JsValue> {
        let config = FightConfig {
            seed,
            ..FightConfig::default()
        };
        let session = FightSession::new(config)
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
        Ok(WasmFight { session })
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Handle a `keydown` event's `key`. Returns true if the key is bound, so
    /// the caller knows to `preventDefault()`.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key_command(key) {
            Some(KeyCommand::Hold(action)) => self.session.set_input(action, true),
            Some(KeyCommand::Start) => {
                self.session.start();
            }
            Some(KeyCommand::Restart) => self.session.restart(),
            None => return false,
        }
        true
    }

    /// Handle a `keyup` event's `key`. Only held actions react to release.
    pub fn key_up(&mut self, key: &str) -> bool {
        match key_command(key) {
            Some(KeyCommand::Hold(action)) => {
                self.session.set_input(action, false);
                true
            }
            _ => false,
        }
    }

    /// Touch/pointer buttons: `action` is one of left, right, jump, punch, kick, block.
    pub fn set_input(&mut self, action: &str, held: bool) -> Result<(), JsValue> {
        let action: Action = action
            .parse()
            .map_err(|e: horsefight_core::ParseActionError| {
                JsValue::from(js_sys::Error::new(&e.to_string()))
            })?;
        self.session.set_input(action, held);
        Ok(())
    }

    /// Release everything, e.g. on window blur.
    pub fn clear_input(&mut self) {
        self.session.clear_input();
    }

    /// Call from `requestAnimationFrame` with its timestamp (ms).
    /// Returns the simulated dt in seconds.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        let was_over = self.session.state().status == Status::GameOver;
        let dt = self.session.frame(now_ms);
        let state = self.session.state();
        if !was_over && state.status == Status::GameOver {
            web_sys::console::log_1(
                &format!(
                    "fight over: winner={:?} player={} cpu={}",
                    state.winner, state.player.health, state.cpu.health
                )
                .into(),
            );
        }
        dt
    }

    /// Export full fight state as JS object for rendering.
    pub fn export_state(&self) -> Result<JsValue, JsValue> {
        let js = state_to_js(self.session.state());
        serde_wasm_bindgen::to_value(&js).map_err(JsValue::from)
    }

    // Quick accessors
    pub fn status(&self) -> String {
        self.session.state().status.as_str().to_string()
    }
    pub fn winner(&self) -> Option<String> {
        self.session.state().winner.map(|w| w.as_str().to_string())
    }
    pub fn elapsed(&self) -> f64 { self.session.state().time }
    pub fn player_health(&self) -> i32 { self.session.state().player.health }
    pub fn cpu_health(&self) -> i32 { self.session.state().cpu.health }
}
