//! Browser client for single-player Pong.
//!
//! The JS glue owns presentation only: it forwards keyboard events, calls
//! `advance_frame` from its requestAnimationFrame loop until that returns
//! false, wires the start/restart buttons to the lifecycle exports, and
//! toggles the start/game-over overlays using the score getters.

#![cfg(target_arch = "wasm32")]

mod input;
mod renderer;

use game_core::{FrameOutcome, GameSession, MatchAction, MatchFsm};
use renderer::Renderer;
use wasm_bindgen::prelude::*;
use web_sys::{console, HtmlCanvasElement, KeyboardEvent};

/// Main client state
pub struct Client {
    session: GameSession,
    fsm: MatchFsm,
    renderer: Renderer,
}

impl Client {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let renderer = Renderer::new(canvas)?;
        Ok(Self {
            session: GameSession::new(),
            fsm: MatchFsm::new(),
            renderer,
        })
    }

    fn start(&mut self) -> Result<(), JsValue> {
        if !self.fsm.transition(MatchAction::Start).success {
            return Err(JsValue::from_str("start is only valid before the first game"));
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<(), JsValue> {
        if !self.fsm.transition(MatchAction::Restart).success {
            return Err(JsValue::from_str("restart is only valid after a game ended"));
        }
        // Scores and ball reset; paddles stay where they were
        self.session.reset_match();
        Ok(())
    }

    /// One animation frame. Returns false once the match has ended, at which
    /// point the caller stops scheduling frames and shows the overlay.
    fn advance(&mut self) -> Result<bool, JsValue> {
        if !self.fsm.is_running() {
            return Ok(false);
        }
        match self.session.frame() {
            FrameOutcome::Continue(snapshot) => {
                self.renderer.draw(&snapshot)?;
                Ok(true)
            }
            FrameOutcome::Ended {
                player_score,
                ai_score,
            } => {
                self.fsm.transition(MatchAction::GameOver);
                console::log_1(
                    &format!("match over: player {} - ai {}", player_score, ai_score).into(),
                );
                Ok(false)
            }
        }
    }

    fn key_down(&mut self, key: &str) {
        let dir = input::handle_key_down(key, self.session.input.dir);
        self.session.set_player_dir(dir);
    }

    fn key_up(&mut self) {
        self.session.set_player_dir(input::handle_key_up());
    }
}

// Global client storage for WASM bindings
static mut CLIENT: Option<Client> = None;

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            f(client)
        } else {
            Err(JsValue::from_str("Client not initialized"))
        }
    }
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let client = Client::new(canvas)?;
    unsafe {
        CLIENT = Some(client);
    }
    Ok(())
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    with_client(|client| client.start())
}

#[wasm_bindgen]
pub fn restart_game() -> Result<(), JsValue> {
    with_client(|client| client.restart())
}

#[wasm_bindgen]
pub fn advance_frame() -> Result<bool, JsValue> {
    with_client(|client| client.advance())
}

#[wasm_bindgen]
pub fn key_down(event: KeyboardEvent) -> Result<(), JsValue> {
    with_client(|client| {
        client.key_down(&input::key_from_event(&event));
        Ok(())
    })
}

#[wasm_bindgen]
pub fn key_up(_event: KeyboardEvent) -> Result<(), JsValue> {
    with_client(|client| {
        client.key_up();
        Ok(())
    })
}

#[wasm_bindgen]
pub fn player_score() -> Result<u32, JsValue> {
    with_client(|client| Ok(client.session.score.player))
}

#[wasm_bindgen]
pub fn ai_score() -> Result<u32, JsValue> {
    with_client(|client| Ok(client.session.score.ai))
}

/// The player's score at the end of the match, for the game-over overlay
#[wasm_bindgen]
pub fn final_score() -> Result<u32, JsValue> {
    with_client(|client| Ok(client.session.score.player))
}

#[wasm_bindgen]
pub fn is_game_over() -> Result<bool, JsValue> {
    with_client(|client| Ok(client.fsm.is_ended()))
}
