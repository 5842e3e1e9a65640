//! Canvas 2D renderer.
//!
//! Pure read of a frame snapshot; draws the background with its dashed
//! centre line, both paddles, the ball and the score text, in that order.

use game_core::{FrameSnapshot, Params};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(Params::BOARD_WIDTH as u32);
        canvas.set_height(Params::BOARD_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: Params::BOARD_WIDTH as f64,
            height: Params::BOARD_HEIGHT as f64,
        })
    }

    pub fn draw(&self, snapshot: &FrameSnapshot) -> Result<(), JsValue> {
        self.draw_background()?;
        self.draw_paddle(
            Params::PLAYER_PADDLE_X as f64,
            snapshot.player_paddle_y as f64,
        );
        self.draw_paddle(Params::AI_PADDLE_X as f64, snapshot.ai_paddle_y as f64);
        self.draw_ball(snapshot.ball_x as f64, snapshot.ball_y as f64)?;
        self.draw_score(snapshot.player_score, snapshot.ai_score)?;
        Ok(())
    }

    fn draw_background(&self) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        let dashes = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(15.0));
        self.ctx.set_line_dash(&dashes)?;
        self.ctx.set_stroke_style_str("white");
        self.ctx.begin_path();
        self.ctx.move_to(self.width / 2.0, 0.0);
        self.ctx.line_to(self.width / 2.0, self.height);
        self.ctx.stroke();
        Ok(())
    }

    fn draw_paddle(&self, x: f64, y: f64) {
        self.ctx.set_fill_style_str("white");
        self.ctx.fill_rect(
            x,
            y,
            Params::PADDLE_WIDTH as f64,
            Params::PADDLE_HEIGHT as f64,
        );
    }

    fn draw_ball(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("red");
        self.ctx.begin_path();
        self.ctx.arc(
            x,
            y,
            Params::BALL_RADIUS as f64,
            0.0,
            std::f64::consts::PI * 2.0,
        )?;
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }

    fn draw_score(&self, player: u32, ai: u32) -> Result<(), JsValue> {
        self.ctx.set_font("20px Arial");
        self.ctx.set_fill_style_str("white");
        self.ctx
            .fill_text(&format!("Player: {}", player), 20.0, 30.0)?;
        self.ctx
            .fill_text(&format!("AI: {}", ai), self.width - 100.0, 30.0)?;
        Ok(())
    }
}
