use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::{Hsla, LinearGradient, Paint, StrokeStyle, Surface};
use crate::{Graph, GraphConfig, SplitMix64};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

fn hsla_css(color: Hsla) -> String {
    format!(
        "hsla({}, {}%, {}%, {})",
        color.hue, color.saturation, color.lightness, color.alpha
    )
}

/// `Surface` over a 2D canvas context. Glow maps to the context shadow;
/// round joins and caps are set once at construction.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_line_join("round");
        ctx.set_line_cap("round");
        Ok(Self { ctx })
    }

    fn gradient(&self, paint: &LinearGradient) -> CanvasGradient {
        let gradient = self.ctx.create_linear_gradient(
            paint.from.0 as f64,
            paint.from.1 as f64,
            paint.to.0 as f64,
            paint.to.1 as f64,
        );
        for stop in &paint.stops {
            // Only non-finite offsets can fail here; the renderer never
            // produces them.
            let _ = gradient.add_color_stop(stop.offset, &hsla_css(stop.color));
        }
        gradient
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Hsla) {
        self.ctx.set_fill_style_str(&hsla_css(color));
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        match &style.paint {
            Paint::Solid(color) => self.ctx.set_stroke_style_str(&hsla_css(*color)),
            Paint::Linear(gradient) => self
                .ctx
                .set_stroke_style_canvas_gradient(&self.gradient(gradient)),
        }
        self.ctx.set_line_width(style.width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Hsla) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU);
        self.ctx.set_fill_style_str(&hsla_css(color));
        self.ctx.fill();
    }

    fn set_glow(&mut self, color: Hsla, blur: f32) {
        self.ctx.set_shadow_color(&hsla_css(color));
        self.ctx.set_shadow_blur(blur as f64);
    }

    fn clear_glow(&mut self) {
        self.ctx.set_shadow_blur(0.0);
    }
}

/// Browser handle around [`Graph`]. The JS host owns requestAnimationFrame,
/// the 100 ms heading interval and the speed slider, and forwards its
/// timestamps (`performance.now()` or `Date.now()`) into each call.
#[wasm_bindgen]
pub struct WasmGraph {
    graph: Graph<SplitMix64>,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WasmGraph {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        retention_ms: f64,
        line_width: f32,
        now: f64,
    ) -> Result<WasmGraph, JsValue> {
        let surface = CanvasSurface::new(&canvas)?;
        let config = GraphConfig {
            retention_ms,
            line_width,
            ..GraphConfig::default()
        };
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        console_log!("trailgraph attached to {width}x{height} canvas");
        Ok(WasmGraph {
            graph: Graph::new(config, width, height, now),
            surface,
        })
    }

    pub fn frame(&mut self, now: f64) {
        self.graph.frame(now, &mut self.surface);
    }

    pub fn poll_heading(&mut self, now: f64) {
        self.graph.poll_heading(now);
    }

    pub fn set_value(&mut self, value: f32, now: f64) {
        self.graph.set_value(value, now);
    }

    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.graph.set_bounds(width, height);
    }

    pub fn destroy(&mut self) {
        console_log!("trailgraph detached");
        self.graph.destroy();
    }
}
