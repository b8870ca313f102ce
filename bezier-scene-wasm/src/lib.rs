use instant::Instant;
use wasm_bindgen::prelude::*;

use bezier_scene::{
    config::SceneConfig,
    draw::{pack_uniforms, DrawCommand},
    error::SceneError,
    service::SceneService,
};

fn to_js_error(error: SceneError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// The JS side owns the timer, the canvas and the WebGL calls. It forwards
/// ticks and mouse events here, then reads back one transform and color per
/// model to draw.
#[wasm_bindgen]
pub struct WasmClient {
    service: SceneService,
    commands: Vec<DrawCommand>,
}

#[wasm_bindgen]
impl WasmClient {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmClient, JsValue> {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("Logger has already been initialized");
        }
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        log::info!("Building Bezier Scene Service...");
        let service = SceneService::new(SceneConfig::default()).map_err(to_js_error)?;
        Ok(WasmClient {
            service,
            commands: vec![],
        })
    }

    pub fn play(&mut self) {
        self.service.play(Instant::now());
    }

    pub fn pause(&mut self) {
        self.service.pause();
    }

    pub fn seek(&mut self, frame: u32) {
        self.service.seek(frame);
    }

    pub fn current_frame(&self) -> u32 {
        self.service.current_frame()
    }

    /// Call from every animation frame callback; `true` means redraw.
    pub fn update(&mut self) -> bool {
        self.service.update(Instant::now())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.service.resize(width, height).map_err(to_js_error)
    }

    pub fn mouse_drag_started(&mut self, x: f32, y: f32) {
        self.service.mouse_drag_started(x, y);
    }

    pub fn mouse_dragged(&mut self, x: f32, y: f32) -> bool {
        self.service.mouse_dragged(x, y)
    }

    pub fn mouse_drag_ended(&mut self) {
        self.service.mouse_drag_ended(Instant::now());
    }

    pub fn set_segment_visible(&mut self, index: usize, value: bool) -> Result<(), JsValue> {
        self.service
            .set_segment_visible(index, value)
            .map_err(to_js_error)
    }

    /// Rebuilds the draw list and returns 20 floats per model: the
    /// column-major transform followed by the RGBA color.
    pub fn draw_list(&mut self) -> js_sys::Float32Array {
        self.commands.clear();
        self.service.draw(&mut self.commands);
        js_sys::Float32Array::from(&pack_uniforms(&self.commands)[..])
    }

    /// Model codes matching the last `draw_list` entry by entry.
    pub fn draw_models(&self) -> Vec<u32> {
        self.commands
            .iter()
            .map(|command| command.model.code())
            .collect()
    }

    /// Line strip positions of segment `index`, 3 floats per vertex.
    pub fn path_vertices(&self, index: usize) -> Vec<f32> {
        self.service
            .scene()
            .path_lines()
            .get(index)
            .map(|line| {
                line.vertices()
                    .iter()
                    .flat_map(|vertex| vertex.position)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn background_color(&self) -> Vec<f32> {
        self.service.scene().background_color().to_vec()
    }
}
