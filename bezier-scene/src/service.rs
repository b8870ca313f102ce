use instant::Instant;

use crate::{
    clock::AnimationClock,
    config::SceneConfig,
    draw::DrawTarget,
    error::{DomainType, SceneError},
    scene::BezierChainedScene,
    view::{DragRotation, ViewState},
};

/// Entry point for a host: owns the scene together with the mutable view
/// and animation state the host feeds events into.
pub struct SceneService {
    scene: BezierChainedScene,
    view: ViewState,
    clock: AnimationClock,
    drag: DragRotation,
}

impl SceneService {
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        let clock = AnimationClock::new(config.frame_rate);
        let scene = BezierChainedScene::new(config)?;
        let view = ViewState::new(scene.series().len());
        Ok(Self {
            scene,
            view,
            clock,
            drag: DragRotation::new(),
        })
    }

    pub fn play(&mut self, now: Instant) {
        self.clock.play(now);
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn seek(&mut self, frame: u32) {
        self.clock.seek(frame);
    }

    /// Returns `true` when a new frame was taken and the host should redraw.
    pub fn update(&mut self, now: Instant) -> bool {
        self.clock.update(now)
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        self.scene
            .render(&self.view, self.clock.current_frame() as i64, target);
    }

    pub fn mouse_drag_started(&mut self, x: f32, y: f32) {
        self.drag.drag_started(x, y, &mut self.clock);
    }

    /// Returns `true` when the view rotated and the host should redraw.
    pub fn mouse_dragged(&mut self, x: f32, y: f32) -> bool {
        self.drag.dragged(x, y, &mut self.view)
    }

    pub fn mouse_drag_ended(&mut self, now: Instant) {
        self.drag.drag_ended(&mut self.clock, now);
    }

    pub fn set_segment_visible(&mut self, index: usize, value: bool) -> Result<(), SceneError> {
        self.view.set_segment_visible(index, value)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SceneError> {
        if width == 0 || height == 0 {
            log::warn!("Ignore resize to {}x{}", width, height);
            return Err(SceneError::new(
                &format!("Invalid viewport size {}x{}", width, height),
                "Resize to a non-empty viewport",
                DomainType::Application,
            ));
        }
        self.scene
            .camera_mut()
            .set_aspect(width as f32 / height as f32);
        Ok(())
    }

    pub fn current_frame(&self) -> u32 {
        self.clock.current_frame()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn scene(&self) -> &BezierChainedScene {
        &self.scene
    }
}
