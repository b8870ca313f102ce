use instant::Instant;

use crate::{clock::AnimationClock, error::SceneError};

/// Per-view state owned by the host and passed in on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Rotation about the X axis, in degrees.
    pub angle_x: f32,
    /// Rotation about the Y axis, in degrees.
    pub angle_y: f32,
    segment_visible: Vec<bool>,
}

impl ViewState {
    pub fn new(segment_count: usize) -> Self {
        Self {
            angle_x: 0f32,
            angle_y: 0f32,
            segment_visible: vec![true; segment_count],
        }
    }

    pub fn is_segment_visible(&self, index: usize) -> bool {
        self.segment_visible.get(index).copied().unwrap_or(false)
    }

    pub fn set_segment_visible(&mut self, index: usize, value: bool) -> Result<(), SceneError> {
        let len = self.segment_visible.len();
        match self.segment_visible.get_mut(index) {
            Some(visible) => {
                *visible = value;
                Ok(())
            }
            None => Err(SceneError::segment_out_of_range(index, len)),
        }
    }

    pub fn segment_visibility(&self) -> &[bool] {
        &self.segment_visible
    }
}

/// Accumulates mouse-drag deltas into view rotation.
#[derive(Debug, Clone, Default)]
pub struct DragRotation {
    anchor: Option<(f32, f32)>,
    paused_animation: bool,
}

impl DragRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Anchors the drag. A playing animation is paused until the drag ends.
    pub fn drag_started(&mut self, x: f32, y: f32, clock: &mut AnimationClock) {
        self.anchor = Some((x, y));
        if clock.is_playing() {
            clock.pause();
            self.paused_animation = true;
        }
    }

    /// Vertical motion turns about X, horizontal motion turns about Y.
    pub fn dragged(&mut self, x: f32, y: f32, view: &mut ViewState) -> bool {
        match self.anchor {
            Some((anchor_x, anchor_y)) => {
                let (delta_x, delta_y) = (x - anchor_x, y - anchor_y);
                view.angle_x += delta_y;
                view.angle_y += delta_x;
                self.anchor = Some((x, y));
                delta_x != 0f32 || delta_y != 0f32
            }
            None => false,
        }
    }

    pub fn drag_ended(&mut self, clock: &mut AnimationClock, now: Instant) {
        self.anchor = None;
        if self.paused_animation {
            clock.resume(now);
            self.paused_animation = false;
        }
    }
}
