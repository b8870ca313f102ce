use cgmath::Vector3;

use crate::error::ConstructionError;

/// One cubic arc of a path, active during the half-open frame window
/// `[start_frame, end_frame)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSegment {
    control_points: [Vector3<f32>; 4],
    start_frame: u32,
    end_frame: u32,
}

impl BezierSegment {
    pub const CONTROL_POINT_COUNT: usize = 4;

    pub fn new(
        control_points: &[Vector3<f32>],
        start_frame: u32,
        end_frame: u32,
    ) -> Result<Self, ConstructionError> {
        let points: [Vector3<f32>; 4] = control_points.try_into().map_err(|_| {
            ConstructionError::ControlPointCount {
                found: control_points.len(),
            }
        })?;
        Self::from_points(points, start_frame, end_frame)
    }

    pub fn from_points(
        control_points: [Vector3<f32>; 4],
        start_frame: u32,
        end_frame: u32,
    ) -> Result<Self, ConstructionError> {
        if end_frame <= start_frame {
            return Err(ConstructionError::EmptyFrameWindow {
                start_frame,
                end_frame,
            });
        }
        Ok(Self {
            control_points,
            start_frame,
            end_frame,
        })
    }

    /// Position on the curve for the local parameter `t`.
    ///
    /// `t` is expected in `[0, 1]` but is not clamped: values outside the
    /// range extrapolate the cubic polynomial. Use [`Self::evaluate_clamped`]
    /// when the input is not already normalized.
    pub fn evaluate(&self, t: f32) -> Vector3<f32> {
        let [p0, p1, p2, p3] = self.control_points;
        let it = 1f32 - t;
        p0 * it.powi(3) + p1 * t * it.powi(2) * 3f32 + p2 * t.powi(2) * it * 3f32 + p3 * t.powi(3)
    }

    /// Same as [`Self::evaluate`] with `t` clamped to `[0, 1]`. NaN maps to 0.
    pub fn evaluate_clamped(&self, t: f32) -> Vector3<f32> {
        let t = if t.is_nan() { 0f32 } else { t.clamp(0f32, 1f32) };
        self.evaluate(t)
    }

    /// `count + 1` points evenly spaced in `t`, both endpoints included.
    pub fn sample(&self, count: usize) -> Vec<Vector3<f32>> {
        let count = count.max(1);
        let interval = count as f32;
        (0..=count)
            .map(|i| self.evaluate(i as f32 / interval))
            .collect()
    }

    pub fn control_points(&self) -> &[Vector3<f32>; 4] {
        &self.control_points
    }

    pub fn start_frame(&self) -> u32 {
        self.start_frame
    }

    pub fn end_frame(&self) -> u32 {
        self.end_frame
    }

    pub fn duration(&self) -> u32 {
        self.end_frame - self.start_frame
    }

    pub fn contains(&self, frame: i64) -> bool {
        frame >= self.start_frame as i64 && frame < self.end_frame as i64
    }

    /// Local parameter for a frame inside the window. Frames outside the
    /// window give values outside `[0, 1)`.
    pub(crate) fn coefficient(&self, frame: f64) -> f32 {
        ((frame - self.start_frame as f64) / self.duration() as f64) as f32
    }
}
