use bezier_path::{BezierSegment, BezierSeries};
use cgmath::Vector3;
use std::time::Duration;

use crate::error::{DomainType, SceneError};

/// Plain description of one arc, supplied by the host at setup time.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDescriptor {
    pub control_points: [[f32; 3]; 4],
    pub start_frame: u32,
    pub end_frame: u32,
    pub color: [f32; 4],
}

impl SegmentDescriptor {
    pub fn build(&self) -> Result<BezierSegment, SceneError> {
        BezierSegment::from_points(
            self.control_points.map(Vector3::from),
            self.start_frame,
            self.end_frame,
        )
        .map_err(|e| {
            SceneError::from_path(
                &format!(
                    "Invalid segment [{}, {})",
                    self.start_frame, self.end_frame
                ),
                e,
            )
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub center: [f32; 3],
    pub up: [f32; 3],
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0f32, 0f32, 24f32],
            center: [0f32, 0f32, 0f32],
            up: [0f32, 1f32, 0f32],
            fov_y_degrees: 45f32,
            aspect: 1f32,
            near: 1f32,
            far: 100f32,
        }
    }
}

impl CameraConfig {
    /// Rejects projections the camera cannot be built from.
    pub fn validate(&self) -> Result<(), SceneError> {
        const RECOVERY: &str = "Fix the camera configuration";
        if !self.fov_y_degrees.is_finite() {
            return Err(SceneError::new(
                &format!("Camera fov must be finite, got {}", self.fov_y_degrees),
                RECOVERY,
                DomainType::Scene,
            ));
        }
        if !self.aspect.is_finite() || self.aspect <= 0f32 {
            return Err(SceneError::new(
                &format!("Camera aspect must be positive, got {}", self.aspect),
                RECOVERY,
                DomainType::Scene,
            ));
        }
        if !self.near.is_finite() || self.near <= 0f32 {
            return Err(SceneError::new(
                &format!("Camera near plane must be positive, got {}", self.near),
                RECOVERY,
                DomainType::Scene,
            ));
        }
        if !self.far.is_finite() || self.far <= self.near {
            return Err(SceneError::new(
                &format!(
                    "Camera far plane {} must lie beyond near plane {}",
                    self.far, self.near
                ),
                RECOVERY,
                DomainType::Scene,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub segments: Vec<SegmentDescriptor>,
    pub camera: CameraConfig,
    /// Minimum wall time between two animation frames.
    pub frame_rate: Duration,
    pub axes_scale: f32,
    pub marker_scale: f32,
    /// Line pieces used to draw each arc.
    pub path_samples: usize,
    pub background_color: [f32; 4],
}

impl SceneConfig {
    pub const DEFAULT_FRAME_RATE_MILLIS: u64 = 16;

    pub fn build_series(&self) -> Result<BezierSeries, SceneError> {
        let segments = self
            .segments
            .iter()
            .map(SegmentDescriptor::build)
            .collect::<Result<Vec<_>, _>>()?;
        BezierSeries::new(segments).map_err(|e| SceneError::from_path("Invalid path", e))
    }

    pub fn segment_color(&self, index: usize) -> [f32; 4] {
        self.segments
            .get(index)
            .map(|segment| segment.color)
            .unwrap_or([0f32, 0f32, 0f32, 1f32])
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            segments: vec![
                SegmentDescriptor {
                    control_points: [
                        [-5f32, 0f32, 0f32],
                        [-5f32, 0f32, 0f32],
                        [-5f32, 0f32, 5f32],
                        [0f32, 0.5f32, 5f32],
                    ],
                    start_frame: 0,
                    end_frame: 30,
                    color: [0f32, 0f32, 0f32, 1f32],
                },
                SegmentDescriptor {
                    control_points: [
                        [0f32, 0.5f32, 5f32],
                        [5f32, 1f32, 5f32],
                        [5f32, 2f32, -5f32],
                        [0f32, 2.2f32, -5f32],
                    ],
                    start_frame: 30,
                    end_frame: 60,
                    color: [1f32, 0f32, 0f32, 1f32],
                },
                SegmentDescriptor {
                    control_points: [
                        [0f32, 2.2f32, -5f32],
                        [-7f32, 3f32, -5f32],
                        [-7f32, 4f32, 0f32],
                        [-3f32, 5f32, 4f32],
                    ],
                    start_frame: 60,
                    end_frame: 90,
                    color: [0f32, 1f32, 0f32, 1f32],
                },
                SegmentDescriptor {
                    control_points: [
                        [-3f32, 5f32, 4f32],
                        [2f32, 4.5f32, 2.5f32],
                        [0f32, 4f32, 0f32],
                        [0f32, 4f32, 0f32],
                    ],
                    start_frame: 90,
                    end_frame: 120,
                    color: [0f32, 0f32, 1f32, 1f32],
                },
            ],
            camera: CameraConfig::default(),
            frame_rate: Duration::from_millis(Self::DEFAULT_FRAME_RATE_MILLIS),
            axes_scale: 0.4f32,
            marker_scale: 0.1f32,
            path_samples: 32,
            background_color: [0.98f32, 0.98f32, 0.98f32, 1f32],
        }
    }
}

#[test]
fn test_default_series() {
    let series = SceneConfig::default().build_series().unwrap();
    assert_eq!(4, series.len());
    assert_eq!(120, series.end_frame());
}

#[test]
fn test_build_series_reports_segment() {
    let mut config = SceneConfig::default();
    config.segments[2].end_frame = 60;
    let error = config.build_series().unwrap_err();
    assert_eq!(crate::error::DomainType::Path, error.domain());
    assert!(error.reason().starts_with("Invalid segment [60, 60)"));

    config.segments.clear();
    assert_eq!(3, config.build_series().unwrap_err().code());
}

#[test]
fn test_camera_validate() {
    assert!(CameraConfig::default().validate().is_ok());
    let rejected = [
        CameraConfig {
            near: 0f32,
            ..CameraConfig::default()
        },
        CameraConfig {
            near: -1f32,
            ..CameraConfig::default()
        },
        CameraConfig {
            near: 1f32,
            far: 0.5f32,
            ..CameraConfig::default()
        },
        CameraConfig {
            far: 1f32,
            ..CameraConfig::default()
        },
        CameraConfig {
            far: f32::INFINITY,
            ..CameraConfig::default()
        },
        CameraConfig {
            aspect: f32::NAN,
            ..CameraConfig::default()
        },
        CameraConfig {
            aspect: 0f32,
            ..CameraConfig::default()
        },
        CameraConfig {
            fov_y_degrees: f32::INFINITY,
            ..CameraConfig::default()
        },
    ];
    for camera in rejected {
        let error = camera.validate().unwrap_err();
        assert_eq!(DomainType::Scene, error.domain(), "{:?}", camera);
    }
}
