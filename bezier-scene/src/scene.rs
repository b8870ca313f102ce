use bezier_path::BezierSeries;
use cgmath::Matrix4;

use crate::{
    camera::PerspectiveCamera,
    config::SceneConfig,
    draw::{DrawCommand, DrawTarget},
    error::SceneError,
    model::ModelId,
    path_line::PathLine,
    view::ViewState,
};

/// Cube models following a chained Bezier path, with the path's control
/// points and curves drawn as decoration.
#[derive(Debug, Clone)]
pub struct BezierChainedScene {
    config: SceneConfig,
    series: BezierSeries,
    camera: PerspectiveCamera,
    path_lines: Vec<PathLine>,
    scale_axes: Matrix4<f32>,
    point_scale: Matrix4<f32>,
}

impl BezierChainedScene {
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        log::trace!("Start creating Bezier chained scene");
        let series = config.build_series()?;
        config.camera.validate()?;
        let camera = PerspectiveCamera::new(&config.camera);
        let path_lines = series
            .segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                PathLine::new(
                    index,
                    segment,
                    config.path_samples,
                    config.segment_color(index),
                )
            })
            .collect();
        let scale_axes = Matrix4::from_scale(config.axes_scale);
        let point_scale = Matrix4::from_scale(config.marker_scale);
        Ok(Self {
            config,
            series,
            camera,
            path_lines,
            scale_axes,
            point_scale,
        })
    }

    pub fn render(&self, view: &ViewState, frame: i64, target: &mut dyn DrawTarget) {
        let base = self.camera.base_transform(view);

        let transform = base * self.series.transform_at(frame);
        log::trace!("Frame {} placed at {:?}", frame, transform[3]);
        for model in ModelId::ANIMATED {
            target.draw(&DrawCommand {
                model,
                transform,
                color: None,
            });
        }

        let transform = base * self.scale_axes;
        for model in ModelId::AXES {
            target.draw(&DrawCommand {
                model,
                transform,
                color: None,
            });
        }

        for (index, segment) in self.series.segments().iter().enumerate() {
            if !view.is_segment_visible(index) {
                continue;
            }
            let color = Some(self.config.segment_color(index));
            for point in segment.control_points() {
                target.draw(&DrawCommand {
                    model: ModelId::Sphere,
                    transform: base * Matrix4::from_translation(*point) * self.point_scale,
                    color,
                });
            }
            target.draw(&DrawCommand {
                model: ModelId::Path(index),
                transform: base,
                color,
            });
        }
    }

    pub fn series(&self) -> &BezierSeries {
        &self.series
    }

    pub fn path_lines(&self) -> &[PathLine] {
        &self.path_lines
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn background_color(&self) -> [f32; 4] {
        self.config.background_color
    }
}
