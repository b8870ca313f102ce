use std::time::Duration;

use bezier_scene::{
    camera::Camera,
    config::SceneConfig,
    draw::{pack_uniforms, DrawCommand, DrawUniform},
    error::DomainType,
    model::ModelId,
    scene::BezierChainedScene,
    service::SceneService,
    view::ViewState,
};
use cgmath::{AbsDiffEq, Matrix4, Vector3};
use instant::Instant;

fn render(scene: &BezierChainedScene, view: &ViewState, frame: i64) -> Vec<DrawCommand> {
    let mut commands: Vec<DrawCommand> = vec![];
    scene.render(view, frame, &mut commands);
    commands
}

#[test]
fn test_render_emits_all_models() {
    let scene = BezierChainedScene::new(SceneConfig::default()).unwrap();
    let view = ViewState::new(scene.series().len());
    let commands = render(&scene, &view, 0);
    assert_eq!(7 + 3 + 4 * (4 + 1), commands.len());
    assert_eq!(
        ModelId::ANIMATED.to_vec(),
        commands[0..7].iter().map(|c| c.model).collect::<Vec<_>>()
    );
    assert_eq!(
        ModelId::AXES.to_vec(),
        commands[7..10].iter().map(|c| c.model).collect::<Vec<_>>()
    );
    assert_eq!(ModelId::Path(0), commands[14].model);
    assert_eq!(Some([1f32, 0f32, 0f32, 1f32]), commands[19].color);
}

#[test]
fn test_hidden_segment_is_skipped() {
    let scene = BezierChainedScene::new(SceneConfig::default()).unwrap();
    let mut view = ViewState::new(scene.series().len());
    view.set_segment_visible(2, false).unwrap();
    let commands = render(&scene, &view, 0);
    assert_eq!(25, commands.len());
    assert!(commands.iter().all(|c| c.model != ModelId::Path(2)));
    assert!(commands
        .iter()
        .all(|c| c.color != Some([0f32, 1f32, 0f32, 1f32])));
}

#[test]
fn test_animated_transform_follows_path() {
    let scene = BezierChainedScene::new(SceneConfig::default()).unwrap();
    let mut view = ViewState::new(scene.series().len());
    view.angle_x = 15f32;
    view.angle_y = -30f32;
    let base = scene.camera().base_transform(&view);
    for frame in [-3i64, 0, 15, 30, 59, 60, 119, 120, 400] {
        let commands = render(&scene, &view, frame);
        let expected = base * scene.series().transform_at(frame);
        assert!(commands[0].transform.abs_diff_eq(&expected, 1e-6));
    }
    let commands = render(&scene, &view, 15);
    let placed = base * Matrix4::from_translation(Vector3::new(-5f32, 0.0625f32, 1.875f32));
    assert!(commands[0].transform.abs_diff_eq(&placed, 1e-4));
}

#[test]
fn test_markers_sit_on_control_points() {
    let config = SceneConfig::default();
    let scene = BezierChainedScene::new(config.clone()).unwrap();
    let view = ViewState::new(scene.series().len());
    let (camera_view, projection) = scene.camera().get_view_transform();
    let commands = render(&scene, &view, 0);
    let marker = &commands[10 + 5 + 1];
    assert_eq!(ModelId::Sphere, marker.model);
    let expected = projection
        * camera_view
        * Matrix4::from_translation(Vector3::from(config.segments[1].control_points[1]))
        * Matrix4::from_scale(config.marker_scale);
    assert!(marker.transform.abs_diff_eq(&expected, 1e-5));
}

#[test]
fn test_path_lines_follow_config() {
    let config = SceneConfig::default();
    let scene = BezierChainedScene::new(config.clone()).unwrap();
    assert_eq!(4, scene.path_lines().len());
    for (index, line) in scene.path_lines().iter().enumerate() {
        assert_eq!(index, line.segment_index());
        assert_eq!(config.path_samples as u32 + 1, line.num_vertices());
        assert_eq!(
            config.segments[index].control_points[0],
            line.vertices()[0].position
        );
    }
}

#[test]
fn test_invalid_config_fails_fast() {
    let mut config = SceneConfig::default();
    config.segments[1].start_frame = 29;
    assert!(BezierChainedScene::new(config.clone()).is_err());
    assert!(SceneService::new(config).is_err());
}

#[test]
fn test_invalid_camera_near_plane_fails_fast() {
    let mut config = SceneConfig::default();
    config.camera.near = 0f32;
    let error = BezierChainedScene::new(config.clone()).unwrap_err();
    assert_eq!(DomainType::Scene, error.domain());
    config.camera.near = -2f32;
    assert!(SceneService::new(config).is_err());
}

#[test]
fn test_invalid_camera_far_plane_fails_fast() {
    let mut config = SceneConfig::default();
    config.camera.near = 1f32;
    config.camera.far = 0.5f32;
    let error = BezierChainedScene::new(config.clone()).unwrap_err();
    assert_eq!(DomainType::Scene, error.domain());
    config.camera.far = 1f32;
    assert!(BezierChainedScene::new(config).is_err());
}

#[test]
fn test_invalid_camera_aspect_fails_fast() {
    let mut config = SceneConfig::default();
    config.camera.aspect = f32::NAN;
    let error = BezierChainedScene::new(config).unwrap_err();
    assert_eq!(DomainType::Scene, error.domain());
}

#[test]
fn test_invalid_camera_fov_fails_fast() {
    let mut config = SceneConfig::default();
    config.camera.fov_y_degrees = f32::INFINITY;
    let error = BezierChainedScene::new(config).unwrap_err();
    assert_eq!(DomainType::Scene, error.domain());
}

#[test]
fn test_service_animation_loop() {
    let start = Instant::now();
    let mut service = SceneService::new(SceneConfig::default()).unwrap();
    service.play(start);
    let mut now = start;
    for _ in 0..200 {
        now += Duration::from_millis(8);
        service.update(now);
    }
    // 1600ms at one frame per 16ms.
    assert_eq!(100, service.current_frame());

    let mut commands: Vec<DrawCommand> = vec![];
    service.draw(&mut commands);
    let base = service
        .scene()
        .camera()
        .base_transform(service.view_state());
    assert!(commands[0]
        .transform
        .abs_diff_eq(&(base * service.scene().series().transform_at(100)), 1e-6));
}

#[test]
fn test_service_drag_holds_animation() {
    let start = Instant::now();
    let mut service = SceneService::new(SceneConfig::default()).unwrap();
    service.play(start);
    service.mouse_drag_started(10f32, 10f32);
    assert!(!service.is_playing());
    assert!(!service.update(start + Duration::from_secs(1)));
    assert!(service.mouse_dragged(30f32, 0f32));
    assert_eq!(-10f32, service.view_state().angle_x);
    assert_eq!(20f32, service.view_state().angle_y);
    let released = start + Duration::from_secs(2);
    service.mouse_drag_ended(released);
    assert!(service.is_playing());
    assert!(service.update(released + Duration::from_millis(16)));
    assert_eq!(1, service.current_frame());
}

#[test]
fn test_service_resize_and_visibility() {
    let mut service = SceneService::new(SceneConfig::default()).unwrap();
    assert!(service.resize(0, 600).is_err());
    service.resize(800, 400).unwrap();
    assert_eq!(2f32, service.scene().camera().aspect());
    assert!(service.set_segment_visible(4, false).is_err());
    service.set_segment_visible(0, false).unwrap();
    let mut commands: Vec<DrawCommand> = vec![];
    service.draw(&mut commands);
    assert_eq!(25, commands.len());
    assert_eq!(
        25 * DrawUniform::FLOAT_COUNT,
        pack_uniforms(&commands).len()
    );
}
