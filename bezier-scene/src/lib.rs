#![allow(unknown_lints)]

pub mod camera;
pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod model;
mod path_line;
pub mod scene;
pub mod service;
pub mod view;

pub use bezier_path::{BezierSegment, BezierSeries, ConstructionError, Location};
pub use path_line::{LineVertexUnit, PathLine};
