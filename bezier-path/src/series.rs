use cgmath::{Matrix4, Vector3};

use crate::{error::ConstructionError, segment::BezierSegment};

/// Owning segment and local parameter for an absolute frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub segment_index: usize,
    pub t: f32,
}

/// Ordered chain of segments whose frame windows partition
/// `[start_frame, end_frame)` without gaps or overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSeries {
    segments: Vec<BezierSegment>,
}

impl BezierSeries {
    /// Largest `t` below 1. Frames inside a window never reach the next
    /// segment's start, even when f32 rounding would put them there.
    const MAX_IN_RANGE_T: f32 = 1f32 - f32::EPSILON / 2f32;

    pub fn new(segments: Vec<BezierSegment>) -> Result<Self, ConstructionError> {
        if segments.is_empty() {
            return Err(ConstructionError::EmptySeries);
        }
        for (index, pair) in segments.windows(2).enumerate() {
            if pair[0].end_frame() != pair[1].start_frame() {
                return Err(ConstructionError::NonContiguous {
                    index: index + 1,
                    previous_end: pair[0].end_frame(),
                    start: pair[1].start_frame(),
                });
            }
        }
        let series = Self { segments };
        log::debug!(
            "Built Bezier series with {} segments covering [{}, {})",
            series.len(),
            series.start_frame(),
            series.end_frame()
        );
        Ok(series)
    }

    /// Maps a frame to its segment and local `t`.
    ///
    /// Frames before the series hold at the first segment with `t = 0`,
    /// frames at or past the end hold at the last segment with `t = 1`.
    /// A frame equal to a segment's `end_frame` belongs to the next segment.
    pub fn locate(&self, frame: i64) -> Location {
        self.locate_precisely_f64(frame as f64)
    }

    /// [`Self::locate`] for fractional frames. NaN holds at the start.
    pub fn locate_precisely(&self, frame: f32) -> Location {
        self.locate_precisely_f64(frame as f64)
    }

    fn locate_precisely_f64(&self, frame: f64) -> Location {
        let last = self.segments.len() - 1;
        if frame.is_nan() || frame < self.start_frame() as f64 {
            Location {
                segment_index: 0,
                t: 0f32,
            }
        } else if frame >= self.end_frame() as f64 {
            Location {
                segment_index: last,
                t: 1f32,
            }
        } else {
            let segment_index = self
                .segments
                .partition_point(|segment| (segment.end_frame() as f64) <= frame)
                .min(last);
            let t = self.segments[segment_index]
                .coefficient(frame)
                .clamp(0f32, Self::MAX_IN_RANGE_T);
            Location { segment_index, t }
        }
    }

    pub fn position_at(&self, frame: i64) -> Vector3<f32> {
        self.position_of(self.locate(frame))
    }

    pub fn position_at_precisely(&self, frame: f32) -> Vector3<f32> {
        self.position_of(self.locate_precisely(frame))
    }

    /// Pure translation placing an object on the path at `frame`.
    pub fn transform_at(&self, frame: i64) -> Matrix4<f32> {
        Matrix4::from_translation(self.position_at(frame))
    }

    pub fn transform_at_precisely(&self, frame: f32) -> Matrix4<f32> {
        Matrix4::from_translation(self.position_at_precisely(frame))
    }

    fn position_of(&self, location: Location) -> Vector3<f32> {
        self.segments[location.segment_index].evaluate(location.t)
    }

    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&BezierSegment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    // A constructed series always holds at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start_frame(&self) -> u32 {
        self.segments[0].start_frame()
    }

    pub fn end_frame(&self) -> u32 {
        self.segments[self.segments.len() - 1].end_frame()
    }

    pub fn duration(&self) -> u32 {
        self.end_frame() - self.start_frame()
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{AbsDiffEq, Matrix4, SquareMatrix, Vector3, Vector4};

    use super::{BezierSeries, Location};
    use crate::{error::ConstructionError, segment::BezierSegment};

    fn segment(points: [[f32; 3]; 4], start: u32, end: u32) -> BezierSegment {
        BezierSegment::from_points(points.map(Vector3::from), start, end).unwrap()
    }

    fn chained() -> BezierSeries {
        BezierSeries::new(vec![
            segment(
                [[-5.0, 0.0, 0.0], [-5.0, 0.0, 0.0], [-5.0, 0.0, 5.0], [0.0, 0.5, 5.0]],
                0,
                30,
            ),
            segment(
                [[0.0, 0.5, 5.0], [5.0, 1.0, 5.0], [5.0, 2.0, -5.0], [0.0, 2.2, -5.0]],
                30,
                60,
            ),
            segment(
                [[0.0, 2.2, -5.0], [-7.0, 3.0, -5.0], [-7.0, 4.0, 0.0], [-3.0, 5.0, 4.0]],
                60,
                90,
            ),
            segment(
                [[-3.0, 5.0, 4.0], [2.0, 4.5, 2.5], [0.0, 4.0, 0.0], [0.0, 4.0, 0.0]],
                90,
                120,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_locate_boundary_belongs_to_next() {
        let series = chained();
        assert_eq!(
            Location {
                segment_index: 1,
                t: 0f32
            },
            series.locate(30)
        );
        assert_eq!(
            Location {
                segment_index: 3,
                t: 0f32
            },
            series.locate(90)
        );
    }

    #[test]
    fn test_locate_clamps() {
        let series = chained();
        assert_eq!(
            Location {
                segment_index: 0,
                t: 0f32
            },
            series.locate(-5)
        );
        assert_eq!(
            Location {
                segment_index: 3,
                t: 1f32
            },
            series.locate(1000)
        );
        assert_eq!(
            Location {
                segment_index: 3,
                t: 1f32
            },
            series.locate(120)
        );
        assert_eq!(0, series.locate_precisely(f32::NAN).segment_index);
    }

    #[test]
    fn test_locate_partitions_frames() {
        let series = chained();
        for frame in -10i64..130 {
            let location = series.locate(frame);
            let owners = series
                .segments()
                .iter()
                .filter(|segment| segment.contains(frame))
                .count();
            if (0..120).contains(&frame) {
                assert_eq!(1, owners);
                assert!(series.segments()[location.segment_index].contains(frame));
                assert!(location.t >= 0f32 && location.t < 1f32, "{:?}", location);
            } else {
                assert_eq!(0, owners);
            }
        }
    }

    #[test]
    fn test_locate_long_window_stays_below_one() {
        let series = BezierSeries::new(vec![segment(
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0]],
            0,
            100_000_000,
        )])
        .unwrap();
        let location = series.locate(99_999_999);
        assert_eq!(0, location.segment_index);
        assert!(location.t < 1f32, "{:?}", location);
        assert!(location.t > 0.99f32, "{:?}", location);
        assert_eq!(1f32, series.locate(100_000_000).t);
    }

    #[test]
    fn test_locate_precisely() {
        let series = chained();
        let location = series.locate_precisely(45.0);
        assert_eq!(1, location.segment_index);
        assert!((location.t - 0.5).abs() < 1e-6);
        assert_eq!(series.locate(45), location);
    }

    #[test]
    fn test_hand_off_continuity() {
        let series = chained();
        for pair in series.segments().windows(2) {
            assert!(pair[0]
                .evaluate(1f32)
                .abs_diff_eq(&pair[1].evaluate(0f32), 1e-6));
        }
        let before = series.position_at_precisely(29.999);
        let at = series.position_at(30);
        assert!(before.abs_diff_eq(&at, 1e-2), "{:?} {:?}", before, at);
    }

    #[test]
    fn test_transform_at() {
        let series = chained();
        let transform = series.transform_at(15);
        assert!(transform[3].abs_diff_eq(&Vector4::new(-5f32, 0.0625f32, 1.875f32, 1f32), 1e-6));
        let mut rest = transform;
        rest[3] = Vector4::unit_w();
        assert_eq!(Matrix4::identity(), rest);
        assert_eq!(
            Matrix4::from_translation(Vector3::new(0f32, 4f32, 0f32)),
            series.transform_at(500)
        );
    }

    #[test]
    fn test_reject_empty_series() {
        assert_eq!(Err(ConstructionError::EmptySeries), BezierSeries::new(vec![]));
    }

    #[test]
    fn test_reject_non_contiguous() {
        let points = [[0f32; 3]; 4];
        let gap = BezierSeries::new(vec![segment(points, 0, 30), segment(points, 31, 60)]);
        assert_eq!(
            Err(ConstructionError::NonContiguous {
                index: 1,
                previous_end: 30,
                start: 31
            }),
            gap
        );
        let overlap = BezierSeries::new(vec![segment(points, 0, 30), segment(points, 20, 60)]);
        assert!(overlap.is_err());
    }

    #[test]
    fn test_frame_range() {
        let series = chained();
        assert_eq!(4, series.len());
        assert_eq!(0, series.start_frame());
        assert_eq!(120, series.end_frame());
        assert_eq!(120, series.duration());
    }
}
