/// Rejected path configuration. Raised eagerly when a segment or series is
/// built; frame lookups never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// A cubic segment takes exactly four control points.
    ControlPointCount { found: usize },
    /// `end_frame` must be strictly greater than `start_frame`.
    EmptyFrameWindow { start_frame: u32, end_frame: u32 },
    EmptySeries,
    /// Segment `index` does not start where segment `index - 1` ends.
    NonContiguous {
        index: usize,
        previous_end: u32,
        start: u32,
    },
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructionError::ControlPointCount { found } => {
                write!(f, "cubic segment requires 4 control points, got {}", found)
            }
            ConstructionError::EmptyFrameWindow {
                start_frame,
                end_frame,
            } => write!(
                f,
                "frame window [{}, {}) is empty",
                start_frame, end_frame
            ),
            ConstructionError::EmptySeries => write!(f, "series has no segments"),
            ConstructionError::NonContiguous {
                index,
                previous_end,
                start,
            } => write!(
                f,
                "segment {} starts at frame {} but previous segment ends at frame {}",
                index, start, previous_end
            ),
        }
    }
}

impl std::error::Error for ConstructionError {}

#[test]
fn test_display_non_contiguous() {
    let err = ConstructionError::NonContiguous {
        index: 2,
        previous_end: 60,
        start: 61,
    };
    assert_eq!(
        "segment 2 starts at frame 61 but previous segment ends at frame 60",
        err.to_string()
    );
}
