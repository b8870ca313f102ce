use bezier_path::ConstructionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainType {
    Path,
    Scene,
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneError {
    reason: String,
    recovery_suggestion: String,
    code: i32,
    domain: DomainType,
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let recovery_hint = if self.recovery_suggestion.is_empty() {
            "".to_owned()
        } else {
            format!("(Try \"{}\" to recover)", self.recovery_suggestion)
        };
        write!(f, "[{:?} - {}]{}{}", self.domain, self.code, self.reason, recovery_hint)
    }
}

impl std::error::Error for SceneError {}

impl SceneError {
    pub fn new(reason: &str, recovery_suggestion: &str, domain: DomainType) -> Self {
        Self {
            reason: reason.to_owned(),
            recovery_suggestion: recovery_suggestion.to_owned(),
            code: 0,
            domain,
        }
    }

    pub fn from_path(message: &str, error: ConstructionError) -> Self {
        let code = match error {
            ConstructionError::ControlPointCount { .. } => 1,
            ConstructionError::EmptyFrameWindow { .. } => 2,
            ConstructionError::EmptySeries => 3,
            ConstructionError::NonContiguous { .. } => 4,
        };
        Self {
            reason: format!("{}: {}", message, error),
            recovery_suggestion: "Fix the path segment configuration".to_owned(),
            code,
            domain: DomainType::Path,
        }
    }

    pub fn segment_out_of_range(index: usize, len: usize) -> Self {
        Self {
            reason: format!("Segment {} does not exist, path has {} segments", index, len),
            recovery_suggestion: "".to_owned(),
            code: 10,
            domain: DomainType::Scene,
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn domain(&self) -> DomainType {
        self.domain
    }
}

#[test]
fn test_from_path_display() {
    let error = SceneError::from_path("Invalid segment 0", ConstructionError::EmptySeries);
    assert_eq!(DomainType::Path, error.domain());
    assert_eq!(
        "[Path - 3]Invalid segment 0: series has no segments(Try \"Fix the path segment configuration\" to recover)",
        error.to_string()
    );
}
