use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    TextX,
    TextY,
    TextZ,
    CubeX,
    CubeY,
    CubeZ,
    CubeCenter,
    XAxis,
    YAxis,
    ZAxis,
    /// Marker drawn at each control point.
    Sphere,
    /// Line strip of the sampled curve of segment `n`.
    Path(usize),
}

impl ModelId {
    /// Models that ride along the path.
    pub const ANIMATED: [ModelId; 7] = [
        ModelId::TextX,
        ModelId::TextY,
        ModelId::TextZ,
        ModelId::CubeX,
        ModelId::CubeY,
        ModelId::CubeZ,
        ModelId::CubeCenter,
    ];
    pub const AXES: [ModelId; 3] = [ModelId::XAxis, ModelId::YAxis, ModelId::ZAxis];

    const PATH_CODE_BASE: u32 = 100;

    /// Key of the model in the host's asset bundle. Path lines are generated
    /// and have no asset.
    pub fn asset_name(&self) -> Option<&'static str> {
        match self {
            ModelId::TextX => Some("textx"),
            ModelId::TextY => Some("texty"),
            ModelId::TextZ => Some("textz"),
            ModelId::CubeX => Some("cubex"),
            ModelId::CubeY => Some("cubey"),
            ModelId::CubeZ => Some("cubez"),
            ModelId::CubeCenter => Some("cube_center"),
            ModelId::XAxis => Some("x_axis"),
            ModelId::YAxis => Some("y_axis"),
            ModelId::ZAxis => Some("z_axis"),
            ModelId::Sphere => Some("Sphere"),
            ModelId::Path(_) => None,
        }
    }

    pub fn from_asset_name(name: &str) -> Option<Self> {
        Self::ANIMATED
            .iter()
            .chain(Self::AXES.iter())
            .chain(std::iter::once(&ModelId::Sphere))
            .find(|id| id.asset_name() == Some(name))
            .copied()
    }

    /// Stable numeric code for hosts that cannot take the enum directly.
    /// Path codes saturate at `u32::MAX`.
    pub fn code(&self) -> u32 {
        match self {
            ModelId::TextX => 0,
            ModelId::TextY => 1,
            ModelId::TextZ => 2,
            ModelId::CubeX => 3,
            ModelId::CubeY => 4,
            ModelId::CubeZ => 5,
            ModelId::CubeCenter => 6,
            ModelId::XAxis => 7,
            ModelId::YAxis => 8,
            ModelId::ZAxis => 9,
            ModelId::Sphere => 10,
            ModelId::Path(index) => {
                Self::PATH_CODE_BASE.saturating_add(u32::try_from(*index).unwrap_or(u32::MAX))
            }
        }
    }
}

/// Host model handles keyed by [`ModelId`].
#[derive(Debug, Clone)]
pub struct ModelRegistry<H> {
    handles: HashMap<ModelId, H>,
}

impl<H> Default for ModelRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> ModelRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle previously registered for `id`, if any.
    pub fn register(&mut self, id: ModelId, handle: H) -> Option<H> {
        self.handles.insert(id, handle)
    }

    pub fn get(&self, id: ModelId) -> Option<&H> {
        self.handles.get(&id)
    }

    pub fn remove(&mut self, id: ModelId) -> Option<H> {
        self.handles.remove(&id)
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn missing<'a>(&self, ids: impl IntoIterator<Item = &'a ModelId>) -> Vec<ModelId> {
        ids.into_iter()
            .filter(|id| !self.contains(**id))
            .copied()
            .collect()
    }
}

#[test]
fn test_asset_name_round_trip() {
    for id in ModelId::ANIMATED.iter().chain(ModelId::AXES.iter()) {
        assert_eq!(Some(*id), ModelId::from_asset_name(id.asset_name().unwrap()));
    }
    assert_eq!(Some(ModelId::Sphere), ModelId::from_asset_name("Sphere"));
    assert_eq!(None, ModelId::from_asset_name("Camera_lens"));
    assert_eq!(None, ModelId::Path(0).asset_name());
}

#[test]
fn test_path_code_saturates() {
    assert_eq!(10, ModelId::Sphere.code());
    assert_eq!(102, ModelId::Path(2).code());
    assert_eq!(u32::MAX, ModelId::Path(usize::MAX).code());
    assert_eq!(u32::MAX, ModelId::Path(u32::MAX as usize).code());
}

#[test]
fn test_registry_missing() {
    let mut registry = ModelRegistry::new();
    assert_eq!(None, registry.register(ModelId::CubeX, 3u32));
    assert_eq!(Some(3u32), registry.register(ModelId::CubeX, 4u32));
    assert_eq!(Some(&4u32), registry.get(ModelId::CubeX));
    assert_eq!(
        vec![ModelId::XAxis, ModelId::YAxis, ModelId::ZAxis],
        registry.missing(&ModelId::AXES)
    );
    assert_eq!(6, registry.missing(&ModelId::ANIMATED).len());
    assert_eq!(Some(4u32), registry.remove(ModelId::CubeX));
    assert!(registry.is_empty());
}
