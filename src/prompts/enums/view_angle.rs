#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAngle {
    Top,
    Front,
    Side,
    Perspective,
}

pub struct ViewAngleTemplate {
    pub name: &'static str,
    pub camera: &'static str,
    pub requirement: &'static str,
}

static TOP: ViewAngleTemplate = ViewAngleTemplate {
    name: "正交俯视图",
    camera: "Camera positioned directly above the structure at 90° perpendicular angle (0° elevation, 90° to horizontal plane)",
    requirement: "STRICT top-down orthographic view with camera pointing straight down. No perspective distortion, no angled views. Show the structure as if looking from directly above using parallel projection.",
};

static FRONT: ViewAngleTemplate = ViewAngleTemplate {
    name: "正交正视图",
    camera: "Camera positioned directly in front at 0° horizontal angle (eye-level, perpendicular to front face)",
    requirement: "STRICT front orthographic view with camera facing the front elevation. No rotation, no perspective. Show the primary facade as seen from straight ahead using parallel projection.",
};

static SIDE: ViewAngleTemplate = ViewAngleTemplate {
    name: "正交侧视图",
    camera: "Camera positioned at 90° to the front face (side elevation view)",
    requirement: "STRICT side orthographic view showing the lateral elevation. Camera perpendicular to the side face. No perspective distortion.",
};

static PERSPECTIVE: ViewAngleTemplate = ViewAngleTemplate {
    name: "透视图",
    camera: "Camera positioned at 30-45° elevation angle with slight rotation for 3-point perspective",
    requirement: "3D perspective view showing depth and dimension. Use realistic perspective with vanishing points to show the structure in three dimensions.",
};

impl ViewAngle {
    pub const ALL: [ViewAngle; 4] = [Self::Top, Self::Front, Self::Side, Self::Perspective];

    /// Unknown or missing values fall back to [`ViewAngle::Perspective`].
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Self::Top,
            "front" => Self::Front,
            "side" => Self::Side,
            _ => Self::Perspective,
        }
    }

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Top => "top",
            Self::Front => "front",
            Self::Side => "side",
            Self::Perspective => "perspective",
        }
    }

    pub fn template(&self) -> &'static ViewAngleTemplate {
        match *self {
            Self::Top => &TOP,
            Self::Front => &FRONT,
            Self::Side => &SIDE,
            Self::Perspective => &PERSPECTIVE,
        }
    }
}
