#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    FrontFormal,
    ArmsCrossed,
    SlightAngle,
    HandsTogether,
}

impl Pose {
    pub fn value(&self) -> &str {
        match *self {
            Self::FrontFormal => "front-formal",
            Self::ArmsCrossed => "arms-crossed",
            Self::SlightAngle => "slight-angle",
            Self::HandsTogether => "hands-together",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "front-formal" => Some(Self::FrontFormal),
            "arms-crossed" => Some(Self::ArmsCrossed),
            "slight-angle" => Some(Self::SlightAngle),
            "hands-together" => Some(Self::HandsTogether),
            _ => None,
        }
    }

    // Face and gaze stay front-on in every pose, only the body changes.
    pub fn prompt(&self) -> &str {
        match *self {
            Self::FrontFormal => {
                "arms naturally at sides, shoulders square to camera, neutral professional stance"
            }
            Self::ArmsCrossed => {
                "arms crossed confidently, professional stance, approachable expression"
            }
            Self::SlightAngle => {
                "body at a slight angle, one shoulder forward, relaxed professional pose"
            }
            Self::HandsTogether => {
                "hands clasped together in front, standing upright, composed and professional demeanor"
            }
        }
    }
}
