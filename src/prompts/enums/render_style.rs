#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Realistic,
    Technical,
    Cartoon,
}

pub struct RenderStyleTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

static REALISTIC: RenderStyleTemplate = RenderStyleTemplate {
    name: "写实渲染",
    description: "Photorealistic 3D rendering with detailed materials, accurate lighting (sunlight + ambient), realistic shadows and reflections, professional architectural visualization quality",
};

static TECHNICAL: RenderStyleTemplate = RenderStyleTemplate {
    name: "技术线稿",
    description: "Technical line drawing style with clean black lines on white background, precise edges, minimal shading, blueprint aesthetic, professional engineering schematic appearance",
};

static CARTOON: RenderStyleTemplate = RenderStyleTemplate {
    name: "简约卡通",
    description: "Simplified 3D illustration with clean geometric shapes, smooth surfaces, soft pastel colors, minimal details, friendly and accessible artistic style",
};

impl RenderStyle {
    pub const ALL: [RenderStyle; 3] = [Self::Realistic, Self::Technical, Self::Cartoon];

    /// Unknown or missing values fall back to [`RenderStyle::Realistic`].
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "technical" => Self::Technical,
            "cartoon" => Self::Cartoon,
            _ => Self::Realistic,
        }
    }

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Realistic => "realistic",
            Self::Technical => "technical",
            Self::Cartoon => "cartoon",
        }
    }

    pub fn template(&self) -> &'static RenderStyleTemplate {
        match *self {
            Self::Realistic => &REALISTIC,
            Self::Technical => &TECHNICAL,
            Self::Cartoon => &CARTOON,
        }
    }
}
