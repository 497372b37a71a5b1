use super::{
    enums::{render_style::RenderStyle, view_angle::ViewAngle},
    templates::{
        CONSISTENCY_REQUIREMENT, FALLBACK_SUBJECT, ORTHOGRAPHIC_VIEW_CONSTRAINT, OUTPUT_INSTRUCTION,
        PERSPECTIVE_VIEW_CONSTRAINT, TASK_HEADER, TECHNICAL_SPECIFICATIONS, TOP_VIEW_CONSTRAINT,
    },
};

/// Builds the generation prompt. Never fails: unknown view angles and styles
/// fall back to their defaults and a blank description to a generic subject.
pub fn build_prompt(description: &str, view_angle: &str, style: &str) -> String {
    let view_angle = ViewAngle::from_param(view_angle);
    let view = view_angle.template();
    let style = RenderStyle::from_param(style).template();

    let subject = match description.trim() {
        "" => FALLBACK_SUBJECT,
        description => description,
    };

    let blocks = [
        format!("{}\n\nSUBJECT DESCRIPTION: {}", TASK_HEADER, subject),
        CONSISTENCY_REQUIREMENT.to_string(),
        format!(
            "VIEW ANGLE: {}\nCamera Setup: {}\nStrict Requirement: {}",
            view.name, view.camera, view.requirement
        ),
        format!(
            "RENDERING STYLE: {}\nStyle Description: {}",
            style.name, style.description
        ),
        TECHNICAL_SPECIFICATIONS.to_string(),
        special_constraint(view_angle).to_string(),
        OUTPUT_INSTRUCTION.to_string(),
    ];

    blocks.join("\n\n").trim().to_string()
}

fn special_constraint(view_angle: ViewAngle) -> &'static str {
    match view_angle {
        ViewAngle::Top => TOP_VIEW_CONSTRAINT,
        ViewAngle::Front | ViewAngle::Side => ORTHOGRAPHIC_VIEW_CONSTRAINT,
        ViewAngle::Perspective => PERSPECTIVE_VIEW_CONSTRAINT,
    }
}
