pub mod render_style;
pub mod view_angle;
