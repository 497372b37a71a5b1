#[non_exhaustive]
pub struct GeneratorKind;

impl GeneratorKind {
    pub const DOUBAO: &'static str = "doubao";
    pub const IMAGEN: &'static str = "imagen";
}
