pub static API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub static MODEL: &str = "imagen-4.0-generate-001";
pub static ASPECT_RATIO: &str = "1:1";
pub static PERSON_GENERATION: &str = "dont_allow";
