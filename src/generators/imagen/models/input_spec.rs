use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub instances: Vec<InputSpecInstance>,
    pub parameters: InputSpecParams,
}

#[derive(Debug, Serialize)]
pub struct InputSpecInstance {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpecParams {
    pub sample_count: u8,
    pub aspect_ratio: String,
    pub person_generation: String,
}
