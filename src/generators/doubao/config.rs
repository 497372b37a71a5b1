pub static API_URL: &str = "https://ark.cn-beijing.volces.com/api/v3/images/generations";
pub static MODEL: &str = "doubao-seedream-4-5-251128";
pub static IMAGE_SIZE: &str = "2K";
