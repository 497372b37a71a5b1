pub mod generated_image;
pub mod generation_result;
pub mod image_delivery;
pub mod reference_image;
