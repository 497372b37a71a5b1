pub mod doubao_generate_images_response;
