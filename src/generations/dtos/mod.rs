pub mod generate_form_dto;
pub mod generate_json_dto;
