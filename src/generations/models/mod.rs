pub mod generate_response;
