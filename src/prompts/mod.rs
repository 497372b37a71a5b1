pub mod enums;
pub mod service;
pub mod templates;
