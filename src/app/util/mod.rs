pub mod janitor;
pub mod multipart;
pub mod reqwest;
pub mod temp_files;
pub mod time;
