pub mod decoded_image;
