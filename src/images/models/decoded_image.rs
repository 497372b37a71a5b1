use mime::Mime;

#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub mime_type: Mime,
    pub width: u32,
    pub height: u32,
}
