use bytes::Bytes;
use mime::Mime;

#[derive(Debug, Clone)]
pub struct ReferenceImage {
    pub bytes: Bytes,
    pub mime_type: Mime,
}

impl ReferenceImage {
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type.essence_str(),
            base64::encode(&self.bytes)
        )
    }
}
