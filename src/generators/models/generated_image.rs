use bytes::Bytes;

/// What an upstream handed back: the image itself, or a link to it.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedImage {
    Inline(Bytes),
    Remote(String),
}
