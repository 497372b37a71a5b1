use std::io::Cursor;

use bytes::Bytes;
use image::{ImageFormat, ImageReader, ImageResult, Limits};
use regex::Regex;

use super::{errors::ImagesApiError, models::decoded_image::DecodedImage};

pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;
pub const MAX_DIMENSION: u32 = 8192;
const MAX_DECODE_ALLOC: u64 = 256 * 1024 * 1024;

lazy_static! {
    static ref DATA_URI_PREFIX: Regex = Regex::new(r"^data:[\w.+-]+/[\w.+-]+;base64,").unwrap();
}

/// Checks the upload's extension and size. PDFs pass the extension check but
/// are always rejected, whatever their size.
pub fn validate_file(file_name: &str, file_size: usize) -> Result<(), ImagesApiError> {
    let extension = extension_of(file_name);

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ImagesApiError::UnsupportedFormat);
    }

    if extension == "pdf" {
        return Err(ImagesApiError::PdfNotSupported);
    }

    validate_size(file_size)
}

pub fn validate_size(file_size: usize) -> Result<(), ImagesApiError> {
    if file_size > MAX_FILE_SIZE {
        return Err(ImagesApiError::FileTooLarge);
    }

    Ok(())
}

pub fn decode_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_DIMENSION);
    limits.max_image_height = Some(MAX_DIMENSION);
    limits.max_alloc = Some(MAX_DECODE_ALLOC);

    limits
}

fn reader(bytes: &[u8], limits: Limits) -> ImageResult<ImageReader<Cursor<&[u8]>>> {
    let mut reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    reader.limits(limits);

    Ok(reader)
}

/// Reads the header first so oversized images are refused before any pixel
/// buffer is allocated, then decodes under [`decode_limits`]. Blocking.
pub fn verify_decodable(bytes: &[u8]) -> Result<DecodedImage, ImagesApiError> {
    let header = reader(bytes, Limits::no_limits()).map_err(|e| {
        tracing::warn!(%e, "failed to read image header");
        ImagesApiError::UndecodableImage
    })?;

    let Some(format) = header.format() else {
        tracing::warn!("unrecognized image format");
        return Err(ImagesApiError::UndecodableImage);
    };

    let (width, height) = header.into_dimensions().map_err(|e| {
        tracing::warn!(%e, ?format, "failed to read image dimensions");
        ImagesApiError::UndecodableImage
    })?;

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        tracing::warn!(width, height, "image dimensions exceed the limit");
        return Err(ImagesApiError::DimensionsTooLarge);
    }

    reader(bytes, decode_limits())
        .and_then(|reader| reader.decode())
        .map_err(|e| {
            tracing::warn!(%e, ?format, "failed to decode image");
            ImagesApiError::UndecodableImage
        })?;

    let mime_type = match format {
        ImageFormat::Jpeg => mime::IMAGE_JPEG,
        _ => mime::IMAGE_PNG,
    };

    Ok(DecodedImage {
        mime_type,
        width,
        height,
    })
}

/// Runs [`verify_decodable`] on the blocking pool.
pub async fn verify_upload(bytes: Bytes) -> Result<DecodedImage, ImagesApiError> {
    tokio::task::spawn_blocking(move || verify_decodable(&bytes))
        .await
        .map_err(|e| {
            tracing::error!(%e, "image verification task failed");
            ImagesApiError::UndecodableImage
        })?
}

/// Re-encodes `bytes` as PNG, passing PNG input through untouched. Fails when
/// the bytes are not a decodable image. Blocking.
pub fn encode_as_png(bytes: Bytes) -> ImageResult<Bytes> {
    let reader = reader(&bytes, decode_limits())?;
    let format = reader.format();
    let image = reader.decode()?;

    if format == Some(ImageFormat::Png) {
        return Ok(bytes);
    }

    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;

    Ok(Bytes::from(buffer.into_inner()))
}

/// Accepts plain base64 or a `data:<mime>;base64,` uri. Whitespace is ignored.
pub fn decode_base64_image(value: &str) -> Result<Vec<u8>, ImagesApiError> {
    let value = value.trim();
    let payload = DATA_URI_PREFIX.replace(value, "");
    let payload: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if payload.is_empty() {
        return Err(ImagesApiError::MissingImage);
    }

    base64::decode(payload).map_err(|e| {
        tracing::warn!(%e, "failed to decode base64 image");
        ImagesApiError::InvalidBase64
    })
}

fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, extension)) => extension.to_lowercase(),
        None => String::new(),
    }
}
