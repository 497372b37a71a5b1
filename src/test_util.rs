use std::io::Cursor;

use axum::Router;
use bytes::Bytes;

use crate::generators::models::reference_image::ReferenceImage;

fn encoded(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let image = image::RgbImage::from_pixel(width, height, image::Rgb([240, 240, 250]));
    let mut buffer = Cursor::new(Vec::new());

    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut buffer, format)
        .unwrap();

    buffer.into_inner()
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encoded(width, height, image::ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encoded(width, height, image::ImageFormat::Jpeg)
}

pub fn reference_png() -> ReferenceImage {
    ReferenceImage {
        bytes: Bytes::from(png_bytes(4, 4)),
        mime_type: mime::IMAGE_PNG,
    }
}

/// Serves `router` on an ephemeral local port and returns its base url.
pub async fn spawn_stub(router: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router.into_make_service())
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}
