use std::sync::Arc;

use crate::generators::{self, models::image_delivery::ImageDelivery, ImageGenerator};

use super::{
    envy::Envy,
    errors::ConfigError,
    util::{reqwest::build_client, temp_files::TempFiles},
};

pub struct AppState {
    pub envy: Arc<Envy>,
    pub generator: Arc<dyn ImageGenerator>,
    pub delivery: ImageDelivery,
}

pub async fn provide_state(envy: Envy) -> Result<Arc<AppState>, ConfigError> {
    let client = build_client(envy.generation_timeout())?;
    let generator = generators::provide_generator(&envy, client.clone())?;
    let temp_files = TempFiles::create(envy.temp_dir()).await?;

    let delivery = ImageDelivery {
        temp_files,
        client,
        download_remote_images: envy.download_remote_images,
    };

    Ok(Arc::new(AppState {
        envy: Arc::new(envy),
        generator,
        delivery,
    }))
}
