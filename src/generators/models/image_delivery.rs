use reqwest::Client;

use crate::app::util::temp_files::TempFiles;

/// Where generated images end up once an upstream returns them.
#[derive(Debug, Clone)]
pub struct ImageDelivery {
    pub temp_files: TempFiles,
    pub client: Client,
    pub download_remote_images: bool,
}
