use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Could not encode {len} bytes as a QR code: {reason}")]
    Encoding { len: usize, reason: String },
    #[error("Could not open logo image {}", path.display())]
    Logo {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Could not write PNG to {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Could not encode PNG")]
    Png(#[from] image::ImageError),
}
