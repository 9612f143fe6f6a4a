use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use super::error::RenderError;

/// Fraction of each canvas dimension the logo is scaled to.
pub const LOGO_SCALE: f64 = 0.3;

/// Where a logo landed on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LogoPlacement {
    /// Centered box of `LOGO_SCALE` times the canvas size, each side truncated.
    pub fn centered(canvas_width: u32, canvas_height: u32) -> Self {
        let width = (canvas_width as f64 * LOGO_SCALE) as u32;
        let height = (canvas_height as f64 * LOGO_SCALE) as u32;
        LogoPlacement {
            x: (canvas_width - width) / 2,
            y: (canvas_height - height) / 2,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Open the logo at `path`, ignoring whitespace around it.
pub fn load_logo(path: &Path) -> Result<DynamicImage, RenderError> {
    let path = match path.to_str() {
        Some(s) => PathBuf::from(s.trim()),
        None => path.to_path_buf(),
    };
    image::open(&path).map_err(|source| RenderError::Logo { path, source })
}

/// Clear the center of `canvas` to transparent white, then composite `logo` there.
///
/// The logo is stretched to the placement box, its own aspect ratio is not kept.
pub fn overlay_logo(canvas: &mut RgbaImage, logo: &DynamicImage) -> LogoPlacement {
    let placement = LogoPlacement::centered(canvas.width(), canvas.height());
    let resized = logo
        .resize_exact(placement.width, placement.height, FilterType::Lanczos3)
        .to_rgba8();

    for y in placement.y..placement.y + placement.height {
        for x in placement.x..placement.x + placement.width {
            canvas.put_pixel(x, y, Rgba([255, 255, 255, 0]));
        }
    }
    imageops::overlay(canvas, &resized, placement.x as i64, placement.y as i64);

    debug!(?placement, "Logo composited");
    placement
}
