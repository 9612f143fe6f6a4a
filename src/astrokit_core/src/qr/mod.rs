pub mod error;
pub mod logo;
pub mod matrix;
pub mod style;

use std::io::Cursor;
use std::path::PathBuf;

use image::{ImageFormat, RgbaImage};
use tracing::{debug, info};

pub use self::error::RenderError;
pub use self::logo::LogoPlacement;
pub use self::matrix::SymbolMatrix;
pub use self::style::{BackgroundMode, DotStyle, ForegroundColor};
use crate::types::{Payload, SymbolVersion};

/// Side of one module, in pixels.
pub const BOX_SIZE: u32 = 10;
/// Light modules around the symbol on each side.
pub const BORDER: usize = 4;
pub const DEFAULT_OUTPUT: &str = "qr_code.png";

/// Everything needed to render one QR code image.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub payload: Payload,
    pub dot_style: DotStyle,
    pub foreground_color: ForegroundColor,
    pub background_mode: BackgroundMode,
    pub logo_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Force a QR version instead of the smallest one that fits.
    pub symbol_version: Option<SymbolVersion>,
}

impl RenderConfig {
    pub fn new(payload: Payload) -> Self {
        RenderConfig {
            payload,
            dot_style: DotStyle::default(),
            foreground_color: ForegroundColor::default(),
            background_mode: BackgroundMode::default(),
            logo_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            symbol_version: None,
        }
    }
}

/// Paint `matrix` on a fresh canvas, `BOX_SIZE` pixels per module.
pub fn paint(
    matrix: &SymbolMatrix,
    dot_style: DotStyle,
    foreground: ForegroundColor,
    background: BackgroundMode,
) -> RgbaImage {
    let width = matrix.width() as u32 * BOX_SIZE;
    let height = matrix.height() as u32 * BOX_SIZE;
    let mut canvas = RgbaImage::from_pixel(width, height, background.fill());
    let ink = foreground.rgba();
    let radius = BOX_SIZE as f64 / 2.0;

    for (col, row) in matrix.dark_modules() {
        let (left, top) = (col as u32 * BOX_SIZE, row as u32 * BOX_SIZE);
        for dy in 0..BOX_SIZE {
            for dx in 0..BOX_SIZE {
                let inside = match dot_style {
                    DotStyle::Square => true,
                    DotStyle::Round => {
                        let fx = dx as f64 + 0.5 - radius;
                        let fy = dy as f64 + 0.5 - radius;
                        fx * fx + fy * fy <= radius * radius
                    }
                };
                if inside {
                    canvas.put_pixel(left + dx, top + dy, ink);
                }
            }
        }
    }
    canvas
}

/// Render `config` into an RGBA image, logo included.
pub fn render(config: &RenderConfig) -> Result<RgbaImage, RenderError> {
    let matrix = SymbolMatrix::encode(config.payload.as_str(), config.symbol_version, BORDER)?;
    debug!(
        version = matrix.version(),
        modules = matrix.width(),
        style = %config.dot_style,
        color = %config.foreground_color,
        background = %config.background_mode,
        "Encoded payload"
    );

    let mut canvas = paint(
        &matrix,
        config.dot_style,
        config.foreground_color,
        config.background_mode,
    );

    if let Some(path) = &config.logo_path {
        let logo = logo::load_logo(path)?;
        logo::overlay_logo(&mut canvas, &logo);
    }
    Ok(canvas)
}

/// PNG bytes of `image`.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Render `config` and write the PNG to its output path.
///
/// # Returns
///
/// The path the image was written to.
pub fn generate(config: &RenderConfig) -> Result<PathBuf, RenderError> {
    let canvas = render(config)?;
    let path = config.output_path.clone();
    canvas
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| RenderError::Save {
            path: path.clone(),
            source,
        })?;
    info!(path = %path.display(), width = canvas.width(), "QR code written");
    Ok(path)
}
