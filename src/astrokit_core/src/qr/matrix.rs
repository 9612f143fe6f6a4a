use qrcode::{Color, EcLevel, QrCode, Version};

use super::error::RenderError;
use crate::types::SymbolVersion;

/// Square grid of dark/light modules, quiet zone included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    width: usize,
    version: i16,
    cells: Vec<bool>,
}

impl SymbolMatrix {
    /// Encode `payload` at error correction level H, surrounded by `border` light modules.
    ///
    /// Without a `version` the smallest symbol that fits is used; with one, encoding
    /// fails when the payload exceeds that version's capacity.
    pub fn encode(
        payload: &str,
        version: Option<SymbolVersion>,
        border: usize,
    ) -> Result<Self, RenderError> {
        let code = match version {
            Some(v) => {
                QrCode::with_version(payload.as_bytes(), Version::Normal(v.get() as i16), EcLevel::H)
            }
            None => QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H),
        }
        .map_err(|e| RenderError::Encoding {
            len: payload.len(),
            reason: e.to_string(),
        })?;

        Ok(Self::with_quiet_zone(&code, border))
    }

    fn with_quiet_zone(code: &QrCode, border: usize) -> Self {
        let inner = code.width();
        let width = inner + 2 * border;
        let mut cells = vec![false; width * width];
        for (i, color) in code.to_colors().into_iter().enumerate() {
            let (col, row) = (i % inner, i / inner);
            cells[(row + border) * width + col + border] = color == Color::Dark;
        }
        let version = match code.version() {
            Version::Normal(n) | Version::Micro(n) => n,
        };
        Self {
            width,
            version,
            cells,
        }
    }

    /// Number of module columns, quiet zone included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of module rows, quiet zone included.
    pub fn height(&self) -> usize {
        self.width
    }

    /// QR version the payload was encoded at.
    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn is_dark(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.width && self.cells[row * self.width + col]
    }

    /// `(col, row)` of every dark module, row by row.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(|(i, _)| (i % self.width, i / self.width))
    }
}
