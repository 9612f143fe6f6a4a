use image::Rgba;
use tracing::warn;

/// Shape drawn for each dark module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotStyle {
    #[default]
    Square,
    Round,
}

/// Only the exact string "round" renders round modules, anything else is square.
impl From<&str> for DotStyle {
    fn from(value: &str) -> Self {
        match value {
            "round" => DotStyle::Round,
            _ => DotStyle::Square,
        }
    }
}

impl std::fmt::Display for DotStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotStyle::Square => write!(f, "square"),
            DotStyle::Round => write!(f, "round"),
        }
    }
}

/// Canvas fill before any module is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundMode {
    #[default]
    Transparent,
    White,
}

impl BackgroundMode {
    pub fn fill(&self) -> Rgba<u8> {
        match self {
            BackgroundMode::Transparent => Rgba([255, 255, 255, 0]),
            BackgroundMode::White => Rgba([255, 255, 255, 255]),
        }
    }
}

/// Total mapping: "white" is opaque white, every other string is transparent.
impl From<&str> for BackgroundMode {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("white") {
            BackgroundMode::White
        } else {
            BackgroundMode::Transparent
        }
    }
}

impl std::fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackgroundMode::Transparent => write!(f, "transparent"),
            BackgroundMode::White => write!(f, "white"),
        }
    }
}

/// Opaque color of the dark modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForegroundColor(pub [u8; 3]);

impl Default for ForegroundColor {
    fn default() -> Self {
        ForegroundColor([0, 0, 0])
    }
}

/// The sixteen basic CSS color keywords.
const NAMED_COLORS: [(&str, [u8; 3]); 16] = [
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
];

impl ForegroundColor {
    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB` or one of the basic CSS color names.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some((_, rgb)) = NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
        {
            return Some(ForegroundColor(*rgb));
        }
        let hex = value.strip_prefix('#').unwrap_or(value);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(ForegroundColor([
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ])),
            3 => {
                let mut rgb = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let nibble = c.to_digit(16)? as u8;
                    rgb[i] = nibble * 17;
                }
                Some(ForegroundColor(rgb))
            }
            _ => None,
        }
    }

    pub fn rgba(&self) -> Rgba<u8> {
        let [r, g, b] = self.0;
        Rgba([r, g, b, 255])
    }
}

/// Unparseable colors fall back to black.
impl From<&str> for ForegroundColor {
    fn from(value: &str) -> Self {
        ForegroundColor::parse(value).unwrap_or_else(|| {
            warn!(color = value, "Unrecognized color, using black");
            ForegroundColor::default()
        })
    }
}

impl std::fmt::Display for ForegroundColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_style_fallback() {
        assert_eq!(DotStyle::from("round"), DotStyle::Round);
        assert_eq!(DotStyle::from("square"), DotStyle::Square);
        assert_eq!(DotStyle::from("hexagon"), DotStyle::Square);
        assert_eq!(DotStyle::from(""), DotStyle::Square);
        assert_eq!(DotStyle::from("Round"), DotStyle::Square);
        assert_eq!(DotStyle::from(" round"), DotStyle::Square);
        assert_eq!(DotStyle::from("ROUND"), DotStyle::Square);
    }

    #[test]
    fn test_background_mapping_is_total() {
        assert_eq!(BackgroundMode::from("white"), BackgroundMode::White);
        assert_eq!(BackgroundMode::from(" White "), BackgroundMode::White);
        assert_eq!(BackgroundMode::from("transparent"), BackgroundMode::Transparent);
        assert_eq!(BackgroundMode::from("#ff0000"), BackgroundMode::Transparent);
        assert_eq!(BackgroundMode::White.fill(), Rgba([255, 255, 255, 255]));
        assert_eq!(BackgroundMode::Transparent.fill()[3], 0);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(
            ForegroundColor::parse("#00276b"),
            Some(ForegroundColor([0x00, 0x27, 0x6b]))
        );
        assert_eq!(
            ForegroundColor::parse("FF5733"),
            Some(ForegroundColor([0xff, 0x57, 0x33]))
        );
        assert_eq!(
            ForegroundColor::parse("#abc"),
            Some(ForegroundColor([0xaa, 0xbb, 0xcc]))
        );
        assert_eq!(ForegroundColor::parse("black"), Some(ForegroundColor([0, 0, 0])));
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(ForegroundColor::parse("navy"), Some(ForegroundColor([0, 0, 128])));
        assert_eq!(ForegroundColor::parse("Red"), Some(ForegroundColor([255, 0, 0])));
        assert_eq!(ForegroundColor::parse(" teal "), Some(ForegroundColor([0, 128, 128])));
        assert_eq!(ForegroundColor::parse("cornflowerblue"), None);
    }

    #[test]
    fn test_parse_rejects_malformed_hex() {
        assert_eq!(ForegroundColor::parse("#12345"), None);
        assert_eq!(ForegroundColor::parse("#gg0000"), None);
        assert_eq!(ForegroundColor::parse("#ééé"), None);
    }

    #[test]
    fn test_garbage_color_is_black() {
        assert_eq!(ForegroundColor::from("not a color"), ForegroundColor([0, 0, 0]));
        assert_eq!(ForegroundColor::from("#00276b").to_string(), "#00276b");
    }
}
