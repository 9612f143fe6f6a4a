use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::from_str;
use std::{
    fs,
    io::{BufRead, Write},
    path::PathBuf,
};

use astrokit_core::{
    qr::{BackgroundMode, DotStyle, ForegroundColor, RenderConfig, DEFAULT_OUTPUT},
    types::{Payload, SymbolVersion},
};

/// Where the settings of a `qr` invocation come from.
pub trait QrConfigSource {
    fn load(&mut self) -> Result<RenderConfig>;
}

/// Options given on the command line.
pub struct FlagsConfigSource {
    pub payload: Payload,
    pub color: String,
    pub background: String,
    pub logo: Option<PathBuf>,
    pub dot_style: String,
    pub output: PathBuf,
    pub symbol_version: Option<SymbolVersion>,
}

impl QrConfigSource for FlagsConfigSource {
    fn load(&mut self) -> Result<RenderConfig> {
        Ok(RenderConfig {
            payload: self.payload.clone(),
            dot_style: DotStyle::from(self.dot_style.as_str()),
            foreground_color: ForegroundColor::from(self.color.as_str()),
            background_mode: BackgroundMode::from(self.background.as_str()),
            logo_path: self.logo.clone(),
            output_path: self.output.clone(),
            symbol_version: self.symbol_version,
        })
    }
}

/// Asks for every option in turn, one answer per line.
pub struct PromptConfigSource<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfigSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("Failed to read answer")?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Empty means black, a missing `#` is added.
fn normalize_hex(answer: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        "#000000".to_string()
    } else if answer.starts_with('#') {
        answer.to_string()
    } else {
        format!("#{}", answer)
    }
}

impl<R: BufRead, W: Write> QrConfigSource for PromptConfigSource<R, W> {
    fn load(&mut self) -> Result<RenderConfig> {
        let name = self.ask(
            "Enter the name for the output QR code file (e.g: my_qr_code, no need for extension)",
        )?;
        let url = self.ask("Enter the URL to encode in the QR code")?;
        let color = self.ask(
            "Enter the HEX color code for the QR code (e.g: #FF5733 or FF5733) [default: #000000]",
        )?;
        let background = self.ask(
            "Enter the background color for the QR code (white or transparent) [default: transparent]",
        )?;
        let logo = self.ask("Enter the path to the logo image (optional, press Enter to skip)")?;
        let dot_style = self.ask("Enter dot style for the QR code (square or round) [default: square]")?;

        let payload = Payload::new(&url).context("A URL to encode is required")?;
        let output_path = match name.trim() {
            "" => PathBuf::from(DEFAULT_OUTPUT),
            name => PathBuf::from(format!("{}.png", name)),
        };
        let logo_path = match logo.trim() {
            "" => None,
            path => Some(PathBuf::from(path)),
        };

        Ok(RenderConfig {
            payload,
            dot_style: DotStyle::from(dot_style.as_str()),
            foreground_color: ForegroundColor::from(normalize_hex(&color).as_str()),
            background_mode: BackgroundMode::from(background.as_str()),
            logo_path,
            output_path,
            symbol_version: None,
        })
    }
}

/// JSON document describing a QR code, e.g:
///
/// ```json
/// { "payload": "https://example.com", "dotStyle": "round", "foregroundColor": "#00276b" }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QrConfigFile {
    pub payload: String,
    pub dot_style: Option<String>,
    pub foreground_color: Option<String>,
    pub background_mode: Option<String>,
    pub logo_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub symbol_version: Option<u8>,
}

impl QrConfigFile {
    pub fn into_render_config(self) -> Result<RenderConfig> {
        let mut config = RenderConfig::new(Payload::new(&self.payload)?);
        if let Some(style) = self.dot_style {
            config.dot_style = DotStyle::from(style.as_str());
        }
        if let Some(color) = self.foreground_color {
            config.foreground_color = ForegroundColor::from(color.as_str());
        }
        if let Some(background) = self.background_mode {
            config.background_mode = BackgroundMode::from(background.as_str());
        }
        config.logo_path = self.logo_path;
        if let Some(output) = self.output_path {
            config.output_path = output;
        }
        config.symbol_version = self.symbol_version.map(SymbolVersion::new).transpose()?;
        Ok(config)
    }
}

pub struct JsonFileConfigSource {
    path: PathBuf,
}

impl JsonFileConfigSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl QrConfigSource for JsonFileConfigSource {
    fn load(&mut self) -> Result<RenderConfig> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read QR config file: {}", self.path.display()))?;
        let file: QrConfigFile = from_str(&content)
            .with_context(|| format!("Failed to parse QR config file: {}", self.path.display()))?;
        file.into_render_config()
    }
}
