use anyhow::{Context, Result};
use std::io::{stdin, stdout};
use tracing::info;

use astrokit_core::qr::{self, RenderConfig};

use crate::{
    cli::QrArgs,
    settings::{FlagsConfigSource, JsonFileConfigSource, PromptConfigSource, QrConfigSource},
};

/// Pick the configuration source the arguments ask for.
pub fn config_source(args: QrArgs) -> Result<Box<dyn QrConfigSource>> {
    if args.interactive {
        return Ok(Box::new(PromptConfigSource::new(stdin().lock(), stdout())));
    }
    if let Some(path) = args.config {
        return Ok(Box::new(JsonFileConfigSource::new(path)));
    }
    let payload = args
        .payload
        .context("Provide a payload, --interactive or --config")?;
    Ok(Box::new(FlagsConfigSource {
        payload,
        color: args.color,
        background: args.background,
        logo: args.logo,
        dot_style: args.dot_style,
        output: args.output,
        symbol_version: args.symbol_version,
    }))
}

pub async fn handle(args: QrArgs) -> Result<()> {
    let config: RenderConfig = config_source(args)?.load()?;
    info!(
        style = %config.dot_style,
        color = %config.foreground_color,
        background = %config.background_mode,
        "Rendering QR code ..."
    );

    let path = qr::generate(&config)?;
    println!("QR code generated and saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use astrokit_core::qr::{BackgroundMode, DotStyle};
    use clap::Parser;

    fn qr_args(argv: &[&str]) -> QrArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Qr(args) => args,
            _ => panic!("expected qr"),
        }
    }

    #[test]
    fn test_flags_become_render_config() {
        let args = qr_args(&[
            "astrokit",
            "qr",
            "https://example.com",
            "--dot-style",
            "round",
            "--background",
            "white",
        ]);
        let config = config_source(args).unwrap().load().unwrap();
        assert_eq!(config.dot_style, DotStyle::Round);
        assert_eq!(config.background_mode, BackgroundMode::White);
        assert_eq!(config.payload.as_str(), "https://example.com");
    }

    #[test]
    fn test_config_file_source_is_used() {
        let path = std::env::temp_dir().join(format!("astrokit-cmd-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"payload":"from file","dotStyle":"round"}"#).unwrap();

        let args = qr_args(&["astrokit", "qr", "--config", path.to_str().unwrap()]);
        let config = config_source(args).unwrap().load().unwrap();
        assert_eq!(config.payload.as_str(), "from file");
        assert_eq!(config.dot_style, DotStyle::Round);
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_handle_writes_image() {
        let dir = std::env::temp_dir().join(format!("astrokit-handle-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let output = dir.join("code.png");

        let args = qr_args(&["astrokit", "qr", "hello", "--output", output.to_str().unwrap()]);
        handle(args).await.unwrap();
        assert!(output.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
