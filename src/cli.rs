use std::path::PathBuf;

use astrokit_core::{
    qr::DEFAULT_OUTPUT,
    types::{Payload, StarName, SymbolVersion},
};
use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get the Gaia DR3 RUWE of a star resolved by SIMBAD
    Ruwe(RuweArgs),

    /// Get the angular separation between two stars resolved by SIMBAD
    Separation(SeparationArgs),

    /// Generate a QR code image, optionally styled and with a centered logo
    Qr(QrArgs),
}

#[derive(Args)]
pub struct RuweArgs {
    /// Name of the star (e.g: "Sirius", "HD 48915")
    #[arg(value_name = "STAR")]
    pub star: StarName,
}

#[derive(Args)]
pub struct SeparationArgs {
    /// Name of the first star
    #[arg(value_name = "STAR1")]
    pub first: StarName,

    /// Name of the second star
    #[arg(value_name = "STAR2")]
    pub second: StarName,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["payload", "interactive", "config"])
))]
pub struct QrArgs {
    /// Text or URL to encode
    #[arg(value_name = "PAYLOAD")]
    pub payload: Option<Payload>,

    /// Ask for every option on the terminal
    #[arg(short, long)]
    pub interactive: bool,

    /// Read the options from a JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Color of the dots (e.g: "#FF5733", "FF5733")
    #[arg(long, default_value = "#000000")]
    pub color: String,

    /// Background of the image ("white" or "transparent")
    #[arg(long, default_value = "transparent")]
    pub background: String,

    /// Image to place at the center of the code
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    /// Shape of the dots ("square" or "round")
    #[arg(long, default_value = "square")]
    pub dot_style: String,

    /// Where to write the PNG image
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Force a QR version (1-40) instead of the smallest one that fits
    #[arg(long, value_name = "VERSION")]
    pub symbol_version: Option<SymbolVersion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ruwe_args() {
        let cli = Cli::try_parse_from(["astrokit", "ruwe", " Sirius "]).unwrap();
        match cli.command {
            Commands::Ruwe(args) => assert_eq!(args.star.as_str(), "Sirius"),
            _ => panic!("expected ruwe"),
        }
    }

    #[test]
    fn test_wrong_argument_count() {
        for argv in [
            vec!["astrokit", "ruwe"],
            vec!["astrokit", "ruwe", "Sirius", "Vega"],
            vec!["astrokit", "separation", "Sirius"],
            vec!["astrokit", "separation", "Sirius", "Vega", "Rigel"],
        ] {
            let err = Cli::try_parse_from(argv.clone()).err().unwrap();
            assert_eq!(err.exit_code(), 2, "{:?}", argv);
            assert!(err.to_string().contains("Usage:"), "{:?}", argv);
        }
    }

    #[test]
    fn test_blank_star_name() {
        let err = Cli::try_parse_from(["astrokit", "ruwe", "   "]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_separation_args() {
        let cli = Cli::try_parse_from(["astrokit", "separation", "Sirius", "Betelgeuse"]).unwrap();
        match cli.command {
            Commands::Separation(args) => {
                assert_eq!(args.first.as_str(), "Sirius");
                assert_eq!(args.second.as_str(), "Betelgeuse");
            }
            _ => panic!("expected separation"),
        }
    }

    #[test]
    fn test_qr_defaults() {
        let cli = Cli::try_parse_from(["astrokit", "qr", "https://example.com"]).unwrap();
        let Commands::Qr(args) = cli.command else {
            panic!("expected qr");
        };
        assert_eq!(args.payload.unwrap().as_str(), "https://example.com");
        assert!(!args.interactive);
        assert_eq!(args.color, "#000000");
        assert_eq!(args.background, "transparent");
        assert_eq!(args.dot_style, "square");
        assert_eq!(args.output, PathBuf::from("qr_code.png"));
        assert!(args.logo.is_none());
        assert!(args.symbol_version.is_none());
    }

    #[test]
    fn test_qr_needs_exactly_one_source() {
        assert!(Cli::try_parse_from(["astrokit", "qr"]).is_err());
        assert!(Cli::try_parse_from(["astrokit", "qr", "hello", "--interactive"]).is_err());
        assert!(Cli::try_parse_from(["astrokit", "qr", "--interactive", "--config", "qr.json"]).is_err());
        assert!(Cli::try_parse_from(["astrokit", "qr", "--config", "qr.json"]).is_ok());
        assert!(Cli::try_parse_from(["astrokit", "qr", "-i"]).is_ok());
    }

    #[test]
    fn test_qr_symbol_version_range() {
        assert!(Cli::try_parse_from(["astrokit", "qr", "hello", "--symbol-version", "41"]).is_err());
        let cli =
            Cli::try_parse_from(["astrokit", "qr", "hello", "--symbol-version", "7"]).unwrap();
        let Commands::Qr(args) = cli.command else {
            panic!("expected qr");
        };
        assert_eq!(args.symbol_version.map(|v| v.get()), Some(7));
    }
}
