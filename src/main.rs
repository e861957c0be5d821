use std::path::PathBuf;

use anyhow::Context;
use appicon::font::{FontCandidate, FontChain};
use appicon::IconConfig;
use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Generate an app icon and its adaptive-icon foreground as PNGs.
///
/// With no arguments the stock icon is written to
/// `assets/images/app_icon.png` and `assets/images/app_icon_foreground.png`.
#[derive(Debug, Parser)]
#[command(name = "appicon", version, about)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Font file to try before the configured candidates (repeatable)
    #[arg(long = "font", value_name = "PATH")]
    fonts: Vec<PathBuf>,

    /// Text drawn at the centre
    #[arg(long)]
    text: Option<String>,

    /// Canvas size in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<IconConfig> {
        let mut cfg = match &self.config {
            Some(path) => IconConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => IconConfig::default(),
        };
        if let Some(dir) = self.out_dir {
            cfg.output_dir = dir;
        }
        if let Some(text) = self.text {
            cfg.text = text;
        }
        if let Some(size) = self.size {
            cfg.size = size;
        }
        if !self.fonts.is_empty() {
            let mut fonts: Vec<FontCandidate> =
                self.fonts.into_iter().map(FontCandidate::file).collect();
            fonts.append(&mut cfg.fonts);
            cfg.fonts = fonts;
        }
        Ok(cfg)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let print_config = cli.print_config;
    let config = cli.into_config()?;
    if print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let fonts = FontChain::new(config.fonts.clone());
    appicon::generate(&config, &fonts, &mut std::io::stdout().lock())
        .context("icon generation failed")?;
    Ok(())
}
