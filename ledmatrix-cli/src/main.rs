use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledmatrix::config::Config;
use ledmatrix::editor::Editor;
use ledmatrix::ht16k33::Blink;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod output;
mod session;

/// Draw 8x16 LED matrix patterns and export them as C bitmap arrays
#[derive(Parser)]
#[command(name = "ledmatrix", version)]
struct Cli {
    /// Path to a .toml config with export and preview settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw interactively, one command per line on stdin
    Edit,
    /// Export a pattern given as a list of lit pixels
    Export {
        /// Pixel to light as "ROW,COL" (repeatable)
        #[arg(short, long = "pixel", value_parser = parse_pixel)]
        pixels: Vec<(usize, usize)>,
        /// Output format: c, hex, json or ht16k33
        #[arg(short, long, default_value = "c")]
        format: String,
        /// Brightness (0-15) for the ht16k33 init sequence
        #[arg(long, default_value = "15")]
        brightness: u8,
        /// Blink rate for the ht16k33 init sequence: off, 2hz, 1hz or 0.5hz
        #[arg(long, default_value = "off", value_parser = output::parse_blink)]
        blink: Blink,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Edit => cmd_edit(config),
        Command::Export {
            pixels,
            format,
            brightness,
            blink,
        } => cmd_export(
            config,
            &pixels,
            &format,
            &output::DeviceSettings { brightness, blink },
        ),
    }
}

/// Load settings from a .toml file, or the defaults when no path is given.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let toml_str =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = Config::from_toml(&toml_str)
        .with_context(|| format!("parsing config from {}", path.display()))?;
    info!(path = %path.display(), name = config.export.name(), "loaded config");
    Ok(config)
}

/// Parse a pixel specification like "3,15".
fn parse_pixel(spec: &str) -> Result<(usize, usize), String> {
    let (row, col) = spec
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{spec}'"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{}'", row.trim()))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", col.trim()))?;
    Ok((row, col))
}

fn cmd_edit(config: Config) -> Result<()> {
    let mut editor = Editor::new(config.export);
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    session::run(
        &mut editor,
        &config.preview,
        stdin.lock(),
        std::io::stdout().lock(),
        prompt,
    )
}

fn cmd_export(
    config: Config,
    pixels: &[(usize, usize)],
    format: &str,
    device: &output::DeviceSettings,
) -> Result<()> {
    let mut editor = Editor::new(config.export);
    for &(row, col) in pixels {
        editor
            .on_pixel_activated(row, col)
            .with_context(|| format!("lighting pixel {row},{col}"))?;
    }

    let text = output::render(&editor.bitmap(), editor.style(), format, device)?;
    print!("{text}");
    Ok(())
}
