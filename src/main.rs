use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;

use picascii::{
    cache::FrameCache,
    config::{self, Config},
    input, output, renderer,
    ui::{self, App},
};

/// Convert images to colored ASCII art
#[derive(Parser, Debug)]
#[command(name = "picascii", version, about)]
struct Cli {
    /// Image to convert: a file path or an http(s) URL
    source: Option<String>,

    /// Output width in characters, clamped to [40, 120]
    #[arg(short, long)]
    width: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "ansi")]
    format: Format,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Open the result in an interactive terminal viewer
    #[arg(long)]
    view: bool,

    /// Skip the rendered-frame cache
    #[arg(long)]
    no_cache: bool,

    /// Delete all cached frames and exit
    #[arg(long)]
    clear_cache: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// 24-bit colored glyphs for the terminal
    Ansi,
    /// HTML fragment of colored spans
    Html,
    /// HTML fragment wrapped in a styled <pre> block
    Document,
    /// The frame as JSON
    Json,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    if cli.clear_cache {
        let cache = FrameCache::new()?;
        cache.clear()?;
        println!("Cache cleared");
        return Ok(());
    }

    let source = cli
        .source
        .clone()
        .context("No image given. Pass a file path or URL (see --help)")?;

    let width = config::clamp_width(cli.width.unwrap_or(config.default_width));

    let bytes = input::load_bytes(&source)?;

    // Cache is best-effort; rendering proceeds without it
    let cache = if cli.no_cache || config.cache_disabled {
        None
    } else {
        match FrameCache::new() {
            Ok(cache) => Some(cache),
            Err(e) => {
                eprintln!("Warning: cache disabled - {e}");
                None
            }
        }
    };

    let frame = match cache.as_ref().and_then(|c| c.get(&bytes, width)) {
        Some(frame) => frame,
        None => {
            let frame = renderer::render_bytes(&bytes, width)?;
            if let Some(cache) = cache.as_ref() {
                if let Err(e) = cache.set(&bytes, width, frame.clone()) {
                    eprintln!("Failed to cache frame: {e}");
                }
            }
            frame
        }
    };

    if cli.view {
        let mut terminal = ui::setup_terminal()?;
        let mut app = App::new(frame, source);
        let res = ui::run_app(&mut terminal, &mut app);

        // Restore terminal
        ui::restore_terminal(&mut terminal)?;

        if let Err(err) = res {
            eprintln!("Error: {err:?}");
        }
        return Ok(());
    }

    let rendered = match cli.format {
        Format::Ansi => output::frame_to_ansi(&frame),
        Format::Html => output::frame_to_html(&frame),
        Format::Document => output::frame_to_document(&frame),
        Format::Json => serde_json::to_string(&frame)?,
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered).with_context(|| format!("Failed to write {path}"))?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
