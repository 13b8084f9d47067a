use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use rastersketch::Config;
use rastersketch::config::MAX_CANVAS_DIMENSION;
use rastersketch::draw::{AffineMode, BLACK, FillMode, ORANGE, PixelBuffer, Surface, fractal};
use rastersketch::input::{EditorState, MouseButton, Tool};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("RASTERSKETCH_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "rastersketch")]
#[command(version = VERSION, about = "Pixel-grid vector shape engine")]
struct Cli {
    /// Render the split color/grayscale Mandelbrot set
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "demo")]
    mandelbrot: bool,

    /// Draw, select, and transform a few shapes, then render the canvas
    #[arg(long, action = ArgAction::SetTrue)]
    demo: bool,

    /// PNG file to write
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Image width in pixels, 1-8192 (defaults to canvas.width from config)
    #[arg(long, value_name = "PIXELS", value_parser = dimension_parser())]
    width: Option<u32>,

    /// Image height in pixels, 1-8192 (defaults to canvas.height from config)
    #[arg(long, value_name = "PIXELS", value_parser = dimension_parser())]
    height: Option<u32>,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn dimension_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=MAX_CANVAS_DIMENSION as i64)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if !cli.mandelbrot && !cli.demo {
        // No flags: show usage
        println!("rastersketch: Pixel-grid vector shape engine");
        println!();
        println!("Usage:");
        println!("  rastersketch --demo -o canvas.png        Render a scripted editing session");
        println!("  rastersketch --mandelbrot -o fractal.png Render the split Mandelbrot set");
        println!("  rastersketch --help                      Show help");
        return Ok(());
    }

    let Some(output) = cli.output.as_deref() else {
        bail!("--output is required with --demo or --mandelbrot");
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let width = cli.width.unwrap_or(config.canvas.width);
    let height = cli.height.unwrap_or(config.canvas.height);

    if cli.mandelbrot {
        run_mandelbrot(width, height, output)
    } else {
        run_demo(&config, width, height, output)
    }
}

fn run_mandelbrot(width: u32, height: u32, output: &Path) -> Result<()> {
    log::info!("Rendering {width}x{height} Mandelbrot split");
    let mut surface = PixelBuffer::new(width, height, BLACK);
    surface.put_image(&fractal::render_mandelbrot_split(width, height));
    surface
        .save_png(output)
        .context("Failed to save Mandelbrot image")
}

fn run_demo(config: &Config, width: u32, height: u32, output: &Path) -> Result<()> {
    let (w, h) = (width as f64, height as f64);
    let mut state = EditorState::from_config(config);
    state.canvas_size = (width, height);

    let drag = |state: &mut EditorState, from: (f64, f64), to: (f64, f64)| {
        state.on_mouse_press(MouseButton::Left, from.0, from.1);
        state.on_mouse_release(MouseButton::Left, to.0, to.1);
    };

    state.set_tool(Some(Tool::Line));
    drag(&mut state, (w * 0.1, h * 0.1), (w * 0.9, h * 0.3));

    state.set_tool(Some(Tool::Circle));
    state.current_fill = FillMode::Solid;
    let (cx, cy, radius) = (w * 0.3, h * 0.6, w.min(h) * 0.15);
    drag(&mut state, (cx, cy), (cx + radius, cy));

    state.set_tool(Some(Tool::Ellipse));
    state.current_fill = FillMode::None;
    drag(&mut state, (w * 0.7, h * 0.65), (w * 0.85, h * 0.75));

    // Pick the circle back up by its right edge and restyle it
    state.set_tool(Some(Tool::Select));
    drag(&mut state, (cx + radius, cy), (cx + radius, cy));
    if let Some(sync) = state.take_selection_sync() {
        log::info!(
            "Selection synced: index {} color {} fill {:?}",
            sync.index,
            sync.color.to_hex(),
            sync.fill
        );
    }
    state.recolor_selected(ORANGE);
    state.set_lightness_brightness(20, -10);

    state.set_affine_mode(Some(AffineMode::Scale));
    state.on_mouse_press(MouseButton::Left, cx, cy);
    state.on_mouse_release(MouseButton::Left, cx, cy);
    state.set_affine_mode(Some(AffineMode::Move));
    state.on_mouse_press(MouseButton::Left, cx, cy);
    state.on_mouse_release(MouseButton::Left, cx, cy);

    let mut surface = PixelBuffer::new(width, height, config.canvas.background_color());
    state.render(&mut surface);
    log::info!(
        "Rendered {} shapes ({} painted pixels)",
        state.shapes().len(),
        surface.painted_pixel_count()
    );
    surface.save_png(output).context("Failed to save demo canvas")
}
