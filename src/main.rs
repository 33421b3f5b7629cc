use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use vectorboard::Config;
use vectorboard::draw::{
    self, Board, Circle, CircleStyle, GradientAnchor, GradientStop, Paint, Path, PathStyle,
    PathStyleOverride, Point, Position, Shadow, Text, TextStyle, make_gradient, rect_points,
    style_group,
};
use vectorboard::surface::CairoSurface;

#[derive(Parser, Debug)]
#[command(name = "vectorboard")]
#[command(version, about = "Render the demo drawing board to a PNG")]
struct Cli {
    /// Output PNG path
    #[arg(long, short = 'o', default_value = "board.png")]
    output: PathBuf,

    /// Board width in pixels (overrides the config file)
    #[arg(long)]
    width: Option<u32>,

    /// Board height in pixels (overrides the config file)
    #[arg(long)]
    height: Option<u32>,

    /// Explicit config file path
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let width = cli.width.unwrap_or(config.board.width);
    let height = cli.height.unwrap_or(config.board.height);
    log::info!("rendering {width}x{height} board to {}", cli.output.display());

    let board = demo_board(&config, width as f64, height as f64);

    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
        .context("failed to create image surface")?;
    let ctx = cairo::Context::new(&image).context("failed to create cairo context")?;
    let mut surface = CairoSurface::new(ctx);

    board.render(&mut surface);

    drop(surface);
    let mut file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    image
        .write_to_png(&mut file)
        .context("failed to write PNG")?;

    log::info!("wrote {}", cli.output.display());
    Ok(())
}

/// Composes the mock drawing-board scene: a header bar with a menu icon and
/// title, a gradient-stroked bar, a curved bottom sheet, and a shadowed
/// circle that answers hover hit-tests.
fn demo_board(config: &Config, width: f64, height: f64) -> Board {
    let mut board = Board::new();

    // Canvas background, painted first so everything else layers on top.
    board.add_shape(Path::new(PathStyle {
        points: rect_points(0.0, 0.0, width, height).to_vec(),
        fill: config.board.background.to_paint(),
        ..Default::default()
    }));

    let header = Path::new(PathStyle {
        points: rect_points(0.0, 0.0, width, 60.0).to_vec(),
        fill: Paint::parse("#212121"),
        ..Default::default()
    });
    board.add_shape(header);

    // Rounded bottom sheet: the curved corners come from control points, not
    // from a circle.
    let bottom_sheet = Path::new(PathStyle {
        points: vec![
            Point::curved(width / 2.0, height / 1.4, width, height / 1.4),
            Point::at(width + 20.0, height),
            Point::curved(-20.0, height, 0.0, height / 1.4),
        ],
        fill: Paint::parse("#eaeaea"),
        ..Default::default()
    });
    board.add_shape(bottom_sheet);

    let gradient = make_gradient(
        GradientAnchor::default(),
        GradientAnchor {
            x: Some(170.0),
            ..Default::default()
        },
        vec![
            GradientStop::new(0.0, draw::MAGENTA),
            GradientStop::new(0.5, draw::BLUE),
            GradientStop::new(1.0, draw::RED),
        ],
    );
    let gradient_bar = Path::new(PathStyle {
        points: rect_points(30.0, 80.0, width - 60.0, 30.0).to_vec(),
        stroke: gradient.into(),
        stroke_width: config.drawing.default_stroke_width,
        opacity: config.drawing.default_opacity,
        ..Default::default()
    });
    board.add_shape(gradient_bar);

    let menu_icon = style_group(
        &PathStyle {
            fill: Paint::Solid(draw::WHITE),
            ..Default::default()
        },
        &[
            PathStyleOverride {
                points: Some(rect_points(20.0, 22.0, 18.0, 2.0).to_vec()),
                ..Default::default()
            },
            PathStyleOverride {
                points: Some(rect_points(20.0, 27.0, 18.0, 2.0).to_vec()),
                ..Default::default()
            },
            PathStyleOverride {
                points: Some(rect_points(20.0, 32.0, 18.0, 2.0).to_vec()),
                ..Default::default()
            },
        ],
    );
    for bar in menu_icon {
        board.add_shape(bar);
    }

    let title = Text::new(TextStyle {
        text: "Header".to_string(),
        font: config.text.font_family.clone(),
        size: config.text.size,
        color: config.text.color.to_color(draw::WHITE),
        align: config.text.align,
        position: Position::new(width / 3.0, 35.0),
        ..Default::default()
    });
    board.add_shape(title);

    let circle = Circle::new(CircleStyle {
        position: Position::new(width / 2.0, height / 2.0),
        radius: 50.0,
        fill: Paint::Solid(draw::YELLOW),
        shadow: Some(Shadow {
            blur: 100.0,
            ..Default::default()
        }),
        ..Default::default()
    });
    board.add_shape(circle);

    board
}
