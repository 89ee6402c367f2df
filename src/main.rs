use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use fractal_viewer::core::data::point::Point;
use fractal_viewer::{
    CliController, ExplorerSession, ExplorerSettings, Formula, Palette, PalettePreset, PixelRect,
    PpmFilePresenter, write_palette_listing,
};

const ASPECT_RATIO: f64 = 16.0 / 9.0;

#[derive(Debug, Parser)]
#[command(name = "fractal_viewer")]
#[command(about = "Escape-time fractal renderer", version)]
struct Args {
    /// Image width in pixels; the height follows a 16:9 aspect ratio
    #[arg(default_value_t = 640)]
    width: u32,

    /// mandelbrot, tricorn, animation, burning-ship or experimental
    #[arg(long, default_value = "mandelbrot")]
    formula: Formula,

    /// Use a fixed iteration budget instead of the zoom-dependent one
    #[arg(long)]
    fixed_iterations: Option<u32>,

    /// Escape radius; orbits farther than this from the origin have escaped
    #[arg(long, default_value_t = 2.0)]
    escape_radius: f64,

    /// ultra-fractal, simple or primary
    #[arg(long, default_value = "ultra-fractal")]
    palette: PalettePreset,

    /// Replace the preset with this many random colours
    #[arg(long)]
    colours: Option<usize>,

    /// Seed for random colours
    #[arg(long)]
    seed: Option<u64>,

    /// Zoom in this many steps before rendering
    #[arg(long, default_value_t = 0)]
    zoom_steps: u32,

    /// Zoom towards this pixel instead of the centre, as X,Y
    #[arg(long, value_parser = parse_point)]
    cursor: Option<Point>,

    /// Record a zoom-out animation back to the starting view
    #[arg(long)]
    zoom_out_frames: bool,

    /// Directory that receives Screenshots/ and Animations/
    #[arg(long, default_value = "Images")]
    output_dir: PathBuf,

    /// Print the palette in preset form
    #[arg(long)]
    print_palette: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse().map_err(|err| format!("bad x '{}': {}", x, err))?;
    let y = y.trim().parse().map_err(|err| format!("bad y '{}': {}", y, err))?;

    Ok(Point { x, y })
}

fn frame_height(width: u32) -> u32 {
    ((f64::from(width) / ASPECT_RATIO) as u32).max(1)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    let settings = ExplorerSettings {
        formula: args.formula,
        palette: args.palette,
        dynamic_iterations: args.fixed_iterations.is_none(),
        iteration_budget: args
            .fixed_iterations
            .unwrap_or(ExplorerSettings::default().iteration_budget),
        escape_radius_squared: args.escape_radius * args.escape_radius,
        zoom_into_center: args.cursor.is_none(),
        ..ExplorerSettings::default()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let palette = match args.colours {
        Some(count) => Palette::random(count, &mut rng)?,
        None => settings.palette.palette(),
    };

    let pixel_rect = PixelRect::from_size(args.width, frame_height(args.width))?;
    info!(
        "rendering {} at {}x{} on {} threads",
        settings.formula,
        pixel_rect.width(),
        pixel_rect.height(),
        rayon::current_num_threads()
    );

    let mut session = ExplorerSession::with_palette(settings, palette, pixel_rect, rng)?;

    if args.print_palette {
        write_palette_listing(session.palette(), &mut std::io::stdout().lock())?;
    }

    let controller = CliController::new(PpmFilePresenter::new(), args.output_dir);
    controller.zoom_in(&mut session, args.zoom_steps, args.cursor.unwrap_or_default())?;
    controller.screenshot(&mut session)?;

    if args.zoom_out_frames {
        controller.record_zoom_out(&mut session)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_follows_sixteen_by_nine() {
        assert_eq!(frame_height(640), 360);
        assert_eq!(frame_height(1920), 1080);
        assert_eq!(frame_height(1), 1);
    }

    #[test]
    fn parses_cursor_points() {
        assert_eq!(parse_point("12, 7"), Ok(Point { x: 12, y: 7 }));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,7").is_err());
    }

    #[test]
    fn defaults_match_the_interactive_viewer() {
        let args = Args::parse_from(["fractal_viewer"]);

        assert_eq!(args.width, 640);
        assert_eq!(args.formula, Formula::Mandelbrot);
        assert_eq!(args.palette, PalettePreset::UltraFractal);
        assert_eq!(args.escape_radius, 2.0);
        assert!(args.fixed_iterations.is_none());
    }

    #[test]
    fn parses_formula_and_cursor_flags() {
        let args = Args::parse_from([
            "fractal_viewer",
            "1280",
            "--formula",
            "burning-ship",
            "--cursor",
            "10,20",
            "--fixed-iterations",
            "256",
        ]);

        assert_eq!(args.width, 1280);
        assert_eq!(args.formula, Formula::BurningShip);
        assert_eq!(args.cursor, Some(Point { x: 10, y: 20 }));
        assert_eq!(args.fixed_iterations, Some(256));
    }
}
