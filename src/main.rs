use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use nalgebra::Vector2;

use rbezier::svg::{SceneStyle, SVG};
use rbezier::{assemble, sweep, RationalCurve, WeightedPoint};

#[derive(Parser, Debug)]
#[command(name = "rbezier")]
#[command(about = "Render the construction of a weighted bezier curve as svg frames", long_about = None)]
struct Args {
    /// Parameter increment between frames, in (0, 1]
    #[arg(short, long, default_value_t = 0.01)]
    step: f64,

    /// Directory the numbered frames are written into
    #[arg(short, long, value_name = "DIR", default_value = "frames")]
    out_dir: PathBuf,

    /// Margin around the drawn geometry, as a fraction of its extent
    #[arg(long, default_value_t = 0.1)]
    margin: f64,

    /// Raster width in pixels the frames ask to be displayed at
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Raster height in pixels the frames ask to be displayed at
    #[arg(long, default_value_t = 1024)]
    height: u32,
}

/// The curve the animation is built around, a degree six polygon whose
/// weights pull the curve toward and away from its corners.
fn demo_polygon() -> Vec<WeightedPoint<f64>> {
    vec![
        WeightedPoint::new(0.0, 2.0, 1.0),
        WeightedPoint::new(0.0, 5.5, 1.5),
        WeightedPoint::new(2.5, 8.0, 0.5),
        WeightedPoint::new(6.0, 8.0, 1.5),
        WeightedPoint::new(8.0, 8.0, 0.5),
        WeightedPoint::new(8.0, 3.0, 1.5),
        WeightedPoint::new(12.0, 3.0, 1.0),
    ]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let curve = RationalCurve::new(demo_polygon(), Vector2::new(6.0, 2.0))?;
    let ts: Vec<f64> = sweep(args.step)?.collect();
    let view_box = curve.frame_box().pad(args.margin);
    let style = SceneStyle::default();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {:?}", args.out_dir))?;

    let total = ts.len();
    let mut trace = Vec::with_capacity(total);
    for (frame, &t) in ts.iter().enumerate() {
        let construction = curve.construct(t)?;
        trace.push(construction.point);

        let scene = assemble(&curve, &construction, &trace);
        let mut svg = SVG::for_box(&view_box);
        svg.size = Some((args.width, args.height));
        svg.add_scene(&scene, &style);

        let path = args.out_dir.join(format!("frame_{frame:05}.svg"));
        fs::write(&path, svg.to_string())
            .with_context(|| format!("failed to write {path:?}"))?;

        if (frame + 1) % 25 == 0 || frame + 1 == total {
            info!("frame {}/{}", frame + 1, total);
        }
    }

    Ok(())
}
