// Copyright 2020 TwoCookingMice

use tracking_volume::core::params::load_params;
use tracking_volume::core::plot::{ Dimensionality, LineStyle };
use tracking_volume::io::raster_plot::RasterAxes;
use tracking_volume::math::constants::{ Float, Vector3f };
use tracking_volume::volumes::get_tracking_volume;

use std::env;
use std::error::Error;

const PLOT_SIZE: u32 = 512;

struct Options {
    params_path: String,
    dims: Dimensionality,
    plot_path: Option<String>,
    points: Vec<Vector3f>,
}

fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <params.launch|params.txt> [--3d] [--plot out.png] [--point x,y,z]...", args[0]);
        std::process::exit(1);
    }

    let result = parse_options(&args).and_then(|options| run(&options));
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn parse_options(args: &[String]) -> Result<Options, Box<dyn Error>> {
    let mut options = Options {
        params_path: args[1].clone(),
        dims: Dimensionality::TwoD,
        plot_path: None,
        points: Vec::new(),
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--3d" => options.dims = Dimensionality::ThreeD,
            "--plot" => {
                i += 1;
                let path = args.get(i).ok_or("--plot needs an output path")?;
                options.plot_path = Some(path.clone());
            }
            "--point" => {
                i += 1;
                let value = args.get(i).ok_or("--point needs x,y,z")?;
                options.points.push(parse_point(value)?);
            }
            other => log::warn!("Ignoring unknown argument: {}.", other),
        }
        i += 1;
    }

    Ok(options)
}

fn parse_point(value: &str) -> Result<Vector3f, Box<dyn Error>> {
    let coords = value.split(',')
        .map(|s| s.trim().parse::<Float>())
        .collect::<Result<Vec<Float>, _>>()
        .map_err(|_| format!("invalid point: {}", value))?;
    if coords.len() != 3 {
        return Err(format!("invalid point: {}", value).into());
    }
    Ok(Vector3f::new(coords[0], coords[1], coords[2]))
}

fn run(options: &Options) -> Result<(), Box<dyn Error>> {
    let params = load_params(&options.params_path)?;
    let volume = get_tracking_volume(&params)?;

    for p in &options.points {
        println!("{},{},{} inside={}", p.x, p.y, p.z, volume.inside_point(p));
    }

    if let Some(path) = &options.plot_path {
        let mut axes = RasterAxes::new(PLOT_SIZE, PLOT_SIZE);
        let style = LineStyle::new().with_color([31, 119, 180]).with_label(volume.kind());
        volume.draw(&mut axes, options.dims, &style);
        volume.apply_bounds(&mut axes, options.dims);
        axes.save(path)?;
        println!("Plot written to: {}.", path);
    }

    Ok(())
}
