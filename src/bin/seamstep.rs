// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{value_t, App, Arg, ArgMatches};
use failure::{Error, ResultExt};
use image::imageops::{self, FilterType};
use image::RgbImage;
use log::{debug, info};
use seamstep::{
    carve_steps, energy_to_image, mark_seam_on_energy, CarveRequest, CarveState, Direction,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

struct Params {
    input: PathBuf,
    output: PathBuf,
    frames: Option<PathBuf>,
    every: u32,
    max_width: Option<u32>,
    request: CarveRequest,
}

fn params(matches: &ArgMatches) -> Result<Params, Error> {
    let direction: Direction = matches.value_of("direction").unwrap_or_default().parse()?;
    let seams = value_t!(matches, "seams", u32).unwrap_or_else(|e| e.exit());
    let every = value_t!(matches, "every", u32).unwrap_or_else(|e| e.exit());
    let max_width = match matches.value_of("max-width") {
        Some(_) => Some(value_t!(matches, "max-width", u32).unwrap_or_else(|e| e.exit())),
        None => None,
    };
    Ok(Params {
        input: PathBuf::from(matches.value_of_os("input").unwrap_or_default()),
        output: PathBuf::from(matches.value_of_os("output").unwrap_or_default()),
        frames: matches.value_of_os("frames").map(PathBuf::from),
        every: every.max(1),
        max_width,
        request: CarveRequest::new(direction, seams),
    })
}

fn load(path: &Path, max_width: Option<u32>) -> Result<RgbImage, Error> {
    let image = image::open(path)
        .with_context(|_| format!("could not read an image from {}", path.display()))?
        .to_rgb();
    let (width, height) = image.dimensions();
    match max_width {
        Some(max) if max > 0 && width > max => {
            let scale = f64::from(max) / f64::from(width);
            let new_height = ((f64::from(height) * scale) as u32).max(1);
            info!("downscaling {}x{} to {}x{}", width, height, max, new_height);
            Ok(imageops::resize(&image, max, new_height, FilterType::Triangle))
        }
        _ => Ok(image),
    }
}

fn save(image: &RgbImage, path: &Path) -> Result<(), Error> {
    image
        .save(path)
        .with_context(|_| format!("could not write {}", path.display()))?;
    Ok(())
}

fn write_frame(dir: &Path, state: &CarveState) -> Result<(), Error> {
    let energy = mark_seam_on_energy(&energy_to_image(&state.energy), &state.seam_overlay);
    save(&state.seam_overlay, &dir.join(format!("step-{:04}-seam.png", state.step)))?;
    save(&energy, &dir.join(format!("step-{:04}-energy.png", state.step)))?;
    debug!("wrote frames for step {}", state.step);
    Ok(())
}

fn run(params: Params) -> Result<(), Error> {
    let image = load(&params.input, params.max_width)?;
    params.request.validate(image.dimensions())?;

    if let Some(dir) = &params.frames {
        fs::create_dir_all(dir)
            .with_context(|_| format!("could not create frame directory {}", dir.display()))?;
    }

    let seams = params.request.seams;
    info!(
        "removing {} {} seams from {}x{}",
        seams,
        params.request.direction,
        image.width(),
        image.height()
    );

    let mut result = image.clone();
    for state in carve_steps(&image, params.request.direction, seams) {
        if let Some(dir) = &params.frames {
            if state.step % params.every == 0 || state.step == seams {
                write_frame(dir, &state)?;
            }
        }
        result = state.image;
    }

    info!("final size {}x{}", result.width(), result.height());
    save(&result, &params.output)
}

fn main() {
    env_logger::init();

    let matches = App::new("seamstep")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking, one seam at a time")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("direction")
                .short("d")
                .long("direction")
                .help("Remove vertical seams (narrower) or horizontal seams (shorter)")
                .takes_value(true)
                .required(true)
                .possible_values(&["vertical", "horizontal", "v", "h"]),
        )
        .arg(
            Arg::with_name("seams")
                .short("k")
                .long("seams")
                .help("How many seams to remove")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("Where to write the carved image")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("frames")
                .long("frames")
                .help("Directory to write per-step seam and energy frames into")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("every")
                .long("every")
                .help("Only write frames for every Nth step (the last is always written)")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("max-width")
                .long("max-width")
                .help("Downscale wider inputs to this width before carving")
                .takes_value(true),
        )
        .get_matches();

    let result = params(&matches).and_then(run);
    if let Err(err) = result {
        eprintln!("seamstep: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
