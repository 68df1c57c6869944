use anyhow::anyhow;
use clap::Parser;
use clap::ValueEnum;
use driftrs_boat::advance;
use driftrs_boat::plot::sector_speed_html;
use driftrs_boat::Position;
use driftrs_boat::Velocity;
use driftrs_stream::interpolate::interpolate_sector;
use driftrs_stream::StreamField;
use driftrs_stream::StreamFieldBuilderError;
use humantime;
use log::debug;
use log::info;
use ndarray::Array1;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version = env!("VERGEN_GIT_DESCRIBE"), about, long_about = None)]
struct Cli {
    #[clap(help = "Starting latitude, in grid degrees.", allow_negative_numbers = true)]
    latitude: f64,
    #[clap(help = "Starting longitude, in grid degrees.", allow_negative_numbers = true)]
    longitude: f64,
    /// boat velocity over ground, latitude rate in degrees per second
    #[clap(long, default_value_t = 0., allow_negative_numbers = true)]
    dlat: f64,
    /// boat velocity over ground, longitude rate in degrees per second
    #[clap(long, default_value_t = 0., allow_negative_numbers = true)]
    dlon: f64,
    #[clap(short, long, value_parser = humantime::parse_duration, default_value = "30s")]
    timestep: Duration,
    #[clap(short = 'n', long, default_value_t = 48)]
    steps: usize,
    #[clap(short, long, default_value = "gyre")]
    field: FieldKind,
    /// write a heat map of the stream speed around the final position
    #[clap(long)]
    sector_html: Option<PathBuf>,
    /// sector refinement step, in grid degrees
    #[clap(long, default_value_t = 0.01)]
    sector_step: f64,
}

const GRID_EXTENT: f64 = 10.;
const GRID_STEP: f64 = 0.5;
const GYRE_RATE: f64 = 3e-4;
const SHEAR_RATE: f64 = 2e-4;
const UNIFORM_DLAT: f64 = 5e-4;
const UNIFORM_DLON: f64 = 2e-3;

#[derive(ValueEnum, Clone, Debug)]
enum FieldKind {
    Gyre,
    Uniform,
    Shear,
}

impl FieldKind {
    /// Synthetic stream fields covering [-10, 10) x [-10, 10) degrees with
    /// nodes every half degree.
    fn to_stream_field(&self) -> Result<StreamField, StreamFieldBuilderError> {
        let nodes = || Array1::range(-GRID_EXTENT, GRID_EXTENT + GRID_STEP, GRID_STEP);
        match self {
            FieldKind::Gyre => StreamField::from_fn(nodes(), nodes(), 2, |lat, lon, k| {
                if k == 0 {
                    GYRE_RATE * lon
                } else {
                    -GYRE_RATE * lat
                }
            }),
            FieldKind::Uniform => StreamField::from_fn(nodes(), nodes(), 2, |_, _, k| {
                if k == 0 {
                    UNIFORM_DLAT
                } else {
                    UNIFORM_DLON
                }
            }),
            FieldKind::Shear => StreamField::from_fn(nodes(), nodes(), 2, |lat, _, k| {
                if k == 0 {
                    0.
                } else {
                    SHEAR_RATE * lat
                }
            }),
        }
    }
}

fn entrypoint() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    if cli.steps == 0 {
        return Err(anyhow!("steps must be greater than zero.").into());
    }
    let stream = cli.field.to_stream_field()?;
    let boat = Velocity {
        dlat: cli.dlat,
        dlon: cli.dlon,
    };
    let ts = cli.timestep.as_secs_f64();
    info!(
        "drifting through a {:?} stream for {} steps of {}",
        cli.field,
        cli.steps,
        humantime::format_duration(cli.timestep)
    );
    let mut position = Position {
        lat: cli.latitude,
        lon: cli.longitude,
    };
    println!("{:.6} {:.6}", position.lat, position.lon);
    for step in 0..cli.steps {
        position = advance(&boat, position.lat, position.lon, &stream, ts)?;
        debug!("step {}: {:?}", step + 1, position);
        println!("{:.6} {:.6}", position.lat, position.lon);
    }
    if let Some(path) = &cli.sector_html {
        let sector = interpolate_sector(&stream, position.lat, position.lon, cli.sector_step)?;
        sector_speed_html(&sector, path)?;
        info!("wrote sector heat map to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let exit_code = match entrypoint() {
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
        Ok(_) => ExitCode::SUCCESS,
    };
    exit_code
}
