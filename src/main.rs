//! `offnadir`: print the footprint of a pointed sensor as GeoJSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use offnadir::orbital::parse_utc;
use offnadir::output::{FeatureCollection, FootprintScene};
use offnadir::{FieldOfView, OffNadir, RunConfig, Satellite};

#[derive(Parser, Debug)]
#[command(name = "offnadir")]
#[command(about = "Satellite position, ground track and sensor footprint as GeoJSON")]
#[command(version)]
struct Args {
    /// Element set, 2 or 3 lines [default: built-in polar test orbit]
    #[arg(long)]
    tle: Option<String>,
    /// Read the element set from a file (overrides --tle)
    #[arg(long, value_name = "PATH")]
    tle_file: Option<PathBuf>,
    /// UTC instant, RFC 3339 [default: now]
    #[arg(long = "t", value_name = "RFC3339")]
    t: Option<String>,
    /// Cross-track off-nadir angle, degrees
    #[arg(long, allow_negative_numbers = true)]
    off_nadir_x: Option<f64>,
    /// Along-track off-nadir angle, degrees
    #[arg(long, allow_negative_numbers = true)]
    off_nadir_y: Option<f64>,
    /// Cross-track field of view, degrees [default: 2]
    #[arg(long)]
    fov_x: Option<f64>,
    /// Along-track field of view, degrees [default: 2]
    #[arg(long)]
    fov_y: Option<f64>,
    /// Ground-track samples, one per second, at most 86400 [default: 10]
    #[arg(long)]
    track_seconds: Option<usize>,
    /// Pretty-print the GeoJSON
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn run_config(&self) -> Result<RunConfig> {
        let defaults = RunConfig::default();

        let tle = match (&self.tle_file, &self.tle) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            (None, Some(text)) => text.clone(),
            (None, None) => defaults.tle,
        };

        let fov = FieldOfView::new(
            self.fov_x.unwrap_or(defaults.fov.x()),
            self.fov_y.unwrap_or(defaults.fov.y()),
        )?;

        Ok(RunConfig {
            tle,
            off_nadir: OffNadir::new(
                self.off_nadir_y.unwrap_or(defaults.off_nadir.along),
                self.off_nadir_x.unwrap_or(defaults.off_nadir.across),
            ),
            fov,
            track_seconds: self.track_seconds.unwrap_or(defaults.track_seconds),
            pretty: self.pretty,
        })
    }
}

fn run(args: Args) -> Result<()> {
    let t = match &args.t {
        Some(s) => parse_utc(s).with_context(|| format!("invalid --t {:?}", s))?,
        None => Utc::now(),
    };
    let config = args.run_config()?;

    let sat = Satellite::from_tle(&config.tle).context("failed to load element set")?;
    info!(
        name = sat.name().unwrap_or("-"),
        t = %t.to_rfc3339(),
        along = config.off_nadir.along,
        across = config.off_nadir.across,
        "computing footprint"
    );

    let scene = FootprintScene {
        t,
        position: sat.position(&t)?,
        ground_track: sat.ground_track(&t, config.track_seconds)?,
        footprint: sat
            .footprint(&t, config.off_nadir, config.fov)
            .context("failed to compute footprint")?,
        off_nadir: config.off_nadir,
        fov: config.fov,
    };

    let json = FeatureCollection::from(&scene)
        .to_json(config.pretty)
        .context("failed to serialize GeoJSON")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    // stdout carries the GeoJSON, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Args::parse())
}
