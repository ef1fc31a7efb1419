//! glazed - build a donut and its icing, write both as STL.

use anyhow::{Context, Result};
use clap::Parser;
use glazed::config::DonutConfig;
use glazed::donut::{build_donut, prepare_scene};
use glazed::float_types::Real;
use glazed::io::{StlEncoding, write_stl};
use glazed::scene::Scene;
use glazed::CutAxis;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glazed")]
#[command(about = "Generate a torus donut and its half-space icing as STL")]
#[command(version)]
struct Cli {
    /// Path to a donut.toml config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the STL files are written to
    #[arg(short, long, default_value = "stl")]
    out_dir: PathBuf,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    ascii: bool,

    /// Box edge used as the cut normal (overrides config)
    #[arg(long)]
    axis: Option<CutAxis>,

    /// Minimum distance above the cut plane a vertex needs to stay (overrides config)
    #[arg(long)]
    keep_band: Option<Real>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let config = match &cli.config {
        Some(path) => DonutConfig::read(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DonutConfig::default(),
    }
    .with_overrides(cli.axis, cli.keep_band)?;

    let mut scene: Scene<()> = Scene::startup();
    prepare_scene(&mut scene);
    let donut = build_donut(&mut scene, &config)?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let encoding = if cli.ascii {
        StlEncoding::Ascii
    } else {
        StlEncoding::Binary
    };

    for (object, file) in [(&donut.base, "donut.stl"), (&donut.icing, "icing.stl")] {
        let mesh = &scene
            .get(object)
            .with_context(|| format!("object '{object}' missing after build"))?
            .mesh;
        let path = cli.out_dir.join(file);
        write_stl(mesh, object, &path, encoding)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    tracing::info!(
        kept = donut.kept_vertices,
        removed = donut.removed_vertices,
        out_dir = %cli.out_dir.display(),
        "done"
    );
    Ok(())
}
