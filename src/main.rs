use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use refinebox::{dataset::builtin, AxisMapping, Layout, RenderConfig, Renderer, StyleTable};

/// Render the built-in refinement regions as 3D box plots
#[derive(Parser)]
#[command(name = "refinebox", version)]
struct Cli {
    /// One combined image or one image per dataset
    #[arg(long, value_enum, default_value = "combined")]
    layout: LayoutArg,

    /// Which physical axis is drawn vertically
    #[arg(long, value_enum, default_value = "y-up")]
    orientation: OrientationArg,

    /// Output resolution, dots per inch
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// Directory receiving the PNG files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Combined,
    PerDataset,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    /// Physical Y vertical
    YUp,
    /// Physical Z vertical
    ZUp,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = RenderConfig {
        layout: match cli.layout {
            LayoutArg::Combined => Layout::Combined,
            LayoutArg::PerDataset => Layout::PerDataset,
        },
        orientation: match cli.orientation {
            OrientationArg::YUp => AxisMapping::SwapYZ,
            OrientationArg::ZUp => AxisMapping::Identity,
        },
        dpi: cli.dpi,
        output_dir: cli.output_dir,
        ..RenderConfig::default()
    };

    let datasets = builtin::datasets().context("invalid built-in dataset table")?;
    let styles = StyleTable::builtin(&datasets).context("invalid built-in style table")?;
    let renderer = Renderer::new(config);
    let written = renderer
        .render(&datasets, &styles)
        .context("failed to render region plots")?;

    info!("finished writing {} image(s)", written.len());
    Ok(())
}
