mod font;
mod panel;

pub use font::resolve_family;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use plotters::{drawing::DrawingAreaErrorKind, prelude::*};

use crate::{
    config::{Layout, RenderConfig},
    dataset::Dataset,
    range::AxisRanges,
    style::StyleTable,
    Error,
};
use panel::Panel;

pub const COMBINED_FILE_NAME: &str = "combined_datasets.png";

pub(crate) fn draw_error<E>(e: DrawingAreaErrorKind<E>) -> Error
where
    E: std::error::Error + Send + Sync,
{
    Error::Draw(e.to_string())
}

/// One image file and the datasets drawn into it, left to right
#[derive(Debug)]
pub struct FigurePlan<'d> {
    pub path: PathBuf,
    pub datasets: Vec<&'d Dataset>,
}

/// Draws dataset tables into PNG files
pub struct Renderer {
    config: RenderConfig,
    family: String,
}
impl Renderer {
    /// Create a renderer, resolving the label font once
    pub fn new(config: RenderConfig) -> Self {
        let family = resolve_family(&config.font, &panel::label_sample());
        Self { config, family }
    }
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
    pub fn font_family(&self) -> &str {
        &self.family
    }

    /// Files the current layout produces for `datasets`
    pub fn plan<'d>(&self, datasets: &'d [Dataset]) -> Vec<FigurePlan<'d>> {
        plan_figures(&self.config, datasets)
    }

    /// Render every dataset and return the written paths in order
    pub fn render(
        &self,
        datasets: &[Dataset],
        styles: &StyleTable,
    ) -> Result<Vec<PathBuf>, Error> {
        let ranges = AxisRanges::unify(datasets, self.config.padding)?;
        for axis in crate::utils::Axis::ALL {
            let (lo, hi) = ranges.get(axis);
            debug!("{} range [{}, {}]", axis, lo, hi);
        }
        for dataset in datasets {
            if !dataset.is_nested() {
                warn!("regions of {} are not nested", dataset.name());
            }
        }

        fs::create_dir_all(&self.config.output_dir)?;
        let mut written = Vec::new();
        for figure in self.plan(datasets) {
            self.draw_figure(&figure, &ranges, styles)?;
            info!("saved {}", figure.path.display());
            written.push(figure.path);
        }
        Ok(written)
    }

    /// The bitmap is flushed by `present` and released when this returns
    fn draw_figure(
        &self,
        figure: &FigurePlan<'_>,
        ranges: &AxisRanges,
        styles: &StyleTable,
    ) -> Result<(), Error> {
        let size = self.config.figure_pixels(figure.datasets.len());
        let root = BitMapBackend::new(&figure.path, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let areas = root.split_evenly((1, figure.datasets.len().max(1)));
        for (i, (area, dataset)) in areas.iter().zip(&figure.datasets).enumerate() {
            let panel = Panel {
                config: &self.config,
                family: &self.family,
                ranges,
                styles,
                with_legend: i == 0,
            };
            panel.draw(area, dataset)?;
        }

        root.present().map_err(draw_error)?;
        Ok(())
    }
}

pub fn plan_figures<'d>(config: &RenderConfig, datasets: &'d [Dataset]) -> Vec<FigurePlan<'d>> {
    let dir: &Path = &config.output_dir;
    match config.layout {
        Layout::Combined => vec![FigurePlan {
            path: dir.join(COMBINED_FILE_NAME),
            datasets: datasets.iter().collect(),
        }],
        Layout::PerDataset => datasets
            .iter()
            .map(|dataset| FigurePlan {
                path: dir.join(format!("{}.png", dataset.name())),
                datasets: vec![dataset],
            })
            .collect(),
    }
}
