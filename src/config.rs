//! Render settings shared by every figure.

use std::path::PathBuf;

use crate::{range::AXIS_PADDING, utils::AxisMapping};

/// How datasets are distributed over image files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// All datasets side by side in `combined_datasets.png`
    #[default]
    Combined,
    /// One `<dataset_name>.png` per dataset
    PerDataset,
}

/// Text settings, sizes in points
#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    pub preferred_family: String,
    pub fallback_family: String,
    pub title_size: f64,
    pub axis_label_size: f64,
    pub legend_size: f64,
    pub tick_size: f64,
}
impl Default for FontConfig {
    fn default() -> Self {
        Self {
            preferred_family: "Noto Sans JP".to_string(),
            fallback_family: "sans-serif".to_string(),
            title_size: 18.0,
            axis_label_size: 14.0,
            legend_size: 12.0,
            tick_size: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub layout: Layout,
    pub orientation: AxisMapping,
    /// Height of one figure, inches
    pub figure_height: f64,
    /// Width taken by each dataset panel, inches
    pub panel_width: f64,
    pub dpi: u32,
    /// View elevation, degrees
    pub elevation: f64,
    /// View azimuth, degrees
    pub azimuth: f64,
    pub padding: f64,
    pub font: FontConfig,
    pub output_dir: PathBuf,
}
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Combined,
            orientation: AxisMapping::SwapYZ,
            figure_height: 12.0,
            panel_width: 14.0,
            dpi: 300,
            elevation: 20.0,
            azimuth: 30.0,
            padding: AXIS_PADDING,
            font: FontConfig::default(),
            output_dir: PathBuf::from("."),
        }
    }
}
impl RenderConfig {
    /// Pixels per typographic point
    pub fn px_per_pt(&self) -> f64 {
        self.dpi as f64 / 72.0
    }
    /// Convert a size in points to whole pixels, never below one
    pub fn pt_to_px(&self, pt: f64) -> u32 {
        (pt * self.px_per_pt()).round().max(1.0) as u32
    }
    /// Pixel size of a figure holding `panels` dataset panels side by side
    pub fn figure_pixels(&self, panels: usize) -> (u32, u32) {
        let dpi = self.dpi as f64;
        let width = self.panel_width * panels.max(1) as f64 * dpi;
        let height = self.figure_height * dpi;
        (width.round() as u32, height.round() as u32)
    }
}
