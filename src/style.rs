use std::collections::HashMap;

use plotters::style::RGBColor;

use crate::{
    dataset::{builtin, Dataset},
    region::RegionLabel,
    Error,
};

/// Fill color of a refinement level
pub fn region_color(label: RegionLabel) -> RGBColor {
    match label {
        RegionLabel::Aaa => RGBColor(0x1f, 0x77, 0xb4),
        RegionLabel::Bbb => RGBColor(0xff, 0x7f, 0x0e),
        RegionLabel::Ccc => RGBColor(0xd6, 0x27, 0x28),
    }
}

/// Face opacity for each refinement level of one dataset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opacity([f64; 3]);
impl Opacity {
    pub fn new(aaa: f64, bbb: f64, ccc: f64) -> Self {
        Self([aaa, bbb, ccc])
    }
    pub fn get(&self, label: RegionLabel) -> f64 {
        self.0[label.index()]
    }
}

/// Render-time presentation attributes, checked against the datasets they style
#[derive(Clone, Debug)]
pub struct StyleTable {
    opacities: HashMap<String, Opacity>,
}
impl StyleTable {
    pub fn new<I, S>(datasets: &[Dataset], entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, Opacity)>,
        S: Into<String>,
    {
        let opacities: HashMap<String, Opacity> = entries
            .into_iter()
            .map(|(name, opacity)| (name.into(), opacity))
            .collect();

        for (name, opacity) in &opacities {
            for label in RegionLabel::DRAW_ORDER {
                let alpha = opacity.get(label);
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(Error::InvalidOpacity {
                        dataset: name.clone(),
                        label,
                        alpha,
                    });
                }
            }
        }
        if let Some(missing) = datasets
            .iter()
            .find(|d| !opacities.contains_key(d.name()))
        {
            return Err(Error::MissingStyle(missing.name().to_string()));
        }

        Ok(Self { opacities })
    }

    /// Opacities used for the compiled-in datasets
    pub fn builtin(datasets: &[Dataset]) -> Result<Self, Error> {
        Self::new(
            datasets,
            [
                (builtin::LOW_RESO_SMOOTH, Opacity::new(0.4, 0.6, 0.8)),
                (
                    builtin::LOW_RESO_SMOOTH_MORE_DETAIL,
                    Opacity::new(0.3, 0.5, 0.7),
                ),
            ],
        )
    }

    pub fn color(&self, label: RegionLabel) -> RGBColor {
        region_color(label)
    }
    pub fn opacity(&self, dataset: &str, label: RegionLabel) -> Result<f64, Error> {
        self.opacities
            .get(dataset)
            .map(|o| o.get(label))
            .ok_or_else(|| Error::MissingStyle(dataset.to_string()))
    }
}
