use plotters::{
    coord::{ranged3d::Cartesian3d, types::RangedCoordf64, Shift},
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::draw_error;
use crate::{
    config::RenderConfig,
    dataset::Dataset,
    geometry::{Annotation, BoxGeometry, EdgeStyle},
    range::AxisRanges,
    region::{RefinementRegion, RegionLabel},
    style::StyleTable,
    utils::Axis,
    Error,
};

type Chart<'a, DB> =
    ChartContext<'a, DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>;

/// plotters draws its second coordinate vertically, display slot 3 is vertical
fn to_plot(display: [f64; 3]) -> (f64, f64, f64) {
    (display[0], display[2], display[1])
}

pub(crate) fn axis_title(axis: Axis, vertical: bool) -> String {
    if vertical {
        format!("{} (m) (vertical)", axis)
    } else {
        format!("{} (m)", axis)
    }
}

/// Every character class the panels draw: titles, axis titles, legend and bounds
pub(crate) fn label_sample() -> String {
    let mut sample = Panel::title(&Dataset::new("06_LambdaByLIs1.0_lowReso_smooth_moreDetail"));
    for axis in Axis::ALL {
        sample.push(' ');
        sample.push_str(&axis_title(axis, true));
    }
    for label in RegionLabel::DRAW_ORDER {
        sample.push(' ');
        sample.push_str(label.name());
    }
    sample.push_str(" X: [-0.123456789, 0.5]");
    sample
}

/// Everything one dataset panel needs besides its drawing area
pub(crate) struct Panel<'a> {
    pub config: &'a RenderConfig,
    pub family: &'a str,
    pub ranges: &'a AxisRanges,
    pub styles: &'a StyleTable,
    pub with_legend: bool,
}
impl<'a> Panel<'a> {
    fn font(&self, pt: f64) -> FontDesc<'a> {
        (self.family, self.config.pt_to_px(pt) as f64).into_font()
    }

    pub fn title(dataset: &Dataset) -> String {
        format!("{} region layout", dataset.name())
    }

    pub fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        dataset: &Dataset,
    ) -> Result<(), Error> {
        let mapping = self.config.orientation;
        let [r1, r2, r3] = self.ranges.display(mapping);

        let mut chart = ChartBuilder::on(area)
            .caption(Self::title(dataset), self.font(self.config.font.title_size))
            .margin(self.config.pt_to_px(10.0))
            .build_cartesian_3d(r1, r3, r2)
            .map_err(draw_error)?;

        let (elevation, azimuth) = (self.config.elevation, self.config.azimuth);
        chart.with_projection(|mut pb| {
            pb.pitch = elevation.to_radians();
            pb.yaw = azimuth.to_radians();
            pb.scale = 0.8;
            pb.into_matrix()
        });

        let grid = RGBColor(128, 128, 128);
        chart
            .configure_axes()
            .light_grid_style(grid.mix(0.2))
            .bold_grid_style(grid.mix(0.4))
            .max_light_lines(4)
            .label_style(self.font(self.config.font.tick_size))
            .draw()
            .map_err(draw_error)?;

        self.draw_axis_titles(&mut chart)?;

        for region in dataset.draw_sequence() {
            let alpha = self.styles.opacity(dataset.name(), region.label())?;
            self.draw_region(&mut chart, region, alpha)?;
        }

        if self.with_legend {
            self.draw_legend(&mut chart)?;
        }
        Ok(())
    }

    fn draw_region<DB: DrawingBackend>(
        &self,
        chart: &mut Chart<'_, DB>,
        region: &RefinementRegion,
        alpha: f64,
    ) -> Result<(), Error> {
        let mapping = self.config.orientation;
        let label = region.label();
        let geometry = BoxGeometry::build(region.rect(), mapping);
        let fill = self.styles.color(label).mix(alpha).filled();
        let edge = EdgeStyle::for_label(label);
        let stroke = RGBColor(edge.gray, edge.gray, edge.gray)
            .stroke_width(self.config.pt_to_px(edge.width));

        let faces = geometry.faces();
        chart
            .draw_series(faces.iter().map(|face| {
                let corners: Vec<_> = face.iter().map(|&v| to_plot(v)).collect();
                Polygon::new(corners, fill)
            }))
            .map_err(draw_error)?;
        chart
            .draw_series(faces.iter().map(|face| {
                let mut outline: Vec<_> = face.iter().map(|&v| to_plot(v)).collect();
                outline.push(to_plot(face[0]));
                PathElement::new(outline, stroke)
            }))
            .map_err(draw_error)?;

        self.draw_annotation(chart, &Annotation::for_region(label, region.rect(), mapping))
    }

    fn draw_annotation<DB: DrawingBackend>(
        &self,
        chart: &mut Chart<'_, DB>,
        annotation: &Annotation,
    ) -> Result<(), Error> {
        let font = self.font(annotation.font_size);
        let line_height = (self.config.pt_to_px(annotation.font_size) as f64 * 1.25) as i32;
        let block_height = line_height * annotation.lines.len() as i32;
        let block_width = annotation
            .lines
            .iter()
            .map(|line| match font.box_size(line) {
                Ok((w, _)) => w as i32,
                Err(_) => (line.chars().count() as f64 * line_height as f64 * 0.5) as i32,
            })
            .max()
            .unwrap_or(0);
        let pad = self.config.pt_to_px(2.0) as i32;
        let anchor = to_plot(annotation.anchor);

        chart
            .draw_series(std::iter::once(
                EmptyElement::at(anchor)
                    + Rectangle::new(
                        [
                            (-block_width / 2 - pad, -block_height - pad),
                            (block_width / 2 + pad, pad),
                        ],
                        WHITE.mix(0.6).filled(),
                    ),
            ))
            .map_err(draw_error)?;

        let style = font
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        chart
            .draw_series(annotation.lines.iter().enumerate().map(|(i, line)| {
                let dy = -block_height + i as i32 * line_height;
                EmptyElement::at(anchor) + Text::new(line.clone(), (0, dy), style.clone())
            }))
            .map_err(draw_error)?;
        Ok(())
    }

    fn draw_axis_titles<DB: DrawingBackend>(
        &self,
        chart: &mut Chart<'_, DB>,
    ) -> Result<(), Error> {
        let mapping = self.config.orientation;
        let [r1, r2, r3] = self.ranges.display(mapping);
        let mid = |r: &std::ops::Range<f64>| (r.start + r.end) / 2.0;
        let titles = mapping
            .display_axes()
            .map(|axis| axis_title(axis, axis == mapping.vertical()));
        let positions = [
            [mid(&r1), r2.start, r3.start],
            [r1.end, mid(&r2), r3.start],
            [r1.start, r2.start, mid(&r3)],
        ];

        let offset = self.config.pt_to_px(self.config.font.axis_label_size) as i32 * 2;
        let style = self
            .font(self.config.font.axis_label_size)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart
            .draw_series(titles.into_iter().zip(positions).enumerate().map(
                |(slot, (title, position))| {
                    let shift = if slot == 2 { (-offset, 0) } else { (0, offset) };
                    EmptyElement::at(to_plot(position)) + Text::new(title, shift, style.clone())
                },
            ))
            .map_err(draw_error)?;
        Ok(())
    }

    /// One swatch per refinement level, present in the dataset or not
    fn draw_legend<'b, DB: DrawingBackend + 'b>(
        &self,
        chart: &mut Chart<'b, DB>,
    ) -> Result<(), Error> {
        let size = self.config.pt_to_px(self.config.font.legend_size) as i32;
        for label in RegionLabel::DRAW_ORDER {
            let color = self.styles.color(label);
            chart
                .draw_series(std::iter::empty::<Polygon<(f64, f64, f64)>>())
                .map_err(draw_error)?
                .label(label.name())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - size / 2), (x + size, y + size / 2)], color.filled())
                });
        }
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(self.font(self.config.font.legend_size))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_error)?;
        Ok(())
    }
}
