use std::path::PathBuf;

use refinebox::{
    dataset::builtin, range::AXIS_PADDING, Axis, AxisMapping, AxisRanges, BoxGeometry, Layout,
    RegionLabel, RenderConfig, Renderer, StyleTable,
};
use tempfile::TempDir;

fn product(xs: [f64; 2], ys: [f64; 2], zs: [f64; 2]) -> Vec<[f64; 3]> {
    let mut out = Vec::new();
    for x in xs {
        for y in ys {
            for z in zs {
                out.push([x, y, z]);
            }
        }
    }
    out.sort_by(|a, b| a.partial_cmp(b).unwrap());
    out
}

#[test]
fn smooth_dataset_outer_box_and_shared_x_range() {
    let datasets = builtin::datasets().unwrap();
    let smooth = datasets
        .iter()
        .find(|d| d.name() == "05_LambdaByLIs1.0_lowReso_smooth")
        .unwrap();
    let aaa = smooth.get(RegionLabel::Aaa).unwrap();

    let mut vertices = BoxGeometry::build(aaa.rect(), AxisMapping::Identity)
        .vertices()
        .to_vec();
    vertices.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(vertices, product([-2.5, 2.0], [-1.5, 1.0], [-1.3, 1.3]));

    let mut swapped = BoxGeometry::build(aaa.rect(), AxisMapping::SwapYZ)
        .vertices()
        .to_vec();
    swapped.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(swapped, product([-2.5, 2.0], [-1.3, 1.3], [-1.5, 1.0]));

    let ranges = AxisRanges::unify(&datasets, AXIS_PADDING).unwrap();
    assert_eq!(ranges.get(Axis::X), (-3.5, 3.0));
}

#[test]
fn unified_ranges_are_padded_extremes_and_repeatable() {
    let datasets = builtin::datasets().unwrap();
    let first = AxisRanges::unify(&datasets, AXIS_PADDING).unwrap();
    for axis in Axis::ALL {
        let values: Vec<f64> = datasets
            .iter()
            .flat_map(|d| d.regions())
            .flat_map(|r| {
                let (lo, hi) = r.rect().interval(axis);
                [lo, hi]
            })
            .collect();
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(first.get(axis), (lo - 1.0, hi + 1.0));
    }
    assert_eq!(first, AxisRanges::unify(&datasets, AXIS_PADDING).unwrap());
}

#[test]
fn builtin_tables_are_consistent() {
    let datasets = builtin::datasets().unwrap();
    let styles = StyleTable::builtin(&datasets).unwrap();
    for dataset in &datasets {
        assert!(dataset.is_nested(), "{} is not nested", dataset.name());
        for region in dataset.draw_sequence() {
            let alpha = styles.opacity(dataset.name(), region.label()).unwrap();
            assert!((0.0..=1.0).contains(&alpha));
        }
    }
}

#[test]
fn per_dataset_plan_targets_output_dir() {
    let dir = TempDir::new().unwrap();
    let datasets = builtin::datasets().unwrap();
    let renderer = Renderer::new(RenderConfig {
        layout: Layout::PerDataset,
        output_dir: dir.path().to_path_buf(),
        ..RenderConfig::default()
    });
    let plan = renderer.plan(&datasets);
    assert_eq!(plan.len(), datasets.len());
    for (figure, dataset) in plan.iter().zip(&datasets) {
        assert_eq!(figure.path.parent(), Some(dir.path()));
        assert_eq!(
            figure.path.file_name().unwrap().to_str().unwrap(),
            format!("{}.png", dataset.name())
        );
    }
    assert!(!renderer.font_family().is_empty());
}

fn render_into(dir: &TempDir, layout: Layout) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let datasets = builtin::datasets().unwrap();
    let styles = StyleTable::builtin(&datasets).unwrap();
    let renderer = Renderer::new(RenderConfig {
        layout,
        dpi: 30,
        output_dir: dir.path().to_path_buf(),
        ..RenderConfig::default()
    });
    let planned = renderer.plan(&datasets).into_iter().map(|f| f.path).collect();
    let written = renderer.render(&datasets, &styles).unwrap();
    (planned, written)
}

#[test]
fn combined_layout_writes_one_image() {
    let dir = TempDir::new().unwrap();
    let (planned, written) = render_into(&dir, Layout::Combined);
    assert_eq!(written, planned);
    assert_eq!(written, vec![dir.path().join("combined_datasets.png")]);
    assert!(std::fs::metadata(&written[0]).unwrap().len() > 0);
}

#[test]
fn per_dataset_layout_writes_one_image_per_dataset() {
    let dir = TempDir::new().unwrap();
    let (planned, written) = render_into(&dir, Layout::PerDataset);
    assert_eq!(written, planned);
    assert_eq!(
        written,
        vec![
            dir.path().join("05_LambdaByLIs1.0_lowReso_smooth.png"),
            dir.path().join("06_LambdaByLIs1.0_lowReso_smooth_moreDetail.png"),
        ]
    );
    for path in &written {
        assert!(std::fs::metadata(path).unwrap().len() > 0, "{} is empty", path.display());
    }
}
