/// Smallest and largest value of the iterator, `None` when empty
pub fn min_max<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Midpoint of an interval
pub fn midpoint(lo: f64, hi: f64) -> f64 {
    (lo + hi) / 2.0
}
