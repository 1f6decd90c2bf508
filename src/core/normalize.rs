/// Linear min-max normalization, clamped to [0, 1]
///
/// A degenerate range (min == max) returns the neutral 0.5 rather than
/// dividing by zero.
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Fuzzy set-overlap ratio between two tag sets.
///
/// An element of `a` counts as matched when it case-insensitively
/// substring-matches an element of `b` in either direction. The count is
/// divided by `max(|a|, |b|)`; two empty sets yield 0 by convention.
pub fn fuzzy_overlap(a: &[String], b: &[String]) -> f64 {
    let denom = a.len().max(b.len());
    if denom == 0 {
        return 0.0;
    }

    let matched = a
        .iter()
        .filter(|x| {
            let x = x.to_lowercase();
            b.iter().any(|y| {
                let y = y.to_lowercase();
                y.contains(&x) || x.contains(&y)
            })
        })
        .count();

    matched as f64 / denom as f64
}

/// Exact set-overlap ratio between two tag sets.
///
/// Counts elements of `a` that appear verbatim in `b`, divided by
/// `max(|a|, |b|)`; two empty sets yield 0.
pub fn exact_overlap(a: &[String], b: &[String]) -> f64 {
    let denom = a.len().max(b.len());
    if denom == 0 {
        return 0.0;
    }

    let matched = a.iter().filter(|x| b.contains(x)).count();
    matched as f64 / denom as f64
}
