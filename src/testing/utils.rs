use single_utilities::traits::FloatOps;

/// Arithmetic mean of `values`, accumulated in `f64`.
///
/// Returns `None` for an empty slice or when a value cannot be represented as `f64`.
pub fn sample_mean<T>(values: &[T]) -> Option<f64>
where
    T: FloatOps,
{
    if values.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    for &val in values {
        sum += val.to_f64()?;
    }
    Some(sum / values.len() as f64)
}

/// Bessel-corrected sample standard deviation (divisor n - 1) around a precomputed mean.
///
/// Two passes over the data are used rather than the sum-of-squares shortcut, which loses
/// precision when the mean is large relative to the spread.
pub fn sample_std_dev<T>(values: &[T], mean: f64) -> Option<f64>
where
    T: FloatOps,
{
    if values.len() < 2 {
        return None;
    }

    let mut sum_sq_dev = 0.0;
    for &val in values {
        let dev = val.to_f64()? - mean;
        sum_sq_dev += dev * dev;
    }
    Some((sum_sq_dev / (values.len() - 1) as f64).sqrt())
}

/// True when every observation equals the first one.
///
/// A constant sample has no spread, but the two-pass standard deviation can still come out as a
/// tiny positive number when the mean itself is not exactly representable (e.g. `0.1, 0.1, 0.1`).
pub fn is_constant<T>(values: &[T]) -> bool
where
    T: FloatOps,
{
    match values.first() {
        Some(&first) => values.iter().all(|&v| v == first),
        None => true,
    }
}
