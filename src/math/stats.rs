//! Correlation helpers for sampled series.
//!
//! Both helpers accept series of different lengths. Samples missing from the
//! shorter series simply drop out of every sum they would appear in.

use num_traits::Float;

use crate::error::{Error, Result};

/// Cross-correlation of `f` against `g` for every non-negative lag.
///
/// Entry `n` is `sum_k f[k] * g[k + n]` over the indices present in both
/// series; the result has `max(f.len(), g.len())` entries.
///
/// # Examples
///
/// ```
/// use subset_blocks::math::stats::cross_correlation;
///
/// let r = cross_correlation(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
/// assert_eq!(r, vec![3.5, 2.0, 0.5]);
/// ```
pub fn cross_correlation<T: Float>(f: &[T], g: &[T]) -> Vec<T> {
    let max_size = f.len().max(g.len());

    (0..max_size)
        .map(|lag| {
            f.iter()
                .zip(g.iter().skip(lag))
                .fold(T::zero(), |sum, (&a, &b)| sum + a * b)
        })
        .collect()
}

/// Pearson correlation coefficient of `f` and `g`.
///
/// The sample count is `max(f.len(), g.len())`. Series with no variance give
/// `NaN`.
///
/// # Errors
///
/// [`Error::InvalidInput`] when both series are empty.
pub fn correlation<T: Float>(f: &[T], g: &[T]) -> Result<T> {
    let max_size = f.len().max(g.len());
    if max_size == 0 {
        return Err(Error::invalid_input("correlation of two empty series"));
    }
    let n = T::from(max_size)
        .ok_or_else(|| Error::invalid_input("sample count not representable"))?;

    let sum = |xs: &[T]| xs.iter().fold(T::zero(), |acc, &x| acc + x);
    let sum_sq = |xs: &[T]| xs.iter().fold(T::zero(), |acc, &x| acc + x * x);

    let paired = f
        .iter()
        .zip(g)
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
    let (f_sum, g_sum) = (sum(f), sum(g));

    let numerator = n * paired - f_sum * g_sum;
    let denominator =
        ((n * sum_sq(f) - f_sum * f_sum) * (n * sum_sq(g) - g_sum * g_sum)).sqrt();

    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_correlation_lags() {
        let r = cross_correlation(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]);
        assert_eq!(r, vec![6.0, 3.0, 1.0]);
    }

    #[test]
    fn test_cross_correlation_uneven_lengths() {
        let r = cross_correlation(&[2.0_f32], &[1.0, 3.0, 5.0]);
        assert_eq!(r, vec![2.0, 6.0, 10.0]);

        let r = cross_correlation(&[1.0, 1.0, 1.0], &[4.0]);
        assert_eq!(r, vec![4.0, 0.0, 0.0]);

        assert!(cross_correlation::<f64>(&[], &[]).is_empty());
    }

    #[test]
    fn test_perfect_correlation() {
        let f = [1.0, 2.0, 3.0, 4.0];
        let g = [2.0, 4.0, 6.0, 8.0];
        assert_relative_eq!(correlation(&f, &g).unwrap(), 1.0, epsilon = 1e-12);

        let inverted = [8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(correlation(&f, &inverted).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_partial_correlation() {
        let f = [1.0, 2.0, 3.0];
        let g = [1.0, 3.0, 2.0];
        // (3*13 - 36) / sqrt((42 - 36) * (42 - 36)) = 0.5
        assert_relative_eq!(correlation(&f, &g).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_is_nan() {
        assert!(correlation(&[1.0, 1.0], &[1.0, 2.0]).unwrap().is_nan());
    }

    #[test]
    fn test_empty_series_rejected() {
        assert!(matches!(
            correlation::<f64>(&[], &[]),
            Err(Error::InvalidInput(_))
        ));
    }
}
