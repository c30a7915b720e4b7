//! Goodness-of-fit metrics between observed and predicted levels.
//!
//! Inputs are index aligned; aligning by timestamp is the caller's job
//! (see [`crate::comparison::align`]).

/// Root Mean Square Error. Range: [0, inf), 0 = perfect.
///
/// Returns 0 when either slice is empty or the lengths differ.
pub fn rmse(observed: &[f64], predicted: &[f64]) -> f64 {
    if observed.is_empty() || observed.len() != predicted.len() {
        return 0.0;
    }
    let n = observed.len() as f64;
    let mse: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| (p - o).powi(2))
        .sum::<f64>()
        / n;
    mse.sqrt()
}

#[cfg(test)]
mod tests {
    use super::rmse;

    #[test]
    fn test_rmse_identical() {
        let series = [0.3, -1.2, 2.5, 0.0];
        assert_eq!(rmse(&series, &series), 0.0);
    }

    #[test]
    fn test_rmse_known_value() {
        let observed = [1.0, 2.0, 3.0, 4.0];
        let predicted = [2.0, 2.0, 1.0, 4.0];
        // squared errors 1, 0, 4, 0 -> mean 1.25
        assert!((rmse(&observed, &predicted) - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rmse_degenerate() {
        assert_eq!(rmse(&[], &[]), 0.0);
        assert_eq!(rmse(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(rmse(&[1.0], &[]), 0.0);
    }
}
