//! Sample statistics over historical return series

use crate::error::{AdvisorError, Result};
use std::collections::BTreeMap;

/// Minimum observations per series for a sample covariance
pub const MIN_OBSERVATIONS: usize = 2;

/// Mean returns and sample covariance estimated from per-asset historical
/// return arrays. Asset order is the sorted key order of the input map.
#[derive(Debug, Clone)]
pub struct ReturnStatistics {
    assets: Vec<String>,
    mean_returns: Vec<f64>,
    covariance: Vec<Vec<f64>>,
}

impl ReturnStatistics {
    /// Estimate statistics from historical returns.
    ///
    /// Every series must have the same length and at least
    /// [`MIN_OBSERVATIONS`] entries.
    pub fn from_history(history: &BTreeMap<String, Vec<f64>>) -> Result<Self> {
        if history.is_empty() {
            return Err(AdvisorError::InvalidInput(
                "historical returns map is empty".to_string(),
            ));
        }

        let n_periods = history.values().next().map(Vec::len).unwrap_or(0);

        for (asset, series) in history {
            if series.len() < MIN_OBSERVATIONS {
                return Err(AdvisorError::InsufficientHistory {
                    asset: asset.clone(),
                    required: MIN_OBSERVATIONS,
                    actual: series.len(),
                });
            }
            if series.len() != n_periods {
                return Err(AdvisorError::DimensionMismatch {
                    expected: n_periods,
                    actual: series.len(),
                });
            }
            if series.iter().any(|r| !r.is_finite()) {
                return Err(AdvisorError::InvalidInput(format!(
                    "non-finite return in series for {}",
                    asset
                )));
            }
        }

        let assets: Vec<String> = history.keys().cloned().collect();
        let n_assets = assets.len();

        let mean_returns: Vec<f64> = assets
            .iter()
            .map(|a| history[a].iter().sum::<f64>() / n_periods as f64)
            .collect();

        // Sample covariance with the n-1 divisor
        let mut covariance = vec![vec![0.0; n_assets]; n_assets];
        for i in 0..n_assets {
            for j in 0..n_assets {
                let series_i = &history[&assets[i]];
                let series_j = &history[&assets[j]];
                let mut acc = 0.0;
                for t in 0..n_periods {
                    acc += (series_i[t] - mean_returns[i]) * (series_j[t] - mean_returns[j]);
                }
                covariance[i][j] = acc / (n_periods - 1) as f64;
            }
        }

        Ok(Self {
            assets,
            mean_returns,
            covariance,
        })
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    pub fn mean_returns(&self) -> &[f64] {
        &self.mean_returns
    }

    pub fn covariance(&self) -> &[Vec<f64>] {
        &self.covariance
    }

    /// Sum of the covariance diagonal. Zero means every series was flat.
    pub fn total_variance(&self) -> f64 {
        (0..self.assets.len()).map(|i| self.covariance[i][i]).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(pairs: &[(&str, &[f64])]) -> BTreeMap<String, Vec<f64>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_vec()))
            .collect()
    }

    #[test]
    fn test_mean_and_variance() {
        let stats =
            ReturnStatistics::from_history(&history(&[("a", &[0.01, 0.03])])).unwrap();
        assert!((stats.mean_returns()[0] - 0.02).abs() < 1e-12);
        // Sample variance of [0.01, 0.03] = 2e-4
        assert!((stats.covariance()[0][0] - 2e-4).abs() < 1e-12);
    }

    #[test]
    fn test_covariance_symmetric() {
        let stats = ReturnStatistics::from_history(&history(&[
            ("a", &[0.01, -0.02, 0.03, 0.0]),
            ("b", &[0.02, 0.01, -0.01, 0.015]),
        ]))
        .unwrap();
        assert!((stats.covariance()[0][1] - stats.covariance()[1][0]).abs() < 1e-15);
    }

    #[test]
    fn test_short_series_rejected() {
        let err = ReturnStatistics::from_history(&history(&[("a", &[0.01])]))
            .unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::InsufficientHistory { actual: 1, .. }
        ));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let err = ReturnStatistics::from_history(&history(&[
            ("a", &[0.01, 0.02, 0.03]),
            ("b", &[0.01, 0.02]),
        ]))
        .unwrap_err();
        assert!(matches!(err, AdvisorError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_empty_map_rejected() {
        let err = ReturnStatistics::from_history(&BTreeMap::new()).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput(_)));
    }

    #[test]
    fn test_flat_series_has_zero_total_variance() {
        let stats = ReturnStatistics::from_history(&history(&[
            ("a", &[0.01, 0.01, 0.01, 0.01]),
            ("b", &[0.02, 0.02, 0.02, 0.02]),
        ]))
        .unwrap();
        assert_eq!(stats.total_variance(), 0.0);
    }

    #[test]
    fn test_nan_rejected() {
        let err =
            ReturnStatistics::from_history(&history(&[("a", &[0.01, f64::NAN])]))
                .unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput(_)));
    }
}
