//! Toy mean-variance portfolio optimization
//!
//! Searches a fixed number of random weight vectors for the best Sharpe
//! ratio, subject to per-asset weight bounds and weights summing to 1.
//! This is a randomized-search heuristic, not a quadratic program: results
//! are approximately optimal and depend on the random source, which is
//! injectable so tests can seed it.
//!
//! ```rust,ignore
//! use baobab_advisor::optimizer::{MonteCarloOptimizer, MonteCarloConfig, ReturnStatistics};
//!
//! let stats = ReturnStatistics::from_history(&history)?;
//! let optimizer = MonteCarloOptimizer::new(stats, MonteCarloConfig::default())?;
//! let portfolio = optimizer.optimize_seeded(42)?;
//! ```

mod stats;

pub use stats::{ReturnStatistics, MIN_OBSERVATIONS};

use crate::error::{AdvisorError, Result};
use crate::types::OptimizedPortfolio;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Variances below this are treated as zero
const VARIANCE_EPS: f64 = 1e-12;

/// Per-asset weight bounds applied to every asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for WeightBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl WeightBounds {
    /// Check the bounds admit a weight vector summing to 1 over `n` assets
    fn validate(&self, n_assets: usize) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AdvisorError::InvalidBounds(
                "bounds must be finite".to_string(),
            ));
        }
        if self.min < 0.0 || self.max > 1.0 || self.min > self.max {
            return Err(AdvisorError::InvalidBounds(format!(
                "need 0 <= min <= max <= 1, got [{}, {}]",
                self.min, self.max
            )));
        }
        let n = n_assets as f64;
        if self.min * n > 1.0 || self.max * n < 1.0 {
            return Err(AdvisorError::InvalidBounds(format!(
                "no feasible allocation over {} assets with bounds [{}, {}]",
                n_assets, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Optimizer settings
#[derive(Debug, Clone)]
pub struct MonteCarloConfig {
    /// Random weight vectors to evaluate
    pub trials: u32,
    /// Annualized risk-free rate used in the Sharpe ratio
    pub risk_free_rate: f64,
    pub bounds: WeightBounds,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            risk_free_rate: 0.03,
            bounds: WeightBounds::default(),
        }
    }
}

/// Random-search portfolio optimizer over estimated return statistics
#[derive(Debug)]
pub struct MonteCarloOptimizer {
    stats: ReturnStatistics,
    expected_returns: Vec<f64>,
    config: MonteCarloConfig,
}

impl MonteCarloOptimizer {
    /// Create an optimizer. Expected returns default to the historical
    /// sample means; override with [`with_expected_returns`].
    ///
    /// [`with_expected_returns`]: MonteCarloOptimizer::with_expected_returns
    pub fn new(stats: ReturnStatistics, config: MonteCarloConfig) -> Result<Self> {
        config.bounds.validate(stats.assets().len())?;
        if config.trials == 0 {
            return Err(AdvisorError::InvalidInput(
                "trials must be at least 1".to_string(),
            ));
        }
        let expected_returns = stats.mean_returns().to_vec();
        Ok(Self {
            stats,
            expected_returns,
            config,
        })
    }

    /// Replace the historical means with caller-supplied expected-return
    /// estimates. The map must cover every asset in the statistics.
    pub fn with_expected_returns(
        mut self,
        expected: &BTreeMap<String, f64>,
    ) -> Result<Self> {
        let mut returns = Vec::with_capacity(self.stats.assets().len());
        for asset in self.stats.assets() {
            let r = expected
                .get(asset)
                .ok_or_else(|| AdvisorError::UnknownAsset(asset.clone()))?;
            if !r.is_finite() {
                return Err(AdvisorError::InvalidInput(format!(
                    "non-finite expected return for {}",
                    asset
                )));
            }
            returns.push(*r);
        }
        if expected.len() != self.stats.assets().len() {
            return Err(AdvisorError::DimensionMismatch {
                expected: self.stats.assets().len(),
                actual: expected.len(),
            });
        }
        self.expected_returns = returns;
        Ok(self)
    }

    /// Optimize with an OS-seeded random source.
    pub fn optimize(&self) -> Result<OptimizedPortfolio> {
        self.optimize_with_rng(&mut StdRng::from_os_rng())
    }

    /// Optimize with a fixed seed. Same seed, same inputs, same result.
    pub fn optimize_seeded(&self, seed: u64) -> Result<OptimizedPortfolio> {
        self.optimize_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Optimize with a caller-supplied random source.
    pub fn optimize_with_rng<R: Rng>(&self, rng: &mut R) -> Result<OptimizedPortfolio> {
        let n = self.stats.assets().len();

        // One asset admits exactly one allocation; no search needed
        if n == 1 {
            let mut weights = BTreeMap::new();
            weights.insert(self.stats.assets()[0].clone(), 1.0);
            return Ok(self.build_result(weights, 0, false));
        }

        match self.sharpe_search(rng) {
            Ok(result) => Ok(result),
            Err(AdvisorError::DegenerateCovariance) => {
                tracing::warn!(
                    assets = n,
                    "degenerate covariance, falling back to equal weights"
                );
                Ok(self.equal_weight_result())
            }
            Err(e) => Err(e),
        }
    }

    /// Random search for the maximum Sharpe ratio. Fails with
    /// `DegenerateCovariance` when no trial produced positive volatility.
    fn sharpe_search<R: Rng>(&self, rng: &mut R) -> Result<OptimizedPortfolio> {
        if self.stats.total_variance() <= VARIANCE_EPS {
            return Err(AdvisorError::DegenerateCovariance);
        }

        let mut best: Option<(f64, Vec<f64>)> = None;
        let mut evaluated = 0u32;

        for _ in 0..self.config.trials {
            let weights = self.random_weights(rng);
            let volatility = self.portfolio_volatility(&weights);
            if volatility <= VARIANCE_EPS {
                continue;
            }
            evaluated += 1;

            let ret = self.portfolio_return(&weights);
            let sharpe = (ret - self.config.risk_free_rate) / volatility;

            match &best {
                Some((best_sharpe, _)) if sharpe <= *best_sharpe => {}
                _ => best = Some((sharpe, weights)),
            }
        }

        let (_, weights) = best.ok_or(AdvisorError::DegenerateCovariance)?;

        let named: BTreeMap<String, f64> = self
            .stats
            .assets()
            .iter()
            .cloned()
            .zip(weights)
            .collect();

        Ok(self.build_result(named, evaluated, false))
    }

    /// Draw a weight vector within bounds, normalized to sum to 1.
    fn random_weights<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        let n = self.stats.assets().len();
        let bounds = self.config.bounds;

        let mut weights: Vec<f64> = (0..n)
            .map(|_| rng.random_range(bounds.min..=bounds.max))
            .collect();

        // Normalize, then re-clamp to bounds; two passes keep violations
        // within rounding of the feasible region
        for _ in 0..2 {
            let sum: f64 = weights.iter().sum();
            if sum <= 0.0 {
                let eq = 1.0 / n as f64;
                weights.iter_mut().for_each(|w| *w = eq);
                break;
            }
            weights.iter_mut().for_each(|w| *w /= sum);
            weights
                .iter_mut()
                .for_each(|w| *w = w.clamp(bounds.min, bounds.max));
        }

        let sum: f64 = weights.iter().sum();
        if sum > 0.0 {
            weights.iter_mut().for_each(|w| *w /= sum);
        }
        weights
    }

    fn equal_weight_result(&self) -> OptimizedPortfolio {
        let n = self.stats.assets().len();
        let eq = 1.0 / n as f64;
        let weights: BTreeMap<String, f64> = self
            .stats
            .assets()
            .iter()
            .map(|a| (a.clone(), eq))
            .collect();
        self.build_result(weights, 0, true)
    }

    fn build_result(
        &self,
        weights: BTreeMap<String, f64>,
        trials_evaluated: u32,
        equal_weight_fallback: bool,
    ) -> OptimizedPortfolio {
        let ordered: Vec<f64> = self
            .stats
            .assets()
            .iter()
            .map(|a| weights.get(a).copied().unwrap_or(0.0))
            .collect();

        let expected_return = self.portfolio_return(&ordered);
        let volatility = self.portfolio_volatility(&ordered);
        let sharpe_ratio = if volatility > 0.0 {
            (expected_return - self.config.risk_free_rate) / volatility
        } else {
            0.0
        };

        OptimizedPortfolio {
            weights,
            expected_return,
            volatility,
            sharpe_ratio,
            trials_evaluated,
            equal_weight_fallback,
        }
    }

    fn portfolio_return(&self, weights: &[f64]) -> f64 {
        weights
            .iter()
            .zip(self.expected_returns.iter())
            .map(|(w, r)| w * r)
            .sum()
    }

    fn portfolio_volatility(&self, weights: &[f64]) -> f64 {
        let cov = self.stats.covariance();
        let n = weights.len();
        let mut variance = 0.0;
        for i in 0..n {
            for j in 0..n {
                variance += weights[i] * weights[j] * cov[i][j];
            }
        }
        variance.max(0.0).sqrt()
    }
}

/// One-call contract matching the platform's service layer: expected
/// returns per asset, historical series for covariance estimation, and
/// global weight bounds.
pub fn optimize_portfolio(
    expected_returns: &BTreeMap<String, f64>,
    historical_returns: &BTreeMap<String, Vec<f64>>,
    bounds: WeightBounds,
) -> Result<OptimizedPortfolio> {
    let stats = ReturnStatistics::from_history(historical_returns)?;
    let config = MonteCarloConfig {
        bounds,
        ..Default::default()
    };
    MonteCarloOptimizer::new(stats, config)?
        .with_expected_returns(expected_returns)?
        .optimize()
}
