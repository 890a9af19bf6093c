//! Recommendation and commentary text generation

use crate::types::{OptimizedPortfolio, RiskCategory};

/// Standing recommendations attached to a risk profile
pub fn recommendations_for(category: RiskCategory) -> Vec<String> {
    let lines: &[&str] = match category {
        RiskCategory::VeryConservative => &[
            "Prioritize capital preservation: government bonds and money-market instruments should anchor the portfolio.",
            "Keep an emergency fund of at least six months of expenses before committing capital.",
            "Review the allocation annually; avoid reacting to short-term market moves.",
        ],
        RiskCategory::Conservative => &[
            "Favor income-generating assets such as SME bond ladders and dividend payers.",
            "Limit any single opportunity to a small share of total savings.",
            "Consider laddered maturities to keep liquidity predictable.",
        ],
        RiskCategory::Moderate => &[
            "Balance growth and income: blend equity funds with investment-grade bonds.",
            "Diversify across at least three sectors to dampen single-market shocks.",
            "Rebalance when any bucket drifts more than five points from target.",
        ],
        RiskCategory::ModeratelyAggressive => &[
            "Tilt toward growth equities while keeping a bond cushion for drawdowns.",
            "Add international exposure to reduce home-market concentration.",
            "Expect multi-year holding periods; avoid funding near-term obligations from this portfolio.",
        ],
        RiskCategory::Aggressive => &[
            "Growth and venture-stage SME equity can dominate, but size positions for full-loss scenarios.",
            "Stage entries over time rather than deploying capital in one tranche.",
            "Keep the bond sleeve as dry powder for market dislocations.",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

/// Commentary on an optimization result for display alongside the weights
pub fn portfolio_commentary(portfolio: &OptimizedPortfolio) -> Vec<String> {
    let mut notes = Vec::new();

    if portfolio.equal_weight_fallback {
        notes.push(
            "Historical series showed no variance; weights were set equally rather than optimized."
                .to_string(),
        );
    }

    let max_weight = portfolio.max_weight();
    if max_weight > 0.5 {
        notes.push(format!(
            "Concentrated position: {:.0}% of the portfolio sits in a single asset.",
            max_weight * 100.0
        ));
    }

    let effective = portfolio.effective_assets();
    if effective >= 3.0 {
        notes.push(format!(
            "Diversification is healthy at roughly {:.1} effective holdings.",
            effective
        ));
    }

    if !portfolio.equal_weight_fallback {
        if portfolio.sharpe_ratio < 0.5 {
            notes.push(
                "Risk-adjusted return is thin; consider higher-return opportunities or lower-volatility assets."
                    .to_string(),
            );
        } else if portfolio.sharpe_ratio > 1.0 {
            notes.push(format!(
                "Strong risk-adjusted profile (Sharpe {:.2}).",
                portfolio.sharpe_ratio
            ));
        }
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn portfolio(weights: &[(&str, f64)], sharpe: f64, fallback: bool) -> OptimizedPortfolio {
        OptimizedPortfolio {
            weights: weights
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            expected_return: 0.1,
            volatility: 0.08,
            sharpe_ratio: sharpe,
            trials_evaluated: 1000,
            equal_weight_fallback: fallback,
        }
    }

    #[test]
    fn test_every_category_has_recommendations() {
        for category in RiskCategory::ALL {
            assert!(recommendations_for(category).len() >= 3);
        }
    }

    #[test]
    fn test_fallback_noted() {
        let p = portfolio(&[("a", 0.5), ("b", 0.5)], 0.0, true);
        let commentary = portfolio_commentary(&p);
        assert!(commentary.iter().any(|n| n.contains("no variance")));
    }

    #[test]
    fn test_concentration_noted() {
        let p = portfolio(&[("a", 0.7), ("b", 0.3)], 0.8, false);
        let commentary = portfolio_commentary(&p);
        assert!(commentary.iter().any(|n| n.contains("Concentrated")));
    }

    #[test]
    fn test_thin_sharpe_noted() {
        let p = portfolio(&[("a", 0.5), ("b", 0.5)], 0.2, false);
        let commentary = portfolio_commentary(&p);
        assert!(commentary.iter().any(|n| n.contains("thin")));
    }
}
