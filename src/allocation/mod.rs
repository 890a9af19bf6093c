//! Asset allocation generation
//!
//! Maps a risk category to a fixed equities/bonds/alternatives split, then
//! subdivides each bucket into named instruments using category-dependent
//! ratios. Deterministic lookup tables, no randomness, no failure modes.
//! Breakdown entries are expressed as percentages of the total portfolio,
//! so each bucket's breakdown sums to that bucket's percentage by
//! construction.

use crate::types::{AssetAllocation, RiskCategory};
use std::collections::BTreeMap;

/// Top-level percentage split per category (equities, bonds, alternatives)
fn bucket_split(category: RiskCategory) -> (f64, f64, f64) {
    match category {
        RiskCategory::VeryConservative => (20.0, 70.0, 10.0),
        RiskCategory::Conservative => (35.0, 55.0, 10.0),
        RiskCategory::Moderate => (50.0, 40.0, 10.0),
        RiskCategory::ModeratelyAggressive => (65.0, 25.0, 10.0),
        RiskCategory::Aggressive => (80.0, 10.0, 10.0),
    }
}

/// Equity sub-instrument ratios (fractions of the equity bucket)
fn equity_ratios(category: RiskCategory) -> &'static [(&'static str, f64)] {
    match category {
        RiskCategory::VeryConservative => &[("dividend stocks", 1.0)],
        RiskCategory::Conservative => {
            &[("dividend stocks", 0.6), ("large-cap blend", 0.4)]
        }
        RiskCategory::Moderate => &[
            ("large-cap blend", 0.5),
            ("dividend stocks", 0.3),
            ("international equity", 0.2),
        ],
        RiskCategory::ModeratelyAggressive => &[
            ("growth stocks", 0.4),
            ("large-cap blend", 0.35),
            ("international equity", 0.25),
        ],
        RiskCategory::Aggressive => &[
            ("growth stocks", 0.5),
            ("small-cap stocks", 0.3),
            ("international equity", 0.2),
        ],
    }
}

/// Bond sub-instrument ratios (fractions of the bond bucket)
fn bond_ratios(category: RiskCategory) -> &'static [(&'static str, f64)] {
    match category {
        RiskCategory::VeryConservative => {
            &[("government bonds", 0.7), ("investment-grade corporate", 0.3)]
        }
        RiskCategory::Conservative => {
            &[("government bonds", 0.6), ("investment-grade corporate", 0.4)]
        }
        RiskCategory::Moderate => {
            &[("government bonds", 0.5), ("investment-grade corporate", 0.5)]
        }
        RiskCategory::ModeratelyAggressive => {
            &[("investment-grade corporate", 0.6), ("government bonds", 0.4)]
        }
        RiskCategory::Aggressive => {
            &[("high-yield bonds", 0.5), ("investment-grade corporate", 0.5)]
        }
    }
}

/// Alternative sub-instrument ratios (fractions of the alternatives bucket)
fn alternative_ratios(category: RiskCategory) -> &'static [(&'static str, f64)] {
    match category {
        RiskCategory::VeryConservative | RiskCategory::Conservative => {
            &[("real estate", 1.0)]
        }
        RiskCategory::Moderate => &[("real estate", 0.6), ("commodities", 0.4)],
        RiskCategory::ModeratelyAggressive => &[
            ("real estate", 0.5),
            ("commodities", 0.3),
            ("private equity", 0.2),
        ],
        RiskCategory::Aggressive => &[
            ("private equity", 0.5),
            ("commodities", 0.3),
            ("real estate", 0.2),
        ],
    }
}

fn materialize(bucket_pct: f64, ratios: &[(&str, f64)]) -> BTreeMap<String, f64> {
    ratios
        .iter()
        .map(|(name, ratio)| (name.to_string(), bucket_pct * ratio))
        .collect()
}

/// Build the model allocation for a risk category.
pub fn model_allocation(category: RiskCategory) -> AssetAllocation {
    let (equities, bonds, alternatives) = bucket_split(category);

    AssetAllocation {
        equities,
        bonds,
        alternatives,
        equity_breakdown: materialize(equities, equity_ratios(category)),
        bond_breakdown: materialize(bonds, bond_ratios(category)),
        alternative_breakdown: materialize(alternatives, alternative_ratios(category)),
    }
}
