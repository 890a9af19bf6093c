//! Investment opportunity catalog and ranking
//!
//! The catalog is static reference data. Ranking filters it by the risk
//! levels acceptable for a category, sorts descending by the hand-assigned
//! `ai_score`, and keeps the top entries. A category matching nothing
//! returns an empty list; that is a valid result, not an error.

use crate::types::{AssetType, InvestmentOpportunity, RiskCategory, RiskLevel};
use rust_decimal_macros::dec;

/// Maximum entries returned by a ranking call
pub const MAX_RANKED: usize = 3;

/// Risk levels a category is willing to hold
pub fn acceptable_risk_levels(category: RiskCategory) -> &'static [RiskLevel] {
    match category {
        RiskCategory::VeryConservative => &[RiskLevel::Low],
        RiskCategory::Conservative => &[RiskLevel::Low, RiskLevel::Medium],
        RiskCategory::Moderate => &[RiskLevel::Medium],
        RiskCategory::ModeratelyAggressive => &[RiskLevel::Medium, RiskLevel::High],
        RiskCategory::Aggressive => &[RiskLevel::High],
    }
}

/// Rank catalog entries for a risk category.
///
/// Filters by [`acceptable_risk_levels`], sorts by `ai_score` descending and
/// truncates to [`MAX_RANKED`].
pub fn rank_opportunities(
    category: RiskCategory,
    catalog: &[InvestmentOpportunity],
) -> Vec<InvestmentOpportunity> {
    let acceptable = acceptable_risk_levels(category);

    let mut matches: Vec<InvestmentOpportunity> = catalog
        .iter()
        .filter(|opp| acceptable.contains(&opp.risk_level))
        .cloned()
        .collect();

    matches.sort_by(|a, b| b.ai_score.cmp(&a.ai_score));
    matches.truncate(MAX_RANKED);

    tracing::debug!(
        category = %category,
        matched = matches.len(),
        "ranked opportunities"
    );

    matches
}

/// The built-in reference catalog of SME opportunities.
pub fn reference_catalog() -> Vec<InvestmentOpportunity> {
    vec![
        InvestmentOpportunity {
            id: "agritech-nbo-001".to_string(),
            name: "Nairobi AgriTech Growth Fund".to_string(),
            asset_type: AssetType::Fund,
            sector: "agriculture".to_string(),
            expected_return: "12-18%".to_string(),
            risk_level: RiskLevel::Medium,
            minimum_investment: dec!(500),
            ai_score: 87,
        },
        InvestmentOpportunity {
            id: "fintech-los-002".to_string(),
            name: "Lagos Fintech Venture Basket".to_string(),
            asset_type: AssetType::Equity,
            sector: "financial services".to_string(),
            expected_return: "20-35%".to_string(),
            risk_level: RiskLevel::High,
            minimum_investment: dec!(1_000),
            ai_score: 92,
        },
        InvestmentOpportunity {
            id: "solar-acc-003".to_string(),
            name: "Accra Solar Infrastructure Notes".to_string(),
            asset_type: AssetType::Note,
            sector: "renewable energy".to_string(),
            expected_return: "10-14%".to_string(),
            risk_level: RiskLevel::Medium,
            minimum_investment: dec!(250),
            ai_score: 84,
        },
        InvestmentOpportunity {
            id: "bonds-kgl-004".to_string(),
            name: "Kigali SME Bond Ladder".to_string(),
            asset_type: AssetType::Bond,
            sector: "fixed income".to_string(),
            expected_return: "7-9%".to_string(),
            risk_level: RiskLevel::Low,
            minimum_investment: dec!(100),
            ai_score: 76,
        },
        InvestmentOpportunity {
            id: "logistics-dar-005".to_string(),
            name: "Dar es Salaam Logistics Equity".to_string(),
            asset_type: AssetType::Equity,
            sector: "transport".to_string(),
            expected_return: "15-25%".to_string(),
            risk_level: RiskLevel::High,
            minimum_investment: dec!(750),
            ai_score: 81,
        },
    ]
}
