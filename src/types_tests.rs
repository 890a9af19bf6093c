//! Tests for core types

#[cfg(test)]
mod tests {
    use super::super::types::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_risk_category_serialization() {
        assert_eq!(
            serde_json::to_string(&RiskCategory::VeryConservative).unwrap(),
            "\"very_conservative\""
        );
        assert_eq!(
            serde_json::to_string(&RiskCategory::ModeratelyAggressive).unwrap(),
            "\"moderately_aggressive\""
        );
    }

    #[test]
    fn test_risk_category_deserialization() {
        let category: RiskCategory = serde_json::from_str("\"aggressive\"").unwrap();
        assert_eq!(category, RiskCategory::Aggressive);
    }

    #[test]
    fn test_risk_category_ordering() {
        assert!(RiskCategory::VeryConservative < RiskCategory::Conservative);
        assert!(RiskCategory::Moderate < RiskCategory::Aggressive);
        assert!(RiskCategory::ModeratelyAggressive < RiskCategory::Aggressive);
    }

    #[test]
    fn test_risk_category_display() {
        assert_eq!(
            RiskCategory::ModeratelyAggressive.to_string(),
            "Moderately Aggressive"
        );
        assert_eq!(RiskCategory::VeryConservative.to_string(), "Very Conservative");
    }

    #[test]
    fn test_experience_level_lowercase() {
        let level: ExperienceLevel = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(level, ExperienceLevel::Intermediate);
    }

    #[test]
    fn test_user_profile_roundtrip() {
        let user = UserProfile {
            id: Uuid::new_v4(),
            age: Some(35),
            annual_income: dec!(85_000),
            savings: dec!(25_000),
            experience: Some(ExperienceLevel::Intermediate),
            horizon: Some(InvestmentHorizon::Long),
            can_handle_loss: true,
            preferences: vec![InvestmentPreference::Growth, InvestmentPreference::Index],
            created_at: Utc::now(),
            archived: false,
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, user.id);
        assert_eq!(back.age, Some(35));
        assert_eq!(back.annual_income, dec!(85_000));
        assert_eq!(back.preferences.len(), 2);
    }

    #[test]
    fn test_user_profile_optional_fields_default() {
        // Questionnaire fields missing from the payload deserialize as None
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "age": null,
            "annual_income": "0",
            "savings": "0",
            "experience": null,
            "horizon": null,
            "can_handle_loss": false,
            "created_at": "2026-01-15T09:00:00Z"
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.age.is_none());
        assert!(user.experience.is_none());
        assert!(user.preferences.is_empty());
        assert!(!user.archived);
    }

    #[test]
    fn test_savings_rate_zero_income() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000002",
            "age": 40,
            "annual_income": "0",
            "savings": "5000",
            "experience": null,
            "horizon": null,
            "can_handle_loss": false,
            "created_at": "2026-01-15T09:00:00Z"
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.savings_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_opportunity_roundtrip() {
        let opp = InvestmentOpportunity {
            id: "x-1".to_string(),
            name: "Test Fund".to_string(),
            asset_type: AssetType::Fund,
            sector: "agriculture".to_string(),
            expected_return: "10-12%".to_string(),
            risk_level: RiskLevel::Medium,
            minimum_investment: dec!(500),
            ai_score: 80,
        };
        let json = serde_json::to_string(&opp).unwrap();
        let back: InvestmentOpportunity = serde_json::from_str(&json).unwrap();
        assert_eq!(back.risk_level, RiskLevel::Medium);
        assert_eq!(back.ai_score, 80);
    }

    #[test]
    fn test_optimized_portfolio_metrics() {
        let portfolio = OptimizedPortfolio {
            weights: [("a".to_string(), 0.5), ("b".to_string(), 0.5)]
                .into_iter()
                .collect(),
            expected_return: 0.1,
            volatility: 0.05,
            sharpe_ratio: 1.4,
            trials_evaluated: 1000,
            equal_weight_fallback: false,
        };
        assert_eq!(portfolio.max_weight(), 0.5);
        assert!((portfolio.effective_assets() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_allocation_buckets_iteration() {
        let allocation = AssetAllocation {
            equities: 60.0,
            bonds: 30.0,
            alternatives: 10.0,
            equity_breakdown: [("growth stocks".to_string(), 60.0)].into_iter().collect(),
            bond_breakdown: [("government bonds".to_string(), 30.0)].into_iter().collect(),
            alternative_breakdown: [("real estate".to_string(), 10.0)].into_iter().collect(),
        };
        assert_eq!(allocation.total(), 100.0);
        assert_eq!(allocation.buckets().len(), 3);
    }
}
