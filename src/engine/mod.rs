//! Advisory engine facade
//!
//! Composes profiler, allocation and catalog ranking into a single
//! analysis call. The engine holds only configuration and the catalog;
//! every analysis is a stateless function of the user record passed in,
//! with no per-user caches.

use crate::allocation;
use crate::catalog;
use crate::profiler;
use crate::types::{InvestmentAnalysis, InvestmentOpportunity, UserProfile};
use chrono::Utc;

pub struct AdvisorEngine {
    catalog: Vec<InvestmentOpportunity>,
}

impl AdvisorEngine {
    pub fn new(catalog: Vec<InvestmentOpportunity>) -> Self {
        Self { catalog }
    }

    /// Engine over the built-in reference catalog
    pub fn with_reference_catalog() -> Self {
        Self::new(catalog::reference_catalog())
    }

    pub fn catalog(&self) -> &[InvestmentOpportunity] {
        &self.catalog
    }

    /// Run the full advisory pipeline for one user.
    pub fn analyze(&self, user: &UserProfile) -> InvestmentAnalysis {
        let risk_profile = profiler::compute_risk_profile(user);
        let allocation = allocation::model_allocation(risk_profile.category);
        let opportunities =
            catalog::rank_opportunities(risk_profile.category, &self.catalog);

        tracing::info!(
            user = %user.id,
            score = risk_profile.score,
            category = %risk_profile.category,
            opportunities = opportunities.len(),
            "analysis complete"
        );

        InvestmentAnalysis {
            user_id: user.id,
            risk_profile,
            allocation,
            opportunities,
            generated_at: Utc::now(),
        }
    }
}

impl Default for AdvisorEngine {
    fn default() -> Self {
        Self::with_reference_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExperienceLevel, InvestmentHorizon, RiskCategory};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_user() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            age: Some(35),
            annual_income: dec!(85_000),
            savings: dec!(25_000),
            experience: Some(ExperienceLevel::Intermediate),
            horizon: Some(InvestmentHorizon::Long),
            can_handle_loss: true,
            preferences: vec![],
            created_at: Utc::now(),
            archived: false,
        }
    }

    #[test]
    fn test_full_pipeline() {
        let engine = AdvisorEngine::with_reference_catalog();
        let analysis = engine.analyze(&sample_user());

        assert_eq!(analysis.risk_profile.score, 85);
        assert_eq!(analysis.risk_profile.category, RiskCategory::Aggressive);
        assert_eq!(analysis.allocation.total(), 100.0);
        assert!(analysis.opportunities.len() <= catalog::MAX_RANKED);
        assert!(!analysis.opportunities.is_empty());
    }

    #[test]
    fn test_analysis_is_recomputed_each_call() {
        let engine = AdvisorEngine::with_reference_catalog();
        let mut user = sample_user();

        let before = engine.analyze(&user);
        user.age = Some(65);
        user.can_handle_loss = false;
        let after = engine.analyze(&user);

        // Same engine, updated input: the result must track the input,
        // not a cached profile
        assert!(after.risk_profile.score < before.risk_profile.score);
    }

    #[test]
    fn test_empty_catalog_yields_empty_opportunities() {
        let engine = AdvisorEngine::new(vec![]);
        let analysis = engine.analyze(&sample_user());
        assert!(analysis.opportunities.is_empty());
    }
}
