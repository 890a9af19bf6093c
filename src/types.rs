//! Core domain types shared across the advisory engine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Self-reported investing experience from the onboarding questionnaire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Intended investment horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentHorizon {
    /// Under 3 years
    Short,
    /// 3 to 7 years
    Medium,
    /// Over 7 years
    Long,
}

/// Stated style preferences collected at onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentPreference {
    Growth,
    Value,
    Dividends,
    Index,
    Active,
}

/// A user record as captured at onboarding and updated by later
/// questionnaire rounds. Questionnaire answers the user skipped are `None`
/// and contribute nothing to the risk score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub age: Option<u32>,
    /// Annual income in the platform's settlement currency
    pub annual_income: Decimal,
    /// Total liquid savings
    pub savings: Decimal,
    pub experience: Option<ExperienceLevel>,
    pub horizon: Option<InvestmentHorizon>,
    /// Whether the user stated they could tolerate a temporary 20% drawdown
    pub can_handle_loss: bool,
    #[serde(default)]
    pub preferences: Vec<InvestmentPreference>,
    pub created_at: DateTime<Utc>,
    /// Profiles are never deleted, only archived
    #[serde(default)]
    pub archived: bool,
}

impl UserProfile {
    /// Savings as a fraction of annual income. Zero income yields zero,
    /// not a division error.
    pub fn savings_rate(&self) -> Decimal {
        if self.annual_income <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            self.savings / self.annual_income
        }
    }
}

/// Risk appetite category, ordered from most to least cautious
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    VeryConservative,
    Conservative,
    Moderate,
    ModeratelyAggressive,
    Aggressive,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::VeryConservative,
        RiskCategory::Conservative,
        RiskCategory::Moderate,
        RiskCategory::ModeratelyAggressive,
        RiskCategory::Aggressive,
    ];

    /// Map a 0-100 risk score to its category
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => RiskCategory::Aggressive,
            60..=79 => RiskCategory::ModeratelyAggressive,
            40..=59 => RiskCategory::Moderate,
            20..=39 => RiskCategory::Conservative,
            _ => RiskCategory::VeryConservative,
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskCategory::VeryConservative => "Very Conservative",
            RiskCategory::Conservative => "Conservative",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::ModeratelyAggressive => "Moderately Aggressive",
            RiskCategory::Aggressive => "Aggressive",
        };
        write!(f, "{}", name)
    }
}

/// Derived risk assessment. Recomputed on every analysis call; callers may
/// hold stale copies but the engine never caches one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Composite score clamped to [0, 100]
    pub score: u8,
    pub category: RiskCategory,
    pub recommendations: Vec<String>,
}

/// Target percentage split across the three top-level buckets, with each
/// bucket subdivided into named instruments. All percentages are of the
/// TOTAL portfolio, so each breakdown sums to its bucket's percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetAllocation {
    pub equities: f64,
    pub bonds: f64,
    pub alternatives: f64,
    pub equity_breakdown: BTreeMap<String, f64>,
    pub bond_breakdown: BTreeMap<String, f64>,
    pub alternative_breakdown: BTreeMap<String, f64>,
}

impl AssetAllocation {
    /// Sum of the three top-level buckets; 100 for every generated allocation
    pub fn total(&self) -> f64 {
        self.equities + self.bonds + self.alternatives
    }

    /// (bucket percentage, breakdown) pairs for invariant checks and display
    pub fn buckets(&self) -> [(&'static str, f64, &BTreeMap<String, f64>); 3] {
        [
            ("equities", self.equities, &self.equity_breakdown),
            ("bonds", self.bonds, &self.bond_breakdown),
            ("alternatives", self.alternatives, &self.alternative_breakdown),
        ]
    }
}

/// Instrument type of a catalog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Equity,
    Fund,
    Bond,
    Note,
}

/// Risk banding used by the opportunity catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Static catalog entry describing an investable SME opportunity.
/// Read-only reference data, not user-owned. `ai_score` is a hand-assigned
/// integer used purely for sort ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentOpportunity {
    pub id: String,
    pub name: String,
    pub asset_type: AssetType,
    pub sector: String,
    /// Expected return range as displayed to the user, e.g. "12-18%"
    pub expected_return: String,
    pub risk_level: RiskLevel,
    pub minimum_investment: Decimal,
    pub ai_score: u32,
}

/// Result of a portfolio optimization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedPortfolio {
    /// Fraction of the portfolio per asset id; sums to 1
    pub weights: BTreeMap<String, f64>,
    pub expected_return: f64,
    /// Standard deviation of portfolio returns
    pub volatility: f64,
    pub sharpe_ratio: f64,
    /// Number of random weight vectors evaluated
    pub trials_evaluated: u32,
    /// True when degenerate inputs forced the equal-weight fallback
    pub equal_weight_fallback: bool,
}

impl OptimizedPortfolio {
    /// Largest single-asset weight
    pub fn max_weight(&self) -> f64 {
        self.weights.values().cloned().fold(0.0, f64::max)
    }

    /// Effective number of holdings, 1 / sum(w^2)
    pub fn effective_assets(&self) -> f64 {
        let sum_sq: f64 = self.weights.values().map(|w| w * w).sum();
        if sum_sq > 0.0 {
            1.0 / sum_sq
        } else {
            0.0
        }
    }
}

/// Full advisory output for one user: profile, target allocation and the
/// top-ranked opportunities. Assembled fresh per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentAnalysis {
    pub user_id: Uuid,
    pub risk_profile: RiskProfile,
    pub allocation: AssetAllocation,
    pub opportunities: Vec<InvestmentOpportunity>,
    pub generated_at: DateTime<Utc>,
}
