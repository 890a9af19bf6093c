//! Risk profiling
//!
//! Maps a user questionnaire to a 0-100 risk score and category by summing
//! independent point buckets (age, income, savings rate, experience,
//! horizon, loss tolerance). Pure function of its input: the engine keeps
//! no per-user cache, callers pass the profile on every call.

use crate::insights;
use crate::types::{
    ExperienceLevel, InvestmentHorizon, RiskCategory, RiskProfile, UserProfile,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Raw bucket sums can exceed 100 (max attainable is 105); the clamp is
/// part of the contract, not a safety net.
const MAX_SCORE: u32 = 100;

/// Compute the risk profile for a user record.
///
/// Missing questionnaire answers contribute zero. There are no error
/// conditions: any representable `UserProfile` produces a profile.
pub fn compute_risk_profile(user: &UserProfile) -> RiskProfile {
    let raw = age_points(user.age)
        + income_points(user.annual_income)
        + savings_points(user.savings_rate())
        + experience_points(user.experience)
        + horizon_points(user.horizon)
        + loss_tolerance_points(user.can_handle_loss);

    let score = raw.min(MAX_SCORE) as u8;
    let category = RiskCategory::from_score(score);

    tracing::debug!(
        user = %user.id,
        raw,
        score,
        category = %category,
        "computed risk profile"
    );

    RiskProfile {
        score,
        category,
        recommendations: insights::recommendations_for(category),
    }
}

/// Age bracket points. Brackets flip at exactly 30, 40, 50 and 60.
fn age_points(age: Option<u32>) -> u32 {
    match age {
        Some(a) if a < 30 => 30,
        Some(a) if a < 40 => 25,
        Some(a) if a < 50 => 20,
        Some(a) if a < 60 => 15,
        Some(_) => 10,
        None => 0,
    }
}

fn income_points(annual_income: Decimal) -> u32 {
    if annual_income >= dec!(100_000) {
        20
    } else if annual_income >= dec!(50_000) {
        15
    } else if annual_income >= dec!(20_000) {
        10
    } else if annual_income > Decimal::ZERO {
        5
    } else {
        0
    }
}

fn savings_points(savings_rate: Decimal) -> u32 {
    if savings_rate >= dec!(0.50) {
        15
    } else if savings_rate >= dec!(0.25) {
        10
    } else if savings_rate >= dec!(0.10) {
        5
    } else {
        0
    }
}

fn experience_points(experience: Option<ExperienceLevel>) -> u32 {
    match experience {
        Some(ExperienceLevel::Beginner) => 5,
        Some(ExperienceLevel::Intermediate) => 10,
        Some(ExperienceLevel::Advanced) => 15,
        None => 0,
    }
}

fn horizon_points(horizon: Option<InvestmentHorizon>) -> u32 {
    match horizon {
        Some(InvestmentHorizon::Short) => 5,
        Some(InvestmentHorizon::Medium) => 10,
        Some(InvestmentHorizon::Long) => 15,
        None => 0,
    }
}

fn loss_tolerance_points(can_handle_loss: bool) -> u32 {
    if can_handle_loss {
        10
    } else {
        0
    }
}
