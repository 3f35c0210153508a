//! Financial-health scoring
//!
//! A fixed weighted formula over six sub-scores, plus rule-based insights
//! and recommendations. The formula constants are load-bearing: clients of
//! the legacy API depend on byte-identical breakdowns for the same input.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{FinancialProfile, ScoreBreakdown};

/// Categories that reduce the category sub-score. Matched exactly and
/// case-sensitively against `category_distribution` keys.
pub const PENALIZED_CATEGORIES: [&str; 3] = ["Travel", "Entertainment", "Shopping"];

/// Savings below this fraction of income trigger the savings rule
const SAVINGS_TARGET_RATIO: f64 = 0.2;
/// Expenses above this fraction of income trigger the expenses rule
const EXPENSES_WARN_RATIO: f64 = 0.5;
/// Loan payments above this fraction of income trigger the loan rule
const LOAN_WARN_RATIO: f64 = 0.3;
/// Credit card spending above this fraction of income triggers the credit rule
const CREDIT_CARD_WARN_RATIO: f64 = 0.2;

/// Score a financial profile.
///
/// Fails with [`Error::InvalidInput`] when `income` is not a positive
/// finite number, since every ratio divides by it. Output sub-scores and
/// the total are rounded to 2 decimal places; the total is the sum of the
/// unrounded sub-scores, rounded once.
pub fn score(profile: &FinancialProfile) -> Result<ScoreBreakdown> {
    if !profile.income.is_finite() || profile.income <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "income must be a positive number, got {}",
            profile.income
        )));
    }

    let income = profile.income;
    let savings_ratio = profile.savings / income;
    let expenses_ratio = profile.monthly_expenses / income;
    let loan_ratio = profile.loan_payments / income;
    let credit_card_ratio = profile.credit_card_spending / income;

    let savings_score = (savings_ratio * 100.0).min(30.0);
    let expenses_score = (20.0 - expenses_ratio * 20.0).max(0.0);
    let loan_score = (20.0 - loan_ratio * 20.0).max(0.0);
    let credit_card_score = (10.0 - credit_card_ratio * 10.0).max(0.0);

    let penalized_spend: f64 = PENALIZED_CATEGORIES
        .iter()
        .map(|key| profile.category_distribution.get(*key).copied().unwrap_or(0.0))
        .sum();
    let category_score = (10.0 - penalized_spend / income * 100.0).max(0.0);
    let goals_score = profile.financial_goals_met * 0.1;

    let total_score = savings_score
        + expenses_score
        + loan_score
        + credit_card_score
        + category_score
        + goals_score;

    debug!(
        savings_score,
        expenses_score,
        loan_score,
        credit_card_score,
        category_score,
        goals_score,
        total_score,
        "scored profile"
    );

    let mut insights = Vec::new();
    let mut recommendations = Vec::new();

    // Rules fire independently, in this order. The ordering is part of the
    // API contract: insight N pairs with recommendation N.
    if savings_ratio < SAVINGS_TARGET_RATIO {
        insights.push(format!(
            "Savings are below recommended levels, affecting your score by {:.2} points.",
            30.0 - savings_score
        ));
        let improvement = (SAVINGS_TARGET_RATIO - savings_ratio) * income;
        let potential_gain = improvement / income * 30.0;
        recommendations.push(format!(
            "Increase savings by at least {:.2} to improve your score by {:.2} points.",
            improvement, potential_gain
        ));
    }

    if expenses_ratio > EXPENSES_WARN_RATIO {
        insights.push(format!(
            "High monthly expenses reduce your score by {:.2} points.",
            20.0 - expenses_score
        ));
        let reduction = (expenses_ratio - EXPENSES_WARN_RATIO) * income;
        let potential_gain = reduction / income * 20.0;
        recommendations.push(format!(
            "Reduce monthly expenses by at least {:.2} to improve your score by {:.2} points.",
            reduction, potential_gain
        ));
    }

    if loan_ratio > LOAN_WARN_RATIO {
        insights.push(format!(
            "Loan payments are high, reducing your score by {:.2} points.",
            20.0 - loan_score
        ));
        let reduction = (loan_ratio - LOAN_WARN_RATIO) * income;
        let potential_gain = reduction / income * 20.0;
        recommendations.push(format!(
            "Reduce loan payments by {:.2} to improve your score by {:.2} points.",
            reduction, potential_gain
        ));
    }

    if credit_card_ratio > CREDIT_CARD_WARN_RATIO {
        insights.push(format!(
            "High credit card spending lowers your score by {:.2} points.",
            10.0 - credit_card_score
        ));
        let reduction = (credit_card_ratio - CREDIT_CARD_WARN_RATIO) * income;
        let potential_gain = reduction / income * 10.0;
        recommendations.push(format!(
            "Reduce credit card spending by {:.2} to improve your score by {:.2} points.",
            reduction, potential_gain
        ));
    }

    if insights.is_empty() {
        insights.push("Everything looks alright.".to_string());
    }

    Ok(ScoreBreakdown {
        savings_score: round2(savings_score),
        expenses_score: round2(expenses_score),
        loan_score: round2(loan_score),
        credit_card_score: round2(credit_card_score),
        category_score: round2(category_score),
        goals_score: round2(goals_score),
        total_score: round2(total_score),
        insights,
        recommendations,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn profile(
        income: f64,
        savings: f64,
        monthly_expenses: f64,
        loan_payments: f64,
        credit_card_spending: f64,
        financial_goals_met: f64,
    ) -> FinancialProfile {
        FinancialProfile {
            income,
            savings,
            monthly_expenses,
            loan_payments,
            credit_card_spending,
            financial_goals_met,
            category_distribution: IndexMap::new(),
        }
    }

    fn healthy_profile() -> FinancialProfile {
        let mut p = profile(5000.0, 1000.0, 2000.0, 500.0, 200.0, 80.0);
        p.category_distribution = IndexMap::from([
            ("Travel".to_string(), 300.0),
            ("Entertainment".to_string(), 200.0),
            ("Shopping".to_string(), 100.0),
            ("Groceries".to_string(), 500.0),
        ]);
        p
    }

    #[test]
    fn test_reference_breakdown() {
        let breakdown = score(&healthy_profile()).unwrap();

        assert_eq!(breakdown.savings_score, 20.0);
        assert_eq!(breakdown.expenses_score, 12.0);
        assert_eq!(breakdown.loan_score, 18.0);
        assert_eq!(breakdown.credit_card_score, 9.6);
        assert_eq!(breakdown.category_score, 0.0);
        assert_eq!(breakdown.goals_score, 8.0);
        assert_eq!(breakdown.total_score, 67.6);
    }

    #[test]
    fn test_boundary_ratios_do_not_fire_rules() {
        // savings_ratio == 0.2 exactly: the savings rule is strictly <,
        // and the other rules are strictly >, so nothing fires
        let breakdown = score(&healthy_profile()).unwrap();

        assert_eq!(breakdown.insights, vec!["Everything looks alright."]);
        assert!(breakdown.recommendations.is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        // savings 0.1 < 0.2, expenses 0.6 > 0.5, loan 0.4 > 0.3, credit 0.3 > 0.2
        let p = profile(1000.0, 100.0, 600.0, 400.0, 300.0, 50.0);
        let breakdown = score(&p).unwrap();

        assert_eq!(breakdown.insights.len(), 4);
        assert_eq!(breakdown.recommendations.len(), 4);
        assert!(breakdown.insights[0].starts_with("Savings are below"));
        assert!(breakdown.insights[1].starts_with("High monthly expenses"));
        assert!(breakdown.insights[2].starts_with("Loan payments are high"));
        assert!(breakdown.insights[3].starts_with("High credit card spending"));
    }

    #[test]
    fn test_partial_rules_preserve_order() {
        // Only the loan and credit rules fire; they must keep their
        // relative order even when earlier rules are silent
        let p = profile(1000.0, 300.0, 200.0, 400.0, 300.0, 50.0);
        let breakdown = score(&p).unwrap();

        assert_eq!(breakdown.insights.len(), 2);
        assert!(breakdown.insights[0].starts_with("Loan payments are high"));
        assert!(breakdown.insights[1].starts_with("High credit card spending"));
    }

    #[test]
    fn test_insight_amounts_formatted_to_two_decimals() {
        // savings_ratio 0.1: 20.00 points lost, increase by 100.00, gain 3.00
        let p = profile(1000.0, 100.0, 0.0, 0.0, 0.0, 0.0);
        let breakdown = score(&p).unwrap();

        assert_eq!(
            breakdown.insights[0],
            "Savings are below recommended levels, affecting your score by 20.00 points."
        );
        assert_eq!(
            breakdown.recommendations[0],
            "Increase savings by at least 100.00 to improve your score by 3.00 points."
        );
    }

    #[test]
    fn test_rejects_zero_income() {
        let p = profile(0.0, 100.0, 100.0, 0.0, 0.0, 50.0);
        assert!(matches!(score(&p), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_negative_income() {
        let p = profile(-5000.0, 100.0, 100.0, 0.0, 0.0, 50.0);
        assert!(matches!(score(&p), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_nan_income() {
        let p = profile(f64::NAN, 100.0, 100.0, 0.0, 0.0, 50.0);
        assert!(matches!(score(&p), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_sub_score_bounds() {
        // Extreme but non-negative inputs stay within documented bounds
        let p = profile(100.0, 1_000_000.0, 1_000_000.0, 1_000_000.0, 1_000_000.0, 100.0);
        let breakdown = score(&p).unwrap();

        assert_eq!(breakdown.savings_score, 30.0);
        assert_eq!(breakdown.expenses_score, 0.0);
        assert_eq!(breakdown.loan_score, 0.0);
        assert_eq!(breakdown.credit_card_score, 0.0);
        assert_eq!(breakdown.goals_score, 10.0);
    }

    #[test]
    fn test_savings_score_unbounded_below() {
        // Negative savings drive the savings sub-score below zero; only
        // the upper bound is enforced
        let p = profile(1000.0, -2000.0, 0.0, 0.0, 0.0, 0.0);
        let breakdown = score(&p).unwrap();

        assert_eq!(breakdown.savings_score, -200.0);
        assert!(breakdown.total_score < 0.0);
    }

    #[test]
    fn test_penalized_categories_are_case_sensitive() {
        let mut with_exact = profile(1000.0, 200.0, 0.0, 0.0, 0.0, 0.0);
        with_exact.category_distribution = IndexMap::from([("Travel".to_string(), 50.0)]);

        let mut with_lowercase = profile(1000.0, 200.0, 0.0, 0.0, 0.0, 0.0);
        with_lowercase.category_distribution = IndexMap::from([("travel".to_string(), 50.0)]);

        assert_eq!(score(&with_exact).unwrap().category_score, 5.0);
        assert_eq!(score(&with_lowercase).unwrap().category_score, 10.0);
    }

    #[test]
    fn test_non_penalized_categories_do_not_affect_score() {
        let mut p = profile(1000.0, 200.0, 0.0, 0.0, 0.0, 0.0);
        p.category_distribution = IndexMap::from([
            ("Groceries".to_string(), 900.0),
            ("Rent".to_string(), 5000.0),
        ]);
        let breakdown = score(&p).unwrap();

        assert_eq!(breakdown.category_score, 10.0);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // savings_ratio = 1/3: raw sub-score 33.33... capped at 30;
        // expenses_ratio = 1/3: 20 - 6.66... = 13.33...
        let p = profile(3000.0, 1000.0, 1000.0, 0.0, 0.0, 0.0);
        let breakdown = score(&p).unwrap();

        assert_eq!(breakdown.savings_score, 30.0);
        assert_eq!(breakdown.expenses_score, 13.33);
        assert_eq!(breakdown.loan_score, 20.0);
    }

    #[test]
    fn test_determinism() {
        let p = healthy_profile();
        let first = score(&p).unwrap();
        let second = score(&p).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
