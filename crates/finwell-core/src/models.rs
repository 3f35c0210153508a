//! Domain models for Finwell

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Financial inputs for a single household scoring request.
///
/// All monetary amounts are in one consistent (unspecified) currency unit.
/// `category_distribution` keeps JSON insertion order because the chart
/// renderer lays bars out in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub income: f64,
    pub savings: f64,
    pub monthly_expenses: f64,
    pub loan_payments: f64,
    pub credit_card_spending: f64,
    /// Percentage of financial goals met, 0-100
    pub financial_goals_met: f64,
    /// Spending by category, e.g. {"Travel": 5000, "Groceries": 3000}
    pub category_distribution: IndexMap<String, f64>,
}

impl FinancialProfile {
    /// Load a profile from a JSON file (the CLI input format).
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Result of scoring a [`FinancialProfile`].
///
/// Sub-scores are rounded to 2 decimal places; the total is the sum of the
/// unrounded sub-scores, rounded once. Field names on the wire are the
/// legacy API's, spaces and all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// min(savings/income * 100, 30)
    #[serde(rename = "savings Score")]
    pub savings_score: f64,
    /// max(20 - monthly_expenses/income * 20, 0)
    #[serde(rename = "expenses Score")]
    pub expenses_score: f64,
    /// max(20 - loan_payments/income * 20, 0)
    #[serde(rename = "loan Score")]
    pub loan_score: f64,
    /// max(10 - credit_card_spending/income * 10, 0)
    #[serde(rename = "credit Card Score")]
    pub credit_card_score: f64,
    /// max(10 - penalized_spend/income * 100, 0)
    #[serde(rename = "category Score")]
    pub category_score: f64,
    /// financial_goals_met * 0.1
    #[serde(rename = "goals Score")]
    pub goals_score: f64,
    /// Sum of the six sub-scores, not clamped
    #[serde(rename = "total Score")]
    pub total_score: f64,
    /// Findings, in fixed rule order: savings, expenses, loan, credit card
    pub insights: Vec<String>,
    /// One paired recommendation per fired rule, same order as insights
    pub recommendations: Vec<String>,
}
