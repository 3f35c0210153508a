//! Finwell Core Library
//!
//! Shared functionality for the Finwell financial-health scorer:
//! - Financial profile and score breakdown models
//! - The weighted six-component scoring formula
//! - Rule-based insight and recommendation generation
//! - Spending-distribution bar chart rendering (PNG)
//! - Single-slot store for the last-rendered chart artifact

pub mod chart;
pub mod error;
pub mod models;
pub mod score;
pub mod store;

pub use chart::render_spending_chart;
pub use error::{Error, Result};
pub use models::{FinancialProfile, ScoreBreakdown};
pub use score::score;
pub use store::{ChartArtifact, GraphStore, ARTIFACT_FILENAME};
