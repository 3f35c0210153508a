//! Score command implementation

use std::path::Path;

use anyhow::{Context, Result};

use finwell_core::{render_spending_chart, score, ChartArtifact, FinancialProfile};

pub fn cmd_score(file: &Path, graph: &Path, as_json: bool) -> Result<()> {
    let profile = FinancialProfile::load(file)
        .with_context(|| format!("Failed to load profile from {}", file.display()))?;

    let breakdown = score(&profile).context("Failed to score profile")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("Financial health breakdown");
        println!("  Savings:      {:>7.2} / 30", breakdown.savings_score);
        println!("  Expenses:     {:>7.2} / 20", breakdown.expenses_score);
        println!("  Loans:        {:>7.2} / 20", breakdown.loan_score);
        println!("  Credit card:  {:>7.2} / 10", breakdown.credit_card_score);
        println!("  Categories:   {:>7.2} / 10", breakdown.category_score);
        println!("  Goals:        {:>7.2} / 10", breakdown.goals_score);
        println!("  Total:        {:>7.2} / 100", breakdown.total_score);
        println!();
        println!("Insights:");
        for insight in &breakdown.insights {
            println!("  - {}", insight);
        }
        if !breakdown.recommendations.is_empty() {
            println!();
            println!("Recommendations:");
            for recommendation in &breakdown.recommendations {
                println!("  - {}", recommendation);
            }
        }
    }

    let png = render_spending_chart(&profile.category_distribution)
        .context("Failed to render spending chart")?;
    ChartArtifact::new(png)
        .write_to(graph)
        .with_context(|| format!("Failed to write chart to {}", graph.display()))?;

    println!();
    println!("📊 Chart written to {}", graph.display());

    Ok(())
}
