//! Presentation of plans and catalogs
//!
//! [`PlanReport`] is the structured form of a planning outcome, serialisable
//! with serde. Its `Display` impl renders the numbered breakdown printed by
//! `tp plan`.

use std::fmt;

use colored::*;
use serde::Serialize;

use crate::catalog::{Amount, Catalog, Category, Offer};
use crate::planner::{PlanOutcome, SearchStats};

/// Selections for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub multi_choice: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap: Option<Amount>,
    pub selected: Vec<Offer>,
    pub subtotal: Amount,
}

/// Structured view of the best plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub currency: String,
    pub total_budget: Amount,
    pub categories: Vec<CategoryReport>,
    pub total_cost: Amount,
    pub remaining_budget: Amount,
    pub stats: SearchStats,
}

impl PlanReport {
    pub fn new(catalog: &Catalog, outcome: &PlanOutcome, currency: impl Into<String>) -> Self {
        let best = &outcome.best;
        let categories = Category::ALL
            .into_iter()
            .map(|category| CategoryReport {
                category,
                multi_choice: category.is_multi_choice(),
                cap: catalog.get(category).cap,
                selected: best.selected(category).to_vec(),
                subtotal: best.subtotal(category),
            })
            .collect();

        Self {
            currency: currency.into(),
            total_budget: best.total_budget(),
            categories,
            total_cost: best.total_cost(),
            remaining_budget: best.remaining_budget(),
            stats: outcome.stats,
        }
    }

    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = |amount| format_amount(amount, &self.currency);

        writeln!(f, "{}", "=== TRIP PLAN ===".bold())?;
        writeln!(f, "Total budget: {}", money(self.total_budget).cyan())?;
        writeln!(f)?;
        writeln!(f, "Breakdown:")?;

        for (n, entry) in self.categories.iter().enumerate() {
            let label = entry.category.label();
            if !entry.multi_choice {
                match entry.selected.first() {
                    Some(offer) => writeln!(f, "{}. {}: {} ({})", n + 1, label, offer.name, money(offer.price))?,
                    None => writeln!(f, "{}. {}: {}", n + 1, label, "none".dimmed())?,
                }
                continue;
            }

            writeln!(f)?;
            match entry.cap {
                Some(cap) => writeln!(f, "{}. {} (cap {}):", n + 1, label, money(cap))?,
                None => writeln!(f, "{}. {}:", n + 1, label)?,
            }
            if entry.selected.is_empty() {
                writeln!(f, "   {}", "none".dimmed())?;
            }
            for offer in &entry.selected {
                writeln!(f, "   - {}: {}", offer.name, money(offer.price))?;
            }
            writeln!(f, "   Total {}: {}", label, money(entry.subtotal))?;
        }

        writeln!(f)?;
        writeln!(f, "{}", "=== SUMMARY ===".bold())?;
        writeln!(f, "Total cost: {}", money(self.total_cost).green())?;
        writeln!(f, "Remaining budget: {}", money(self.remaining_budget).yellow())?;
        write!(
            f,
            "{}",
            format!(
                "Searched {} nodes, {} complete plans, {} improvements",
                self.stats.nodes, self.stats.complete_plans, self.stats.improvements
            )
            .dimmed()
        )
    }
}

/// Text listing of a catalog
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
    currency: &'a str,
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a Catalog, currency: &'a str) -> Self {
        Self { catalog, currency }
    }
}

impl fmt::Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, category) in Category::ALL.into_iter().enumerate() {
            let entry = self.catalog.get(category);
            let kind = if category.is_multi_choice() { "multi" } else { "single" };

            if n > 0 {
                writeln!(f)?;
            }
            write!(f, "{} ({})", category.label().bold(), kind)?;
            if let Some(cap) = entry.cap {
                write!(f, ", cap {}", format_amount(cap, self.currency))?;
            }
            writeln!(f)?;
            for offer in &entry.options {
                writeln!(f, "  - {}: {}", offer.name, format_amount(offer.price, self.currency))?;
            }
        }
        Ok(())
    }
}

/// Format an amount with thousands separators, e.g. `Rp 19,000,000`
pub fn format_amount(amount: Amount, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if currency.is_empty() {
        grouped
    } else {
        format!("{} {}", currency, grouped)
    }
}
