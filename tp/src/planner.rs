//! Constrained combinatorial planner
//!
//! Depth-first backtracking over the seven categories in [`Category::ALL`]
//! order. Single-choice categories branch once per affordable offer;
//! multi-choice categories enumerate every non-empty subset that fits both
//! their sub-budget cap and the remaining budget, include-branch first. Every
//! complete plan is offered to the [`BestPlan`] accumulator, which keeps the
//! first plan with the highest total cost.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::catalog::{Amount, Catalog, Category, Limits};
use crate::error::ConfigurationError;
use crate::plan::{BestPlan, PartialPlan, SelectionArena};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search steps entered, both category steps and subset steps
    pub nodes: u64,
    /// Complete plans evaluated against the best plan
    pub complete_plans: u64,
    /// Times the best plan was replaced
    pub improvements: u64,
}

/// Result of a planning run
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub best: BestPlan,
    pub stats: SearchStats,
}

/// Planner over a validated catalog
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Catalog,
}

impl Planner {
    /// Validate `catalog` against `limits` and build a planner for it
    pub fn new(catalog: Catalog, limits: &Limits) -> Result<Self, ConfigurationError> {
        catalog.validate(limits)?;
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find the most expensive plan that fits within `total_budget`
    pub fn plan(&self, total_budget: Amount) -> PlanOutcome {
        debug!(total_budget, "Starting plan search");

        let mut search = Search {
            catalog: &self.catalog,
            arena: SelectionArena::new(),
            best: BestPlan::initial(total_budget),
            stats: SearchStats::default(),
        };
        search.visit(0, PartialPlan::empty(total_budget));

        let Search { best, stats, .. } = search;
        info!(
            total_budget,
            total_cost = best.total_cost(),
            remaining_budget = best.remaining_budget(),
            nodes = stats.nodes,
            complete_plans = stats.complete_plans,
            "Plan search complete"
        );
        PlanOutcome { best, stats }
    }
}

/// Position inside a multi-choice category's subset enumeration
#[derive(Debug, Clone, Copy)]
struct SubsetCursor {
    category: Category,
    depth: usize,
    cap: Amount,
    index: usize,
    subtotal: Amount,
    picked: usize,
}

impl SubsetCursor {
    fn include(self, price: Amount) -> Self {
        Self {
            index: self.index + 1,
            subtotal: self.subtotal + price,
            picked: self.picked + 1,
            ..self
        }
    }

    fn skip(self) -> Self {
        Self {
            index: self.index + 1,
            ..self
        }
    }
}

/// State for one depth-first search, scoped to a single `Planner::plan` call
struct Search<'c> {
    catalog: &'c Catalog,
    arena: SelectionArena,
    best: BestPlan,
    stats: SearchStats,
}

impl Search<'_> {
    fn visit(&mut self, depth: usize, plan: PartialPlan) {
        self.stats.nodes += 1;
        match Category::ALL.get(depth) {
            None => self.complete(plan),
            Some(&category) if category.is_multi_choice() => self.multi_choice(category, depth, plan),
            Some(&category) => self.single_choice(category, depth, plan),
        }
    }

    fn single_choice(&mut self, category: Category, depth: usize, plan: PartialPlan) {
        let catalog = self.catalog;
        let mut admitted = false;

        for (index, offer) in catalog.get(category).options.iter().enumerate() {
            if offer.price > plan.remaining_budget() {
                continue;
            }
            admitted = true;

            let mark = self.arena.mark();
            let child = plan.select(&mut self.arena, category, index, offer.price);
            self.visit(depth + 1, child);
            self.arena.release(mark);
        }

        if !admitted {
            trace!(%category, remaining = plan.remaining_budget(), "No affordable offer, leaving category unselected");
            self.visit(depth + 1, plan);
        }
    }

    fn multi_choice(&mut self, category: Category, depth: usize, plan: PartialPlan) {
        let catalog = self.catalog;
        let entry = catalog.get(category);
        let cap = entry.cap.unwrap_or_default();
        let limit = cap.min(plan.remaining_budget());

        // No single offer fits, so no non-empty subset can
        if entry.cheapest().is_none_or(|price| price > limit) {
            trace!(%category, limit, "No affordable subset, leaving category empty");
            self.visit(depth + 1, plan);
            return;
        }

        let cursor = SubsetCursor {
            category,
            depth,
            cap,
            index: 0,
            subtotal: 0,
            picked: 0,
        };
        self.subset(cursor, plan);
    }

    fn subset(&mut self, cursor: SubsetCursor, plan: PartialPlan) {
        self.stats.nodes += 1;
        let catalog = self.catalog;

        let Some(offer) = catalog.get(cursor.category).options.get(cursor.index) else {
            // Empty subsets are abandoned here
            if cursor.picked > 0 {
                self.visit(cursor.depth + 1, plan);
            }
            return;
        };

        if offer.price <= cursor.cap - cursor.subtotal && offer.price <= plan.remaining_budget() {
            let mark = self.arena.mark();
            let child = plan.select(&mut self.arena, cursor.category, cursor.index, offer.price);
            self.subset(cursor.include(offer.price), child);
            self.arena.release(mark);
        }

        self.subset(cursor.skip(), plan);
    }

    fn complete(&mut self, plan: PartialPlan) {
        self.stats.complete_plans += 1;
        if self.best.consider(&plan, &self.arena, self.catalog) {
            self.stats.improvements += 1;
            debug!(
                total_cost = plan.total_cost(),
                remaining_budget = plan.remaining_budget(),
                "New best plan"
            );
        }
    }
}
