//! Plan snapshots and the best-plan accumulator
//!
//! Partial plans are `Copy` snapshots: running totals plus the tail index of a
//! parent-linked chain of selections stored in a [`SelectionArena`]. Branching
//! pushes one arena node instead of copying the whole plan, and the search
//! truncates the arena when it backtracks out of a subtree. Only the best plan
//! owns a materialised copy of its offers.

use std::collections::BTreeMap;

use crate::catalog::{Amount, Catalog, Category, Offer};

type NodeId = usize;

/// One offer picked along a search path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    category: Category,
    offer: usize,
    parent: Option<NodeId>,
}

/// Append-only storage for selections shared between plan snapshots
#[derive(Debug, Default)]
pub(crate) struct SelectionArena {
    nodes: Vec<Selection>,
}

impl SelectionArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, selection: Selection) -> NodeId {
        self.nodes.push(selection);
        self.nodes.len() - 1
    }

    /// Current high-water mark, to be passed back to [`SelectionArena::release`]
    pub(crate) fn mark(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every node created since `mark`
    ///
    /// Snapshots created before the mark stay valid; snapshots created after
    /// it must no longer be used.
    pub(crate) fn release(&mut self, mark: usize) {
        self.nodes.truncate(mark);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Selections reachable from `tail`, newest first
    fn walk(&self, tail: Option<NodeId>) -> impl Iterator<Item = &Selection> {
        std::iter::successors(tail.map(|id| &self.nodes[id]), |s| s.parent.map(|id| &self.nodes[id]))
    }
}

/// An in-progress plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PartialPlan {
    tail: Option<NodeId>,
    total_cost: Amount,
    remaining_budget: Amount,
}

impl PartialPlan {
    pub(crate) fn empty(total_budget: Amount) -> Self {
        Self {
            tail: None,
            total_cost: 0,
            remaining_budget: total_budget,
        }
    }

    pub(crate) fn total_cost(&self) -> Amount {
        self.total_cost
    }

    pub(crate) fn remaining_budget(&self) -> Amount {
        self.remaining_budget
    }

    /// Child snapshot with offer `offer` of `category` added
    ///
    /// Callers check affordability first; `price` never exceeds the remaining budget.
    pub(crate) fn select(self, arena: &mut SelectionArena, category: Category, offer: usize, price: Amount) -> Self {
        debug_assert!(price <= self.remaining_budget);
        let tail = arena.push(Selection {
            category,
            offer,
            parent: self.tail,
        });
        Self {
            tail: Some(tail),
            total_cost: self.total_cost + price,
            remaining_budget: self.remaining_budget - price,
        }
    }
}

/// The highest-cost complete plan found by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPlan {
    total_budget: Amount,
    total_cost: Amount,
    remaining_budget: Amount,
    selections: BTreeMap<Category, Vec<Offer>>,
}

impl BestPlan {
    /// The all-zero plan a search starts from
    pub fn initial(total_budget: Amount) -> Self {
        Self {
            total_budget,
            total_cost: 0,
            remaining_budget: total_budget,
            selections: BTreeMap::new(),
        }
    }

    pub fn total_budget(&self) -> Amount {
        self.total_budget
    }

    pub fn total_cost(&self) -> Amount {
        self.total_cost
    }

    pub fn remaining_budget(&self) -> Amount {
        self.remaining_budget
    }

    /// Offers selected in `category`, in catalog order
    pub fn selected(&self, category: Category) -> &[Offer] {
        self.selections.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The offer chosen for a single-choice category, if any
    pub fn single(&self, category: Category) -> Option<&Offer> {
        self.selected(category).first()
    }

    /// Combined price of the offers selected in `category`
    pub fn subtotal(&self, category: Category) -> Amount {
        self.selected(category).iter().map(|o| o.price).sum()
    }

    /// True when nothing was selected in any category
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Adopt `plan` if it costs strictly more than the current best
    ///
    /// Ties keep the plan found first. Returns whether the best plan changed.
    pub(crate) fn consider(&mut self, plan: &PartialPlan, arena: &SelectionArena, catalog: &Catalog) -> bool {
        if plan.total_cost <= self.total_cost {
            return false;
        }

        let mut selections: BTreeMap<Category, Vec<Offer>> = BTreeMap::new();
        for selection in arena.walk(plan.tail) {
            let offer = catalog.get(selection.category).options[selection.offer].clone();
            selections.entry(selection.category).or_default().push(offer);
        }
        for offers in selections.values_mut() {
            offers.reverse();
        }

        self.total_cost = plan.total_cost;
        self.remaining_budget = plan.remaining_budget;
        self.selections = selections;
        true
    }
}
