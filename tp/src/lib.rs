//! tripplan - budget-constrained trip planner
//!
//! Enumerates every combination of spending options across seven categories
//! by depth-first backtracking and keeps the combination that spends the most
//! without exceeding the total budget or any category's sub-budget cap.
//!
//! # Search order
//!
//! ```text
//! flight -> communication -> lodging -> dining -> transport -> touring -> shopping
//! single    single           single     multi     single       multi      multi
//! ```
//!
//! # Example
//!
//! ```
//! use tripplan::{Catalog, Limits, Planner};
//!
//! let planner = Planner::new(Catalog::default(), &Limits::default())?;
//! let outcome = planner.plan(50_000_000);
//! assert!(outcome.best.total_cost() <= 50_000_000);
//! # Ok::<(), tripplan::ConfigurationError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
mod plan;
pub mod planner;
pub mod report;

pub use catalog::{Amount, Catalog, Category, CategoryCatalog, Limits, Offer};
pub use error::ConfigurationError;
pub use plan::BestPlan;
pub use planner::{PlanOutcome, Planner, SearchStats};
pub use report::{CatalogView, PlanReport};

/// Budget used when none is given (Rp 50,000,000)
pub const DEFAULT_BUDGET: Amount = 50_000_000;

/// Currency prefix for text output
pub const DEFAULT_CURRENCY: &str = "Rp";
