//! Catalog configuration errors

use thiserror::Error;

use crate::catalog::Category;

/// Defects in a category catalog that prevent planning
///
/// An unaffordable option is never an error; the planner prunes it. These
/// variants cover catalogs that are malformed before any budget is applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Category {category} has no options")]
    EmptyCategory { category: Category },

    #[error("Multi-choice category {category} has no sub-budget cap")]
    MissingCap { category: Category },

    #[error("Single-choice category {category} cannot have a sub-budget cap")]
    UnexpectedCap { category: Category },

    #[error("Option #{index} in category {category} has a blank name")]
    BlankOptionName { category: Category, index: usize },

    #[error("Category {category} has {count} options, limit is {limit}")]
    TooManyOptions {
        category: Category,
        count: usize,
        limit: usize,
    },
}
