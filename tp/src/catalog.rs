//! Spending categories and their option catalogs
//!
//! A catalog holds one list of offers per category. Four categories are
//! single-choice (at most one offer is picked); three are multi-choice and
//! carry a sub-budget cap that bounds the combined price of the picked offers.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Whole currency units
pub type Amount = u64;

/// Default upper bound on options in a multi-choice category
pub const DEFAULT_MAX_MULTI_CHOICE_OPTIONS: usize = 20;

/// A slot in the trip plan, in search order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flight,
    Communication,
    Lodging,
    Dining,
    Transport,
    Touring,
    Shopping,
}

impl Category {
    /// Every category in the order the planner visits them
    pub const ALL: [Category; 7] = [
        Self::Flight,
        Self::Communication,
        Self::Lodging,
        Self::Dining,
        Self::Transport,
        Self::Touring,
        Self::Shopping,
    ];

    /// True for categories that select a subset of their offers
    pub fn is_multi_choice(self) -> bool {
        matches!(self, Self::Dining | Self::Touring | Self::Shopping)
    }

    /// Human-readable label for reports
    pub fn label(self) -> &'static str {
        match self {
            Self::Flight => "Flight",
            Self::Communication => "Communication",
            Self::Lodging => "Lodging",
            Self::Dining => "Dining",
            Self::Transport => "Transport",
            Self::Touring => "Touring",
            Self::Shopping => "Shopping",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flight => write!(f, "flight"),
            Self::Communication => write!(f, "communication"),
            Self::Lodging => write!(f, "lodging"),
            Self::Dining => write!(f, "dining"),
            Self::Transport => write!(f, "transport"),
            Self::Touring => write!(f, "touring"),
            Self::Shopping => write!(f, "shopping"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// A named, priced entry in a category catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    pub price: Amount,
}

impl Offer {
    pub fn new(name: impl Into<String>, price: Amount) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Offers for one category, plus the sub-budget cap for multi-choice ones
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap: Option<Amount>,

    #[serde(default)]
    pub options: Vec<Offer>,
}

impl CategoryCatalog {
    pub fn single(options: Vec<Offer>) -> Self {
        Self { cap: None, options }
    }

    pub fn multi(cap: Amount, options: Vec<Offer>) -> Self {
        Self { cap: Some(cap), options }
    }

    /// Price of the cheapest offer, if any
    pub fn cheapest(&self) -> Option<Amount> {
        self.options.iter().map(|o| o.price).min()
    }
}

/// Limits applied when validating a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest multi-choice catalog accepted; bounds recursion depth and the 2^n subset space
    pub max_multi_choice_options: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_multi_choice_options: DEFAULT_MAX_MULTI_CHOICE_OPTIONS,
        }
    }
}

/// The complete catalog, one entry per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub flight: CategoryCatalog,
    pub communication: CategoryCatalog,
    pub lodging: CategoryCatalog,
    pub dining: CategoryCatalog,
    pub transport: CategoryCatalog,
    pub touring: CategoryCatalog,
    pub shopping: CategoryCatalog,
}

impl Catalog {
    pub fn get(&self, category: Category) -> &CategoryCatalog {
        match category {
            Category::Flight => &self.flight,
            Category::Communication => &self.communication,
            Category::Lodging => &self.lodging,
            Category::Dining => &self.dining,
            Category::Transport => &self.transport,
            Category::Touring => &self.touring,
            Category::Shopping => &self.shopping,
        }
    }

    /// Check the catalog for defects, reporting the first one in search order
    pub fn validate(&self, limits: &Limits) -> Result<(), ConfigurationError> {
        for category in Category::ALL {
            let entry = self.get(category);

            if entry.options.is_empty() {
                return Err(ConfigurationError::EmptyCategory { category });
            }

            if let Some(index) = entry.options.iter().position(|o| o.name.trim().is_empty()) {
                return Err(ConfigurationError::BlankOptionName { category, index });
            }

            match (category.is_multi_choice(), entry.cap) {
                (true, None) => return Err(ConfigurationError::MissingCap { category }),
                (false, Some(_)) => return Err(ConfigurationError::UnexpectedCap { category }),
                _ => {}
            }

            if category.is_multi_choice() && entry.options.len() > limits.max_multi_choice_options {
                return Err(ConfigurationError::TooManyOptions {
                    category,
                    count: entry.options.len(),
                    limit: limits.max_multi_choice_options,
                });
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    /// Seoul trip catalog, prices in Rupiah
    fn default() -> Self {
        Self {
            flight: CategoryCatalog::single(vec![Offer::new("Round trip Jakarta-Seoul", 19_000_000)]),
            communication: CategoryCatalog::single(vec![
                Offer::new("Basic data plan", 250_000),
                Offer::new("Standard data plan", 500_000),
                Offer::new("Unlimited data plan", 800_000),
            ]),
            lodging: CategoryCatalog::single(vec![
                Offer::new("Shilla Stay standard room", 7_000_000),
                Offer::new("Shilla Stay superior room", 10_000_000),
                Offer::new("Shilla Stay deluxe room", 14_000_000),
            ]),
            dining: CategoryCatalog::multi(
                2_000_000,
                vec![
                    Offer::new("Tosokchon Samgyetang", 300_000),
                    Offer::new("Samyukga", 400_000),
                    Offer::new("Osege Hyang", 350_000),
                    Offer::new("Mouse Rabbit Coffee", 150_000),
                    Offer::new("Cloudy Sky", 200_000),
                ],
            ),
            transport: CategoryCatalog::single(vec![Offer::new("Taxi", 500_000)]),
            touring: CategoryCatalog::multi(
                2_100_000,
                vec![
                    Offer::new("Lotte World", 800_000),
                    Offer::new("Myeongdong Street", 0),
                    Offer::new("Nami Island", 600_000),
                    Offer::new("N Seoul Tower", 700_000),
                ],
            ),
            shopping: CategoryCatalog::multi(
                3_000_000,
                vec![
                    Offer::new("Myeongdong Street", 1_000_000),
                    Offer::new("Olive Young", 500_000),
                    Offer::new("Goto Mall", 800_000),
                    Offer::new("Music Korea", 700_000),
                ],
            ),
        }
    }
}
