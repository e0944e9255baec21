//! Qualitative ratings and the sub-criterion registry.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{IcpError, ParseErrorKind, Result, ScoringErrorKind};
use crate::weights::OverallCategory;

/// Qualitative rating assigned to a sub-criterion during lead evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    High,
    Medium,
    Low,
    None,
}

impl Rating {
    /// Numeric value used by the score calculator.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::High => 1.0,
            Self::Medium => 0.5,
            Self::Low => 0.25,
            Self::None => 0.0,
        }
    }

    /// Rating label as used in ratings files.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        }
    }
}

impl FromStr for Rating {
    type Err = IcpError;

    /// Parse a rating label, rejecting anything outside the closed set.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "none" => Ok(Self::None),
            other => Err(IcpError::parse(
                "rating label",
                ParseErrorKind::UnknownRatingLabel {
                    label: other.to_string(),
                },
            )),
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The three sub-criteria rated for a category.
///
/// Every category has exactly three; the calculator averages their rating
/// values before applying the category weight.
#[must_use]
pub const fn sub_criteria(category: OverallCategory) -> [&'static str; 3] {
    match category {
        OverallCategory::Individual => ["role", "decision_authority", "department_fit"],
        OverallCategory::Company => ["industry_fit", "size_fit", "growth_fit"],
        OverallCategory::Technical => ["tech_stack", "integration", "infrastructure"],
        OverallCategory::Market => ["market_position", "competition", "timing"],
    }
}

/// All known sub-criterion names in scoring order.
#[must_use]
pub fn all_sub_criteria() -> Vec<&'static str> {
    OverallCategory::all()
        .iter()
        .flat_map(|&c| sub_criteria(c))
        .collect()
}

/// Ordered sub-criterion ratings for a lead under evaluation.
///
/// Insertion order is preserved so reports list criteria the way the
/// ratings file did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingSet {
    ratings: IndexMap<String, Rating>,
}

impl RatingSet {
    /// Create an empty rating set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a rating, returning the previous value if any.
    pub fn insert(&mut self, criterion: impl Into<String>, rating: Rating) -> Option<Rating> {
        self.ratings.insert(criterion.into(), rating)
    }

    /// Look up a rating by sub-criterion name.
    #[must_use]
    pub fn get(&self, criterion: &str) -> Option<Rating> {
        self.ratings.get(criterion).copied()
    }

    /// Number of ratings present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// True when no ratings are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Iterate over (criterion, rating) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rating)> {
        self.ratings.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Verify that every required sub-criterion is rated and that no
    /// unknown names are present.
    ///
    /// This runs before any arithmetic so a gap surfaces as an explicit
    /// error instead of propagating through the score.
    pub fn validate_complete(&self) -> Result<()> {
        let known = all_sub_criteria();

        for name in self.ratings.keys() {
            if !known.contains(&name.as_str()) {
                return Err(IcpError::Scoring(ScoringErrorKind::UnknownCriterion {
                    criterion: name.clone(),
                }));
            }
        }

        for name in known {
            if !self.ratings.contains_key(name) {
                return Err(IcpError::missing_rating(name));
            }
        }
        Ok(())
    }

    /// Build a fully-populated set with every sub-criterion at `rating`.
    #[must_use]
    pub fn uniform(rating: Rating) -> Self {
        let mut set = Self::new();
        for name in all_sub_criteria() {
            set.insert(name, rating);
        }
        set
    }
}
