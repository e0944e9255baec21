//! Lead-fit scoring engine.
//!
//! Combines qualitative sub-criterion ratings with the overall category
//! weights into a weighted percentage score plus a per-category breakdown.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::rating::{sub_criteria, RatingSet};
use crate::error::{IcpError, Result};
use crate::weights::{OverallCategory, OverallWeights};

/// Scoring engine version, recorded in JSON reports.
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Fit band derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[non_exhaustive]
pub enum FitBand {
    /// 80-100: strong ICP match
    High,
    /// 60-79.9: partial match worth pursuing
    Medium,
    /// Below 60: weak match
    Low,
}

impl FitBand {
    /// Band for a total score. Lower bounds are inclusive.
    #[must_use]
    pub fn from_total(total: f64) -> Self {
        if total >= 80.0 {
            Self::High
        } else if total >= 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Human-readable band label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High fit",
            Self::Medium => "Medium fit",
            Self::Low => "Low fit",
        }
    }

    /// Short guidance for this band.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::High => "Strong ICP match; prioritize outreach",
            Self::Medium => "Partial match; qualify further before outreach",
            Self::Low => "Weak match; deprioritize",
        }
    }
}

/// Suggestion for improving a lead's fit assessment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// Priority (1 = highest, 5 = lowest)
    pub priority: u8,
    /// Category the recommendation concerns
    pub category: OverallCategory,
    /// Human-readable message
    pub message: String,
    /// Maximum score points recoverable in this category (0-100)
    pub potential_gain: f64,
}

/// Computed lead score.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[must_use]
pub struct LeadScore {
    /// Total weighted score (0-100, one decimal place)
    pub total: f64,
    /// Fit band for the total
    pub band: FitBand,
    /// Per-category contribution (0-100, one decimal place), in scoring order
    pub breakdown: IndexMap<String, f64>,
    /// Prioritized improvement suggestions
    pub recommendations: Vec<Recommendation>,
}

/// Lead-fit scorer over a fixed set of category weights.
///
/// The weights are used exactly as given; an unbalanced group is the
/// caller's concern and does not block scoring.
#[derive(Debug, Clone, Copy)]
pub struct LeadScorer {
    weights: OverallWeights,
}

impl LeadScorer {
    /// Create a scorer with the given category weights.
    pub const fn new(weights: OverallWeights) -> Self {
        Self { weights }
    }

    /// Score a lead from its sub-criterion ratings.
    ///
    /// Fails before any arithmetic when a required rating is missing or an
    /// unknown sub-criterion is present.
    pub fn score(&self, ratings: &RatingSet) -> Result<LeadScore> {
        ratings.validate_complete()?;

        let mut breakdown = IndexMap::new();
        let mut category_fractions = Vec::with_capacity(OverallCategory::all().len());
        let mut sum = 0.0_f64;

        for &category in OverallCategory::all() {
            let fraction = self.category_fraction(category, ratings)?;
            let weighted = fraction * f64::from(self.weights.get(category)) / 100.0;
            sum += weighted;
            breakdown.insert(category.name().to_string(), round1(weighted * 100.0));
            category_fractions.push((category, fraction));
        }

        let total = round1(sum * 100.0);
        let recommendations = self.generate_recommendations(&category_fractions);

        Ok(LeadScore {
            total,
            band: FitBand::from_total(total),
            breakdown,
            recommendations,
        })
    }

    /// Mean rating value for a category's three sub-criteria (0.0-1.0).
    fn category_fraction(&self, category: OverallCategory, ratings: &RatingSet) -> Result<f64> {
        let mut sum = 0.0;
        for criterion in sub_criteria(category) {
            let rating = ratings
                .get(criterion)
                .ok_or_else(|| IcpError::missing_rating(criterion))?;
            sum += rating.value();
        }
        Ok(sum / 3.0)
    }

    /// Derive improvement suggestions from the weakest categories.
    fn generate_recommendations(
        &self,
        fractions: &[(OverallCategory, f64)],
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        for &(category, fraction) in fractions {
            let weight = f64::from(self.weights.get(category));
            if weight == 0.0 {
                continue;
            }
            // Points this category leaves on the table
            let potential_gain = round1((1.0 - fraction) * weight);
            if potential_gain < 5.0 {
                continue;
            }

            let priority = if fraction < 0.25 {
                1
            } else if fraction < 0.5 {
                2
            } else {
                3
            };
            recommendations.push(Recommendation {
                priority,
                category,
                message: format!(
                    "{} fit is weak ({:.0}% of its sub-criteria); verify the lead's {} data",
                    capitalize(category.name()),
                    fraction * 100.0,
                    category.name()
                ),
                potential_gain,
            });
        }

        if !self.weights.status().balanced {
            recommendations.push(Recommendation {
                priority: 1,
                category: OverallCategory::Company,
                message: format!(
                    "Category weights sum to {}%, not 100%; normalize the profile weights",
                    self.weights.status().total
                ),
                potential_gain: 0.0,
            });
        }

        // Sort by priority, then by potential gain
        recommendations.sort_by(|a, b| {
            a.priority.cmp(&b.priority).then_with(|| {
                b.potential_gain
                    .partial_cmp(&a.potential_gain)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        recommendations
    }
}

impl Default for LeadScorer {
    fn default() -> Self {
        Self::new(OverallWeights::default())
    }
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Rating;

    fn equal_weights() -> OverallWeights {
        OverallWeights {
            company: 25,
            individual: 25,
            technical: 25,
            market: 25,
        }
    }

    #[test]
    fn test_all_high_equal_weights() {
        let scorer = LeadScorer::new(equal_weights());
        let score = scorer.score(&RatingSet::uniform(Rating::High)).unwrap();
        assert_eq!(score.total, 100.0);
        assert_eq!(score.band, FitBand::High);
        for (_, contribution) in &score.breakdown {
            assert_eq!(*contribution, 25.0);
        }
    }

    #[test]
    fn test_all_none_scores_zero() {
        let scorer = LeadScorer::new(equal_weights());
        let score = scorer.score(&RatingSet::uniform(Rating::None)).unwrap();
        assert_eq!(score.total, 0.0);
        assert_eq!(score.band, FitBand::Low);
        for (_, contribution) in &score.breakdown {
            assert_eq!(*contribution, 0.0);
        }
    }

    #[test]
    fn test_mixed_individual_ratings() {
        let weights = OverallWeights {
            individual: 30,
            company: 30,
            technical: 20,
            market: 20,
        };
        let mut ratings = RatingSet::uniform(Rating::None);
        ratings.insert("role", Rating::High);
        ratings.insert("decision_authority", Rating::Medium);
        ratings.insert("department_fit", Rating::Low);

        let score = LeadScorer::new(weights).score(&ratings).unwrap();
        // (1.0 + 0.5 + 0.25) / 3 * 0.30 = 0.175
        assert_eq!(score.breakdown["individual"], 17.5);
        assert_eq!(score.total, 17.5);
    }

    #[test]
    fn test_missing_rating_is_explicit_error() {
        let mut ratings = RatingSet::uniform(Rating::High);
        let mut incomplete = RatingSet::new();
        for (name, rating) in ratings.iter() {
            if name != "timing" {
                incomplete.insert(name, rating);
            }
        }
        ratings = incomplete;

        let err = LeadScorer::default().score(&ratings).unwrap_err();
        assert!(err.to_string().contains("Scoring"), "{err}");
    }

    #[test]
    fn test_unbalanced_weights_still_score() {
        // Weights sum to 120; calculator uses them as-is
        let weights = OverallWeights {
            company: 30,
            individual: 30,
            technical: 30,
            market: 30,
        };
        let score = LeadScorer::new(weights)
            .score(&RatingSet::uniform(Rating::High))
            .unwrap();
        assert_eq!(score.total, 120.0);
        // The unbalanced group surfaces as a priority-1 recommendation
        assert!(score
            .recommendations
            .iter()
            .any(|r| r.priority == 1 && r.message.contains("120%")));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(FitBand::from_total(80.0), FitBand::High);
        assert_eq!(FitBand::from_total(79.9), FitBand::Medium);
        assert_eq!(FitBand::from_total(60.0), FitBand::Medium);
        assert_eq!(FitBand::from_total(59.9), FitBand::Low);
        assert_eq!(FitBand::from_total(0.0), FitBand::Low);
        assert_eq!(FitBand::from_total(100.0), FitBand::High);
    }

    #[test]
    fn test_recommendations_target_weak_categories() {
        let mut ratings = RatingSet::uniform(Rating::High);
        for criterion in super::super::rating::sub_criteria(OverallCategory::Technical) {
            ratings.insert(criterion, Rating::None);
        }
        let score = LeadScorer::new(equal_weights()).score(&ratings).unwrap();

        assert_eq!(score.recommendations.len(), 1);
        let rec = &score.recommendations[0];
        assert_eq!(rec.category, OverallCategory::Technical);
        assert_eq!(rec.priority, 1);
        assert_eq!(rec.potential_gain, 25.0);
    }

    #[test]
    fn test_breakdown_order_is_scoring_order() {
        let score = LeadScorer::default()
            .score(&RatingSet::uniform(Rating::Medium))
            .unwrap();
        let keys: Vec<&str> = score.breakdown.keys().map(String::as_str).collect();
        assert_eq!(keys, ["individual", "company", "technical", "market"]);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(17.4999999), 17.5);
        assert_eq!(round1(0.04), 0.0);
        assert_eq!(round1(99.95), 100.0);
    }
}
