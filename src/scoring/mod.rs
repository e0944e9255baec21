//! Lead-fit scoring.
//!
//! Pure calculator that turns qualitative sub-criterion ratings and the
//! overall category weights into a weighted percentage score with a
//! per-category breakdown and improvement recommendations.
//!
//! # Usage
//!
//! ```
//! use icp_tools::scoring::{LeadScorer, Rating, RatingSet};
//! use icp_tools::weights::OverallWeights;
//!
//! let scorer = LeadScorer::new(OverallWeights::default());
//! let score = scorer.score(&RatingSet::uniform(Rating::High)).unwrap();
//! assert_eq!(score.total, 100.0);
//! ```

mod rating;
mod scorer;

pub use rating::{all_sub_criteria, sub_criteria, Rating, RatingSet};
pub use scorer::{
    FitBand, LeadScore, LeadScorer, Recommendation, SCORING_ENGINE_VERSION,
};
