//! ICP profile data model.
//!
//! The canonical on-disk shape is a document with a single `customer_icp`
//! object holding the profile overview, the four weight groups, the
//! categorical criteria lists, and the minimum company requirements. Every
//! field is optional on load and falls back to its documented default.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::weights::IcpWeights;

/// Default upper bound for employee count when the profile omits one.
pub const DEFAULT_EMPLOYEE_COUNT_MAX: u64 = 999_999;

/// Top-level profile document (the canonical serialized shape).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IcpDocument {
    pub customer_icp: IcpProfile,
}

/// An Ideal Customer Profile: weights, criteria, and requirements used to
/// score sales leads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IcpProfile {
    /// Free-text description of the target customer
    pub profile_overview: String,
    /// The four weight groups
    pub weights: IcpWeights,
    /// Categorical criteria lists (industries, technologies, ...)
    pub criteria: CriteriaSet,
    /// Target departments within the buyer organization
    pub target_departments: Vec<String>,
    /// Target job titles
    pub job_titles: Vec<String>,
    /// Decision-making authority levels
    pub decision_making_authority: Vec<String>,
    /// Skills the target individual should have
    pub required_skills: Vec<String>,
    /// Disqualifying criteria
    pub negative_criteria: Vec<String>,
    /// Hard company-size requirements
    pub minimum_requirements: MinimumRequirements,
}

/// Ordered free-text criteria lists per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CriteriaSet {
    pub industries: Vec<String>,
    pub business_models: Vec<String>,
    pub technologies: Vec<String>,
    pub locations: Vec<String>,
    pub growth_stages: Vec<String>,
}

impl CriteriaSet {
    /// Total number of criteria entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.industries.len()
            + self.business_models.len()
            + self.technologies.len()
            + self.locations.len()
            + self.growth_stages.len()
    }

    /// True when no category has any entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Minimum company-size requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MinimumRequirements {
    pub employee_count_min: u64,
    pub employee_count_max: u64,
}

impl Default for MinimumRequirements {
    fn default() -> Self {
        Self {
            employee_count_min: 0,
            employee_count_max: DEFAULT_EMPLOYEE_COUNT_MAX,
        }
    }
}

impl MinimumRequirements {
    /// Check whether an employee count falls within the required range.
    #[must_use]
    pub const fn matches_employee_count(&self, count: u64) -> bool {
        count >= self.employee_count_min && count <= self.employee_count_max
    }
}
