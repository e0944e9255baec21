//! Curated autocomplete suggestion catalogs.
//!
//! Each criteria category carries a static list of common values. Lookup
//! is prefix-first: entries whose name starts with the query rank ahead of
//! fuzzy matches, which are ranked by Jaro-Winkler similarity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum similarity for a non-prefix fuzzy match to be suggested.
const FUZZY_THRESHOLD: f64 = 0.6;

/// Category of suggestion catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionCategory {
    Industries,
    BusinessModels,
    Technologies,
    Locations,
    GrowthStages,
    Departments,
    JobTitles,
    Authority,
    Skills,
    NegativeCriteria,
}

impl SuggestionCategory {
    /// Category name as used on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Industries => "industries",
            Self::BusinessModels => "business-models",
            Self::Technologies => "technologies",
            Self::Locations => "locations",
            Self::GrowthStages => "growth-stages",
            Self::Departments => "departments",
            Self::JobTitles => "job-titles",
            Self::Authority => "authority",
            Self::Skills => "skills",
            Self::NegativeCriteria => "negative-criteria",
        }
    }

    /// All categories.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Industries,
            Self::BusinessModels,
            Self::Technologies,
            Self::Locations,
            Self::GrowthStages,
            Self::Departments,
            Self::JobTitles,
            Self::Authority,
            Self::Skills,
            Self::NegativeCriteria,
        ]
    }

    /// The curated catalog for this category.
    #[must_use]
    pub const fn catalog(&self) -> &'static [&'static str] {
        match self {
            Self::Industries => &[
                "Software & Technology",
                "Financial Services",
                "Healthcare",
                "Manufacturing",
                "Retail & E-commerce",
                "Professional Services",
                "Education",
                "Media & Entertainment",
                "Real Estate",
                "Transportation & Logistics",
            ],
            Self::BusinessModels => &[
                "SaaS",
                "Enterprise Software",
                "Marketplace",
                "B2B Services",
                "B2C Services",
                "Consulting",
                "Hardware & IoT",
                "Subscription",
                "Freemium",
                "Usage-Based",
            ],
            Self::Technologies => &[
                "Cloud Computing",
                "AI/ML",
                "Big Data",
                "IoT",
                "Blockchain",
                "Mobile",
                "Web",
                "DevOps",
                "Security",
                "API-First",
            ],
            Self::Locations => &[
                "North America",
                "Europe",
                "Asia Pacific",
                "Latin America",
                "Middle East",
                "Africa",
                "Global",
            ],
            Self::GrowthStages => &[
                "Startup",
                "Early Growth",
                "Scale-up",
                "Enterprise",
                "Pre-IPO",
                "Public",
            ],
            Self::Departments => &[
                "IT",
                "Engineering",
                "Sales",
                "Marketing",
                "Operations",
                "Finance",
                "HR",
                "Product",
                "Customer Success",
                "Legal",
            ],
            Self::JobTitles => &[
                "CTO",
                "VP of Engineering",
                "Director of IT",
                "Engineering Manager",
                "Solutions Architect",
                "Technical Lead",
                "Product Manager",
                "DevOps Engineer",
                "Software Engineer",
                "System Administrator",
            ],
            Self::Authority => &[
                "Final Decision Maker",
                "Key Influencer",
                "Technical Evaluator",
                "Budget Holder",
                "Implementation Lead",
                "Team Lead",
                "Project Manager",
            ],
            Self::Skills => &[
                "Cloud Architecture",
                "System Design",
                "DevOps",
                "Security",
                "Data Engineering",
                "Full Stack Development",
                "Project Management",
                "Team Leadership",
                "Budget Management",
                "Vendor Management",
            ],
            Self::NegativeCriteria => &[
                "Limited Budget",
                "Recent Technology Implementation",
                "Incompatible Tech Stack",
                "Organizational Restructuring",
                "Hiring Freeze",
                "Budget Freeze",
                "Competitor Lock-in",
                "Limited Technical Resources",
                "Complex Approval Process",
                "Regulatory Constraints",
            ],
        }
    }
}

impl std::fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Suggest catalog entries for a query.
///
/// An empty query returns the whole catalog (up to `limit`). Otherwise
/// case-insensitive prefix matches come first in catalog order, followed
/// by fuzzy matches above the similarity threshold, best first.
#[must_use]
pub fn suggest(category: SuggestionCategory, query: &str, limit: usize) -> Vec<&'static str> {
    let catalog = category.catalog();
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return catalog.iter().take(limit).copied().collect();
    }

    let mut prefix_matches = Vec::new();
    let mut fuzzy_matches: Vec<(&'static str, f64)> = Vec::new();

    for &entry in catalog {
        let entry_lower = entry.to_lowercase();
        if entry_lower.starts_with(&query) {
            prefix_matches.push(entry);
        } else {
            let similarity = strsim::jaro_winkler(&entry_lower, &query);
            if similarity >= FUZZY_THRESHOLD {
                fuzzy_matches.push((entry, similarity));
            }
        }
    }

    fuzzy_matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    prefix_matches
        .into_iter()
        .chain(fuzzy_matches.into_iter().map(|(entry, _)| entry))
        .take(limit)
        .collect()
}
