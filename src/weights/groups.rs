//! Weight group types.
//!
//! Each group is a set of named integer percentages that should sum to 100.
//! Defaults match the values the profile loader falls back to when a field
//! is absent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::normalize::{rescale_proportional, WeightStatus};
use crate::error::Result;

/// Company-fit weight group (industry/size/location/growth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CompanyWeights {
    pub industry: u32,
    pub size: u32,
    pub location: u32,
    pub growth: u32,
}

impl Default for CompanyWeights {
    fn default() -> Self {
        Self {
            industry: 25,
            size: 25,
            location: 25,
            growth: 25,
        }
    }
}

/// Individual-fit weight group (role/authority/department/skills).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IndividualWeights {
    pub role: u32,
    pub authority: u32,
    pub department: u32,
    pub skills: u32,
}

impl Default for IndividualWeights {
    fn default() -> Self {
        Self {
            role: 30,
            authority: 30,
            department: 20,
            skills: 20,
        }
    }
}

/// Technical-fit weight group (tech stack/integration/infrastructure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TechnicalWeights {
    pub tech_stack: u32,
    pub integration: u32,
    pub infrastructure: u32,
}

impl Default for TechnicalWeights {
    fn default() -> Self {
        Self {
            tech_stack: 40,
            integration: 30,
            infrastructure: 30,
        }
    }
}

/// Top-level category weight group used by the lead scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OverallWeights {
    pub company: u32,
    pub individual: u32,
    pub technical: u32,
    pub market: u32,
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            company: 30,
            individual: 30,
            technical: 20,
            market: 20,
        }
    }
}

/// All four weight groups of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IcpWeights {
    pub company: CompanyWeights,
    pub individual: IndividualWeights,
    pub technical: TechnicalWeights,
    pub overall: OverallWeights,
}

impl CompanyWeights {
    pub const NAME: &'static str = "company";

    /// Values in declaration order.
    #[must_use]
    pub const fn values(&self) -> [u32; 4] {
        [self.industry, self.size, self.location, self.growth]
    }

    /// Proportionally rescale so the group sums to approximately 100.
    pub fn rescale(&mut self) -> Result<WeightStatus> {
        let mut v = self.values();
        rescale_proportional(Self::NAME, &mut v)?;
        [self.industry, self.size, self.location, self.growth] = v;
        Ok(self.status())
    }

    #[must_use]
    pub fn status(&self) -> WeightStatus {
        WeightStatus::from_values(&self.values())
    }
}

impl IndividualWeights {
    pub const NAME: &'static str = "individual";

    #[must_use]
    pub const fn values(&self) -> [u32; 4] {
        [self.role, self.authority, self.department, self.skills]
    }

    /// Proportionally rescale so the group sums to approximately 100.
    pub fn rescale(&mut self) -> Result<WeightStatus> {
        let mut v = self.values();
        rescale_proportional(Self::NAME, &mut v)?;
        [self.role, self.authority, self.department, self.skills] = v;
        Ok(self.status())
    }

    #[must_use]
    pub fn status(&self) -> WeightStatus {
        WeightStatus::from_values(&self.values())
    }
}

impl TechnicalWeights {
    pub const NAME: &'static str = "technical";

    #[must_use]
    pub const fn values(&self) -> [u32; 3] {
        [self.tech_stack, self.integration, self.infrastructure]
    }

    /// Proportionally rescale so the group sums to approximately 100.
    pub fn rescale(&mut self) -> Result<WeightStatus> {
        let mut v = self.values();
        rescale_proportional(Self::NAME, &mut v)?;
        [self.tech_stack, self.integration, self.infrastructure] = v;
        Ok(self.status())
    }

    #[must_use]
    pub fn status(&self) -> WeightStatus {
        WeightStatus::from_values(&self.values())
    }
}

impl OverallWeights {
    pub const NAME: &'static str = "overall";

    #[must_use]
    pub const fn values(&self) -> [u32; 4] {
        [self.company, self.individual, self.technical, self.market]
    }

    /// Proportionally rescale so the group sums to approximately 100.
    pub fn rescale(&mut self) -> Result<WeightStatus> {
        let mut v = self.values();
        rescale_proportional(Self::NAME, &mut v)?;
        [self.company, self.individual, self.technical, self.market] = v;
        Ok(self.status())
    }

    #[must_use]
    pub fn status(&self) -> WeightStatus {
        WeightStatus::from_values(&self.values())
    }

    /// Get the weight for a category.
    #[must_use]
    pub const fn get(&self, category: OverallCategory) -> u32 {
        match category {
            OverallCategory::Company => self.company,
            OverallCategory::Individual => self.individual,
            OverallCategory::Technical => self.technical,
            OverallCategory::Market => self.market,
        }
    }

    pub(crate) fn get_mut(&mut self, category: OverallCategory) -> &mut u32 {
        match category {
            OverallCategory::Company => &mut self.company,
            OverallCategory::Individual => &mut self.individual,
            OverallCategory::Technical => &mut self.technical,
            OverallCategory::Market => &mut self.market,
        }
    }
}

impl IcpWeights {
    /// Proportionally rescale every group.
    ///
    /// Returns the per-group statuses in (company, individual, technical,
    /// overall) order.
    pub fn rescale_all(&mut self) -> Result<[(&'static str, WeightStatus); 4]> {
        Ok([
            (CompanyWeights::NAME, self.company.rescale()?),
            (IndividualWeights::NAME, self.individual.rescale()?),
            (TechnicalWeights::NAME, self.technical.rescale()?),
            (OverallWeights::NAME, self.overall.rescale()?),
        ])
    }
}

/// Category identifier within the overall weight group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OverallCategory {
    Company,
    Individual,
    Technical,
    Market,
}

impl OverallCategory {
    /// Category name as used in profile files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Individual => "individual",
            Self::Technical => "technical",
            Self::Market => "market",
        }
    }

    /// All categories in scoring order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Individual,
            Self::Company,
            Self::Technical,
            Self::Market,
        ]
    }
}

impl std::fmt::Display for OverallCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_balanced() {
        assert!(CompanyWeights::default().status().balanced);
        assert!(IndividualWeights::default().status().balanced);
        assert!(TechnicalWeights::default().status().balanced);
        assert!(OverallWeights::default().status().balanced);
    }

    #[test]
    fn test_overall_get() {
        let weights = OverallWeights::default();
        assert_eq!(weights.get(OverallCategory::Company), 30);
        assert_eq!(weights.get(OverallCategory::Market), 20);
    }

    #[test]
    fn test_serde_missing_fields_use_defaults() {
        let weights: IcpWeights = serde_json::from_str(r#"{"overall":{"company":40}}"#).unwrap();
        assert_eq!(weights.overall.company, 40);
        assert_eq!(weights.overall.individual, 30);
        assert_eq!(weights.company, CompanyWeights::default());
    }
}
