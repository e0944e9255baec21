//! Weight groups and normalization policies.
//!
//! An ICP profile carries four groups of named integer percentages. This
//! module defines the group types and the two policies that keep a group
//! self-consistent after edits: proportional rescaling and equal
//! redistribution.

mod groups;
mod normalize;

pub use groups::{
    CompanyWeights, IcpWeights, IndividualWeights, OverallCategory, OverallWeights,
    TechnicalWeights,
};
pub use normalize::{rescale_proportional, WeightStatus, WEIGHT_TARGET};
