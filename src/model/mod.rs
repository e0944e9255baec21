//! Core data model for ICP profiles.

mod profile;

pub use profile::{
    CriteriaSet, IcpDocument, IcpProfile, MinimumRequirements, DEFAULT_EMPLOYEE_COUNT_MAX,
};
