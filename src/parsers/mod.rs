//! Profile and ratings file I/O.
//!
//! The canonical profile format is JSON; YAML is accepted by extension.
//! Legacy documents (see [`legacy`]) are migrated transparently on read.

pub mod legacy;

use indexmap::IndexMap;
use std::path::Path;

use crate::error::{ErrorContext, IcpError, ParseErrorKind, Result};
use crate::model::{IcpDocument, IcpProfile};
use crate::scoring::{Rating, RatingSet};

/// Serialized profile format, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Yaml,
}

impl ProfileFormat {
    /// Detect the format from a path. Defaults to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse a profile document from a file.
pub fn parse_profile(path: &Path) -> Result<IcpDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| IcpError::io(path, e))?;
    parse_profile_str(&content, ProfileFormat::from_path(path))
        .with_context(|| format!("parsing profile {}", path.display()))
}

/// Parse a profile document from a string.
///
/// Documents missing the `customer_icp` root are rejected; legacy-schema
/// documents are migrated to the canonical shape.
pub fn parse_profile_str(content: &str, format: ProfileFormat) -> Result<IcpDocument> {
    let value: serde_json::Value = match format {
        ProfileFormat::Json => serde_json::from_str(content)?,
        ProfileFormat::Yaml => serde_yaml_ng::from_str(content)?,
    };

    let icp = value
        .get("customer_icp")
        .cloned()
        .ok_or_else(|| IcpError::parse("profile document", ParseErrorKind::MissingRoot))?;

    let profile: IcpProfile = if legacy::is_legacy(&icp) {
        tracing::debug!("Detected legacy profile schema; migrating");
        legacy::migrate(icp)?
    } else {
        serde_json::from_value(icp)?
    };

    Ok(IcpDocument {
        customer_icp: profile,
    })
}

/// Serialize a profile document in the canonical JSON shape.
pub fn write_profile_str(document: &IcpDocument) -> Result<String> {
    serde_json::to_string_pretty(document).context("serializing profile")
}

/// Write a profile document to a file in the canonical JSON shape.
pub fn write_profile(document: &IcpDocument, path: &Path) -> Result<()> {
    let content = write_profile_str(document)?;
    std::fs::write(path, content).map_err(|e| IcpError::io(path, e))
}

/// Parse a ratings file: a flat map of sub-criterion name to rating label.
///
/// Unknown labels are rejected here; unknown or missing sub-criterion
/// names are rejected by the scorer before computation.
pub fn parse_ratings(path: &Path) -> Result<RatingSet> {
    let content = std::fs::read_to_string(path).map_err(|e| IcpError::io(path, e))?;
    parse_ratings_str(&content, ProfileFormat::from_path(path))
        .with_context(|| format!("parsing ratings {}", path.display()))
}

/// Parse a ratings map from a string.
pub fn parse_ratings_str(content: &str, format: ProfileFormat) -> Result<RatingSet> {
    let labels: IndexMap<String, String> = match format {
        ProfileFormat::Json => serde_json::from_str(content)?,
        ProfileFormat::Yaml => serde_yaml_ng::from_str(content)?,
    };

    let mut ratings = RatingSet::new();
    for (criterion, label) in labels {
        let rating: Rating = label
            .parse()
            .with_context(|| format!("rating for '{criterion}'"))?;
        ratings.insert(criterion, rating);
    }
    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = r#"{
        "customer_icp": {
            "profile_overview": "Mid-market SaaS",
            "weights": {
                "overall": { "company": 40, "individual": 30, "technical": 20, "market": 10 }
            },
            "criteria": { "industries": ["Healthcare"] },
            "job_titles": ["CTO"],
            "minimum_requirements": { "employee_count_min": 50 }
        }
    }"#;

    #[test]
    fn test_parse_canonical_profile() {
        let doc = parse_profile_str(CANONICAL, ProfileFormat::Json).unwrap();
        let profile = doc.customer_icp;
        assert_eq!(profile.profile_overview, "Mid-market SaaS");
        assert_eq!(profile.weights.overall.company, 40);
        assert_eq!(profile.criteria.industries, vec!["Healthcare"]);
        assert_eq!(profile.job_titles, vec!["CTO"]);
        assert_eq!(profile.minimum_requirements.employee_count_min, 50);
        // Absent max falls back to the default
        assert_eq!(profile.minimum_requirements.employee_count_max, 999_999);
    }

    #[test]
    fn test_parse_rejects_missing_root() {
        let err = parse_profile_str(r#"{"weights": {}}"#, ProfileFormat::Json).unwrap_err();
        assert!(err.to_string().contains("parse"), "{err}");
    }

    #[test]
    fn test_parse_legacy_profile() {
        let legacy = r#"{
            "customer_icp": {
                "tags": { "industries": ["Retail & E-commerce"] },
                "weights": { "company": 37, "individual": 33, "technical": 20, "market": 10 }
            }
        }"#;
        let doc = parse_profile_str(legacy, ProfileFormat::Json).unwrap();
        assert_eq!(
            doc.customer_icp.criteria.industries,
            vec!["Retail & E-commerce"]
        );
        assert_eq!(doc.customer_icp.weights.overall.company, 37);
    }

    #[test]
    fn test_parse_yaml_profile() {
        let yaml = "customer_icp:\n  profile_overview: Enterprise\n  job_titles:\n    - CTO\n";
        let doc = parse_profile_str(yaml, ProfileFormat::Yaml).unwrap();
        assert_eq!(doc.customer_icp.profile_overview, "Enterprise");
        assert_eq!(doc.customer_icp.job_titles, vec!["CTO"]);
    }

    #[test]
    fn test_profile_round_trip() {
        let doc = parse_profile_str(CANONICAL, ProfileFormat::Json).unwrap();
        let serialized = write_profile_str(&doc).unwrap();
        let reparsed = parse_profile_str(&serialized, ProfileFormat::Json).unwrap();
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn test_parse_ratings() {
        let json = r#"{ "role": "high", "decision_authority": "medium" }"#;
        let ratings = parse_ratings_str(json, ProfileFormat::Json).unwrap();
        assert_eq!(ratings.get("role"), Some(Rating::High));
        assert_eq!(ratings.get("decision_authority"), Some(Rating::Medium));
    }

    #[test]
    fn test_parse_ratings_rejects_unknown_label() {
        let json = r#"{ "role": "amazing" }"#;
        let err = parse_ratings_str(json, ProfileFormat::Json).unwrap_err();
        assert!(err.to_string().contains("role"), "{err}");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ProfileFormat::from_path(Path::new("icp.yaml")),
            ProfileFormat::Yaml
        );
        assert_eq!(
            ProfileFormat::from_path(Path::new("icp.json")),
            ProfileFormat::Json
        );
        assert_eq!(
            ProfileFormat::from_path(Path::new("icp")),
            ProfileFormat::Json
        );
    }
}
