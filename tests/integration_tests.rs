//! Integration tests for icp-tools
//!
//! These tests verify end-to-end functionality of profile parsing,
//! legacy migration, weight normalization, and lead scoring.

use icp_tools::{
    parsers::{parse_profile, parse_ratings, write_profile_str},
    scoring::{FitBand, LeadScorer},
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

// ============================================================================
// Parser Tests
// ============================================================================

mod parser_tests {
    use super::*;

    #[test]
    fn test_parse_canonical_json() {
        let path = fixture_path("profiles/canonical.json");
        let document = parse_profile(&path).expect("Failed to parse canonical profile");

        let profile = &document.customer_icp;
        assert!(profile.profile_overview.contains("B2B SaaS"));
        assert_eq!(profile.weights.overall.company, 30);
        assert_eq!(profile.weights.technical.tech_stack, 40);
        assert_eq!(profile.criteria.industries.len(), 2);
        assert_eq!(profile.job_titles, vec!["VP of Engineering", "Head of Data"]);
        assert_eq!(profile.minimum_requirements.employee_count_min, 50);
        assert_eq!(profile.minimum_requirements.employee_count_max, 2000);
    }

    #[test]
    fn test_parse_canonical_yaml() {
        let path = fixture_path("profiles/canonical.yaml");
        let document = parse_profile(&path).expect("Failed to parse YAML profile");

        let profile = &document.customer_icp;
        assert_eq!(profile.weights.overall.company, 40);
        assert_eq!(profile.criteria.growth_stages, vec!["Seed", "Series A"]);
        // Unspecified weight groups fall back to defaults
        assert_eq!(profile.weights.company.industry, 25);
    }

    #[test]
    fn test_parse_legacy_document_migrates() {
        let path = fixture_path("profiles/legacy_tags.json");
        let document = parse_profile(&path).expect("Failed to parse legacy profile");

        let profile = &document.customer_icp;
        // tags -> criteria
        assert_eq!(profile.criteria.industries, vec!["Healthcare", "Manufacturing"]);
        // flat weights -> overall group
        assert_eq!(profile.weights.overall.company, 37);
        assert_eq!(profile.weights.overall.market, 10);
        // nested groups fall back to defaults
        assert_eq!(profile.weights.individual.role, 30);
        // missing max falls back to the sentinel
        assert_eq!(profile.minimum_requirements.employee_count_max, 999_999);
    }

    #[test]
    fn test_legacy_document_writes_back_canonical() {
        let path = fixture_path("profiles/legacy_tags.json");
        let document = parse_profile(&path).unwrap();

        let serialized = write_profile_str(&document).unwrap();
        assert!(serialized.contains("\"criteria\""));
        assert!(!serialized.contains("\"tags\""));
        assert!(serialized.contains("\"overall\""));
    }

    #[test]
    fn test_parse_missing_file_fails() {
        let result = parse_profile(Path::new("/nonexistent/profile.json"));
        assert!(result.is_err());
    }
}

// ============================================================================
// Scoring Tests
// ============================================================================

mod scoring_tests {
    use super::*;

    #[test]
    fn test_score_complete_ratings() {
        let document = parse_profile(&fixture_path("profiles/canonical.json")).unwrap();
        let ratings = parse_ratings(&fixture_path("ratings/complete.json")).unwrap();

        let scorer = LeadScorer::new(document.customer_icp.weights.overall);
        let score = scorer.score(&ratings).unwrap();

        // company 0.8333*30 + individual 0.8333*30 + technical 0.5833*20
        // + market 0.5833*20 = 73.3
        assert!((score.total - 73.3).abs() < 1e-9, "total was {}", score.total);
        assert_eq!(score.band, FitBand::Medium);
        assert_eq!(score.breakdown["company"], 25.0);
        assert_eq!(score.breakdown["technical"], 11.7);
    }

    #[test]
    fn test_score_all_high_is_perfect() {
        let document = parse_profile(&fixture_path("profiles/canonical.json")).unwrap();
        let ratings = parse_ratings(&fixture_path("ratings/all_high.json")).unwrap();

        let scorer = LeadScorer::new(document.customer_icp.weights.overall);
        let score = scorer.score(&ratings).unwrap();

        assert!((score.total - 100.0).abs() < f64::EPSILON);
        assert_eq!(score.band, FitBand::High);
        assert_eq!(score.band.label(), "High fit");
    }

    #[test]
    fn test_weak_categories_produce_recommendations() {
        let document = parse_profile(&fixture_path("profiles/canonical.json")).unwrap();
        let ratings = parse_ratings(&fixture_path("ratings/complete.json")).unwrap();

        let scorer = LeadScorer::new(document.customer_icp.weights.overall);
        let score = scorer.score(&ratings).unwrap();

        // technical and market sit at 58% of their potential
        assert!(!score.recommendations.is_empty());
        assert!(score
            .recommendations
            .iter()
            .any(|r| r.message.contains("Technical") || r.message.contains("Market")));
    }
}

// ============================================================================
// Round-trip Tests
// ============================================================================

mod roundtrip_tests {
    use super::*;
    use icp_tools::parsers::write_profile;

    #[test]
    fn test_profile_roundtrip_preserves_content() {
        let document = parse_profile(&fixture_path("profiles/canonical.json")).unwrap();

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("roundtrip.json");
        write_profile(&document, &path).unwrap();

        let reparsed = parse_profile(&path).unwrap();
        assert_eq!(document, reparsed);
    }

    #[test]
    fn test_migrated_profile_roundtrip_is_stable() {
        let document = parse_profile(&fixture_path("profiles/legacy_tags.json")).unwrap();

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("migrated.json");
        write_profile(&document, &path).unwrap();

        let reparsed = parse_profile(&path).unwrap();
        assert_eq!(document, reparsed);
    }
}
