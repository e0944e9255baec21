//! Legacy profile schema migration.
//!
//! Two incompatible serialized shapes exist in the wild: the canonical one
//! (nested-by-group `weights`, `criteria` naming) and a legacy one that
//! used `tags` for the criteria lists and, in the oldest files, a flat
//! `weights` map holding only the overall category percentages. Legacy
//! documents are migrated on read and never written back.

use serde_json::{json, Value};

use crate::error::{ErrorContext, IcpError, ParseErrorKind, Result};
use crate::model::IcpProfile;

/// Detect whether a `customer_icp` object uses the legacy schema.
#[must_use]
pub fn is_legacy(icp: &Value) -> bool {
    let Some(obj) = icp.as_object() else {
        return false;
    };

    if obj.contains_key("tags") {
        return true;
    }

    // Flat weight map: values are numbers instead of nested groups
    obj.get("weights")
        .and_then(Value::as_object)
        .is_some_and(|weights| weights.values().any(Value::is_number))
}

/// Migrate a legacy `customer_icp` object to the canonical schema.
pub fn migrate(icp: Value) -> Result<IcpProfile> {
    let Value::Object(mut obj) = icp else {
        return Err(IcpError::parse(
            "migrating legacy profile",
            ParseErrorKind::InvalidJson("customer_icp is not an object".to_string()),
        ));
    };

    // tags -> criteria (inner field names are unchanged)
    if let Some(tags) = obj.remove("tags") {
        obj.entry("criteria").or_insert(tags);
    }

    // Flat overall-only weight map -> nested groups with defaults
    if let Some(weights) = obj.get("weights").and_then(Value::as_object) {
        if weights.values().any(Value::is_number) {
            let flat = weights.clone();
            obj.insert("weights".to_string(), json!({ "overall": flat }));
        }
    }

    serde_json::from_value(Value::Object(obj)).context("migrating legacy profile")
}
