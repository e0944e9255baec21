//! Weight normalization policies.
//!
//! Two policies keep a group of named integer weights self-consistent
//! after edits:
//!
//! - **Proportional rescale**: every value is scaled by `100 / total` and
//!   rounded, preserving the relative proportions. Rounding may leave the
//!   sum off by a few points; that drift is accepted and surfaced through
//!   [`WeightStatus`], never raised as an error.
//! - **Equal redistribution**: after one category changes, the remaining
//!   categories each receive an identical share of the remainder. Used for
//!   the overall group where a single slider drives the other three.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::groups::{OverallCategory, OverallWeights};
use crate::error::{IcpError, Result};

/// Target sum for every weight group.
pub const WEIGHT_TARGET: u32 = 100;

/// Sum state of a weight group after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WeightStatus {
    /// Current sum of the group's values
    pub total: u32,
    /// True when the sum is exactly 100
    pub balanced: bool,
}

impl WeightStatus {
    /// Compute the status of a set of values.
    #[must_use]
    pub fn from_values(values: &[u32]) -> Self {
        let total = values.iter().sum();
        Self {
            total,
            balanced: total == WEIGHT_TARGET,
        }
    }
}

impl std::fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.balanced {
            write!(f, "{}% (balanced)", self.total)
        } else {
            write!(f, "{}% (off target)", self.total)
        }
    }
}

/// Proportionally rescale `values` in place so they sum to approximately 100.
///
/// Each value becomes `round(old * 100 / total)`, rounding half away from
/// zero, clamped to 0..=100. Fails when every value is zero, since the
/// scale factor would be undefined.
pub fn rescale_proportional(group: &str, values: &mut [u32]) -> Result<()> {
    let total: u32 = values.iter().sum();
    if total == 0 {
        return Err(IcpError::all_zero_weights(group));
    }

    let factor = f64::from(WEIGHT_TARGET) / f64::from(total);
    for value in values.iter_mut() {
        *value = clamp_weight((f64::from(*value) * factor).round());
    }
    Ok(())
}

/// Clamp a rounded weight into the 0..=100 range.
fn clamp_weight(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else if value >= f64::from(WEIGHT_TARGET) {
        WEIGHT_TARGET
    } else {
        value as u32
    }
}

impl OverallWeights {
    /// Set one category's weight and redistribute the remainder equally.
    ///
    /// The changed category keeps its (clamped) value. When the group no
    /// longer sums to 100, each other category is set to
    /// `round((100 - value) / 3)`. The returned status reflects the final
    /// sum, which may still be off target by a point or two from rounding.
    pub fn set_and_redistribute(
        &mut self,
        changed: OverallCategory,
        value: u32,
    ) -> WeightStatus {
        let value = value.min(WEIGHT_TARGET);
        *self.get_mut(changed) = value;

        if self.status().balanced {
            return self.status();
        }

        let adjustment = clamp_weight((f64::from(WEIGHT_TARGET - value) / 3.0).round());
        for &category in OverallCategory::all() {
            if category != changed {
                *self.get_mut(category) = adjustment;
            }
        }
        self.status()
    }
}
