//! Floor-indexed difficulty scaling.
//!
//! Multipliers are integer percentages (100 = 1.0x) so that scaled values are
//! exact and identical across platforms. Crit chance is never scaled.

use crate::config::ScalingRules;

/// Multiplier applied to monster stats and weapon damage on a given floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalingFactor(u32);

impl ScalingFactor {
    /// The identity multiplier (1.0x).
    pub const IDENTITY: Self = Self(100);

    pub const fn from_percent(percent: u32) -> Self {
        Self(percent)
    }

    pub const fn percent(self) -> u32 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Scales `value`, rounding down and saturating at `u32::MAX`.
    pub const fn apply(self, value: u32) -> u32 {
        let scaled = value as u64 * self.0 as u64 / 100;
        if scaled > u32::MAX as u64 {
            u32::MAX
        } else {
            scaled as u32
        }
    }
}

impl Default for ScalingFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ScalingRules {
    /// Computes the scaling factor for `floor` under these rules.
    ///
    /// ```text
    /// floor < baseline            -> 100
    /// steps = (min(floor, max) - baseline) / floors_per_step + 1
    /// factor = 100 + steps * step_percent
    /// ```
    ///
    /// Floor 0 is treated as floor 1. The factor saturates at `u32::MAX`.
    pub fn factor(&self, floor: u32) -> ScalingFactor {
        let floor = floor.max(1).min(self.max_floor.max(1));
        if floor < self.baseline_floor {
            return ScalingFactor::IDENTITY;
        }

        let per_step = self.floors_per_step.max(1);
        let steps = (floor - self.baseline_floor) / per_step + 1;
        ScalingFactor(steps.saturating_mul(self.step_percent).saturating_add(100))
    }
}

/// Scaling factor for `floor` under the default rules.
pub fn scaling_factor(floor: u32) -> ScalingFactor {
    ScalingRules::default().factor(floor)
}
