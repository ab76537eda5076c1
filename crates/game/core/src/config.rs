/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Floor-indexed difficulty scaling.
    pub scaling: ScalingRules,

    /// Fixed bonuses granted when a death-prevention declaration fires.
    pub death_prevention: DeathPreventionRules,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Maximum number of simultaneously active status effects per combatant.
    pub const MAX_STATUS_EFFECTS: usize = 16;
    /// Self damage dealt by abilities flagged with a health cost.
    pub const ABILITY_SELF_DAMAGE: u32 = 2;
    /// Damage of the stand-in weapon used when a weapon id is unknown.
    pub const FALLBACK_WEAPON_DAMAGE: u32 = 1;
    /// Damage of the stand-in spell used when a spell id is unknown.
    pub const FALLBACK_SPELL_DAMAGE: u32 = 2;
    /// Damage of the stand-in ability used when an ability id is unknown.
    pub const FALLBACK_ABILITY_DAMAGE: u32 = 1;

    pub const fn new() -> Self {
        Self {
            scaling: ScalingRules::new(
                ScalingRules::DEFAULT_BASELINE_FLOOR,
                ScalingRules::DEFAULT_FLOORS_PER_STEP,
                ScalingRules::DEFAULT_STEP_PERCENT,
                ScalingRules::DEFAULT_MAX_FLOOR,
            ),
            death_prevention: DeathPreventionRules::new(
                DeathPreventionRules::DEFAULT_HEAL,
                DeathPreventionRules::DEFAULT_MANA_RESTORE,
            ),
        }
    }

    pub fn with_scaling(scaling: ScalingRules) -> Self {
        Self {
            scaling,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the floor scaling curve.
///
/// Floors below `baseline_floor` are unscaled. From the baseline on, the
/// multiplier grows by `step_percent` every `floors_per_step` floors (the
/// first step applies at the baseline itself) until `max_floor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalingRules {
    pub baseline_floor: u32,
    pub floors_per_step: u32,
    pub step_percent: u32,
    pub max_floor: u32,
}

impl ScalingRules {
    pub const DEFAULT_BASELINE_FLOOR: u32 = 5;
    pub const DEFAULT_FLOORS_PER_STEP: u32 = 5;
    pub const DEFAULT_STEP_PERCENT: u32 = 10;
    pub const DEFAULT_MAX_FLOOR: u32 = 50;

    pub const fn new(
        baseline_floor: u32,
        floors_per_step: u32,
        step_percent: u32,
        max_floor: u32,
    ) -> Self {
        Self {
            baseline_floor,
            floors_per_step,
            step_percent,
            max_floor,
        }
    }
}

impl Default for ScalingRules {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_BASELINE_FLOOR,
            Self::DEFAULT_FLOORS_PER_STEP,
            Self::DEFAULT_STEP_PERCENT,
            Self::DEFAULT_MAX_FLOOR,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathPreventionRules {
    /// Health restored on top of the clamp to 1.
    pub heal: u32,
    /// Mana restored when the declaration fires.
    pub mana_restore: u32,
}

impl DeathPreventionRules {
    pub const DEFAULT_HEAL: u32 = 5;
    pub const DEFAULT_MANA_RESTORE: u32 = 5;

    pub const fn new(heal: u32, mana_restore: u32) -> Self {
        Self { heal, mana_restore }
    }
}

impl Default for DeathPreventionRules {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEAL, Self::DEFAULT_MANA_RESTORE)
    }
}
