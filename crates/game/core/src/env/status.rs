//! Static status effect definitions.

use crate::state::Duration;

bitflags::bitflags! {
    /// Boolean behaviors a status effect grants its host while active.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct StatusFlags: u8 {
        /// Weapon actions fizzle.
        const DISABLE_WEAPONS = 1 << 0;
        /// Spell actions fizzle.
        const DISABLE_MAGIC = 1 << 1;
        /// Every action fizzles.
        const DISABLE_ALL_ACTIONS = 1 << 2;
        /// The host's primary weapon cannot be used.
        const DISABLE_PRIMARY_WEAPON = 1 << 3;
        /// Incoming damage effects miss.
        const UNTARGETABLE = 1 << 4;
        /// Status effects from the opponent are rejected.
        const EFFECT_IMMUNITY = 1 << 5;
    }
}

/// Instruction emitted when an effect runs out, for the caller to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpiryTransition {
    /// Multiply current health by `percent / 100`.
    ScaleHealth { percent: u32 },
}

/// Definition of a status effect, keyed by `id` in the data tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusEffectDefinition {
    pub id: String,
    pub name: String,

    // Per-turn amounts, multiplied by the instance's power.
    pub damage_per_turn: u32,
    pub health_per_turn: u32,
    pub mana_per_turn: u32,

    /// Duration granted by one application.
    pub duration: Duration,
    pub stackable: bool,

    // Combat modifiers.
    /// Outgoing damage multiplier in percent (150 = +50%).
    pub damage_multiplier: Option<u32>,
    /// Extra incoming damage in percent.
    pub damage_vulnerability: u32,
    /// Flat armor removed from the host.
    pub armor_reduction: u32,
    /// Crit chance added to the host, in percentage points.
    pub crit_bonus: u32,
    /// Incoming damage reduction in percent.
    pub damage_reduction: u32,
    pub flags: StatusFlags,

    // Instant one-shot amounts, used with `Duration::Instant`.
    pub health_restore: u32,
    pub mana_restore: u32,

    pub on_expire: Option<ExpiryTransition>,
}

impl StatusEffectDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            ..Self::default()
        }
    }

    pub fn is_instant(&self) -> bool {
        self.duration == Duration::Instant
    }
}

impl Default for StatusEffectDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            damage_per_turn: 0,
            health_per_turn: 0,
            mana_per_turn: 0,
            duration: Duration::Turns(1),
            stackable: false,
            damage_multiplier: None,
            damage_vulnerability: 0,
            armor_reduction: 0,
            crit_bonus: 0,
            damage_reduction: 0,
            flags: StatusFlags::empty(),
            health_restore: 0,
            mana_restore: 0,
            on_expire: None,
        }
    }
}
