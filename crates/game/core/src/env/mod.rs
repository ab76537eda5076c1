//! Read-only inputs to turn resolution.
//!
//! Oracles expose the static data tables, actor templates, ability math and
//! randomness. The [`CombatEnv`] aggregate bundles the pieces the resolver
//! needs so it never couples to a concrete data source.
mod abilities;
mod actors;
mod rng;
mod snapshot;
mod status;
mod tables;

pub use abilities::{AbilityCalculator, AbilityInput, AbilityOutput, StandardAbilityCalculator};
pub use actors::{ActorOracle, ActorTemplate};
pub use rng::{PcgRng, RngOracle, TurnRng, compute_seed};
pub use snapshot::{ActorsSnapshot, TablesSnapshot};
pub use status::{ExpiryTransition, StatusEffectDefinition, StatusFlags};
pub use tables::{
    AbilityDefinition, SpellDefinition, StatusRoll, TablesOracle, WeaponDefinition,
};

use crate::config::GameConfig;

static STANDARD_ABILITIES: StandardAbilityCalculator = StandardAbilityCalculator;
static DEFAULT_CONFIG: GameConfig = GameConfig::new();

/// Aggregates the oracles required by the resolver.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    tables: &'a dyn TablesOracle,
    abilities: &'a dyn AbilityCalculator,
    config: &'a GameConfig,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        tables: &'a dyn TablesOracle,
        abilities: &'a dyn AbilityCalculator,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            tables,
            abilities,
            config,
        }
    }

    /// Environment with the standard ability calculator and default config.
    pub fn with_tables(tables: &'a dyn TablesOracle) -> Self {
        Self::new(tables, &STANDARD_ABILITIES, &DEFAULT_CONFIG)
    }

    pub fn with_config(mut self, config: &'a GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_abilities(mut self, abilities: &'a dyn AbilityCalculator) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn tables(&self) -> &'a dyn TablesOracle {
        self.tables
    }

    pub fn abilities(&self) -> &'a dyn AbilityCalculator {
        self.abilities
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
