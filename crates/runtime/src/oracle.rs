//! Shared static content for battle sessions.
//!
//! Content is immutable once loaded, so an [`OracleManager`] is cheap to clone
//! and can be handed to any number of sessions, including sessions running on
//! other threads.
use std::sync::Arc;

use combat_content::Content;
use combat_core::{
    AbilityCalculator, ActorOracle, ActorsSnapshot, CombatEnv, GameConfig, PcgRng,
    StandardAbilityCalculator, TablesSnapshot,
};

/// Bundles the content oracles and builds [`CombatEnv`] views over them.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) tables: Arc<TablesSnapshot>,
    pub(crate) actors: Arc<ActorsSnapshot>,
    pub(crate) abilities: Arc<dyn AbilityCalculator>,
    pub(crate) config: Arc<GameConfig>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(
        tables: Arc<TablesSnapshot>,
        actors: Arc<ActorsSnapshot>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            tables,
            actors,
            abilities: Arc::new(StandardAbilityCalculator),
            config,
            rng: PcgRng,
        }
    }

    /// Swaps in a custom ability calculator.
    pub fn with_abilities(mut self, abilities: Arc<dyn AbilityCalculator>) -> Self {
        self.abilities = abilities;
        self
    }

    /// Tables only, with no actor templates and the default config.
    pub fn from_tables(tables: Arc<TablesSnapshot>) -> Self {
        Self::new(
            tables,
            Arc::new(ActorsSnapshot::default()),
            Arc::new(GameConfig::default()),
        )
    }

    /// Borrowed view the resolver reads from.
    pub fn as_combat_env(&self) -> CombatEnv<'_> {
        CombatEnv::new(
            self.tables.as_ref(),
            self.abilities.as_ref(),
            self.config.as_ref(),
        )
    }

    pub fn tables(&self) -> &TablesSnapshot {
        &self.tables
    }

    pub fn actors(&self) -> &dyn ActorOracle {
        self.actors.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng(&self) -> &PcgRng {
        &self.rng
    }
}

impl From<Content> for OracleManager {
    fn from(content: Content) -> Self {
        Self::new(
            Arc::new(content.tables),
            Arc::new(content.actors),
            Arc::new(content.config),
        )
    }
}

impl std::fmt::Debug for OracleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleManager")
            .field("actors", &self.actors.template_ids())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
