//! Battle sessions: the caller side of turn resolution.
//!
//! A [`BattleSession`] owns the two combatants, asks the engine to resolve
//! one turn at a time, and applies the returned deltas and transitions. It
//! is the only place combatant state changes during a battle.
use combat_core::{
    Action, ActorOracle, Combatant, Side, TurnContext, TurnResult, TurnRng, resolve_turn,
};
use tracing::{debug, info};

use crate::error::{Result, SessionError};
use crate::oracle::OracleManager;
use crate::provider::ActionProvider;

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[derive(serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerVictory,
    MonsterVictory,
    /// Both sides fell on the same turn.
    Draw,
}

/// Everything needed to resume a battle later.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionState {
    pub player: Combatant,
    pub monster: Combatant,
    pub floor: u32,
    pub seed: u64,
    /// Number of turns already played.
    pub turn: u64,
}

/// A battle between one player combatant and one monster.
#[derive(Debug)]
pub struct BattleSession {
    state: SessionState,
    oracles: OracleManager,
    history: Vec<TurnResult>,
}

impl BattleSession {
    pub fn new(
        player: Combatant,
        monster: Combatant,
        floor: u32,
        seed: u64,
        oracles: OracleManager,
    ) -> Self {
        info!(
            player = %player.name,
            monster = %monster.name,
            floor,
            seed,
            "battle started"
        );
        Self::restore(
            SessionState {
                player,
                monster,
                floor,
                seed,
                turn: 0,
            },
            oracles,
        )
    }

    /// Spawns both sides from actor templates. The monster is scaled for
    /// `floor`; the player is not.
    pub fn from_templates(
        oracles: OracleManager,
        player_id: &str,
        monster_id: &str,
        floor: u32,
        seed: u64,
    ) -> Result<Self> {
        let lookup = |id: &str| {
            oracles
                .actors()
                .template(id)
                .cloned()
                .ok_or_else(|| SessionError::UnknownTemplate { id: id.to_string() })
        };
        let player = lookup(player_id)?.spawn();
        let monster = lookup(monster_id)?.spawn_scaled(floor, &oracles.config().scaling);
        Ok(Self::new(player, monster, floor, seed, oracles))
    }

    /// Resumes a battle from a saved state. History starts empty.
    pub fn restore(state: SessionState, oracles: OracleManager) -> Self {
        Self {
            state,
            oracles,
            history: Vec::new(),
        }
    }

    /// Resolves the next turn and applies it to both combatants.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::BattleOver`] once either side is defeated, and
    /// [`SessionError::Combat`] if a combatant breaks a state invariant.
    pub fn play_turn(
        &mut self,
        player_action: &Action,
        monster_action: &Action,
    ) -> Result<&TurnResult> {
        if self.is_over() {
            return Err(SessionError::BattleOver {
                turn: self.state.turn,
            });
        }

        let turn = self.state.turn + 1;
        let rng = TurnRng::new(self.oracles.rng(), self.state.seed, turn);
        let result = resolve_turn(
            &self.state.player,
            &self.state.monster,
            player_action,
            monster_action,
            TurnContext::new(self.state.floor, turn),
            self.oracles.as_combat_env(),
            &rng,
        )?;

        let rolls = rng.rolls();
        apply(&mut self.state, &result);
        self.state.turn = turn;

        debug!(
            turn,
            player_action = %player_action,
            monster_action = %monster_action,
            player_health = self.state.player.current_health,
            monster_health = self.state.monster.current_health,
            rolls,
            "turn resolved"
        );
        if let Some(outcome) = self.outcome() {
            info!(turn, %outcome, "battle ended");
        }

        self.history.push(result);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Asks each provider for an action and plays the turn.
    pub fn step(
        &mut self,
        player: &dyn ActionProvider,
        monster: &dyn ActionProvider,
    ) -> Result<&TurnResult> {
        let player_action = player.provide_action(Side::Player, self)?;
        let monster_action = monster.provide_action(Side::Monster, self)?;
        self.play_turn(&player_action, &monster_action)
    }

    /// Steps until the battle ends or `max_turns` more turns have been
    /// played. Returns the outcome, if any.
    pub fn run(
        &mut self,
        player: &dyn ActionProvider,
        monster: &dyn ActionProvider,
        max_turns: u64,
    ) -> Result<Option<Outcome>> {
        for _ in 0..max_turns {
            if self.is_over() {
                break;
            }
            self.step(player, monster)?;
        }
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match (
            self.state.player.is_defeated(),
            self.state.monster.is_defeated(),
        ) {
            (true, true) => Some(Outcome::Draw),
            (false, true) => Some(Outcome::PlayerVictory),
            (true, false) => Some(Outcome::MonsterVictory),
            (false, false) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.state.player,
            Side::Monster => &self.state.monster,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.state.player
    }

    pub fn monster(&self) -> &Combatant {
        &self.state.monster
    }

    /// Turns played so far.
    pub fn turn(&self) -> u64 {
        self.state.turn
    }

    pub fn floor(&self) -> u32 {
        self.state.floor
    }

    pub fn seed(&self) -> u64 {
        self.state.seed
    }

    /// Results of the turns played since the session was created or restored.
    pub fn history(&self) -> &[TurnResult] {
        &self.history
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }
}

/// Applies deltas first, then end-of-effect transitions.
fn apply(state: &mut SessionState, result: &TurnResult) {
    for side in [Side::Player, Side::Monster] {
        let combatant = match side {
            Side::Player => &mut state.player,
            Side::Monster => &mut state.monster,
        };
        combatant.apply_delta(result.side(side));
        for transition in result.transitions_for(side) {
            combatant.apply_transition(side, transition);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use combat_core::{AbilityDefinition, DamageCategory, TablesSnapshot, WeaponDefinition};

    use super::*;

    fn oracles() -> OracleManager {
        let tables = TablesSnapshot::new()
            .with_weapon(WeaponDefinition::new("club", "Club", 5, DamageCategory::Melee))
            .with_ability(AbilityDefinition::new("last_stand", "Last Stand"));
        OracleManager::from_tables(Arc::new(tables))
    }

    #[test]
    fn outcome_tracks_defeated_sides() {
        let mut session = BattleSession::new(
            Combatant::new("Hero", 20, 0, 0),
            Combatant::new("Rat", 5, 0, 0),
            1,
            7,
            oracles(),
        );
        assert_eq!(session.outcome(), None);

        let club = Action::weapon("club");
        session.play_turn(&club, &club).unwrap();

        assert_eq!(session.outcome(), Some(Outcome::PlayerVictory));
        assert_eq!(session.player().current_health, 15);
        assert_eq!(session.turn(), 1);
    }

    #[test]
    fn simultaneous_knockout_is_a_draw() {
        let mut session = BattleSession::new(
            Combatant::new("Hero", 5, 0, 0),
            Combatant::new("Rat", 5, 0, 0),
            1,
            7,
            oracles(),
        );
        let club = Action::weapon("club");
        session.play_turn(&club, &club).unwrap();

        assert_eq!(session.outcome(), Some(Outcome::Draw));
        assert_eq!(
            session.play_turn(&club, &club).unwrap_err(),
            SessionError::BattleOver { turn: 1 }
        );
    }

    #[test]
    fn unknown_templates_are_reported() {
        let err = BattleSession::from_templates(oracles(), "hero", "rat", 1, 0).unwrap_err();
        assert_eq!(err, SessionError::UnknownTemplate { id: "hero".into() });
    }
}
