//! Abstraction for sourcing each side's intent.
//!
//! Sessions take both actions up front, so callers plug in an
//! [`ActionProvider`] per side: human input, scripted fixtures, or a simple
//! policy over the actor's loadout.
use combat_core::{Action, ActorTemplate, Side};

use crate::error::{Result, SessionError};
use crate::session::BattleSession;

/// Provides the action a side takes on the upcoming turn.
pub trait ActionProvider: Send + Sync {
    /// Chooses `side`'s action for the turn after `session.turn()`.
    fn provide_action(&self, side: Side, session: &BattleSession) -> Result<Action>;
}

/// Always answers with the same action.
#[derive(Clone, Debug)]
pub struct FixedActionProvider(pub Action);

impl ActionProvider for FixedActionProvider {
    fn provide_action(&self, _side: Side, _session: &BattleSession) -> Result<Action> {
        Ok(self.0.clone())
    }
}

/// Cycles through a list of actions, one per turn.
#[derive(Clone, Debug, Default)]
pub struct RotationProvider {
    actions: Vec<Action>,
}

impl RotationProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Rotation over a template's loadout: weapons, then abilities, then
    /// spells, in listed order.
    pub fn from_template(template: &ActorTemplate) -> Self {
        let primary = template
            .primary_weapon
            .iter()
            .filter(|p| !template.weapons.contains(p));
        let weapons = primary.chain(&template.weapons).map(Action::weapon);
        let abilities = template.abilities.iter().map(Action::ability);
        let spells = template.spells.iter().map(Action::spell);
        Self::new(weapons.chain(abilities).chain(spells))
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl ActionProvider for RotationProvider {
    fn provide_action(&self, side: Side, session: &BattleSession) -> Result<Action> {
        if self.actions.is_empty() {
            return Err(SessionError::NoActionAvailable { side });
        }
        let index = (session.turn() % self.actions.len() as u64) as usize;
        Ok(self.actions[index].clone())
    }
}
