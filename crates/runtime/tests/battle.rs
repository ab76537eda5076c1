use std::sync::Arc;

use combat_content::ContentFactory;
use combat_core::{
    AbilityDefinition, Action, ActorOracle, Combatant, DamageCategory, Duration, ExpiryTransition, Side,
    StatusEffectDefinition, StatusFlags, StatusRoll, TablesSnapshot, WeaponDefinition,
};
use combat_runtime::{
    BattleSession, FixedActionProvider, OracleManager, Outcome, RotationProvider, SessionError,
};

fn arena_tables() -> TablesSnapshot {
    let gaze = AbilityDefinition {
        status_effects: vec![StatusRoll::new("petrify")],
        ..AbilityDefinition::new("petrifying_gaze", "Petrifying Gaze")
    };

    TablesSnapshot::new()
        .with_weapon(WeaponDefinition::new("club", "Club", 10, DamageCategory::Melee))
        .with_weapon(WeaponDefinition::new("sword", "Sword", 4, DamageCategory::Melee))
        .with_weapon(WeaponDefinition {
            status_effects: vec![StatusRoll::new("stun")],
            ..WeaponDefinition::new("hammer", "Hammer", 3, DamageCategory::Melee)
        })
        .with_ability(AbilityDefinition::new("last_stand", "Last Stand"))
        .with_ability(AbilityDefinition::new("riposte", "Riposte"))
        .with_ability(AbilityDefinition::new("brace", "Brace"))
        .with_ability(gaze)
        .with_status_effect(StatusEffectDefinition {
            on_expire: Some(ExpiryTransition::ScaleHealth { percent: 50 }),
            ..StatusEffectDefinition::new("petrify", "Petrification", Duration::Turns(2))
        })
        .with_status_effect(StatusEffectDefinition {
            flags: StatusFlags::DISABLE_ALL_ACTIONS,
            ..StatusEffectDefinition::new("stun", "Stun", Duration::Turns(1))
        })
}

fn arena() -> OracleManager {
    OracleManager::from_tables(Arc::new(arena_tables()))
}

fn embedded() -> OracleManager {
    ContentFactory::embedded()
        .expect("embedded content parses")
        .into()
}

#[test]
fn last_stand_fires_once_per_battle() {
    let mut hero = Combatant::new("Hero", 20, 10, 0).with_health(3);
    hero.current_mana = 0;
    let ogre = Combatant::new("Ogre", 50, 0, 0);
    let mut session = BattleSession::new(hero, ogre, 1, 11, arena());

    let last_stand = Action::ability("last_stand");
    let club = Action::weapon("club");

    let first = session.play_turn(&last_stand, &club).unwrap().clone();
    assert_eq!(first.player_damage(), 2);
    assert_eq!(first.player_healing(), 5);
    assert_eq!(first.player_mana_restore(), 5);
    assert!(first.player.death_prevention_triggered);
    assert_eq!(session.player().current_health, 6);
    assert_eq!(session.player().current_mana, 5);
    assert!(session.player().death_prevention_used);

    let second = session.play_turn(&last_stand, &club).unwrap().clone();
    assert_eq!(second.player_damage(), 10);
    assert!(!second.player.death_prevention_triggered);
    assert!(session.player().is_defeated());
    assert_eq!(session.outcome(), Some(Outcome::MonsterVictory));
}

#[test]
fn riposte_punishes_the_attacker() {
    let hero = Combatant::new("Hero", 20, 0, 0);
    let ogre = Combatant::new("Ogre", 30, 0, 0);
    let mut session = BattleSession::new(hero, ogre, 1, 3, arena());

    let result = session
        .play_turn(&Action::ability("riposte"), &Action::weapon("club"))
        .unwrap();

    assert_eq!(result.player_damage(), 0);
    assert_eq!(result.monster_damage(), 2);
    assert_eq!(result.negations.len(), 1);
    assert_eq!(session.player().current_health, 20);
    assert_eq!(session.monster().current_health, 28);
}

#[test]
fn armor_is_applied_through_the_session() {
    let hero = Combatant::new("Hero", 20, 0, 0);
    let knight = Combatant::new("Knight", 20, 0, 2);
    let mut session = BattleSession::new(hero, knight, 1, 3, arena());

    session
        .play_turn(&Action::weapon("sword"), &Action::ability("brace"))
        .unwrap();

    assert_eq!(session.monster().current_health, 18);
}

#[test]
fn petrification_halves_health_when_it_wears_off() {
    let hero = Combatant::new("Hero", 20, 0, 0);
    let basilisk = Combatant::new("Basilisk", 30, 0, 0);
    let mut session = BattleSession::new(hero, basilisk, 1, 5, arena());
    let brace = Action::ability("brace");

    session
        .play_turn(&brace, &Action::ability("petrifying_gaze"))
        .unwrap();
    assert!(session.player().status_effects.has("petrify"));
    assert_eq!(session.player().current_health, 20);

    let result = session.play_turn(&brace, &brace).unwrap();
    assert_eq!(result.transitions_for(Side::Player).count(), 1);
    assert_eq!(session.player().current_health, 10);

    let result = session.play_turn(&brace, &brace).unwrap();
    assert_eq!(result.transitions_for(Side::Player).count(), 0);
    assert!(!session.player().status_effects.has("petrify"));
    assert_eq!(session.player().current_health, 10);
}

#[test]
fn one_turn_stun_blocks_the_next_action() {
    let hero = Combatant::new("Hero", 20, 0, 0);
    let rat = Combatant::new("Rat", 30, 0, 0);
    let mut session = BattleSession::new(hero, rat, 1, 9, arena());
    let sword = Action::weapon("sword");
    let brace = Action::ability("brace");

    let first = session.play_turn(&Action::weapon("hammer"), &sword).unwrap();
    assert_eq!(first.player_damage(), 4);
    assert!(first.monster.modifiers.flags.contains(StatusFlags::DISABLE_ALL_ACTIONS));

    let second = session.play_turn(&brace, &sword).unwrap();
    assert_eq!(second.player_damage(), 0);
    assert!(second.messages.iter().any(|m| m == "Rat cannot use sword"));
    assert!(second.messages.iter().any(|m| m == "Stun wears off Rat"));
    assert!(!session.monster().status_effects.has("stun"));

    let third = session.play_turn(&brace, &sword).unwrap();
    assert_eq!(third.player_damage(), 4);
    assert_eq!(session.player().current_health, 12);
}

#[test]
fn identical_seeds_replay_identical_battles() {
    let play = |seed: u64| {
        let oracles = embedded();
        let hero = RotationProvider::from_template(oracles.actors().template("hero").unwrap());
        let troll =
            RotationProvider::from_template(oracles.actors().template("cave_troll").unwrap());
        let mut session =
            BattleSession::from_templates(oracles, "hero", "cave_troll", 7, seed).unwrap();
        let outcome = session.run(&hero, &troll, 40).unwrap();
        (outcome, session.state().clone(), session.history().to_vec())
    };

    let (outcome, state, history) = play(42);
    assert_eq!(play(42), (outcome, state, history.clone()));
    assert!(!history.is_empty());
}

#[test]
fn restored_sessions_continue_identically() {
    let oracles = embedded();
    let hero = RotationProvider::from_template(oracles.actors().template("hero").unwrap());
    let goblin = FixedActionProvider(Action::weapon("venom_dagger"));

    let mut original =
        BattleSession::from_templates(oracles.clone(), "hero", "goblin", 1, 9).unwrap();
    original.run(&hero, &goblin, 2).unwrap();
    let saved = original.state().clone();
    original.run(&hero, &goblin, 3).unwrap();

    let mut restored = BattleSession::restore(saved, oracles);
    restored.run(&hero, &goblin, 3).unwrap();

    assert_eq!(restored.state(), original.state());
    assert_eq!(restored.history(), &original.history()[2..]);
}

#[test]
fn monsters_scale_with_the_floor_but_the_player_does_not() {
    let shallow = BattleSession::from_templates(embedded(), "hero", "goblin", 1, 0).unwrap();
    let deep = BattleSession::from_templates(embedded(), "hero", "goblin", 50, 0).unwrap();

    assert_eq!(shallow.player(), deep.player());
    assert_eq!(shallow.monster().max_health, 18);
    assert_eq!(deep.monster().max_health, 36);
}

#[test]
fn empty_rotation_reports_the_idle_side() {
    let mut session = BattleSession::from_templates(embedded(), "hero", "goblin", 1, 0).unwrap();
    let idle = RotationProvider::default();
    let dagger = FixedActionProvider(Action::weapon("venom_dagger"));

    let err = session.step(&idle, &dagger).unwrap_err();
    assert_eq!(err, SessionError::NoActionAvailable { side: Side::Player });
    assert_eq!(session.turn(), 0);
}

#[test]
fn sessions_share_tables_across_threads() {
    let oracles = embedded();
    let seeds: Vec<u64> = (1..=4).collect();

    let run = |oracles: OracleManager, seed: u64| {
        let hero = RotationProvider::from_template(oracles.actors().template("hero").unwrap());
        let goblin = RotationProvider::from_template(oracles.actors().template("goblin").unwrap());
        let mut session = BattleSession::from_templates(oracles, "hero", "goblin", 3, seed).unwrap();
        session.run(&hero, &goblin, 25).unwrap();
        session.state().clone()
    };

    let threaded: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = seeds
            .iter()
            .map(|&seed| {
                let oracles = oracles.clone();
                scope.spawn(move || run(oracles, seed))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let sequential: Vec<_> = seeds
        .iter()
        .map(|&seed| run(oracles.clone(), seed))
        .collect();
    assert_eq!(threaded, sequential);
}
