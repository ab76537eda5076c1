//! Shared fixtures for unit tests.

use crate::combat::DamageCategory;
use crate::env::{
    AbilityDefinition, ExpiryTransition, SpellDefinition, StatusEffectDefinition, StatusFlags,
    StatusRoll, TablesSnapshot, WeaponDefinition,
};
use crate::state::{Combatant, Duration};

pub fn tables() -> TablesSnapshot {
    let mut dagger = WeaponDefinition::new("venom_dagger", "Venom Dagger", 2, DamageCategory::Melee);
    dagger.status_effects.push(StatusRoll::new("poison"));

    let mut greataxe = WeaponDefinition::new("greataxe", "Greataxe", 6, DamageCategory::Melee);
    greataxe.health_cost = 1;

    let mut fireball = SpellDefinition::new("fireball", "Fireball", 6, 4);
    fireball.status_effects.push(StatusRoll::new("burn").with_chance(0));

    let mut drain = SpellDefinition::new("drain", "Drain", 3, 2);
    drain.healing = 3;
    drain.health_cost = 1;
    drain.status_effects.push(StatusRoll::new("poison"));

    let power_strike = AbilityDefinition {
        damage: 6,
        mana_cost: 3,
        self_damage: true,
        scales_with_floor: true,
        ..AbilityDefinition::new("power_strike", "Power Strike")
    };
    let mend = AbilityDefinition {
        healing: 5,
        mana_cost: 2,
        status_effects: vec![StatusRoll::new("regen").on_self()],
        ..AbilityDefinition::new("mend", "Mend")
    };
    let petrifying_gaze = AbilityDefinition {
        mana_cost: 1,
        status_effects: vec![StatusRoll::new("petrify")],
        ..AbilityDefinition::new("petrifying_gaze", "Petrifying Gaze")
    };

    TablesSnapshot::new()
        .with_weapon(WeaponDefinition::new("sword", "Sword", 4, DamageCategory::Melee))
        .with_weapon(WeaponDefinition::new("bow", "Bow", 3, DamageCategory::Ranged))
        .with_weapon(dagger)
        .with_weapon(greataxe)
        .with_spell(fireball)
        .with_spell(drain)
        .with_ability(power_strike)
        .with_ability(mend)
        .with_ability(petrifying_gaze)
        .with_ability(AbilityDefinition::new("riposte", "Riposte"))
        .with_ability(AbilityDefinition::new("last_stand", "Last Stand"))
        .with_status_effect(StatusEffectDefinition {
            damage_per_turn: 2,
            stackable: true,
            ..StatusEffectDefinition::new("poison", "Poison", Duration::Turns(3))
        })
        .with_status_effect(StatusEffectDefinition {
            damage_per_turn: 1,
            ..StatusEffectDefinition::new("burn", "Burn", Duration::Turns(2))
        })
        .with_status_effect(StatusEffectDefinition {
            health_per_turn: 2,
            ..StatusEffectDefinition::new("regen", "Regeneration", Duration::Turns(2))
        })
        .with_status_effect(StatusEffectDefinition {
            mana_per_turn: 1,
            ..StatusEffectDefinition::new("focus", "Focus", Duration::Permanent)
        })
        .with_status_effect(StatusEffectDefinition {
            flags: StatusFlags::DISABLE_ALL_ACTIONS,
            ..StatusEffectDefinition::new("stun", "Stun", Duration::Turns(1))
        })
        .with_status_effect(StatusEffectDefinition {
            flags: StatusFlags::DISABLE_MAGIC,
            ..StatusEffectDefinition::new("silence", "Silence", Duration::Turns(2))
        })
        .with_status_effect(StatusEffectDefinition {
            damage_reduction: 50,
            on_expire: Some(ExpiryTransition::ScaleHealth { percent: 50 }),
            ..StatusEffectDefinition::new("petrify", "Petrification", Duration::Turns(1))
        })
        .with_status_effect(StatusEffectDefinition {
            damage_multiplier: Some(150),
            crit_bonus: 100,
            ..StatusEffectDefinition::new("rage", "Rage", Duration::Turns(2))
        })
        .with_status_effect(StatusEffectDefinition {
            flags: StatusFlags::UNTARGETABLE,
            ..StatusEffectDefinition::new("fade", "Fade", Duration::Turns(1))
        })
        .with_status_effect(StatusEffectDefinition {
            flags: StatusFlags::EFFECT_IMMUNITY,
            ..StatusEffectDefinition::new("warded", "Warded", Duration::Turns(3))
        })
        .with_status_effect(StatusEffectDefinition {
            damage_vulnerability: 50,
            ..StatusEffectDefinition::new("hex", "Hex", Duration::Permanent)
        })
        .with_status_effect(StatusEffectDefinition {
            health_restore: 5,
            mana_restore: 3,
            ..StatusEffectDefinition::new("elixir", "Elixir", Duration::Instant)
        })
}

pub fn hero() -> Combatant {
    Combatant::new("Hero", 30, 10, 0).with_primary_weapon("sword")
}

pub fn goblin() -> Combatant {
    Combatant::new("Goblin", 20, 5, 2)
}
