//! Damage categories and mitigation.

use super::modifiers::CombatModifiers;

// ============================================================================
// Damage Category
// ============================================================================

/// Delivery category of a damage effect.
///
/// Counters negate by category, and the dodge heal depends on whether the
/// dodged attack was melee or ranged.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageCategory {
    #[default]
    Melee,
    Ranged,
    Magic,
}

impl DamageCategory {
    pub const fn is_weapon(self) -> bool {
        matches!(self, Self::Melee | Self::Ranged)
    }
}

bitflags::bitflags! {
    /// Set of damage categories, used for counter negation.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CategorySet: u8 {
        const MELEE = 1 << 0;
        const RANGED = 1 << 1;
        const MAGIC = 1 << 2;
        const WEAPON = Self::MELEE.bits() | Self::RANGED.bits();
    }
}

impl CategorySet {
    pub fn covers(self, category: DamageCategory) -> bool {
        self.contains(category.into())
    }
}

impl From<DamageCategory> for CategorySet {
    fn from(category: DamageCategory) -> Self {
        match category {
            DamageCategory::Melee => Self::MELEE,
            DamageCategory::Ranged => Self::RANGED,
            DamageCategory::Magic => Self::MAGIC,
        }
    }
}

// ============================================================================
// Mitigation
// ============================================================================

/// Final damage of one hit after modifiers and armor.
///
/// # Formula
///
/// ```text
/// amount   = raw * attacker.damage_multiplier / 100
/// amount   = amount * (100 + target.damage_vulnerability) / 100
/// armor    = max(0, armor - target.armor_reduction)      (skipped if ignores_armor)
/// amount   = max(0, amount - armor)
/// amount   = amount * (100 - min(target.damage_reduction, 100)) / 100
/// ```
pub fn mitigate(
    raw: u32,
    ignores_armor: bool,
    target_armor: u32,
    attacker: &CombatModifiers,
    target: &CombatModifiers,
) -> u32 {
    let mut amount = raw as u64 * attacker.damage_multiplier as u64 / 100;
    amount = amount * (100 + target.damage_vulnerability as u64) / 100;

    if !ignores_armor {
        let armor = target_armor.saturating_sub(target.armor_reduction) as u64;
        amount = amount.saturating_sub(armor);
    }

    let reduction = target.damage_reduction.min(100) as u64;
    amount = amount * (100 - reduction) / 100;

    amount.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_subtracts_flat() {
        let none = CombatModifiers::default();
        assert_eq!(mitigate(4, false, 2, &none, &none), 2);
        assert_eq!(mitigate(4, false, 9, &none, &none), 0);
        assert_eq!(mitigate(4, true, 9, &none, &none), 4);
    }

    #[test]
    fn modifiers_stack_in_order() {
        let attacker = CombatModifiers {
            damage_multiplier: 150,
            ..CombatModifiers::default()
        };
        let target = CombatModifiers {
            damage_vulnerability: 100,
            armor_reduction: 1,
            damage_reduction: 50,
            ..CombatModifiers::default()
        };
        // 10 * 1.5 = 15, * 2 = 30, - (3 - 1) = 28, * 0.5 = 14
        assert_eq!(mitigate(10, false, 3, &attacker, &target), 14);
    }

    #[test]
    fn full_reduction_zeroes_damage() {
        let target = CombatModifiers {
            damage_reduction: 250,
            ..CombatModifiers::default()
        };
        assert_eq!(mitigate(10, true, 0, &CombatModifiers::default(), &target), 0);
    }

    #[test]
    fn category_sets() {
        assert!(CategorySet::WEAPON.covers(DamageCategory::Melee));
        assert!(CategorySet::WEAPON.covers(DamageCategory::Ranged));
        assert!(!CategorySet::WEAPON.covers(DamageCategory::Magic));
        assert!(CategorySet::MAGIC.covers(DamageCategory::Magic));
        assert!(DamageCategory::Ranged.is_weapon());
    }
}
