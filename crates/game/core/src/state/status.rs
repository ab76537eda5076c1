//! Applied status effects carried by a combatant.
//!
//! Status effects are timed conditions that tick once per turn. The set holds
//! at most one instance per effect kind; re-application merges into the
//! existing instance following the stacking rules below.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Remaining lifetime of an applied status effect.
///
/// On the wire this is a signed turn count: `-1` is permanent, `0` is an
/// instant one-shot effect, anything positive is a number of turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "i32", into = "i32")
)]
pub enum Duration {
    /// Never decremented and never expires.
    Permanent,
    /// Applies once on its first tick, then expires.
    Instant,
    /// Expires after this many ticks.
    Turns(u32),
}

impl Duration {
    pub const PERMANENT_RAW: i32 = -1;

    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            r if r < 0 => Self::Permanent,
            0 => Self::Instant,
            r => Self::Turns(r as u32),
        }
    }

    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Permanent => Self::PERMANENT_RAW,
            Self::Instant => 0,
            Self::Turns(n) => {
                if n > i32::MAX as u32 {
                    i32::MAX
                } else {
                    n as i32
                }
            }
        }
    }

    pub const fn is_permanent(self) -> bool {
        matches!(self, Self::Permanent)
    }

    /// Sum of two durations for stackable effects. Permanent absorbs.
    pub fn stacked(self, other: Self) -> Self {
        match (self, other) {
            (Self::Permanent, _) | (_, Self::Permanent) => Self::Permanent,
            (Self::Instant, d) | (d, Self::Instant) => d,
            (Self::Turns(a), Self::Turns(b)) => Self::Turns(a.saturating_add(b)),
        }
    }

    /// Duration after one tick, or `None` if the effect expires now.
    pub fn ticked(self) -> Option<Self> {
        match self {
            Self::Permanent => Some(Self::Permanent),
            Self::Instant | Self::Turns(0) | Self::Turns(1) => None,
            Self::Turns(n) => Some(Self::Turns(n - 1)),
        }
    }

    fn rank(self) -> u64 {
        match self {
            Self::Instant => 0,
            Self::Turns(n) => n as u64,
            Self::Permanent => u64::MAX,
        }
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl From<i32> for Duration {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Duration> for i32 {
    fn from(duration: Duration) -> Self {
        duration.as_raw()
    }
}

/// A status effect instance attached to a combatant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedStatusEffect {
    /// Status effect definition id.
    pub kind: String,
    pub duration: Duration,
    pub power: u32,
    /// Turn on which the instance was first inserted.
    pub applied_at: u64,
    /// Ran out on the last tick. Still shapes the next resolution, then is
    /// dropped on the following tick.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expiring: bool,
}

impl AppliedStatusEffect {
    pub fn new(kind: impl Into<String>, duration: Duration, power: u32, applied_at: u64) -> Self {
        Self {
            kind: kind.into(),
            duration,
            power,
            applied_at,
            expiring: false,
        }
    }

    /// Power used to multiply per-turn amounts (never below 1).
    pub fn effective_power(&self) -> u32 {
        self.power.max(1)
    }
}

/// Outcome of [`StatusEffects::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Application {
    Inserted,
    Stacked,
    Refreshed,
    Kept,
    /// The set is full and the new effect was dropped.
    Dropped,
}

/// Active status effects on a combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<AppliedStatusEffect, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if an effect of the given kind is present.
    pub fn has(&self, kind: &str) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn get(&self, kind: &str) -> Option<&AppliedStatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Merges a new application into the set.
    ///
    /// - Same kind, stackable: durations add and powers add.
    /// - Same kind, not stackable: the longer duration wins; the new power is
    ///   taken only when the new duration is strictly longer.
    /// - Same kind, expiring: replaced by the new instance.
    /// - New kind: inserted if space is available.
    pub fn apply(&mut self, incoming: AppliedStatusEffect, stackable: bool) -> Application {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == incoming.kind) {
            if existing.expiring {
                *existing = incoming;
                return Application::Inserted;
            }
            if stackable {
                existing.duration = existing.duration.stacked(incoming.duration);
                existing.power = existing.power.saturating_add(incoming.power);
                return Application::Stacked;
            }
            if incoming.duration > existing.duration {
                existing.duration = incoming.duration;
                existing.power = incoming.power;
                return Application::Refreshed;
            }
            return Application::Kept;
        }

        if self.effects.try_push(incoming).is_err() {
            return Application::Dropped;
        }
        Application::Inserted
    }

    /// Removes an effect immediately.
    pub fn remove(&mut self, kind: &str) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Keeps only the effects for which `f` returns true.
    pub fn retain(&mut self, f: impl FnMut(&mut AppliedStatusEffect) -> bool) {
        self.effects.retain(f);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppliedStatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl<'a> IntoIterator for &'a StatusEffects {
    type Item = &'a AppliedStatusEffect;
    type IntoIter = core::slice::Iter<'a, AppliedStatusEffect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

impl FromIterator<AppliedStatusEffect> for StatusEffects {
    /// Collects effects, keeping the first `MAX_STATUS_EFFECTS`.
    fn from_iter<T: IntoIterator<Item = AppliedStatusEffect>>(iter: T) -> Self {
        Self {
            effects: iter
                .into_iter()
                .take(GameConfig::MAX_STATUS_EFFECTS)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poison(turns: u32, power: u32) -> AppliedStatusEffect {
        AppliedStatusEffect::new("poison", Duration::Turns(turns), power, 1)
    }

    #[test]
    fn stackable_adds_duration_and_power() {
        let mut set = StatusEffects::empty();
        assert_eq!(set.apply(poison(3, 1), true), Application::Inserted);
        assert_eq!(set.apply(poison(2, 2), true), Application::Stacked);

        let effect = set.get("poison").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(effect.duration, Duration::Turns(5));
        assert_eq!(effect.power, 3);
    }

    #[test]
    fn non_stackable_keeps_longer_duration() {
        let mut set = StatusEffects::empty();
        set.apply(poison(4, 1), false);

        assert_eq!(set.apply(poison(2, 5), false), Application::Kept);
        assert_eq!(set.get("poison").unwrap().duration, Duration::Turns(4));
        assert_eq!(set.get("poison").unwrap().power, 1);

        assert_eq!(set.apply(poison(6, 3), false), Application::Refreshed);
        assert_eq!(set.get("poison").unwrap().duration, Duration::Turns(6));
        assert_eq!(set.get("poison").unwrap().power, 3);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn applied_at_is_preserved_on_merge() {
        let mut set = StatusEffects::empty();
        set.apply(poison(1, 1), true);
        set.apply(AppliedStatusEffect::new("poison", Duration::Turns(1), 1, 9), true);
        assert_eq!(set.get("poison").unwrap().applied_at, 1);
    }

    #[test]
    fn permanent_absorbs_stacking() {
        let mut set = StatusEffects::empty();
        set.apply(
            AppliedStatusEffect::new("curse", Duration::Permanent, 1, 1),
            true,
        );
        set.apply(
            AppliedStatusEffect::new("curse", Duration::Turns(3), 1, 2),
            true,
        );
        assert_eq!(set.get("curse").unwrap().duration, Duration::Permanent);
    }

    #[test]
    fn full_set_drops_new_kinds() {
        let mut set = StatusEffects::empty();
        for i in 0..GameConfig::MAX_STATUS_EFFECTS {
            set.apply(
                AppliedStatusEffect::new(format!("e{i}"), Duration::Turns(1), 1, 0),
                false,
            );
        }
        assert_eq!(
            set.apply(poison(1, 1), false),
            Application::Dropped
        );
        assert!(!set.has("poison"));
    }

    #[test]
    fn expiring_instances_are_replaced() {
        let mut set = StatusEffects::empty();
        let mut stale = poison(1, 4);
        stale.expiring = true;
        set.apply(stale, true);

        assert_eq!(set.apply(poison(3, 1), true), Application::Inserted);
        let effect = set.get("poison").unwrap();
        assert_eq!(effect.duration, Duration::Turns(3));
        assert_eq!(effect.power, 1);
        assert!(!effect.expiring);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duration_wire_values() {
        assert_eq!(Duration::from_raw(-1), Duration::Permanent);
        assert_eq!(Duration::from_raw(-7), Duration::Permanent);
        assert_eq!(Duration::from_raw(0), Duration::Instant);
        assert_eq!(Duration::from_raw(4), Duration::Turns(4));
        assert_eq!(Duration::Permanent.as_raw(), -1);
        assert_eq!(Duration::Turns(4).as_raw(), 4);
    }

    #[test]
    fn duration_ticks() {
        assert_eq!(Duration::Turns(3).ticked(), Some(Duration::Turns(2)));
        assert_eq!(Duration::Turns(1).ticked(), None);
        assert_eq!(Duration::Instant.ticked(), None);
        assert_eq!(Duration::Permanent.ticked(), Some(Duration::Permanent));
    }
}
