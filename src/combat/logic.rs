//! Attack resolution.
//!
//! Pure functions over characters and a caller-supplied RNG; outcomes are
//! returned as values so the driver can print them and tests can assert on
//! them without capturing stdout.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::{Character, Class};
use crate::core::constants::*;

/// Observable result of a single attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Damage landed and was already applied to the defender.
    Hit { damage: u32, critical: bool },
    /// A warrior blow against an equal-or-stronger defender: the defender's
    /// defend capability fires instead and no damage is applied.
    Parried { defender: String },
}

/// Resolve one attack, applying any damage to the defender.
///
/// Damage policy dispatches on the attacker's class:
/// - `Warrior`: the strength difference; a weaker attacker is parried
///   outright, an equal-strength blow lands for zero damage.
/// - `Archer`: base damage `strength / 5` with a strength-derived critical
///   chance that doubles it.
/// - `Mage`: flat spell damage `strength / 4`, ignoring the defender.
///
/// The defender's health is reduced with saturating arithmetic, so it is
/// clamped at zero regardless of the damage rolled.
pub fn attack(attacker: &Character, defender: &mut Character, rng: &mut impl Rng) -> AttackOutcome {
    let outcome = match attacker.class {
        Class::Warrior => match attacker.strength.checked_sub(defender.strength) {
            Some(damage) => AttackOutcome::Hit {
                damage,
                critical: false,
            },
            None => AttackOutcome::Parried {
                defender: defender.name.clone(),
            },
        },
        Class::Archer => {
            let base = attacker.strength / ARCHER_DAMAGE_DIVISOR;
            let critical = roll_crit(crit_chance_percent(attacker.strength), rng);
            let damage = if critical {
                base * CRIT_DAMAGE_MULTIPLIER
            } else {
                base
            };
            AttackOutcome::Hit { damage, critical }
        }
        Class::Mage => AttackOutcome::Hit {
            damage: attacker.strength / MAGE_DAMAGE_DIVISOR,
            critical: false,
        },
    };

    if let AttackOutcome::Hit { damage, .. } = outcome {
        defender.take_damage(damage);
    }
    outcome
}

/// Critical chance in percent, derived from strength and capped.
pub fn crit_chance_percent(strength: u32) -> u32 {
    (strength / CRIT_CHANCE_STRENGTH_DIVISOR).min(CRIT_CHANCE_CAP_PERCENT)
}

/// Roll for a critical hit at the given percent chance.
pub fn roll_crit(chance_percent: u32, rng: &mut impl Rng) -> bool {
    rng.gen_range(0..100) < chance_percent
}

/// Defend capability: an observable line only. It does not undo damage
/// already applied by `attack`.
pub fn defend(defender: &Character) -> String {
    format!(
        "{} {} defended the attack",
        defender.class.name(),
        defender.name
    )
}
