use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::*;

/// Closed set of character classes. Class selects the damage policy in
/// `combat::logic::attack`; there is no open hierarchy to downcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Class {
    Warrior,
    Mage,
    Archer,
}

impl Class {
    /// Returns the display name for this class.
    pub fn name(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Mage => "Mage",
            Class::Archer => "Archer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub class: Class,
    pub health: u32,
    pub strength: u32,
    /// Board position, adjusted by the move capability.
    pub position: i64,
}

impl Character {
    pub fn new(name: String, class: Class, strength: u32) -> Self {
        Self {
            name,
            class,
            health: BASE_HEALTH,
            strength,
            position: 0,
        }
    }

    /// Create a character with strength rolled uniformly from
    /// `[STRENGTH_ROLL_MIN, STRENGTH_ROLL_MAX]`.
    pub fn roll(name: String, class: Class, rng: &mut impl Rng) -> Self {
        let strength = rng.gen_range(STRENGTH_ROLL_MIN..=STRENGTH_ROLL_MAX);
        Self::new(name, class, strength)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Health is clamped at zero; damage never underflows.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn reset_health(&mut self) {
        self.health = BASE_HEALTH;
    }

    /// Move capability: walk `steps` cells along the board axis.
    pub fn advance(&mut self, steps: i64) {
        self.position += steps;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_character_starts_at_full_health() {
        let c = Character::new("Igor".to_string(), Class::Warrior, 50);
        assert_eq!(c.health, BASE_HEALTH);
        assert_eq!(c.strength, 50);
        assert_eq!(c.position, 0);
        assert!(c.is_alive());
    }

    #[test]
    fn test_rolled_strength_is_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let c = Character::roll("Igor".to_string(), Class::Archer, &mut rng);
            assert!(c.strength <= STRENGTH_ROLL_MAX);
        }
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut c = Character::new("Igor".to_string(), Class::Warrior, 50);
        c.take_damage(30);
        assert_eq!(c.health, 70);
        c.take_damage(1000);
        assert_eq!(c.health, 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_reset_health_restores_base() {
        let mut c = Character::new("Igor".to_string(), Class::Mage, 50);
        c.take_damage(99);
        c.reset_health();
        assert_eq!(c.health, BASE_HEALTH);
    }

    #[test]
    fn test_advance_moves_both_directions() {
        let mut c = Character::new("Igor".to_string(), Class::Archer, 50);
        c.advance(3);
        assert_eq!(c.position, 3);
        c.advance(-5);
        assert_eq!(c.position, -2);
    }
}
