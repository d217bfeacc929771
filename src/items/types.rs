use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Potion,
    Weapon,
    Armor,
}

impl ItemKind {
    /// Returns the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Potion => "Potion",
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
        }
    }

    /// Usage consumed by a single use. Potions are spent entirely.
    fn wear(&self) -> u32 {
        match self {
            ItemKind::Potion => FULL_USAGE,
            ItemKind::Weapon => WEAPON_WEAR,
            ItemKind::Armor => ARMOR_WEAR,
        }
    }
}

/// What a single use did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseOutcome {
    /// A potion was fully consumed by this use.
    Consumed,
    /// A durable item lost wear; `remaining` is the usage left after it.
    Worn { remaining: u32 },
    /// The item had no usage left; nothing changed.
    Broken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    pub usage: u32,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            id: identity::new_id(),
            kind,
            usage: FULL_USAGE,
        }
    }

    pub fn is_broken(&self) -> bool {
        self.usage == 0
    }

    /// Apply one use. Usage is clamped at zero; a spent item reports
    /// `Broken` without changing state.
    pub fn apply_use(&mut self) -> UseOutcome {
        if self.usage == 0 {
            return UseOutcome::Broken;
        }
        match self.kind {
            ItemKind::Potion => {
                self.usage = 0;
                UseOutcome::Consumed
            }
            ItemKind::Weapon | ItemKind::Armor => {
                self.usage = self.usage.saturating_sub(self.kind.wear());
                UseOutcome::Worn {
                    remaining: self.usage,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_has_full_usage_and_an_id() {
        let item = Item::new(ItemKind::Weapon);
        assert_eq!(item.usage, FULL_USAGE);
        assert!(!item.is_broken());
        assert!(identity::looks_like_id(&item.id));
    }

    #[test]
    fn test_potion_is_consumed_in_one_use() {
        let mut potion = Item::new(ItemKind::Potion);
        assert_eq!(potion.apply_use(), UseOutcome::Consumed);
        assert_eq!(potion.usage, 0);
        assert_eq!(potion.apply_use(), UseOutcome::Broken);
    }

    #[test]
    fn test_weapon_wears_ten_per_use() {
        let mut weapon = Item::new(ItemKind::Weapon);
        assert_eq!(weapon.apply_use(), UseOutcome::Worn { remaining: 90 });
        assert_eq!(weapon.apply_use(), UseOutcome::Worn { remaining: 80 });
        for _ in 0..8 {
            weapon.apply_use();
        }
        assert!(weapon.is_broken());
        assert_eq!(weapon.apply_use(), UseOutcome::Broken);
        assert_eq!(weapon.usage, 0, "a broken weapon stays at zero");
    }

    #[test]
    fn test_armor_wears_twenty_per_use() {
        let mut armor = Item::new(ItemKind::Armor);
        assert_eq!(armor.apply_use(), UseOutcome::Worn { remaining: 80 });
        for _ in 0..4 {
            armor.apply_use();
        }
        assert!(armor.is_broken());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ItemKind::Potion.name(), "Potion");
        assert_eq!(ItemKind::Weapon.name(), "Weapon");
        assert_eq!(ItemKind::Armor.name(), "Armor");
    }
}
