// Character creation
pub const BASE_HEALTH: u32 = 100;
pub const STRENGTH_ROLL_MIN: u32 = 0;
pub const STRENGTH_ROLL_MAX: u32 = 1000;

// Attack math
// Warriors deal the raw strength difference; archers and mages scale
// their own strength down by a class divisor.
pub const ARCHER_DAMAGE_DIVISOR: u32 = 5;
pub const MAGE_DAMAGE_DIVISOR: u32 = 4;
pub const CRIT_CHANCE_STRENGTH_DIVISOR: u32 = 10;
pub const CRIT_CHANCE_CAP_PERCENT: u32 = 95;
pub const CRIT_DAMAGE_MULTIPLIER: u32 = 2;

// Item usage: potions are spent in one use, durable gear wears per use
pub const FULL_USAGE: u32 = 100;
pub const WEAPON_WEAR: u32 = 10;
pub const ARMOR_WEAR: u32 = 20;

// Driver defaults
pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 10;
